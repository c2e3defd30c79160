//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::infra::UserRepository;
use crate::services::{RegistrationService, ServiceContainer};

/// Application state shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Registration service
    pub registration_service: Arc<dyn RegistrationService>,
    /// User store, used for health checks
    pub user_store: Arc<dyn UserRepository>,
}

impl AppState {
    /// Create application state from a service container.
    pub fn from_services(services: &dyn ServiceContainer) -> Self {
        Self::new(services.registration(), services.users())
    }

    /// Create application state with manually injected services.
    pub fn new(
        registration_service: Arc<dyn RegistrationService>,
        user_store: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            registration_service,
            user_store,
        }
    }
}
