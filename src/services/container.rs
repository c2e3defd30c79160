//! Service Container - Wires collaborators into services.
//!
//! Services depend on collaborator traits; this is the one place that picks
//! the concrete implementations.

use std::sync::Arc;

use super::{Registrar, RegistrationService};
use crate::infra::{NotificationQueue, UserRepository, UserStore};

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get registration service
    fn registration(&self) -> Arc<dyn RegistrationService>;

    /// Get the user store
    fn users(&self) -> Arc<dyn UserRepository>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    user_store: Arc<dyn UserRepository>,
    registration_service: Arc<dyn RegistrationService>,
}

impl Services {
    /// Build the container from injected collaborators
    pub fn new(
        user_store: Arc<dyn UserRepository>,
        notifications: Arc<dyn NotificationQueue>,
    ) -> Self {
        let registration_service = Arc::new(Registrar::new(user_store.clone(), notifications));

        Self {
            user_store,
            registration_service,
        }
    }

    /// Build the container from a database connection and a job queue
    pub fn from_connection(
        db: sea_orm::DatabaseConnection,
        notifications: Arc<dyn NotificationQueue>,
    ) -> Self {
        Self::new(Arc::new(UserStore::new(db)), notifications)
    }
}

impl ServiceContainer for Services {
    fn registration(&self) -> Arc<dyn RegistrationService> {
        self.registration_service.clone()
    }

    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_store.clone()
    }
}
