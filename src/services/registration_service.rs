//! Registration service - Creates accounts and schedules the welcome mail.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{NewUser, NotificationKind, Password, User};
use crate::errors::AppResult;
use crate::infra::{NotificationQueue, UserRepository};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Registration service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait RegistrationService: Send + Sync {
    /// Register a new user and enqueue their welcome notification.
    ///
    /// Any store or queue failure is returned as-is. A user created before a
    /// failed enqueue is kept.
    async fn register(&self, input: NewUser) -> AppResult<User>;
}

/// Concrete implementation of RegistrationService.
pub struct Registrar {
    users: Arc<dyn UserRepository>,
    notifications: Arc<dyn NotificationQueue>,
}

impl Registrar {
    pub fn new(users: Arc<dyn UserRepository>, notifications: Arc<dyn NotificationQueue>) -> Self {
        Self {
            users,
            notifications,
        }
    }
}

#[async_trait]
impl RegistrationService for Registrar {
    async fn register(&self, input: NewUser) -> AppResult<User> {
        let NewUser {
            name,
            email,
            password,
        } = input;

        let password_hash = Password::new(&password)?.into_string();
        drop(password);

        let user = self.users.create(name, email, password_hash).await?;

        self.notifications
            .enqueue(user.id, NotificationKind::Welcome)
            .await?;

        tracing::info!(user_id = user.id, email = %user.email, "User registered");
        Ok(user)
    }
}
