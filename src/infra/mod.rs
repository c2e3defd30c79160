//! Infrastructure layer - External systems integration
//!
//! - Database connection, migrations and the user repository
//! - Notification job queue

pub mod db;
pub mod queue;
pub mod repositories;

pub use db::{Database, Migrator};
pub use queue::{JobQueue, NotificationQueue};
pub use repositories::{UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use queue::MockNotificationQueue;
#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockUserRepository;
