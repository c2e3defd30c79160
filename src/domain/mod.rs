//! Domain layer - Core business entities and logic
//!
//! Models here are independent of storage, HTTP and queue concerns.

pub mod notification;
pub mod password;
pub mod user;

pub use notification::{NotificationJob, NotificationKind};
pub use password::Password;
pub use user::{NewUser, User, UserSummary};
