//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// User domain entity
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Registration input after validation.
///
/// The plaintext password lives only as long as this value.
#[derive(Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

// Don't expose the plaintext password in debug output
impl std::fmt::Debug for NewUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewUser")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// User summary (safe to return to client)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserSummary {
    /// Store-assigned identifier
    #[schema(example = 1)]
    pub id: i64,
    /// User display name
    #[schema(example = "Ana")]
    pub name: String,
    /// User email address
    #[schema(example = "ana@example.com")]
    pub email: String,
    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserSummary {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            created_at: user.created_at,
        }
    }
}
