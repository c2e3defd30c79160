//! User repository backed by the `users` table.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, EntityTrait, Set, Statement,
};

use super::entities::user::{ActiveModel, Entity as UserEntity};
use crate::domain::User;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Email uniqueness is enforced by the storage layer: `create` fails with
/// `AppError::Conflict` when the email is already taken.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user; id and timestamps are assigned by the store
    async fn create(&self, name: String, email: String, password_hash: String) -> AppResult<User>;

    /// Find user by ID
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>>;

    /// Check that the store is reachable
    async fn ping(&self) -> AppResult<()>;
}

/// Insert model for a new row. `id`, `created_at` and `updated_at` stay
/// unset so the column defaults fill them and `RETURNING` brings them back.
fn new_user_model(name: String, email: String, password_hash: String) -> ActiveModel {
    ActiveModel {
        name: Set(name),
        email: Set(email),
        password_hash: Set(password_hash),
        ..Default::default()
    }
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn create(&self, name: String, email: String, password_hash: String) -> AppResult<User> {
        let model = new_user_model(name, email, password_hash)
            .insert(&self.db)
            .await
            .map_err(AppError::from)?;
        Ok(User::from(model))
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn ping(&self) -> AppResult<()> {
        self.db
            .execute(Statement::from_string(
                self.db.get_database_backend(),
                "SELECT 1".to_string(),
            ))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_model_leaves_store_assigned_columns_unset() {
        let model = new_user_model(
            "Ana".to_string(),
            "ana@example.com".to_string(),
            "$argon2id$hash".to_string(),
        );

        assert!(model.name.is_set());
        assert!(model.email.is_set());
        assert!(model.password_hash.is_set());
        assert!(!model.id.is_set());
        assert!(!model.created_at.is_set());
        assert!(!model.updated_at.is_set());
    }
}
