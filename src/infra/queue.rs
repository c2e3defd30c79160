//! Notification queue backed by apalis PostgreSQL storage.
//!
//! Enqueueing writes a job row and returns; the `jobs work` worker picks it
//! up later, so mail delivery never sits on the request path.

use apalis::prelude::Storage;
use apalis_sql::postgres::PostgresStorage;
use apalis_sql::sqlx::postgres::PgPoolOptions;
use async_trait::async_trait;

use crate::config::{Config, QUEUE_POOL_MAX_CONNECTIONS};
use crate::domain::{NotificationJob, NotificationKind};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Notification queue trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait NotificationQueue: Send + Sync {
    /// Hand a notification for `user_id` to the queue.
    ///
    /// Returns once the job is accepted; delivery is not observed.
    async fn enqueue(&self, user_id: i64, kind: NotificationKind) -> AppResult<()>;
}

/// Connect the job storage pool and make sure the apalis tables exist.
pub async fn connect_storage(config: &Config) -> AppResult<PostgresStorage<NotificationJob>> {
    let pool = PgPoolOptions::new()
        .max_connections(QUEUE_POOL_MAX_CONNECTIONS)
        .connect(&config.database_url)
        .await
        .map_err(|e| AppError::queue(format!("Failed to connect job storage: {}", e)))?;

    PostgresStorage::setup(&pool)
        .await
        .map_err(|e| AppError::queue(format!("Failed to setup job storage: {}", e)))?;

    Ok(PostgresStorage::new(pool))
}

/// Concrete implementation of NotificationQueue
///
/// Clones of the storage share one connection pool, so each enqueue pushes
/// through its own handle.
#[derive(Clone)]
pub struct JobQueue {
    storage: PostgresStorage<NotificationJob>,
}

impl JobQueue {
    pub fn new(storage: PostgresStorage<NotificationJob>) -> Self {
        Self { storage }
    }

    /// Connect job storage from config
    pub async fn connect(config: &Config) -> AppResult<Self> {
        Ok(Self::new(connect_storage(config).await?))
    }
}

#[async_trait]
impl NotificationQueue for JobQueue {
    async fn enqueue(&self, user_id: i64, kind: NotificationKind) -> AppResult<()> {
        let job = NotificationJob::new(user_id, kind);

        let mut storage = self.storage.clone();
        storage
            .push(job)
            .await
            .map_err(|e| AppError::queue(e.to_string()))?;

        tracing::debug!(user_id, kind = %kind, "Notification enqueued");
        Ok(())
    }
}
