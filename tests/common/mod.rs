//! In-memory collaborators shared by the integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::DbErr;

use registration_api::domain::{NotificationJob, NotificationKind, User};
use registration_api::errors::{AppError, AppResult};
use registration_api::infra::{NotificationQueue, UserRepository};
use registration_api::services::Registrar;

/// User store that enforces email uniqueness like the `users` unique index
#[derive(Default)]
pub struct InMemoryUserStore {
    users: Mutex<Vec<User>>,
    unavailable: AtomicBool,
}

impl InMemoryUserStore {
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub fn users(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }

    pub fn count_with_email(&self, email: &str) -> usize {
        self.users
            .lock()
            .unwrap()
            .iter()
            .filter(|u| u.email == email)
            .count()
    }

    fn check_available(&self) -> AppResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AppError::Database(DbErr::Custom(
                "connection refused".to_string(),
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn create(&self, name: String, email: String, password_hash: String) -> AppResult<User> {
        self.check_available()?;

        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == email) {
            return Err(AppError::Conflict(
                "duplicate key value violates unique constraint \"users_email_key\"".to_string(),
            ));
        }

        let now = Utc::now();
        let user = User {
            id: users.len() as i64 + 1,
            name,
            email,
            password_hash,
            created_at: now,
            updated_at: now,
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        self.check_available()?;
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn ping(&self) -> AppResult<()> {
        self.check_available()
    }
}

/// Queue that records accepted jobs instead of storing them
#[derive(Default)]
pub struct RecordingQueue {
    jobs: Mutex<Vec<NotificationJob>>,
    failing: AtomicBool,
}

impl RecordingQueue {
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn jobs(&self) -> Vec<NotificationJob> {
        self.jobs.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationQueue for RecordingQueue {
    async fn enqueue(&self, user_id: i64, kind: NotificationKind) -> AppResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::queue("job storage unavailable"));
        }
        self.jobs
            .lock()
            .unwrap()
            .push(NotificationJob::new(user_id, kind));
        Ok(())
    }
}

/// Registrar over fresh in-memory collaborators
pub fn registrar() -> (Registrar, Arc<InMemoryUserStore>, Arc<RecordingQueue>) {
    let store = Arc::new(InMemoryUserStore::default());
    let queue = Arc::new(RecordingQueue::default());
    let registrar = Registrar::new(store.clone(), queue.clone());
    (registrar, store, queue)
}
