//! Notification job worker.
//!
//! Each queued [`NotificationJob`] only names a user. The worker loads the
//! user, renders the mail for the notification kind and hands it to the
//! [`Mailer`].

use apalis::prelude::Data;
use std::sync::Arc;

use super::{EmailMessage, Mailer};
use crate::config::Config;
use crate::domain::{NotificationJob, NotificationKind};
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;
use crate::utils::templates;

/// Dependencies shared by every notification job
pub struct NotificationWorker {
    users: Arc<dyn UserRepository>,
    mailer: Arc<dyn Mailer>,
    app_name: String,
    app_url: String,
    mail_from: String,
}

impl NotificationWorker {
    pub fn new(users: Arc<dyn UserRepository>, mailer: Arc<dyn Mailer>, config: &Config) -> Self {
        Self {
            users,
            mailer,
            app_name: config.app_name.clone(),
            app_url: config.app_url.clone(),
            mail_from: config.mail_from.clone(),
        }
    }

    /// Process one job.
    ///
    /// A job for a user that no longer exists is dropped without error so it
    /// is not retried.
    pub async fn handle(&self, job: NotificationJob) -> AppResult<()> {
        tracing::info!(user_id = job.user_id, kind = %job.kind, "Processing notification job");

        let Some(user) = self.users.find_by_id(job.user_id).await? else {
            tracing::warn!(user_id = job.user_id, "User not found, dropping notification");
            return Ok(());
        };

        let (subject, body) = match job.kind {
            NotificationKind::Welcome => {
                templates::welcome_email(&user, &self.app_name, &self.app_url)
            }
        };

        self.mailer
            .send(EmailMessage::new(&user.email, &self.mail_from, subject, body))
            .await?;

        tracing::info!(user_id = user.id, to = %user.email, "Notification delivered");
        Ok(())
    }
}

/// apalis entry point for notification jobs
pub async fn notification_job_handler(
    job: NotificationJob,
    worker: Data<Arc<NotificationWorker>>,
) -> Result<(), AppError> {
    worker.handle(job).await
}
