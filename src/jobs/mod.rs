//! Background jobs processed by the `jobs work` worker.

mod email_job;
mod notification_job;

pub use email_job::{EmailMessage, LogMailer, Mailer};
pub use notification_job::{notification_job_handler, NotificationWorker};

#[cfg(any(test, feature = "test-utils"))]
pub use email_job::MockMailer;
