//! Jobs command - Notification worker and queue maintenance.
//!
//! ```bash
//! # Start the notification worker
//! cargo run -- jobs work
//!
//! # Show job counts by status
//! cargo run -- jobs list
//!
//! # Clear failed jobs
//! cargo run -- jobs clear
//! ```

use std::sync::Arc;

use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, Statement};

use crate::cli::args::{JobsAction, JobsArgs};
use crate::config::{Config, NOTIFICATION_WORKER_NAME};
use crate::errors::{AppError, AppResult};
use crate::infra::{queue, Database, UserStore};
use crate::jobs::{notification_job_handler, LogMailer, NotificationWorker};

/// Execute the jobs command
pub async fn execute(args: JobsArgs, config: Config) -> AppResult<()> {
    match args.action {
        JobsAction::Work => run_worker(&config).await,
        JobsAction::List => list_jobs(&config).await,
        JobsAction::Clear => clear_failed_jobs(&config).await,
    }
}

/// Start the notification worker and run until Ctrl+C.
async fn run_worker(config: &Config) -> AppResult<()> {
    use apalis::prelude::*;

    tracing::info!("Connecting to database for job worker...");

    let db = Database::connect_without_migrations(config).await?;
    let storage = queue::connect_storage(config).await?;

    let handler = Arc::new(NotificationWorker::new(
        Arc::new(UserStore::new(db.get_connection())),
        Arc::new(LogMailer),
        config,
    ));

    let worker = WorkerBuilder::new(NOTIFICATION_WORKER_NAME)
        .data(handler)
        .backend(storage)
        .build_fn(notification_job_handler);

    let monitor = Monitor::new().register(worker);

    tracing::info!("Job worker started. Press Ctrl+C to stop.");

    tokio::select! {
        result = monitor.run() => {
            if let Err(e) = result {
                tracing::error!("Worker error: {}", e);
                return Err(AppError::internal(format!("Worker failed: {}", e)));
            }
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Received shutdown signal, stopping worker...");
        }
    }

    tracing::info!("Job worker stopped.");
    Ok(())
}

/// Whether the apalis schema has been created yet
async fn queue_initialized(db: &DatabaseConnection) -> AppResult<bool> {
    let row = db
        .query_one(Statement::from_string(
            DatabaseBackend::Postgres,
            "SELECT EXISTS(SELECT 1 FROM information_schema.schemata WHERE schema_name = 'apalis') as exists".to_string(),
        ))
        .await?;

    Ok(row
        .and_then(|r| r.try_get::<bool>("", "exists").ok())
        .unwrap_or(false))
}

/// Print job counts by status
async fn list_jobs(config: &Config) -> AppResult<()> {
    let db = Database::connect_without_migrations(config).await?;
    let conn = db.connection();

    if !queue_initialized(conn).await? {
        println!("Job queue not initialized. Run 'jobs work' or 'serve' first.");
        return Ok(());
    }

    let rows = conn
        .query_all(Statement::from_string(
            DatabaseBackend::Postgres,
            "SELECT status::text as status, COUNT(*)::bigint as count FROM apalis.jobs GROUP BY status".to_string(),
        ))
        .await?;

    let (mut pending, mut running, mut failed, mut done) = (0i64, 0i64, 0i64, 0i64);

    for row in rows {
        if let (Ok(status), Ok(count)) = (
            row.try_get::<String>("", "status"),
            row.try_get::<i64>("", "count"),
        ) {
            match status.as_str() {
                "Pending" => pending = count,
                "Running" => running = count,
                "Failed" | "Killed" => failed += count,
                "Done" => done = count,
                _ => {}
            }
        }
    }

    println!("\n=== Job Queue Status ===");
    println!("Pending:  {}", pending);
    println!("Running:  {}", running);
    println!("Failed:   {}", failed);
    println!("Done:     {}", done);
    println!("========================\n");

    Ok(())
}

/// Delete failed jobs from the queue
async fn clear_failed_jobs(config: &Config) -> AppResult<()> {
    let db = Database::connect_without_migrations(config).await?;
    let conn = db.connection();

    if !queue_initialized(conn).await? {
        println!("Job queue not initialized. Nothing to clear.");
        return Ok(());
    }

    let result = conn
        .execute(Statement::from_string(
            DatabaseBackend::Postgres,
            "DELETE FROM apalis.jobs WHERE status IN ('Failed', 'Killed')".to_string(),
        ))
        .await?;

    println!("Cleared {} failed job(s) from the queue.", result.rows_affected());
    tracing::info!(count = result.rows_affected(), "Cleared failed jobs");

    Ok(())
}
