//! Serve command - Starts the HTTP server.

use std::sync::Arc;

use crate::api::{create_router, AppState};
use crate::cli::args::ServeArgs;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::{Database, JobQueue};
use crate::services::Services;

/// Execute the serve command
pub async fn execute(args: ServeArgs, config: Config) -> AppResult<()> {
    let config = apply_overrides(args, config);
    tracing::info!("Starting server...");

    let db = Database::connect(&config).await?;

    let queue = JobQueue::connect(&config).await?;
    tracing::info!("Notification queue connected");

    let services = Services::from_connection(db.get_connection(), Arc::new(queue));
    let app = create_router(AppState::from_services(&services));

    let addr = config.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    Ok(())
}

/// Command-line flags win over the environment
fn apply_overrides(args: ServeArgs, mut config: Config) -> Config {
    if let Some(host) = args.host {
        config.server_host = host;
    }
    if let Some(port) = args.port {
        config.server_port = port;
    }
    config
}
