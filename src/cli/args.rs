//! CLI argument definitions.

use clap::{Parser, Subcommand};

/// Registration API - account registration with queued welcome emails
#[derive(Parser, Debug)]
#[command(name = "registration-api")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),

    /// Run database migrations
    Migrate(MigrateArgs),

    /// Manage background jobs
    Jobs(JobsArgs),
}

/// Arguments for the serve command
///
/// Unset flags fall back to `SERVER_HOST` / `SERVER_PORT` from the config.
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Host to bind to
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,
}

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(subcommand)]
    pub action: MigrateAction,
}

/// Migration actions
#[derive(Subcommand, Debug)]
pub enum MigrateAction {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset and re-run all migrations
    Fresh,
}

/// Arguments for the jobs command
#[derive(Parser, Debug)]
pub struct JobsArgs {
    #[command(subcommand)]
    pub action: JobsAction,
}

/// Job management actions
#[derive(Subcommand, Debug)]
pub enum JobsAction {
    /// Start the notification worker
    Work,
    /// Show job counts by status
    List,
    /// Clear failed jobs
    Clear,
}
