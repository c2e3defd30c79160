//! CLI module - Command-line interface for the application.
//!
//! - `serve` - Start the HTTP server
//! - `migrate` - Database migrations
//! - `jobs` - Notification worker and queue maintenance

pub mod args;

pub use args::{Cli, Commands};
