//! Registration API - account registration with queued welcome emails.
//!
//! `POST /register` hashes the password, creates the user and enqueues a
//! welcome notification. A separate worker process (`jobs work`) delivers
//! the email, so mail latency never reaches the HTTP response.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities
//! - **services**: Registration use case
//! - **infra**: Database, user store and notification queue
//! - **jobs**: Notification worker and mail delivery
//! - **api**: HTTP handlers, extractors and routes
//! - **types**: Shared response types
//! - **utils**: Email templates
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//!
//! # Start the notification worker
//! cargo run -- jobs work
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod jobs;
pub mod services;
pub mod types;
pub mod utils;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{NewUser, Password, User};
pub use errors::{AppError, AppResult};
