//! Application settings loaded from environment variables.

use std::env;

use super::constants::{
    DEFAULT_APP_NAME, DEFAULT_APP_URL, DEFAULT_DATABASE_URL, DEFAULT_MAIL_FROM,
    DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
};

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    /// Name shown in outgoing mail
    pub app_name: String,
    /// Public URL linked from outgoing mail
    pub app_url: String,
    /// Sender address for outgoing mail
    pub mail_from: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("app_name", &self.app_name)
            .field("app_url", &self.app_url)
            .field("mail_from", &self.mail_from)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables, reading `.env` first.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
            app_name: env::var("APP_NAME").unwrap_or_else(|_| DEFAULT_APP_NAME.to_string()),
            app_url: env::var("APP_URL").unwrap_or_else(|_| DEFAULT_APP_URL.to_string()),
            mail_from: env::var("MAIL_FROM").unwrap_or_else(|_| DEFAULT_MAIL_FROM.to_string()),
        }
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
            app_name: DEFAULT_APP_NAME.to_string(),
            app_url: DEFAULT_APP_URL.to_string(),
            mail_from: DEFAULT_MAIL_FROM.to_string(),
        }
    }
}
