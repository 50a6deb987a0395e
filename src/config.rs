//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the external store (e.g. "redis://127.0.0.1:6379/0");
    /// `None` selects the in-memory store
    pub store_url: Option<String>,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `STORE_URL` - External store URL (default: unset, in-memory store)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    ///
    /// The database behind `STORE_URL` is flushed at startup.
    pub fn from_env() -> Self {
        Self {
            store_url: env::var("STORE_URL")
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_url: None,
            server_port: 3000,
        }
    }
}
