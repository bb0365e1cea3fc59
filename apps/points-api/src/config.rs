//! Points API configuration module.
//!
//! The service runs with fixed defaults; there are no environment variables
//! or command-line flags. `RUST_LOG`, when set, replaces `log_filter`.

use serde::{Deserialize, Serialize};

/// Points API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Interface to bind
    pub host: String,

    /// HTTP port
    pub port: u16,

    /// Default `tracing` filter directive
    pub log_filter: String,

    /// Largest accepted request body in bytes (default: 64KB)
    pub max_body_bytes: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_filter: "info".to_string(),
            max_body_bytes: 64 * 1024,
        }
    }
}

impl ApiConfig {
    /// Returns the `host:port` address to bind.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Checks the configuration before the server starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::MissingRequired("host".to_string()));
        }

        if self.max_body_bytes == 0 {
            return Err(ConfigError::InvalidValue("max_body_bytes".to_string()));
        }

        Ok(())
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),
}
