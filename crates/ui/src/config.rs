//! UI configuration loaded from environment variables.
//!
//! # Environment Variables (all optional)
//!
//! - `UI_HOST` - Bind address (default: 127.0.0.1)
//! - `UI_PORT` - Listen port (default: 3000)
//! - `DIRECTORY_API_URL` - Base URL of the API service
//!   (default: `http://localhost:5000`)
//! - `UI_BACKEND` - `local` for the purely in-memory record list, `remote`
//!   to sync against the API service (default: remote)

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;
use url::Url;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Which record store the UI runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    /// Records live in process memory only; lost on restart.
    Local,
    /// Records sync against the API service.
    Remote,
}

/// UI application configuration.
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Base URL of the API service
    pub api_url: Url,
    /// Store backing the client state
    pub backend: BackendKind,
}

impl UiConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("UI_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("UI_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("UI_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("UI_PORT".to_string(), e.to_string()))?;
        let api_url = get_env_or_default("DIRECTORY_API_URL", "http://localhost:5000")
            .parse::<Url>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("DIRECTORY_API_URL".to_string(), e.to_string())
            })?;
        let backend = match get_env_or_default("UI_BACKEND", "remote").as_str() {
            "local" => BackendKind::Local,
            "remote" => BackendKind::Remote,
            other => {
                return Err(ConfigError::InvalidEnvVar(
                    "UI_BACKEND".to_string(),
                    format!("expected 'local' or 'remote', got '{other}'"),
                ));
            }
        };

        Ok(Self {
            host,
            port,
            api_url,
            backend,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_socket_addr() {
        let config = UiConfig {
            host: "0.0.0.0".parse().unwrap(),
            port: 3000,
            api_url: "http://localhost:5000".parse().unwrap(),
            backend: BackendKind::Remote,
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "0.0.0.0");
        assert_eq!(addr.port(), 3000);
    }
}
