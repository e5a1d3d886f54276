//! Configuration module - environment variable parsing

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Port used when neither `PORT` nor `SERVER_ADDR` is set
pub const DEFAULT_PORT: u16 = 8000;

/// SQLite file used when `DB_PATH` is not set
pub const DEFAULT_DB_PATH: &str = "materials.db";

/// Application configuration loaded from environment variables
#[derive(Clone, Debug)]
pub struct Config {
    /// Server binding address
    pub server_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,

    /// Location of the SQLite database file
    pub db_path: PathBuf,
    /// Directory served for paths outside the API
    pub static_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // PORT wins over SERVER_ADDR so hosting platforms can inject it
        let server_addr = if let Some(port) = lookup("PORT") {
            format!("0.0.0.0:{}", port.trim())
        } else {
            lookup("SERVER_ADDR").unwrap_or_else(|| format!("0.0.0.0:{}", DEFAULT_PORT))
        };

        Ok(Self {
            server_addr: server_addr
                .parse()
                .map_err(|_| ConfigError::InvalidAddress(server_addr.clone()))?,

            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),

            db_path: lookup("DB_PATH")
                .filter(|p| !p.is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH)),
            static_dir: lookup("STATIC_DIR")
                .filter(|p| !p.is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
        })
    }

    /// Configuration pointing at an explicit database file, listening on an ephemeral port
    pub fn with_db_path(db_path: impl Into<PathBuf>) -> Self {
        Self {
            server_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            log_level: "info".to_string(),
            db_path: db_path.into(),
            static_dir: PathBuf::from("."),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid server address: {0}")]
    InvalidAddress(String),
}
