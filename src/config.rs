//! Environment-based configuration.

use std::env;
use std::path::PathBuf;

/// Runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the accounts database and per-user library files
    pub data_dir: PathBuf,

    /// Max connections per SQLite pool
    pub max_connections: u32,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// Reads `.env` if present, then `ESTANTE_DATA_DIR` (default `.`)
    /// and `ESTANTE_MAX_CONNECTIONS` (default 5).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let data_dir = env::var("ESTANTE_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."));

        let max_connections = env::var("ESTANTE_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        Self {
            data_dir,
            max_connections,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            max_connections: 5,
        }
    }
}
