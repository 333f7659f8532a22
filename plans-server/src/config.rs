//! Server configuration - bind address, store path and seed rows
//!
//! Configuration is loaded from environment variables on top of the defaults:
//! - `PLANS_BIND`: Socket address to listen on (default: 0.0.0.0:8003)
//! - `PLANS_DB_PATH`: SQLite file holding the `plans` table (default: ./plans.db)

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::models::Plan;

/// Default listening port
pub const DEFAULT_PORT: u16 = 8003;

/// Default SQLite file, relative to the working directory
pub const DEFAULT_DATABASE_PATH: &str = "./plans.db";

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 0.0.0.0:8003)
    pub bind_addr: SocketAddr,

    /// Store file, created if absent
    pub database_path: PathBuf,

    /// Rows inserted at startup unless their id already exists
    pub seed_plans: Vec<Plan>,
}

/// Configuration error type
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var} '{value}': {source}")]
    InvalidAddr {
        var: &'static str,
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

/// The two rows every store carries after initialization.
pub fn default_seed_plans() -> Vec<Plan> {
    vec![Plan::new(1, "Basic", 10), Plan::new(2, "Premium", 50)]
}

impl ServerConfig {
    /// Create config from environment variables, falling back to defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(value) = std::env::var("PLANS_BIND") {
            config.bind_addr = value.parse().map_err(|source| ConfigError::InvalidAddr {
                var: "PLANS_BIND",
                value: value.clone(),
                source,
            })?;
        }

        if let Ok(path) = std::env::var("PLANS_DB_PATH") {
            config.database_path = PathBuf::from(path);
        }

        Ok(config)
    }

    /// Use an explicit store file (for testing)
    pub fn with_database_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.database_path = path.into();
        self
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
            seed_plans: default_seed_plans(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr.port(), 8003);
        assert!(config.bind_addr.ip().is_unspecified());
        assert_eq!(config.database_path, PathBuf::from("./plans.db"));
    }

    #[test]
    fn default_seeds_are_basic_and_premium() {
        let seeds = default_seed_plans();
        assert_eq!(
            seeds,
            vec![Plan::new(1, "Basic", 10), Plan::new(2, "Premium", 50)]
        );
    }

    #[test]
    fn with_database_path_overrides_only_path() {
        let config = ServerConfig::default().with_database_path("/tmp/other.db");
        assert_eq!(config.database_path, PathBuf::from("/tmp/other.db"));
        assert_eq!(config.bind_addr.port(), DEFAULT_PORT);
        assert_eq!(config.seed_plans.len(), 2);
    }
}
