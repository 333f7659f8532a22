//! HTTP server command for the plans API
//!
//! Opens the store, seeds it, then serves until shutdown.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use plans_server::{create_pool, initialize, run_server, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug, Default)]
pub struct ServeArgs {
    /// Address to bind to (overrides PLANS_BIND, default: 0.0.0.0:8003)
    #[arg(long, short = 'b')]
    pub bind: Option<SocketAddr>,

    /// SQLite file holding the plans table (overrides PLANS_DB_PATH, default: ./plans.db)
    #[arg(long)]
    pub db_path: Option<PathBuf>,
}

impl ServeArgs {
    /// Layer flags over environment-derived configuration
    fn apply(self, mut config: ServerConfig) -> ServerConfig {
        if let Some(bind) = self.bind {
            config.bind_addr = bind;
        }
        if let Some(path) = self.db_path {
            config.database_path = path;
        }
        config
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = args.apply(ServerConfig::from_env().context("Invalid server configuration")?);

    tracing::info!("Opening plan store at {}", config.database_path.display());
    let pool = create_pool(&config.database_path)
        .await
        .with_context(|| format!("Failed to open store {}", config.database_path.display()))?;

    initialize(&pool, &config.seed_plans)
        .await
        .context("Failed to initialize plan store")?;

    // Run server (blocks until shutdown)
    run_server(pool, &config).await.context("Server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let args = ServeArgs {
            bind: Some("127.0.0.1:9000".parse().unwrap()),
            db_path: Some(PathBuf::from("/var/lib/plans.db")),
        };

        let config = args.apply(ServerConfig::default());

        assert_eq!(config.bind_addr.port(), 9000);
        assert_eq!(config.database_path, PathBuf::from("/var/lib/plans.db"));
    }

    #[test]
    fn absent_flags_keep_config() {
        let config = ServeArgs::default().apply(ServerConfig::default());

        assert_eq!(config.bind_addr.port(), 8003);
        assert_eq!(config.database_path, PathBuf::from("./plans.db"));
    }
}
