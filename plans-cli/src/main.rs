//! plans CLI - runs the plans HTTP API
//!
//! `plans` with no subcommand is the same as `plans serve`.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use tracing_setup::{init_tracing, TracingConfig};

#[derive(Parser, Debug)]
#[command(
    name = "plans",
    author,
    version,
    about = "HTTP API listing subscription plans and simulating purchases"
)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run HTTP API server (GET /plans, /buy, /health)
    Serve(commands::serve::ServeArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(&TracingConfig { debug: cli.debug }).ok();

    match cli
        .command
        .unwrap_or_else(|| Commands::Serve(Default::default()))
    {
        Commands::Serve(args) => commands::run_serve(args).await?,
    }
    Ok(())
}
