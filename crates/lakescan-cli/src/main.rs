//! Lakescan CLI - Dremio catalog crawler.
//!
//! The main entry point for the `lakescan` binary.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lakescan_cli::{Cli, Commands};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();
    let config = cli.config();

    // The crawl is strictly sequential, so a single-threaded runtime is enough
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        match cli.command {
            Commands::Crawl(args) => lakescan_cli::commands::crawl::execute(args, &config).await,
            Commands::Grants(args) => lakescan_cli::commands::grants::execute(&args),
            Commands::Lookup(args) => lakescan_cli::commands::lookup::execute(&args),
        }
    })
}
