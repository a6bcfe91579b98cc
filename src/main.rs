use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber;

mod cli;
mod config;
mod core;
mod error;

use crate::cli::Cli;
use crate::config::Config;
use crate::core::Engine;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    info!("Starting docsmith v{}", env!("CARGO_PKG_VERSION"));

    // Configuration and the completion provider are constructed here and
    // handed to the engine; nothing below relies on process-global state.
    let config = Config::load()?;
    let engine = Engine::new(config)?;

    cli.execute(engine).await
}
