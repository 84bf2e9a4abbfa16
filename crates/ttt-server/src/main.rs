//! TCP lobby server for tic-tac-toe.

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use ttt_server::config::{Cli, Config};
use ttt_server::server;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?.with_cli(Cli::parse());

    info!(
        "starting ttt-server on {}:{} (max_clients = {})",
        config.bind_addr, config.port, config.max_clients
    );

    server::run(config).await
}
