//! Configuration for the lobby TCP server.
//!
//! Defaults can be overridden via environment variables:
//!
//! - `TTT_BIND_ADDR`   (default: "0.0.0.0")
//! - `TTT_PORT`        (default: "5500")
//! - `TTT_MAX_CLIENTS` (default: "1024")
//!
//! and then again by command-line flags (see [`Cli`]).

use std::env;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::Parser;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// IP address / interface to bind to (e.g. "0.0.0.0" or "127.0.0.1").
    pub bind_addr: String,

    /// TCP port to listen on.
    pub port: u16,

    /// Maximum number of simultaneously connected clients.
    pub max_clients: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bind_addr: "0.0.0.0".to_string(),
            port: 5500,
            max_clients: 1024,
        }
    }
}

/// Command-line overrides. Any flag left out keeps the env/default value.
#[derive(Debug, Default, Parser)]
#[clap(name = "ttt-server")]
#[clap(about = "Tic-tac-toe lobby server")]
pub struct Cli {
    /// Address to bind to
    #[clap(short, long)]
    pub bind: Option<String>,

    /// TCP port to listen on
    #[clap(short, long)]
    pub port: Option<u16>,

    /// Maximum simultaneous connections
    #[clap(short, long)]
    pub max_clients: Option<usize>,
}

impl Config {
    /// Construct a `Config` from environment variables, falling back
    /// to defaults.
    pub fn from_env() -> Result<Self> {
        let defaults = Config::default();
        let bind_addr = env::var("TTT_BIND_ADDR").unwrap_or(defaults.bind_addr);
        let port = read_env_or_default("TTT_PORT", defaults.port)?;
        let max_clients = read_env_or_default("TTT_MAX_CLIENTS", defaults.max_clients)?;

        Ok(Config {
            bind_addr,
            port,
            max_clients,
        })
    }

    /// Apply command-line overrides on top of this config.
    pub fn with_cli(mut self, cli: Cli) -> Self {
        if let Some(bind) = cli.bind {
            self.bind_addr = bind;
        }
        if let Some(port) = cli.port {
            self.port = port;
        }
        if let Some(max_clients) = cli.max_clients {
            self.max_clients = max_clients;
        }
        self
    }

    /// Convenience: `addr:port` socket string.
    pub fn socket_addr_string(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

fn read_env_or_default<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(val) => val
            .parse::<T>()
            .with_context(|| format!("invalid {}={:?}", key, val)),
        Err(_) => Ok(default),
    }
}
