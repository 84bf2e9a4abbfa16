//! TCP listener and top-level server wiring.
//!
//! This module:
//! - Listens on the configured address/port.
//! - Accepts new TCP connections.
//! - Assigns each connection a `ClientId`.
//! - Spawns:
//!   - a per-client task to handle I/O,
//!   - a single central game task that owns the lobby registry.
//!
//! The actual per-client logic and game loop live in `client`
//! and `game_task` modules respectively.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::client;
use crate::config::Config;
use crate::game_task;
use crate::types::{ClientId, ClientRegistry, GameRx, GameTx, OutboundRx, OutboundTx};

/// Counter for assigning unique `ClientId`s.
static NEXT_CLIENT_ID: AtomicU64 = AtomicU64::new(1);

fn next_client_id() -> ClientId {
    let id = NEXT_CLIENT_ID.fetch_add(1, Ordering::Relaxed);
    ClientId(id)
}

/// Bind the configured address and serve forever.
pub async fn run(config: Config) -> Result<()> {
    let addr = config.socket_addr_string();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("listening on {}", addr);

    serve(listener, config.max_clients).await
}

/// Serve connections from an already-bound listener.
pub async fn serve(listener: TcpListener, max_clients: usize) -> Result<()> {
    // Shared registry of clients → outbound channels.
    let clients: ClientRegistry = Arc::new(tokio::sync::RwLock::new(Default::default()));

    // Channel from clients → game task.
    let (game_tx, game_rx): (GameTx, GameRx) = mpsc::unbounded_channel();

    // Spawn the central game task.
    {
        let clients_clone = clients.clone();
        tokio::spawn(async move {
            game_task::run_game_loop(game_rx, clients_clone).await;
        });
    }

    loop {
        let (stream, peer_addr) = listener.accept().await?;
        let current_clients = {
            let guard = clients.read().await;
            guard.len()
        };

        if current_clients >= max_clients {
            warn!(
                "rejecting connection from {}: max_clients ({}) reached",
                peer_addr, max_clients
            );
            // Just drop the stream; client will see connection closed.
            continue;
        }

        let client_id = next_client_id();
        info!(client = %client_id, "accepted connection from {}", peer_addr);

        // Create outbound channel for this client.
        let (out_tx, out_rx): (OutboundTx, OutboundRx) = mpsc::unbounded_channel();

        // Register client.
        {
            let mut guard = clients.write().await;
            guard.insert(client_id, out_tx);
        }

        // Clone handles to move into the client task.
        let clients_clone = clients.clone();
        let game_tx_clone = game_tx.clone();

        tokio::spawn(async move {
            match client::run_client(client_id, stream, game_tx_clone, out_rx, clients_clone).await
            {
                Ok(()) => info!(client = %client_id, "disconnected"),
                Err(e) => warn!(client = %client_id, "disconnected: {:#}", e),
            }
        });
    }
}
