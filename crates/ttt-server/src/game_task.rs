//! Central game loop.
//!
//! This task owns the `LobbyRegistry` and processes every
//! `GameRequest` coming from clients, one at a time. Owning the registry
//! from a single task is what serializes joins and moves: two players
//! racing to create the same lobby, or to move in the same game, are
//! applied strictly in receipt order.
//!
//! Routing is decided by the registry: each `Delivery` names its
//! recipient, and this loop only forwards it to that client's channel.

use std::collections::HashMap;

use tracing::{debug, info};
use ttt_core::{Delivery, LobbyRegistry};

use crate::types::{ClientId, ClientRegistry, GameRequest, GameRx, OutboundTx};

/// Run the central game processing loop.
///
/// - `game_rx`: receives requests from all client tasks.
/// - `clients`: registry of connected clients and their outbound channels.
pub async fn run_game_loop(mut game_rx: GameRx, clients: ClientRegistry) {
    let mut lobbies: LobbyRegistry<ClientId> = LobbyRegistry::new();

    while let Some(req) = game_rx.recv().await {
        let deliveries = match req {
            GameRequest::Message { client_id, msg } => lobbies.handle(client_id, msg),
            GameRequest::Disconnected { client_id } => lobbies.disconnect(client_id),
        };

        if deliveries.is_empty() {
            continue;
        }

        // Snapshot of current clients to minimize lock hold time.
        let current_clients = {
            let guard = clients.read().await;
            guard.clone()
        };

        for delivery in deliveries {
            route_output(delivery, &current_clients);
        }
    }

    info!("game loop shutting down (game_rx closed)");
}

/// Forward one delivery to its recipient, if still connected.
fn route_output(delivery: Delivery<ClientId>, clients: &HashMap<ClientId, OutboundTx>) {
    let Delivery { to, msg } = delivery;
    match clients.get(&to) {
        Some(tx) => {
            if tx.send(msg).is_err() {
                debug!(client = %to, "outbound channel closed, message dropped");
            }
        }
        None => debug!(client = %to, ?msg, "recipient gone, message dropped"),
    }
}
