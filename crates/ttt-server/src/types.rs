//! Shared types for the lobby TCP server.
//!
//! This module defines:
//! - `ClientId`: a lightweight handle for connected clients
//! - channel aliases between clients and the game loop
//! - `GameRequest`: events flowing from clients to the game loop

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::sync::RwLock;
use ttt_core::{InputMessage, OutputMessage};

/// Identifier for a connected client.
///
/// This is intentionally opaque; we just guarantee uniqueness
/// over the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClientId(pub u64);

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outbound messages from the game loop to a given client.
pub type OutboundTx = mpsc::UnboundedSender<OutputMessage>;
pub type OutboundRx = mpsc::UnboundedReceiver<OutputMessage>;

/// Registry of connected clients and their outbound channels.
///
/// - Key: `ClientId`
/// - Value: `OutboundTx` to send `OutputMessage`s to that client.
pub type ClientRegistry = Arc<RwLock<HashMap<ClientId, OutboundTx>>>;

/// Event flowing from a client task into the central game task.
#[derive(Debug)]
pub enum GameRequest {
    /// A parsed command.
    Message { client_id: ClientId, msg: InputMessage },

    /// The connection closed (EOF, I/O error or protocol violation).
    Disconnected { client_id: ClientId },
}

/// Channel from clients → game task.
pub type GameTx = mpsc::UnboundedSender<GameRequest>;
pub type GameRx = mpsc::UnboundedReceiver<GameRequest>;
