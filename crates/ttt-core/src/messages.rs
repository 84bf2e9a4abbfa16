//! Message types used by the lobby registry.
//!
//! These are **transport-agnostic** logical messages:
//! - [`InputMessage`]: what a client asks for.
//! - [`OutputMessage`]: what the registry answers or pushes.
//!
//! Note: the text encoder/decoder lives in the `ttt-protocol` crate;
//! this module is purely logical.

use crate::cell::CellState;
use crate::error::LobbyError;
use crate::game::MoveResult;
use crate::vector::Vector;

/// A request from one client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMessage {
    /// Create the named lobby, or join it as O if it already exists.
    Join { lobby: String },

    /// Place the sender's mark at `at`.
    Change { at: Vector },

    /// Read the cell at `at`.
    Query { at: Vector },
}

/// A message for one client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputMessage {
    /// The join request was accepted.
    Joined,

    /// Outcome of the sender's move.
    Result(MoveResult),

    /// Answer to a query.
    Point { at: Vector, state: CellState },

    /// The lobby's board changed; clients re-query what they need.
    Refresh,

    /// A request was refused by lobby policy.
    Error(LobbyError),

    /// The opponent disconnected; the lobby is now closed.
    Left,
}

/// An [`OutputMessage`] addressed to one client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery<C> {
    pub to: C,
    pub msg: OutputMessage,
}

impl<C> Delivery<C> {
    pub fn new(to: C, msg: OutputMessage) -> Self {
        Delivery { to, msg }
    }
}
