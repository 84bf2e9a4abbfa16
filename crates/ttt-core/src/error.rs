//! Error types for the tic-tac-toe core.
//!
//! Game outcomes are *not* errors: they are reported in-band as
//! [`MoveResult`](crate::MoveResult) codes. These types cover misuse of
//! the grid and session-policy rejections made by a lobby.

use thiserror::Error;

use crate::vector::Vector;

/// Misuse of a [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// The coordinate lies outside `0..width` × `0..height`.
    #[error("point ({at}) is outside the {width}x{height} grid")]
    OutOfBounds {
        at: Vector,
        width: usize,
        height: usize,
    },

    /// Elementwise operation between grids of different shapes.
    #[error("grid shapes differ: {left:?} vs {right:?}")]
    ShapeMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
}

/// Why a lobby or the registry refused a request.
///
/// The `Display` text is what the client sees after `ERROR|`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LobbyError {
    /// Both seats are taken.
    #[error("lobby full")]
    Full,

    /// One of the players disconnected; the lobby accepts nothing further.
    #[error("lobby closed")]
    Closed,

    /// The client already holds a seat in some lobby.
    #[error("already in a lobby")]
    AlreadySeated,

    /// The client has not joined any lobby yet.
    #[error("not in a lobby")]
    NotSeated,

    /// A query named a point outside the board.
    #[error("invalid point")]
    InvalidPoint,
}
