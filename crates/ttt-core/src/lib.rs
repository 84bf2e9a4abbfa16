//! ttt-core
//!
//! Pure tic-tac-toe logic:
//! - 2D vectors and a generic grid
//! - the 3x3 game state machine
//! - lobbies pairing two players around one game
//! - the named-lobby registry that dispatches client requests

pub mod vector;
pub mod grid;
pub mod cell;
pub mod game;
pub mod lobby;
pub mod messages;
pub mod registry;
pub mod error;

pub use vector::Vector;
pub use grid::{Grid, Operand};
pub use cell::{CellState, Role};
pub use game::{Game, MoveResult, BOARD_SIZE};
pub use lobby::Lobby;

pub use messages::{
    Delivery,
    InputMessage,
    OutputMessage,
};

pub use registry::{LobbyRegistry, Seat};
pub use error::{GridError, LobbyError};
