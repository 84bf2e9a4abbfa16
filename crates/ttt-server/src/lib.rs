//! ttt-server
//!
//! Multi-client async TCP server for tic-tac-toe lobbies.

pub mod config;
pub mod types;
pub mod server;

// these are internal modules, not re-exported
mod client;
mod game_task;
