//! A lobby pairs two players around one [`Game`].
//!
//! `P` is whatever handle the caller uses to address a player (the server
//! uses its `ClientId`). The lobby never talks to connections itself; it
//! only tells the caller who should be notified.

use tracing::debug;

use crate::cell::Role;
use crate::error::LobbyError;
use crate::game::Game;

#[derive(Debug, Clone)]
pub struct Lobby<P> {
    game: Game,
    player_x: P,
    player_o: Option<P>,
    defunct: bool,
}

impl<P: Copy + PartialEq> Lobby<P> {
    /// New lobby with a fresh game; `first` plays X.
    pub fn create(first: P) -> Self {
        debug!("new lobby");
        Lobby {
            game: Game::new(),
            player_x: first,
            player_o: None,
            defunct: false,
        }
    }

    /// Seat `second` as O.
    ///
    /// Each lobby accepts exactly one joiner; later requests are refused
    /// with [`LobbyError::Full`]. A lobby that lost a player refuses with
    /// [`LobbyError::Closed`].
    pub fn join(&mut self, second: P) -> Result<Role, LobbyError> {
        if self.defunct {
            return Err(LobbyError::Closed);
        }
        if self.player_o.is_some() {
            return Err(LobbyError::Full);
        }

        self.player_o = Some(second);
        debug!("lobby filled");
        Ok(Role::O)
    }

    /// Both seats taken.
    pub fn is_full(&self) -> bool {
        self.player_o.is_some()
    }

    /// A player left; no further joins or moves are accepted.
    pub fn is_defunct(&self) -> bool {
        self.defunct
    }

    pub fn player(&self, role: Role) -> Option<P> {
        match role {
            Role::X => Some(self.player_x),
            Role::O => self.player_o,
        }
    }

    /// Recipients of a state-changed notification: both players once the
    /// lobby is full, nobody before that.
    pub fn refresh(&self) -> Vec<P> {
        match self.player_o {
            Some(o) => vec![self.player_x, o],
            None => Vec::new(),
        }
    }

    /// Mark the lobby defunct because `leaver` disconnected, and return
    /// the peer that should be told.
    pub fn leave(&mut self, leaver: P) -> Option<P> {
        self.defunct = true;
        if leaver == self.player_x {
            self.player_o
        } else if Some(leaver) == self.player_o {
            Some(self.player_x)
        } else {
            None
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut Game {
        &mut self.game
    }
}
