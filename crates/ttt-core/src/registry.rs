//! Named-lobby registry and per-client session dispatch.
//!
//! - Maintains one [`Lobby`] per name, created on first use.
//! - Tracks which lobby and role each client holds.
//! - Turns each client request into the deliveries it causes.
//!
//! The registry is plain single-owner state. Whoever owns it processes
//! one request at a time, which is what serializes joins and moves; the
//! server does this from a single task.

use std::collections::HashMap;
use std::hash::Hash;

use tracing::{debug, info};

use crate::cell::Role;
use crate::error::LobbyError;
use crate::lobby::Lobby;
use crate::messages::{Delivery, InputMessage, OutputMessage};
use crate::vector::Vector;

/// A client's place in a lobby.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seat {
    pub lobby: String,
    pub role: Role,
}

/// Process-lifetime map of lobby name to lobby.
///
/// Lobbies are never pruned; a lobby whose player left stays registered
/// as defunct.
#[derive(Debug)]
pub struct LobbyRegistry<C> {
    /// Lobby name -> Lobby.
    lobbies: HashMap<String, Lobby<C>>,

    /// Client -> the seat it holds.
    seats: HashMap<C, Seat>,
}

impl<C> Default for LobbyRegistry<C> {
    fn default() -> Self {
        LobbyRegistry {
            lobbies: HashMap::new(),
            seats: HashMap::new(),
        }
    }
}

impl<C> LobbyRegistry<C>
where
    C: Copy + Eq + Hash + std::fmt::Debug,
{
    pub fn new() -> Self {
        LobbyRegistry::default()
    }

    /// Process one request from `client` and return every message it
    /// causes, in send order.
    ///
    /// The sender always gets exactly one reply. A move in a full lobby
    /// also pushes `Refresh` to both players, ahead of the sender's
    /// `Result`.
    pub fn handle(&mut self, client: C, msg: InputMessage) -> Vec<Delivery<C>> {
        match msg {
            InputMessage::Join { lobby } => self.process_join(client, lobby),
            InputMessage::Change { at } => self.process_change(client, at),
            InputMessage::Query { at } => self.process_query(client, at),
        }
    }

    /// `client`'s connection closed: release its seat, close its lobby and
    /// tell the opponent.
    pub fn disconnect(&mut self, client: C) -> Vec<Delivery<C>> {
        let Some(seat) = self.seats.remove(&client) else {
            return Vec::new();
        };

        let Some(lobby) = self.lobbies.get_mut(&seat.lobby) else {
            return Vec::new();
        };

        info!(lobby = %seat.lobby, role = %seat.role, "player left, lobby closed");
        lobby
            .leave(client)
            .map(|peer| Delivery::new(peer, OutputMessage::Left))
            .into_iter()
            .collect()
    }

    // -------------------------------------------------------------------------
    // Internal handlers
    // -------------------------------------------------------------------------

    fn process_join(&mut self, client: C, name: String) -> Vec<Delivery<C>> {
        if let Some(seat) = self.seats.get(&client) {
            let defunct = self
                .lobbies
                .get(&seat.lobby)
                .map_or(true, |lobby| lobby.is_defunct());
            if !defunct {
                return reject(client, LobbyError::AlreadySeated);
            }
            // Opponent left; the old seat is dead.
            debug!(lobby = %seat.lobby, ?client, "releasing seat in closed lobby");
            self.seats.remove(&client);
        }

        let role = match self.lobbies.get_mut(&name) {
            Some(lobby) => match lobby.join(client) {
                Ok(role) => role,
                Err(e) => {
                    debug!(lobby = %name, ?client, "join refused: {}", e);
                    return reject(client, e);
                }
            },
            None => {
                self.lobbies.insert(name.clone(), Lobby::create(client));
                Role::X
            }
        };

        info!(lobby = %name, ?client, %role, "player joined");
        self.seats.insert(client, Seat { lobby: name, role });

        vec![Delivery::new(client, OutputMessage::Joined)]
    }

    fn process_change(&mut self, client: C, at: Vector) -> Vec<Delivery<C>> {
        let Some(Seat { lobby: name, role }) = self.seats.get(&client) else {
            return reject(client, LobbyError::NotSeated);
        };
        let role = *role;

        let Some(lobby) = self.lobbies.get_mut(name) else {
            return reject(client, LobbyError::NotSeated);
        };
        if lobby.is_defunct() {
            return reject(client, LobbyError::Closed);
        }

        let result = lobby.game_mut().apply_move(at, role);
        debug!(lobby = %name, %at, %role, ?result, "move");

        let mut out: Vec<Delivery<C>> = lobby
            .refresh()
            .into_iter()
            .map(|to| Delivery::new(to, OutputMessage::Refresh))
            .collect();
        out.push(Delivery::new(client, OutputMessage::Result(result)));
        out
    }

    fn process_query(&mut self, client: C, at: Vector) -> Vec<Delivery<C>> {
        let Some(lobby) = self.lobby_of(client) else {
            return reject(client, LobbyError::NotSeated);
        };

        match lobby.game().cell(at) {
            Some(state) => vec![Delivery::new(client, OutputMessage::Point { at, state })],
            None => reject(client, LobbyError::InvalidPoint),
        }
    }

    // -------------------------------------------------------------------------
    // Helpers
    // -------------------------------------------------------------------------

    fn lobby_of(&self, client: C) -> Option<&Lobby<C>> {
        let seat = self.seats.get(&client)?;
        self.lobbies.get(&seat.lobby)
    }

    /// For tests or admin queries: get immutable access to a lobby by name.
    pub fn get_lobby(&self, name: &str) -> Option<&Lobby<C>> {
        self.lobbies.get(name)
    }

    /// The seat `client` holds, if any.
    pub fn seat(&self, client: C) -> Option<&Seat> {
        self.seats.get(&client)
    }

    /// For tests or admin queries: number of lobbies ever created.
    pub fn num_lobbies(&self) -> usize {
        self.lobbies.len()
    }
}

fn reject<C>(client: C, reason: LobbyError) -> Vec<Delivery<C>> {
    vec![Delivery::new(client, OutputMessage::Error(reason))]
}
