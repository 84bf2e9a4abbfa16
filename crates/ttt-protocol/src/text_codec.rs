// crates/ttt-protocol/src/text_codec.rs

//! Pipe-delimited text codec.
//!
//! Input format (lines → `InputMessage`):
//!
//! - Join or create a lobby:
//!   `JOIN|lobby(string)`
//!
//! - Move:
//!   `CHANGE|x(int),y(int)`
//!
//! - Read a cell:
//!   `QUERY|x(int),y(int)`
//!
//! Output format (`OutputMessage` → line):
//!
//! - `JOINED`
//! - `RESULT|code` where code is 0..=5 (InvalidPoint, NotTurn, Good, WinX, WinO, Tie)
//! - `POINT|x,y|state` where state is 0..=2 (Blank, X, O)
//! - `REFRESH`
//! - `ERROR|reason`
//! - `LEFT`
//!
//! Anything else parses to `None`; the server drops such lines without a
//! reply.

use ttt_core::{CellState, InputMessage, LobbyError, MoveResult, OutputMessage, Vector};

use crate::wire_types::{
    validate_lobby_name, CHANGE, COORD_SEPARATOR, ERROR, FIELD_SEPARATOR, JOIN, JOINED, LEFT,
    POINT, QUERY, REFRESH, RESULT,
};

/// Parse a single line into an `InputMessage`.
///
/// Returns `None` for blank lines, unknown verbs, a wrong field count,
/// unparsable coordinates and invalid lobby names.
pub fn parse_input_line(line: &str) -> Option<InputMessage> {
    let tokens = split_and_trim(line.trim(), FIELD_SEPARATOR);

    match tokens.as_slice() {
        [verb, lobby] if verb == JOIN => {
            if !validate_lobby_name(lobby) {
                return None;
            }
            Some(InputMessage::Join {
                lobby: lobby.clone(),
            })
        }
        [verb, at] if verb == CHANGE => Some(InputMessage::Change {
            at: parse_point(at)?,
        }),
        [verb, at] if verb == QUERY => Some(InputMessage::Query {
            at: parse_point(at)?,
        }),
        _ => None,
    }
}

/// Format an `InputMessage` as a line (without the trailing newline).
pub fn format_input(msg: &InputMessage) -> String {
    match msg {
        InputMessage::Join { lobby } => format!("{}|{}", JOIN, lobby),
        InputMessage::Change { at } => format!("{}|{}", CHANGE, format_point(*at)),
        InputMessage::Query { at } => format!("{}|{}", QUERY, format_point(*at)),
    }
}

/// Format an `OutputMessage` as a line (without the trailing newline).
pub fn format_output(msg: &OutputMessage) -> String {
    match msg {
        OutputMessage::Joined => JOINED.to_string(),
        OutputMessage::Result(result) => format!("{}|{}", RESULT, result.code()),
        OutputMessage::Point { at, state } => {
            format!("{}|{}|{}", POINT, format_point(*at), state.code())
        }
        OutputMessage::Refresh => REFRESH.to_string(),
        OutputMessage::Error(reason) => format!("{}|{}", ERROR, reason),
        OutputMessage::Left => LEFT.to_string(),
    }
}

/// Parse a server line back into an `OutputMessage` (client side).
pub fn parse_output_line(line: &str) -> Option<OutputMessage> {
    let tokens = split_and_trim(line.trim(), FIELD_SEPARATOR);

    match tokens.as_slice() {
        [verb] if verb == JOINED => Some(OutputMessage::Joined),
        [verb] if verb == REFRESH => Some(OutputMessage::Refresh),
        [verb] if verb == LEFT => Some(OutputMessage::Left),
        [verb, code] if verb == RESULT => {
            let result = MoveResult::from_code(code.parse().ok()?)?;
            Some(OutputMessage::Result(result))
        }
        [verb, at, state] if verb == POINT => Some(OutputMessage::Point {
            at: parse_point(at)?,
            state: CellState::from_code(state.parse().ok()?)?,
        }),
        [verb, reason] if verb == ERROR => Some(OutputMessage::Error(parse_reason(reason)?)),
        _ => None,
    }
}

// -----------------------------------------------------------------------------
// Helpers
// -----------------------------------------------------------------------------

fn split_and_trim(s: &str, delimiter: char) -> Vec<String> {
    s.split(delimiter)
        .map(|tok| tok.trim().to_string())
        .collect()
}

fn parse_point(s: &str) -> Option<Vector> {
    let (x, y) = s.split_once(COORD_SEPARATOR)?;
    Some(Vector::new(x.trim().parse().ok()?, y.trim().parse().ok()?))
}

fn format_point(at: Vector) -> String {
    format!("{}{}{}", at.x, COORD_SEPARATOR, at.y)
}

fn parse_reason(s: &str) -> Option<LobbyError> {
    [
        LobbyError::Full,
        LobbyError::Closed,
        LobbyError::AlreadySeated,
        LobbyError::NotSeated,
        LobbyError::InvalidPoint,
    ]
    .into_iter()
    .find(|reason| reason.to_string() == s)
}
