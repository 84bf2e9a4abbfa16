//! Low-level wire constants.
//!
//! One message per line. Fields are separated by `|`, the two halves of a
//! coordinate by `,`:
//!
//! ```text
//! JOIN|<lobby>       CHANGE|<x>,<y>      QUERY|<x>,<y>
//! JOINED             RESULT|<code>       POINT|<x>,<y>|<state>
//! REFRESH            ERROR|<reason>      LEFT
//! ```
//!
//! The actual encode/decode logic lives in `text_codec`.

/// Separates the verb from its fields.
pub const FIELD_SEPARATOR: char = '|';

/// Separates `x` from `y`.
pub const COORD_SEPARATOR: char = ',';

/// Client → server verbs.
pub const JOIN: &str = "JOIN";
pub const CHANGE: &str = "CHANGE";
pub const QUERY: &str = "QUERY";

/// Server → client verbs.
pub const JOINED: &str = "JOINED";
pub const RESULT: &str = "RESULT";
pub const POINT: &str = "POINT";
pub const REFRESH: &str = "REFRESH";
pub const ERROR: &str = "ERROR";
pub const LEFT: &str = "LEFT";

/// Maximum lobby name length in bytes.
pub const MAX_LOBBY_NAME_LEN: usize = 64;

/// Longest inbound line the server will buffer before dropping the
/// connection. Comfortably above the longest valid command.
pub const MAX_LINE_LEN: usize = 256;

/// A lobby name must be non-empty, at most [`MAX_LOBBY_NAME_LEN`] bytes
/// and must not contain the field separator.
pub fn validate_lobby_name(name: &str) -> bool {
    !name.is_empty() && name.len() <= MAX_LOBBY_NAME_LEN && !name.contains(FIELD_SEPARATOR)
}
