//! Cell contents and player roles.

use std::fmt;

/// Contents of one board cell.
///
/// The discriminants are the wire codes used in `POINT|x,y|<state>`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    #[default]
    Blank = 0,
    X = 1,
    O = 2,
}

impl CellState {
    /// Wire code (`0`, `1`, `2`).
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(CellState::Blank),
            1 => Some(CellState::X),
            2 => Some(CellState::O),
            _ => None,
        }
    }

    pub fn is_blank(self) -> bool {
        self == CellState::Blank
    }

    /// The role that owns this mark, if any.
    pub fn role(self) -> Option<Role> {
        match self {
            CellState::Blank => None,
            CellState::X => Some(Role::X),
            CellState::O => Some(Role::O),
        }
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            CellState::Blank => '.',
            CellState::X => 'X',
            CellState::O => 'O',
        };
        write!(f, "{}", c)
    }
}

/// A player's assigned mark.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Role {
    X,
    O,
}

impl Role {
    /// The other role.
    pub fn opponent(self) -> Role {
        match self {
            Role::X => Role::O,
            Role::O => Role::X,
        }
    }

    /// The mark this role places on the board.
    pub fn cell(self) -> CellState {
        match self {
            Role::X => CellState::X,
            Role::O => CellState::O,
        }
    }
}

impl From<Role> for CellState {
    fn from(role: Role) -> Self {
        role.cell()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.cell())
    }
}
