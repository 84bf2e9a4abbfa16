//! The 3x3 tic-tac-toe state machine.
//!
//! A [`Game`] owns the board and whose turn it is. The only mutation is
//! [`Game::apply_move`], which validates the move, applies it, flips the
//! turn and classifies the resulting position.

use tracing::debug;

use crate::cell::{CellState, Role};
use crate::grid::Grid;
use crate::vector::Vector;

/// Board side length.
pub const BOARD_SIZE: usize = 3;

/// The 8 winning lines as linear indices, in evaluation order:
/// rows top-to-bottom, columns left-to-right, then both diagonals.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Outcome of [`Game::apply_move`].
///
/// The discriminants are the wire codes used in `RESULT|<code>`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MoveResult {
    /// Out of bounds or the cell is already taken. No mutation.
    InvalidPoint = 0,

    /// The requesting role does not hold the turn. No mutation.
    NotTurn = 1,

    /// Move applied, game continues.
    Good = 2,

    WinX = 3,
    WinO = 4,

    /// The board is full.
    Tie = 5,
}

impl MoveResult {
    /// Wire code (`0..=5`).
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(MoveResult::InvalidPoint),
            1 => Some(MoveResult::NotTurn),
            2 => Some(MoveResult::Good),
            3 => Some(MoveResult::WinX),
            4 => Some(MoveResult::WinO),
            5 => Some(MoveResult::Tie),
            _ => None,
        }
    }

    /// True for `WinX`, `WinO` and `Tie`.
    pub fn is_terminal(self) -> bool {
        matches!(self, MoveResult::WinX | MoveResult::WinO | MoveResult::Tie)
    }

    fn win_for(role: Role) -> Self {
        match role {
            Role::X => MoveResult::WinX,
            Role::O => MoveResult::WinO,
        }
    }
}

/// One game of tic-tac-toe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    grid: Grid<CellState>,
    turn: Role,
    playing: bool,
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

impl Game {
    /// Empty board, X to move.
    pub fn new() -> Self {
        Game {
            grid: Grid::new(BOARD_SIZE, BOARD_SIZE),
            turn: Role::X,
            playing: true,
        }
    }

    /// Role that must move next.
    pub fn turn(&self) -> Role {
        self.turn
    }

    /// False once a move has produced a win or a tie.
    ///
    /// Informational only: moves after the end are still adjudicated by
    /// the usual rules.
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn grid(&self) -> &Grid<CellState> {
        &self.grid
    }

    /// Contents of a cell, or `None` if `at` is off the board.
    pub fn cell(&self, at: Vector) -> Option<CellState> {
        self.grid.get(at).copied()
    }

    /// Validate and apply a move by `role` at `at`.
    ///
    /// Check order matters:
    /// 1. wrong turn → `NotTurn`,
    /// 2. off-board or occupied → `InvalidPoint`,
    /// 3. otherwise place the mark, flip the turn and classify. A full
    ///    board is reported as `Tie` even when the same move completed a
    ///    line.
    pub fn apply_move(&mut self, at: Vector, role: Role) -> MoveResult {
        if role != self.turn {
            return MoveResult::NotTurn;
        }

        match self.grid.get_mut(at) {
            Some(cell) if cell.is_blank() => *cell = role.cell(),
            _ => return MoveResult::InvalidPoint,
        }

        self.turn = self.turn.opponent();

        let result = self.evaluate();
        if result.is_terminal() {
            self.playing = false;
            debug!(?result, board = %self.grid, "game finished");
        }
        result
    }

    fn evaluate(&self) -> MoveResult {
        if !self.grid.contains(&CellState::Blank) {
            return MoveResult::Tie;
        }

        match self.winner() {
            Some(role) => MoveResult::win_for(role),
            None => MoveResult::Good,
        }
    }

    /// Owner of the last complete line in evaluation order, if any.
    pub fn winner(&self) -> Option<Role> {
        let cells = self.grid.cells();
        LINES
            .iter()
            .filter_map(|&[a, b, c]| {
                let first = cells[a];
                if first == cells[b] && first == cells[c] {
                    first.role()
                } else {
                    None
                }
            })
            .last()
    }
}
