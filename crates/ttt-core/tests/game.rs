// crates/ttt-core/tests/game.rs
use ttt_core::{CellState, Game, MoveResult, Role, Vector};

fn play(game: &mut Game, moves: &[(i32, i32)]) -> Vec<MoveResult> {
    moves
        .iter()
        .map(|&(x, y)| {
            let role = game.turn();
            game.apply_move(Vector::new(x, y), role)
        })
        .collect()
}

#[test]
fn new_game_is_blank_with_x_to_move() {
    let game = Game::new();

    assert_eq!(game.turn(), Role::X);
    assert!(game.is_playing());
    assert!(game.grid().cells().iter().all(|c| *c == CellState::Blank));
}

#[test]
fn wrong_turn_is_rejected_without_mutation() {
    let mut game = Game::new();
    let before = game.clone();

    assert_eq!(game.apply_move(Vector::new(0, 0), Role::O), MoveResult::NotTurn);
    assert_eq!(game, before);

    // Even an out-of-bounds point reports NotTurn first.
    assert_eq!(game.apply_move(Vector::new(9, 9), Role::O), MoveResult::NotTurn);
    assert_eq!(game, before);
}

#[test]
fn invalid_points_are_rejected_without_mutation() {
    let mut game = Game::new();
    assert_eq!(game.apply_move(Vector::new(1, 1), Role::X), MoveResult::Good);
    let before = game.clone();

    for at in [Vector::new(1, 1), Vector::new(-1, 0), Vector::new(3, 0), Vector::new(0, 3)] {
        assert_eq!(game.apply_move(at, Role::O), MoveResult::InvalidPoint, "{:?}", at);
        assert_eq!(game, before);
    }
}

#[test]
fn turn_alternates_after_every_applied_move() {
    let mut game = Game::new();

    assert_eq!(game.apply_move(Vector::new(0, 0), Role::X), MoveResult::Good);
    assert_eq!(game.turn(), Role::O);
    assert_eq!(game.cell(Vector::new(0, 0)), Some(CellState::X));

    assert_eq!(game.apply_move(Vector::new(1, 0), Role::O), MoveResult::Good);
    assert_eq!(game.turn(), Role::X);
    assert_eq!(game.cell(Vector::new(1, 0)), Some(CellState::O));
}

#[test]
fn top_row_wins_for_x() {
    let mut game = Game::new();
    let results = play(&mut game, &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 0)]);

    assert_eq!(
        results,
        vec![
            MoveResult::Good,
            MoveResult::Good,
            MoveResult::Good,
            MoveResult::Good,
            MoveResult::WinX,
        ]
    );
    assert_eq!(game.winner(), Some(Role::X));
    assert_eq!(game.turn(), Role::O);
    assert!(!game.is_playing());
}

#[test]
fn diagonal_wins_for_o() {
    let mut game = Game::new();
    let results = play(&mut game, &[(1, 0), (0, 0), (2, 0), (1, 1), (0, 1), (2, 2)]);

    assert_eq!(results.last(), Some(&MoveResult::WinO));
    assert_eq!(game.turn(), Role::X);
}

#[test]
fn full_board_is_a_tie_even_when_the_last_move_wins() {
    let mut game = Game::new();
    // Final X at (2,0) completes the top row and fills the board.
    let results = play(
        &mut game,
        &[
            (0, 0),
            (0, 1),
            (1, 0),
            (1, 1),
            (2, 1),
            (1, 2),
            (0, 2),
            (2, 2),
            (2, 0),
        ],
    );

    assert!(results[..8].iter().all(|r| *r == MoveResult::Good));
    assert_eq!(results[8], MoveResult::Tie);
    assert_eq!(game.winner(), Some(Role::X));
    assert_eq!(game.turn(), Role::O);
}

#[test]
fn plain_draw_is_a_tie() {
    let mut game = Game::new();
    // X O X / X O O / O X X
    let results = play(
        &mut game,
        &[
            (0, 0),
            (1, 0),
            (2, 0),
            (1, 1),
            (0, 1),
            (2, 1),
            (1, 2),
            (0, 2),
            (2, 2),
        ],
    );

    assert_eq!(results.last(), Some(&MoveResult::Tie));
    assert_eq!(game.winner(), None);
    assert_eq!(game.turn(), Role::O);
    assert!(!game.is_playing());
}

#[test]
fn result_codes_match_wire_values() {
    let all = [
        MoveResult::InvalidPoint,
        MoveResult::NotTurn,
        MoveResult::Good,
        MoveResult::WinX,
        MoveResult::WinO,
        MoveResult::Tie,
    ];
    for (code, result) in all.iter().enumerate() {
        assert_eq!(result.code() as usize, code);
        assert_eq!(MoveResult::from_code(code as u8), Some(*result));
    }
    assert_eq!(MoveResult::from_code(6), None);

    assert_eq!(CellState::Blank.code(), 0);
    assert_eq!(CellState::X.code(), 1);
    assert_eq!(CellState::O.code(), 2);
}
