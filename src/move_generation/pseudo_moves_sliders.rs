//! Bishop, rook and queen rays.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::landing_rules::EmptyOrCapture;
use crate::move_generation::move_generator::MoveGenResult;
use crate::move_generation::pseudo_move_shared::slide;
use crate::moves::move_collector::MoveSink;

pub const BISHOP_DIRECTIONS: [(i32, i32); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];
pub const ROOK_DIRECTIONS: [(i32, i32); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

fn slide_all<S: MoveSink>(
    board: &Board,
    from: Square,
    mover: Color,
    directions: &[(i32, i32)],
    sink: &mut S,
) -> MoveGenResult<()> {
    for &(dx, dy) in directions {
        slide::<EmptyOrCapture, S>(board, from, dx, dy, mover, sink)?;
    }
    Ok(())
}

pub fn generate_bishop_moves<S: MoveSink>(
    board: &Board,
    from: Square,
    mover: Color,
    sink: &mut S,
) -> MoveGenResult<()> {
    slide_all(board, from, mover, &BISHOP_DIRECTIONS, sink)
}

pub fn generate_rook_moves<S: MoveSink>(
    board: &Board,
    from: Square,
    mover: Color,
    sink: &mut S,
) -> MoveGenResult<()> {
    slide_all(board, from, mover, &ROOK_DIRECTIONS, sink)
}

/// Diagonals first, then files and ranks.
pub fn generate_queen_moves<S: MoveSink>(
    board: &Board,
    from: Square,
    mover: Color,
    sink: &mut S,
) -> MoveGenResult<()> {
    slide_all(board, from, mover, &BISHOP_DIRECTIONS, sink)?;
    slide_all(board, from, mover, &ROOK_DIRECTIONS, sink)
}
