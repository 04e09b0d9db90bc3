use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::landing_rules::EmptyOrCapture;
use crate::move_generation::move_generator::MoveGenResult;
use crate::move_generation::pseudo_move_shared::step_if_in_bounds;
use crate::moves::move_collector::MoveSink;

pub const KNIGHT_JUMPS: [(i32, i32); 8] = [
    (2, 1),
    (1, 2),
    (2, -1),
    (1, -2),
    (-2, 1),
    (-1, 2),
    (-2, -1),
    (-1, -2),
];

pub fn generate_knight_moves<S: MoveSink>(
    board: &Board,
    from: Square,
    mover: Color,
    sink: &mut S,
) -> MoveGenResult<()> {
    for (dx, dy) in KNIGHT_JUMPS {
        step_if_in_bounds::<EmptyOrCapture, S>(board, from, dx, dy, mover, sink)?;
    }
    Ok(())
}
