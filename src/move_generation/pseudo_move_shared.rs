use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::landing_rules::LandingRule;
use crate::move_generation::move_generator::MoveGenResult;
use crate::moves::chess_move::Move;
use crate::moves::move_collector::MoveSink;

/// Emits `from -> from + (dx, dy)` when the target is on the board and passes
/// `R`. Returns whether a move was emitted.
#[inline]
pub fn step_if_in_bounds<R: LandingRule, S: MoveSink>(
    board: &Board,
    from: Square,
    dx: i32,
    dy: i32,
    mover: Color,
    sink: &mut S,
) -> MoveGenResult<bool> {
    let x = file_of(from) + dx;
    let y = rank_of(from) + dy;
    if !(0..BOARD_DIM).contains(&x) || !(0..BOARD_DIM).contains(&y) {
        return Ok(false);
    }

    let to = to_square(x, y);
    if !R::accepts(mover, board.piece_at(to)) {
        return Ok(false);
    }
    sink.put(Move::new(board, from, to))?;
    Ok(true)
}

/// Number of whole steps of `(dx, dy)` that stay on the board from `from`.
#[inline]
pub fn steps_to_edge(from: Square, dx: i32, dy: i32) -> i32 {
    let x = file_of(from);
    let y = rank_of(from);
    let mut reps = i32::MAX;

    if dx < 0 {
        reps = reps.min(x / -dx);
    } else if dx > 0 {
        reps = reps.min((BOARD_DIM - x - 1) / dx);
    }
    if dy < 0 {
        reps = reps.min(y / -dy);
    } else if dy > 0 {
        reps = reps.min((BOARD_DIM - y - 1) / dy);
    }

    reps
}

/// Walks `(dx, dy)` outward from `from`, emitting every accepted square in
/// increasing distance until the rule stops the scan or the edge is reached.
pub fn slide<R: LandingRule, S: MoveSink>(
    board: &Board,
    from: Square,
    dx: i32,
    dy: i32,
    mover: Color,
    sink: &mut S,
) -> MoveGenResult<()> {
    let offset = dy * BOARD_DIM + dx;
    let reps = steps_to_edge(from, dx, dy);

    for step in 1..=reps {
        let to = (from as i32 + offset * step) as Square;
        let occupant = board.piece_at(to);
        if !R::accepts(mover, occupant) {
            break;
        }
        sink.put(Move::new(board, from, to))?;
        if !R::keeps_sliding(mover, occupant) {
            break;
        }
    }

    Ok(())
}
