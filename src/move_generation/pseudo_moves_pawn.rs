//! Pawn pushes, double pushes, diagonal captures and promotion.
//!
//! A pawn one step from its last rank only promotes, to queen or knight, and
//! only when the square ahead is empty. No other move is generated for it.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::landing_rules::{CaptureOnly, EmptyOnly, LandingRule};
use crate::move_generation::move_generator::MoveGenResult;
use crate::move_generation::pseudo_move_shared::step_if_in_bounds;
use crate::moves::chess_move::Move;
use crate::moves::move_collector::MoveSink;

pub fn generate_pawn_moves<S: MoveSink>(
    board: &Board,
    from: Square,
    mover: Color,
    sink: &mut S,
) -> MoveGenResult<()> {
    let (forward, start_rank, promotion_rank) = match mover {
        Color::Light => (1, 1, 7),
        Color::Dark => (-1, 6, 0),
    };
    let x = file_of(from);
    let y = rank_of(from);

    if y + forward == promotion_rank {
        let to = to_square(x, promotion_rank);
        if EmptyOnly::accepts(mover, board.piece_at(to)) {
            sink.put(Move::promotion(from, to, PieceKind::Queen.colored(mover)))?;
            sink.put(Move::promotion(from, to, PieceKind::Knight.colored(mover)))?;
        }
        return Ok(());
    }

    let pushed = step_if_in_bounds::<EmptyOnly, S>(board, from, 0, forward, mover, sink)?;
    if pushed && y == start_rank {
        step_if_in_bounds::<EmptyOnly, S>(board, from, 0, 2 * forward, mover, sink)?;
    }
    step_if_in_bounds::<CaptureOnly, S>(board, from, 1, forward, mover, sink)?;
    step_if_in_bounds::<CaptureOnly, S>(board, from, -1, forward, mover, sink)?;

    Ok(())
}
