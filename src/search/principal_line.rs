//! Iterative deepening that builds a principal line one ply at a time.
//!
//! Iteration `i` searches `i + 1` plies from the position reached by playing
//! every move chosen so far, then plays its own best move. When all
//! iterations are done the chosen moves are replayed in reverse, which undoes
//! them and leaves the caller's board as it was.

use tracing::{debug, warn};

use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::move_generation::move_generator::MoveGenResult;
use crate::moves::chess_move::Move;
use crate::search::alpha_beta::AlphaBetaSearch;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub max_plies: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { max_plies: 4 }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrincipalLine {
    pub moves: Vec<Move>,
    /// Value of the last completed iteration, from the searching player's side.
    pub value: i32,
    pub nodes: u64,
}

/// Line of up to `max_plies` moves for `player`, who moves first.
///
/// The line is shorter than requested only when a side ran out of moves.
pub fn compute_line(board: &mut Board, player: Color, max_plies: usize) -> MoveGenResult<Vec<Move>> {
    compute_line_with_hint(board, player, SearchConfig { max_plies }, &[]).map(|line| line.moves)
}

/// As [`compute_line`], trying the moves of an earlier line first.
///
/// During iteration `i` the search is handed `hint[i..]`, the part of the
/// earlier line that starts at the position the board has been advanced to.
pub fn compute_line_with_hint(
    board: &mut Board,
    player: Color,
    config: SearchConfig,
    hint: &[Move],
) -> MoveGenResult<PrincipalLine> {
    let mut line = PrincipalLine::default();
    let outcome = extend_line(board, player, config, hint, &mut line);

    for mv in line.moves.iter_mut().rev() {
        mv.apply(board);
    }

    outcome.map(|()| line)
}

/// Leaves every chosen move applied on `board`, including on error.
fn extend_line(
    board: &mut Board,
    player: Color,
    config: SearchConfig,
    hint: &[Move],
    line: &mut PrincipalLine,
) -> MoveGenResult<()> {
    for iteration in 0..config.max_plies {
        let to_move = if iteration % 2 == 0 {
            player
        } else {
            player.opposite()
        };
        let hint_tail = hint.get(iteration..).unwrap_or_default();

        let mut search = AlphaBetaSearch::with_hint(player, iteration + 1, hint_tail);
        let outcome = search.run(board, to_move)?;
        line.nodes += search.nodes_visited();

        let Some(mut best) = outcome.best_move else {
            warn!(
                ply = iteration + 1,
                side = ?to_move,
                "no candidate moves, principal line cut short"
            );
            break;
        };

        debug!(
            ply = iteration + 1,
            nodes = search.nodes_visited(),
            value = outcome.value,
            best = %best,
            "iteration complete"
        );

        best.apply(board);
        line.moves.push(best);
        line.value = outcome.value;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::*;
    use crate::moves::move_collector::COLLECTOR_CAPACITY;

    fn skirmish() -> Board {
        let mut board = Board::new_empty();
        board.set_piece(4, KING);
        board.set_piece(0, ROOK);
        board.set_piece(11, PAWN);
        board.set_piece(21, KNIGHT);
        board.set_piece(60, -KING);
        board.set_piece(32, -QUEEN);
        board.set_piece(51, -PAWN);
        board.set_piece(42, -BISHOP);
        board
    }

    #[test]
    fn returns_requested_length_and_restores_board() {
        for plies in 1..=4 {
            let mut board = Board::new_game();
            let line = compute_line(&mut board, Color::Light, plies).expect("line should compute");
            assert_eq!(line.len(), plies);
            assert_eq!(board, Board::new_game());
        }
    }

    #[test]
    fn playing_only_the_first_move_advances_one_ply() {
        let mut board = skirmish();
        let before = board.clone();
        let line = compute_line(&mut board, Color::Light, 3).unwrap();

        let mut first = line[0];
        first.apply(&mut board);
        assert_eq!(board.piece_at(0), EMPTY);
        assert_eq!(board.piece_at(32), ROOK);
        assert_eq!(board.score(), before.score() + 9);
        assert_eq!(board.score(), board.material_from_scratch());
    }

    #[test]
    fn line_alternates_sides_starting_with_player() {
        let mut board = skirmish();
        let line = compute_line(&mut board, Color::Dark, 4).unwrap();
        assert_eq!(line.len(), 4);
        for (index, mv) in line.iter().enumerate() {
            let (_, mover) = mv.destination().expect("plain move");
            let expected = if index % 2 == 0 {
                Color::Dark
            } else {
                Color::Light
            };
            assert_eq!(Color::of_piece(mover), Some(expected), "ply {index}");
        }
    }

    #[test]
    fn first_move_matches_single_ply_search() {
        let mut board = skirmish();
        let line = compute_line(&mut board, Color::Light, 1).unwrap();
        let outcome = AlphaBetaSearch::new(Color::Light, 1)
            .run(&mut board, Color::Light)
            .unwrap();
        assert_eq!(line, vec![outcome.best_move.expect("a move exists")]);
    }

    #[test]
    fn later_iterations_see_earlier_moves() {
        let mut board = skirmish();
        let line = compute_line_with_hint(&mut board, Color::Light, SearchConfig { max_plies: 2 }, &[])
            .unwrap();
        // Light wins the queen; Dark's reply is searched with the queen gone.
        assert_eq!(line.moves[0], Move::new(&board, 0, 32));
        assert_eq!(line.value, board.score() + 9 - 3);
        assert!(line.nodes > 0);
    }

    #[test]
    fn stops_early_when_side_has_no_moves() {
        let mut board = Board::new_empty();
        board.set_piece(60, -KING);
        let line = compute_line(&mut board, Color::Light, 3).unwrap();
        assert!(line.is_empty());
    }

    #[test]
    fn hint_from_previous_line_keeps_result_consistent() {
        let mut board = skirmish();
        let short = compute_line_with_hint(&mut board, Color::Light, SearchConfig { max_plies: 2 }, &[])
            .unwrap();
        let longer =
            compute_line_with_hint(&mut board, Color::Light, SearchConfig { max_plies: 3 }, &short.moves)
                .unwrap();
        let unhinted = compute_line(&mut board, Color::Light, 3).unwrap();

        assert_eq!(longer.moves.len(), 3);
        assert_eq!(longer.moves[0], unhinted[0]);
        assert_eq!(board, skirmish());
    }

    #[test]
    fn collector_overflow_restores_board() {
        let mut board = Board::new_empty();
        board.set_piece(4, KING);
        board.set_piece(60, -KING);
        board.set_piece(63, -ROOK);
        // Dark's reply position is tame; Light's own move list overflows.
        for square in [0, 7, 9, 14, 18, 21, 27, 36, 42, 45, 49, 54, 56] {
            board.set_piece(square, QUEEN);
        }
        let before = board.clone();
        let err = compute_line(&mut board, Color::Light, 2).expect_err("collector should overflow");
        assert_eq!(
            err,
            crate::move_generation::move_generator::MoveGenerationError::CollectorFull {
                capacity: COLLECTOR_CAPACITY
            }
        );
        assert_eq!(board, before);
    }
}
