//! Pseudo-legal move enumeration for one side.
//!
//! Squares are scanned from 63 down to 0; each square holding one of the
//! mover's pieces is expanded by the matching piece generator. Moves are not
//! checked for leaving the king attacked.

use std::error::Error;
use std::fmt;

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::pseudo_moves_king::generate_king_moves;
use crate::move_generation::pseudo_moves_knight::generate_knight_moves;
use crate::move_generation::pseudo_moves_pawn::generate_pawn_moves;
use crate::move_generation::pseudo_moves_sliders::{
    generate_bishop_moves, generate_queen_moves, generate_rook_moves,
};
use crate::moves::move_collector::{MoveCollector, MoveSink};

pub type MoveGenResult<T> = Result<T, MoveGenerationError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveGenerationError {
    CollectorFull { capacity: usize },
}

impl fmt::Display for MoveGenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveGenerationError::CollectorFull { capacity } => {
                write!(f, "move collector capacity of {capacity} moves exceeded")
            }
        }
    }
}

impl Error for MoveGenerationError {}

/// Writes every pseudo-legal move for `mover` into `sink`.
pub fn generate_moves<S: MoveSink>(board: &Board, mover: Color, sink: &mut S) -> MoveGenResult<()> {
    for square in (0..BOARD_SPACES as Square).rev() {
        let piece = board.piece_at(square);
        if !mover.owns(piece) {
            continue;
        }
        generate_moves_at(board, square, piece, mover, sink)?;
    }
    Ok(())
}

/// Fresh collector filled with the moves for `mover`.
pub fn collect_moves(board: &Board, mover: Color) -> MoveGenResult<MoveCollector> {
    let mut collector = MoveCollector::new();
    generate_moves(board, mover, &mut collector)?;
    Ok(collector)
}

fn generate_moves_at<S: MoveSink>(
    board: &Board,
    from: Square,
    piece: Piece,
    mover: Color,
    sink: &mut S,
) -> MoveGenResult<()> {
    match PieceKind::from_piece(piece) {
        Some(PieceKind::Pawn) => generate_pawn_moves(board, from, mover, sink),
        Some(PieceKind::Knight) => generate_knight_moves(board, from, mover, sink),
        Some(PieceKind::Bishop) => generate_bishop_moves(board, from, mover, sink),
        Some(PieceKind::Rook) => generate_rook_moves(board, from, mover, sink),
        Some(PieceKind::Queen) => generate_queen_moves(board, from, mover, sink),
        Some(PieceKind::King) => generate_king_moves(board, from, mover, sink),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::moves::chess_move::Move;
    use crate::moves::move_collector::COLLECTOR_CAPACITY;

    fn all_moves(board: &Board, mover: Color) -> Vec<Move> {
        let mut out = Vec::new();
        generate_moves(board, mover, &mut out).expect("generation should succeed");
        out
    }

    fn as_pairs(moves: &[Move]) -> HashSet<(Square, Square)> {
        moves
            .iter()
            .map(|mv| {
                let from = mv.from_square().expect("plain move has an origin");
                let (to, _) = mv.destination().expect("plain move has a destination");
                (from, to)
            })
            .collect()
    }

    #[test]
    fn startpos_light_has_exactly_twenty_moves() {
        let board = Board::new_game();
        let moves = all_moves(&board, Color::Light);
        assert_eq!(moves.len(), 20);

        let mut expected = HashSet::new();
        for file in 0..8 {
            expected.insert((to_square(file, 1), to_square(file, 2)));
            expected.insert((to_square(file, 1), to_square(file, 3)));
        }
        expected.extend([(1, 16), (1, 18), (6, 21), (6, 23)]);
        assert_eq!(as_pairs(&moves), expected);
    }

    #[test]
    fn startpos_dark_mirrors_light() {
        let board = Board::new_game();
        let moves = all_moves(&board, Color::Dark);
        assert_eq!(moves.len(), 20);
        assert!(moves.contains(&Move::new(&board, 52, 36)));
        assert!(moves.contains(&Move::new(&board, 62, 45)));
    }

    #[test]
    fn scan_runs_from_high_square_to_low() {
        let mut board = Board::new_empty();
        board.set_piece(0, KING);
        board.set_piece(63, ROOK);
        let moves = all_moves(&board, Color::Light);
        assert_eq!(moves.first().and_then(Move::from_square), Some(63));
        assert_eq!(moves.last().and_then(Move::from_square), Some(0));
    }

    #[test]
    fn enemy_pieces_are_not_expanded() {
        let mut board = Board::new_empty();
        board.set_piece(27, -QUEEN);
        assert!(all_moves(&board, Color::Light).is_empty());
        assert_eq!(all_moves(&board, Color::Dark).len(), 27);
    }

    #[test]
    fn crowded_position_overflows_the_collector() {
        let mut board = Board::new_empty();
        for square in [0, 7, 9, 14, 18, 21, 27, 36, 42, 45, 49, 54, 56, 63] {
            board.set_piece(square, QUEEN);
        }
        let generated = all_moves(&board, Color::Light).len();
        assert!(generated > COLLECTOR_CAPACITY);

        let err = collect_moves(&board, Color::Light).expect_err("collector should overflow");
        assert_eq!(
            err,
            MoveGenerationError::CollectorFull {
                capacity: COLLECTOR_CAPACITY
            }
        );
    }

    fn random_board(rng: &mut StdRng) -> Board {
        const KINDS: [Piece; 6] = [PAWN, KNIGHT, BISHOP, ROOK, QUEEN, KING];
        let mut board = Board::new_empty();
        for _ in 0..rng.random_range(2..20) {
            let square = rng.random_range(0..BOARD_SPACES as Square);
            let kind = KINDS[rng.random_range(0..KINDS.len())];
            let piece = if rng.random_bool(0.5) { kind } else { -kind };
            board.set_piece(square, piece);
        }
        board
    }

    #[test]
    fn every_generated_move_is_self_inverse_on_random_boards() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..200 {
            let mut board = random_board(&mut rng);
            for mover in [Color::Light, Color::Dark] {
                for mut mv in all_moves(&board, mover) {
                    let before = board.clone();
                    mv.apply(&mut board);
                    assert_eq!(board.score(), board.material_from_scratch());
                    mv.apply(&mut board);
                    assert_eq!(board, before);
                }
            }
        }
    }

    #[test]
    fn score_tracks_material_through_random_play() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut board = Board::new_game();
        let mut mover = Color::Light;
        for _ in 0..60 {
            let moves = all_moves(&board, mover);
            if moves.is_empty() {
                break;
            }
            let mut mv = moves[rng.random_range(0..moves.len())];
            mv.apply(&mut board);
            assert_eq!(board.score(), board.material_from_scratch());
            mover = mover.opposite();
        }
    }

    #[test]
    fn collector_serves_reverse_generation_order() {
        let board = Board::new_game();
        let generated = all_moves(&board, Color::Light);
        let mut collector = collect_moves(&board, Color::Light).unwrap();
        let mut served = Vec::new();
        while let Some(mv) = collector.next_move() {
            served.push(mv);
        }
        served.reverse();
        assert_eq!(served, generated);
    }
}
