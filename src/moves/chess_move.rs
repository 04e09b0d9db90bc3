//! Reversible board edits.
//!
//! A `Move` is a short list of changes. Applying it swaps each change's stored
//! value with what the board held, so applying the same value a second time
//! restores the board exactly. There is no separate unmake path: undo is a
//! second `apply`, and [`AppliedMove`] ties that second call to a scope.

use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;

pub const MAX_CHANGES: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    /// Write `piece` to `square`.
    Cell { square: Square, piece: Piece },
    /// Replace the board's castle flags. Ends the list.
    CastleFlags(u8),
    /// Ends the list.
    End,
}

impl Change {
    #[inline]
    fn is_terminator(&self) -> bool {
        !matches!(self, Change::Cell { .. })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Move {
    changes: [Change; MAX_CHANGES],
}

impl Move {
    /// Plain move: empty the origin, put the piece found there on `to`.
    #[inline]
    pub fn new(board: &Board, from: Square, to: Square) -> Self {
        Self::promotion(from, to, board.piece_at(from))
    }

    /// Move that lands `piece` on `to` instead of the piece on `from`.
    #[inline]
    pub fn promotion(from: Square, to: Square, piece: Piece) -> Self {
        let mut changes = [Change::End; MAX_CHANGES];
        changes[0] = Change::Cell {
            square: from,
            piece: EMPTY,
        };
        changes[1] = Change::Cell { square: to, piece };
        Self { changes }
    }

    /// Swap the king on `king_from` with the rook on `rook_from` and mark the
    /// king's side as castled.
    pub fn castle(board: &Board, king_from: Square, rook_from: Square) -> Self {
        let king = board.piece_at(king_from);
        let flags = match Color::of_piece(king) {
            Some(color) => board.castle_flags() | color.castled_flag(),
            None => board.castle_flags(),
        };
        let mut changes = [Change::End; MAX_CHANGES];
        changes[0] = Change::Cell {
            square: king_from,
            piece: board.piece_at(rook_from),
        };
        changes[1] = Change::Cell {
            square: rook_from,
            piece: king,
        };
        changes[2] = Change::CastleFlags(flags);
        Self { changes }
    }

    /// Change records up to and excluding the terminator.
    pub fn changes(&self) -> impl Iterator<Item = &Change> {
        self.changes.iter().take_while(|change| !change.is_terminator())
    }

    pub fn is_castle(&self) -> bool {
        self.changes
            .iter()
            .find(|change| change.is_terminator())
            .is_some_and(|change| matches!(change, Change::CastleFlags(_)))
    }

    /// Origin square of a plain or promotion move.
    pub fn from_square(&self) -> Option<Square> {
        match self.changes[0] {
            Change::Cell { square, .. } => Some(square),
            _ => None,
        }
    }

    /// Destination square and the value the record currently holds.
    pub fn destination(&self) -> Option<(Square, Piece)> {
        match self.changes[1] {
            Change::Cell { square, piece } => Some((square, piece)),
            _ => None,
        }
    }

    /// Toggle this edit on `board`.
    ///
    /// Each record receives whatever the board held before the write, so a
    /// second call with the same value undoes the first.
    pub fn apply(&mut self, board: &mut Board) {
        debug_assert!(
            !self.changes[0].is_terminator(),
            "a move needs at least one change record"
        );

        for change in self.changes.iter_mut() {
            match change {
                Change::Cell { square, piece } => {
                    let previous = board.piece_at(*square);
                    board.set_piece(*square, *piece);
                    *piece = previous;
                }
                Change::CastleFlags(flags) => {
                    *flags = board.replace_castle_flags(*flags);
                    break;
                }
                Change::End => break,
            }
        }
    }

    /// Apply this move for the lifetime of the returned guard.
    #[inline]
    pub fn apply_scoped<'a>(&'a mut self, board: &'a mut Board) -> AppliedMove<'a> {
        self.apply(board);
        AppliedMove { board, mv: self }
    }
}

/// Moves compare record by record up to the first terminator. The payload of
/// a castle-flag terminator is not compared.
impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        for (a, b) in self.changes.iter().zip(other.changes.iter()) {
            match (a.is_terminator(), b.is_terminator()) {
                (true, true) => return true,
                (false, false) if a == b => {}
                _ => return false,
            }
        }
        true
    }
}

impl Eq for Move {}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_castle() {
            return write!(f, "castle");
        }
        let mut first = true;
        for change in self.changes() {
            if let Change::Cell { square, piece } = change {
                if !first {
                    write!(f, ":")?;
                }
                write!(
                    f,
                    "{}{}={}",
                    (b'a' + file_of(*square) as u8) as char,
                    rank_of(*square) + 1,
                    piece_letter(*piece)
                )?;
                first = false;
            }
        }
        Ok(())
    }
}

/// A move held applied on a board; dropping the guard applies it again,
/// restoring the board even during unwinding.
pub struct AppliedMove<'a> {
    board: &'a mut Board,
    mv: &'a mut Move,
}

impl Deref for AppliedMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl DerefMut for AppliedMove<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        &mut *self.board
    }
}

impl Drop for AppliedMove<'_> {
    fn drop(&mut self) {
        self.mv.apply(self.board);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_move_round_trips() {
        let mut board = Board::new_game();
        let before = board.clone();
        let mut mv = Move::new(&board, 12, 28);

        mv.apply(&mut board);
        assert_eq!(board.piece_at(12), EMPTY);
        assert_eq!(board.piece_at(28), PAWN);

        mv.apply(&mut board);
        assert_eq!(board, before);
        assert_eq!(mv, Move::new(&before, 12, 28));
    }

    #[test]
    fn capture_restores_victim_and_score() {
        let mut board = Board::new_empty();
        board.set_piece(0, ROOK);
        board.set_piece(16, -QUEEN);
        let before = board.clone();

        let mut mv = Move::new(&board, 0, 16);
        mv.apply(&mut board);
        assert_eq!(board.score(), 5);
        assert_eq!(board.score(), board.material_from_scratch());

        mv.apply(&mut board);
        assert_eq!(board, before);
        assert_eq!(board.score(), -4);
    }

    #[test]
    fn promotion_writes_new_piece() {
        let mut board = Board::new_empty();
        board.set_piece(52, PAWN);
        let mut mv = Move::promotion(52, 60, QUEEN);
        mv.apply(&mut board);
        assert_eq!(board.piece_at(60), QUEEN);
        assert_eq!(board.score(), 9);
        mv.apply(&mut board);
        assert_eq!(board.piece_at(52), PAWN);
        assert_eq!(board.score(), 1);
    }

    #[test]
    fn castle_toggles_flags_and_squares() {
        let mut board = Board::new_empty();
        board.set_piece(4, KING);
        board.set_piece(7, ROOK);
        let before = board.clone();

        let mut mv = Move::castle(&board, 4, 7);
        assert!(mv.is_castle());
        mv.apply(&mut board);
        assert_eq!(board.piece_at(4), ROOK);
        assert_eq!(board.piece_at(7), KING);
        assert!(board.has_castled(Color::Light));
        assert!(!board.has_castled(Color::Dark));

        mv.apply(&mut board);
        assert_eq!(board, before);
        assert_eq!(mv.to_string(), "castle");
    }

    #[test]
    fn scoped_apply_undoes_on_drop() {
        let mut board = Board::new_game();
        let before = board.clone();
        let mut mv = Move::new(&board, 1, 18);
        {
            let applied = mv.apply_scoped(&mut board);
            assert_eq!(applied.piece_at(18), KNIGHT);
            assert_eq!(applied.piece_at(1), EMPTY);
        }
        assert_eq!(board, before);
    }

    #[test]
    fn equality_compares_records_until_terminator() {
        let board = Board::new_game();
        assert_eq!(Move::new(&board, 12, 20), Move::new(&board, 12, 20));
        assert_ne!(Move::new(&board, 12, 20), Move::new(&board, 12, 28));
        assert_ne!(
            Move::promotion(52, 60, QUEEN),
            Move::promotion(52, 60, KNIGHT)
        );
    }

    #[test]
    fn display_lists_records() {
        let board = Board::new_game();
        assert_eq!(Move::new(&board, 12, 28).to_string(), "e2= :e4=P");
    }
}
