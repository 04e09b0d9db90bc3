//! Mailbox board with an incrementally maintained material score.
//!
//! `Board` is the single mutable resource a search works on. Every write goes
//! through [`Board::set_piece`] so `score` stays equal to the sum of signed
//! piece values without ever being recomputed during search.

use crate::game_state::chess_types::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Piece; BOARD_SPACES],
    score: i32,
    castle_flags: u8,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            cells: [EMPTY; BOARD_SPACES],
            score: 0,
            castle_flags: 0,
        }
    }
}

impl Board {
    /// Empty board, zero score, nobody castled.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Standard starting layout with Light on ranks 1-2.
    pub fn new_game() -> Self {
        let mut board = Self::new_empty();
        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        for (file, kind) in back_rank.into_iter().enumerate() {
            let file = file as i32;
            board.set_piece(to_square(file, 0), kind.colored(Color::Light));
            board.set_piece(to_square(file, 1), PAWN);
            board.set_piece(to_square(file, 6), -PAWN);
            board.set_piece(to_square(file, 7), kind.colored(Color::Dark));
        }

        board
    }

    /// Writes a cell and shifts `score` by the signed-value delta.
    ///
    /// `square` must be below 64.
    #[inline]
    pub fn set_piece(&mut self, square: Square, piece: Piece) {
        let cell = &mut self.cells[square as usize];
        self.score += signed_piece_value(piece) - signed_piece_value(*cell);
        *cell = piece;
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Piece {
        self.cells[square as usize]
    }

    /// Raw material balance, positive when Light is ahead.
    #[inline]
    pub fn score(&self) -> i32 {
        self.score
    }

    /// Material balance from `color`'s point of view.
    #[inline]
    pub fn score_for(&self, color: Color) -> i32 {
        self.score * color.sign() as i32
    }

    #[inline]
    pub fn castle_flags(&self) -> u8 {
        self.castle_flags
    }

    #[inline]
    pub(crate) fn replace_castle_flags(&mut self, flags: u8) -> u8 {
        std::mem::replace(&mut self.castle_flags, flags)
    }

    pub fn has_castled(&self, color: Color) -> bool {
        self.castle_flags & color.castled_flag() != 0
    }

    /// Material balance summed from the cells, ignoring the running score.
    pub fn material_from_scratch(&self) -> i32 {
        self.cells.iter().map(|&piece| signed_piece_value(piece)).sum()
    }

    /// Occupied squares with their signed piece, lowest square first.
    pub fn occupied_squares(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &piece)| piece != EMPTY)
            .map(|(square, &piece)| (square as Square, piece))
    }
}
