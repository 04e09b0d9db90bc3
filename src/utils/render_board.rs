//! Plain-text board renderer.
//!
//! Light pieces print in upper case, Dark in lower case. Rank 8 is on top.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;

pub fn piece_symbol(piece: Piece) -> char {
    match Color::of_piece(piece) {
        Some(Color::Light) => piece_letter(piece),
        Some(Color::Dark) => piece_letter(piece).to_ascii_lowercase(),
        None if piece == NULL_PIECE => '-',
        None => '·',
    }
}

pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in (0..BOARD_DIM).rev() {
        let label = char::from(b'1' + rank as u8);
        out.push(label);
        out.push(' ');

        for file in 0..BOARD_DIM {
            out.push(piece_symbol(board.piece_at(to_square(file, rank))));
            if file < BOARD_DIM - 1 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(label);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}
