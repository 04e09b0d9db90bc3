//! Square names and long algebraic move text (`e2e4`, `e7e8q`).

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::chess_move::{Change, Move};

pub fn square_name(square: Square) -> String {
    let file = (b'a' + file_of(square) as u8) as char;
    let rank = (b'1' + rank_of(square) as u8) as char;
    format!("{file}{rank}")
}

/// Parses `"e4"`-style names; anything after the second character is ignored.
pub fn parse_square(name: &str) -> Option<Square> {
    let mut chars = name.chars();
    let file = chars.next()?;
    let rank = chars.next()?;
    if !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
        return None;
    }
    Some(to_square(
        file as i32 - 'a' as i32,
        rank as i32 - '1' as i32,
    ))
}

/// Long algebraic text for `mv` played from `board`.
///
/// Castle edits print as `O-O` or `O-O-O` depending on which side the rook
/// stands.
pub fn move_to_long_algebraic(mv: &Move, board: &Board) -> String {
    let cells: Vec<(Square, Piece)> = mv
        .changes()
        .filter_map(|change| match *change {
            Change::Cell { square, piece } => Some((square, piece)),
            _ => None,
        })
        .collect();

    if mv.is_castle() {
        return match cells.as_slice() {
            [(king, _), (rook, _), ..] if file_of(*rook) < file_of(*king) => "O-O-O".to_owned(),
            _ => "O-O".to_owned(),
        };
    }

    let (Some(from), Some((to, landing))) = (mv.from_square(), mv.destination()) else {
        return String::from("0000");
    };

    let mut text = format!("{}{}", square_name(from), square_name(to));
    let moving = board.piece_at(from);
    if PieceKind::from_piece(moving) == Some(PieceKind::Pawn) && landing != moving {
        text.push(piece_letter(landing).to_ascii_lowercase());
    }
    text
}

/// Space separated text for a line of consecutive moves starting at `board`.
pub fn line_to_long_algebraic(board: &Board, line: &[Move]) -> String {
    let mut scratch = board.clone();
    let mut parts = Vec::with_capacity(line.len());
    for mv in line {
        parts.push(move_to_long_algebraic(mv, &scratch));
        let mut step = *mv;
        step.apply(&mut scratch);
    }
    parts.join(" ")
}
