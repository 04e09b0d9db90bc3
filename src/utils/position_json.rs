//! JSON position maps exchanged with front ends.
//!
//! A request names the side to move and maps squares to two-letter piece
//! codes: `{"turn": "white", "position": {"e2": "wP", "e8": "bK"}}`. The
//! response is the same kind of map for the board after the engine moved.

use std::collections::BTreeMap;
use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::utils::long_algebraic::{parse_square, square_name};

pub type PositionMap = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionRequest {
    pub turn: String,
    pub position: PositionMap,
}

#[derive(Debug)]
pub enum PositionError {
    Json(serde_json::Error),
    UnknownTurn(String),
    SquareOutOfRange(String),
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionError::Json(err) => write!(f, "malformed position JSON: {err}"),
            PositionError::UnknownTurn(turn) => {
                write!(f, "turn must be \"white\" or \"black\", got {turn:?}")
            }
            PositionError::SquareOutOfRange(square) => {
                write!(f, "square {square:?} is not on the board")
            }
        }
    }
}

impl Error for PositionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PositionError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for PositionError {
    fn from(err: serde_json::Error) -> Self {
        PositionError::Json(err)
    }
}

pub fn parse_request(json: &str) -> Result<PositionRequest, PositionError> {
    Ok(serde_json::from_str(json)?)
}

pub fn parse_turn(turn: &str) -> Result<Color, PositionError> {
    match turn.to_ascii_lowercase().as_str() {
        "white" => Ok(Color::Light),
        "black" => Ok(Color::Dark),
        _ => Err(PositionError::UnknownTurn(turn.to_owned())),
    }
}

/// Paints a fresh board from the request and returns it with the side to
/// move.
///
/// Entries whose key or value is shorter than two characters are skipped. An
/// unrecognised piece letter paints an empty square.
pub fn board_from_request(request: &PositionRequest) -> Result<(Board, Color), PositionError> {
    let to_move = parse_turn(&request.turn)?;
    let mut board = Board::new_empty();

    for (square_text, piece_text) in &request.position {
        if square_text.chars().count() < 2 || piece_text.chars().count() < 2 {
            warn!(square = %square_text, piece = %piece_text, "skipping malformed entry");
            continue;
        }

        let square = parse_square(square_text)
            .ok_or_else(|| PositionError::SquareOutOfRange(square_text.clone()))?;
        board.set_piece(square, parse_piece_code(piece_text));
    }

    Ok((board, to_move))
}

/// `"bQ"` style code to a signed piece; team `b` is Dark, anything else
/// Light.
fn parse_piece_code(code: &str) -> Piece {
    let mut chars = code.chars();
    let color = match chars.next() {
        Some('b') => Color::Dark,
        _ => Color::Light,
    };
    chars
        .next()
        .and_then(PieceKind::from_letter)
        .map_or(EMPTY, |kind| kind.colored(color))
}

/// Occupied squares of `board` as `"e2" -> "wP"` entries.
pub fn position_map(board: &Board) -> PositionMap {
    board
        .occupied_squares()
        .map(|(square, piece)| {
            let team = if piece < 0 { 'b' } else { 'w' };
            (square_name(square), format!("{team}{}", piece_letter(piece)))
        })
        .collect()
}

pub fn render_response(board: &Board) -> Result<String, PositionError> {
    Ok(serde_json::to_string_pretty(&position_map(board))?)
}
