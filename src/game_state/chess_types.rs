//! Shared scalar types for the mailbox board.
//!
//! Pieces are signed bytes: the magnitude is the piece kind code and the sign
//! is the owner (`+` for `Color::Light`, `-` for `Color::Dark`). Zero is an
//! empty square.

/// Signed piece code stored in a board cell.
pub type Piece = i8;

/// Board square index (`0..64`, `0 == a1`, `63 == h8`).
pub type Square = u8;

pub const BOARD_SPACES: usize = 64;
pub const BOARD_DIM: i32 = 8;

pub const EMPTY: Piece = 0;
pub const PAWN: Piece = 1;
pub const KNIGHT: Piece = 2;
pub const BISHOP: Piece = 3;
pub const ROOK: Piece = 4;
pub const KING: Piece = 5;
pub const QUEEN: Piece = 6;

/// Placeholder for "no piece"; never written to a board.
pub const NULL_PIECE: Piece = i8::MAX;

pub const FLAG_LIGHT_CASTLED: u8 = 1 << 1;
pub const FLAG_DARK_CASTLED: u8 = 1 << 2;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn sign(self) -> i8 {
        match self {
            Color::Light => 1,
            Color::Dark => -1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// True when `piece` belongs to this side.
    #[inline]
    pub const fn owns(self, piece: Piece) -> bool {
        piece != NULL_PIECE && piece as i32 * self.sign() as i32 > 0
    }

    #[inline]
    pub const fn castled_flag(self) -> u8 {
        match self {
            Color::Light => FLAG_LIGHT_CASTLED,
            Color::Dark => FLAG_DARK_CASTLED,
        }
    }

    /// Owner of a non-empty piece code.
    #[inline]
    pub const fn of_piece(piece: Piece) -> Option<Self> {
        if piece == EMPTY || piece == NULL_PIECE {
            None
        } else if piece > 0 {
            Some(Color::Light)
        } else {
            Some(Color::Dark)
        }
    }
}

/// Piece kind with the numeric codes used on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum PieceKind {
    Pawn = PAWN,
    Knight = KNIGHT,
    Bishop = BISHOP,
    Rook = ROOK,
    King = KING,
    Queen = QUEEN,
}

impl PieceKind {
    #[inline]
    pub const fn from_piece(piece: Piece) -> Option<Self> {
        match piece.unsigned_abs() as i8 {
            PAWN => Some(PieceKind::Pawn),
            KNIGHT => Some(PieceKind::Knight),
            BISHOP => Some(PieceKind::Bishop),
            ROOK => Some(PieceKind::Rook),
            KING => Some(PieceKind::King),
            QUEEN => Some(PieceKind::Queen),
            _ => None,
        }
    }

    #[inline]
    pub const fn code(self) -> Piece {
        self as Piece
    }

    /// Signed piece code for this kind owned by `color`.
    #[inline]
    pub const fn colored(self, color: Color) -> Piece {
        self.code() * color.sign()
    }

    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// Unsigned material value of a piece code, ignoring its owner.
#[inline]
pub const fn piece_value(piece: Piece) -> i32 {
    if piece == NULL_PIECE {
        return -1;
    }
    match PieceKind::from_piece(piece) {
        Some(PieceKind::Pawn) => 1,
        Some(PieceKind::Knight) => 3,
        Some(PieceKind::Bishop) => 3,
        Some(PieceKind::Rook) => 5,
        Some(PieceKind::Queen) => 9,
        Some(PieceKind::King) => 1000,
        None => 0,
    }
}

/// Material value carrying the owner's sign.
#[inline]
pub const fn signed_piece_value(piece: Piece) -> i32 {
    if piece == NULL_PIECE {
        return piece_value(piece);
    }
    let value = piece_value(piece);
    if piece < 0 {
        -value
    } else {
        value
    }
}

/// Display letter for a piece code: kind letter regardless of owner,
/// `' '` for an empty square and `'-'` for the null sentinel.
pub const fn piece_letter(piece: Piece) -> char {
    if piece == NULL_PIECE {
        return '-';
    }
    if piece == EMPTY {
        return ' ';
    }
    match PieceKind::from_piece(piece) {
        Some(kind) => kind.letter(),
        None => '?',
    }
}

#[inline]
pub const fn file_of(square: Square) -> i32 {
    square as i32 % BOARD_DIM
}

#[inline]
pub const fn rank_of(square: Square) -> i32 {
    square as i32 / BOARD_DIM
}

#[inline]
pub const fn to_square(file: i32, rank: i32) -> Square {
    (file + rank * BOARD_DIM) as Square
}
