//! Destination filters shared by the per-piece generators.
//!
//! A rule decides whether a piece may land on a square and, for sliders,
//! whether the scan continues past it. The rules are zero-sized so the
//! generators monomorphise over them.

use crate::game_state::chess_types::{Color, Piece, EMPTY};

pub trait LandingRule {
    fn accepts(mover: Color, occupant: Piece) -> bool;

    /// Sliding stops at the first occupied square, capture included.
    #[inline]
    fn keeps_sliding(_mover: Color, occupant: Piece) -> bool {
        occupant == EMPTY
    }
}

pub struct EmptyOnly;
pub struct EmptyOrCapture;
pub struct CaptureOnly;

impl LandingRule for EmptyOnly {
    #[inline]
    fn accepts(_mover: Color, occupant: Piece) -> bool {
        occupant == EMPTY
    }
}

impl LandingRule for EmptyOrCapture {
    #[inline]
    fn accepts(mover: Color, occupant: Piece) -> bool {
        occupant == EMPTY || mover.opposite().owns(occupant)
    }
}

impl LandingRule for CaptureOnly {
    #[inline]
    fn accepts(mover: Color, occupant: Piece) -> bool {
        mover.opposite().owns(occupant)
    }

    #[inline]
    fn keeps_sliding(_mover: Color, _occupant: Piece) -> bool {
        false
    }
}
