//! Bounded, stack-ordered move buffer filled by the generator and drained by
//! the search.

use crate::move_generation::move_generator::{MoveGenResult, MoveGenerationError};
use crate::moves::chess_move::Move;

pub const COLLECTOR_CAPACITY: usize = 128;

/// Anything the generator can write moves into.
pub trait MoveSink {
    fn put(&mut self, mv: Move) -> MoveGenResult<()>;
}

impl MoveSink for Vec<Move> {
    #[inline]
    fn put(&mut self, mv: Move) -> MoveGenResult<()> {
        self.push(mv);
        Ok(())
    }
}

/// Holds at most [`COLLECTOR_CAPACITY`] moves and serves the most recently
/// generated one first.
#[derive(Debug, Clone)]
pub struct MoveCollector {
    moves: Vec<Move>,
}

impl Default for MoveCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveCollector {
    pub fn new() -> Self {
        Self {
            moves: Vec::with_capacity(COLLECTOR_CAPACITY),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Pops the newest move.
    #[inline]
    pub fn next_move(&mut self) -> Option<Move> {
        self.moves.pop()
    }

    /// Removes and returns the move equal to `wanted`, if generated.
    pub fn take_matching(&mut self, wanted: &Move) -> Option<Move> {
        let index = self.moves.iter().rposition(|mv| mv == wanted)?;
        Some(self.moves.remove(index))
    }

    /// Generated moves in generation order.
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }
}

impl MoveSink for MoveCollector {
    fn put(&mut self, mv: Move) -> MoveGenResult<()> {
        if self.moves.len() >= COLLECTOR_CAPACITY {
            return Err(MoveGenerationError::CollectorFull {
                capacity: COLLECTOR_CAPACITY,
            });
        }
        self.moves.push(mv);
        Ok(())
    }
}
