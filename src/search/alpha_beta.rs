//! Material-only minimax with alpha-beta pruning over one shared board.
//!
//! Every child is searched with the move held applied by an [`AppliedMove`]
//! guard, so the board is back in the parent's state before the next sibling
//! is tried, whether the child returned normally or with an error.
//!
//! Values are always from the searching player's point of view: nodes where
//! that player moves maximise, the others minimise.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::move_generation::move_generator::{collect_moves, MoveGenResult};
use crate::moves::chess_move::Move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeOutcome {
    pub value: i32,
    /// `None` at the horizon or when the side to move had no moves.
    pub best_move: Option<Move>,
}

impl NodeOutcome {
    #[inline]
    fn leaf(value: i32) -> Self {
        Self {
            value,
            best_move: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AlphaBetaSearch<'h> {
    player: Color,
    max_ply: usize,
    nodes_visited: u64,
    hint: &'h [Move],
}

impl AlphaBetaSearch<'static> {
    pub fn new(player: Color, max_ply: usize) -> Self {
        Self::with_hint(player, max_ply, &[])
    }
}

impl<'h> AlphaBetaSearch<'h> {
    /// Search that tries `hint[ply]` first at nodes on the leftmost path,
    /// when that move is among the generated ones.
    pub fn with_hint(player: Color, max_ply: usize, hint: &'h [Move]) -> Self {
        Self {
            player,
            max_ply,
            nodes_visited: 0,
            hint,
        }
    }

    #[inline]
    pub fn nodes_visited(&self) -> u64 {
        self.nodes_visited
    }

    /// Full-window search from the current board with `to_move` on turn.
    pub fn run(&mut self, board: &mut Board, to_move: Color) -> MoveGenResult<NodeOutcome> {
        self.nodes_visited = 0;
        self.search(board, 0, i32::MIN, i32::MAX, to_move)
    }

    fn search(
        &mut self,
        board: &mut Board,
        ply: usize,
        mut alpha: i32,
        mut beta: i32,
        to_move: Color,
    ) -> MoveGenResult<NodeOutcome> {
        if ply >= self.max_ply {
            return Ok(NodeOutcome::leaf(board.score_for(self.player)));
        }

        let mut candidates = collect_moves(board, to_move)?;

        // The counter only equals the ply while still on the leftmost path.
        let hinted = if self.nodes_visited == ply as u64 {
            self.hint
                .get(ply)
                .and_then(|hint| candidates.take_matching(hint))
        } else {
            None
        };

        let mut next = hinted.or_else(|| candidates.next_move());
        if next.is_none() {
            return Ok(NodeOutcome::leaf(board.score_for(self.player)));
        }

        let maximizing = to_move == self.player;
        let mut best = NodeOutcome {
            value: if maximizing { i32::MIN } else { i32::MAX },
            best_move: None,
        };

        while let Some(mut mv) = next {
            self.nodes_visited += 1;
            let value = {
                let mut applied = mv.apply_scoped(board);
                self.search(&mut applied, ply + 1, alpha, beta, to_move.opposite())?
                    .value
            };

            let improves = if maximizing {
                value > best.value
            } else {
                value < best.value
            };
            if improves || best.best_move.is_none() {
                best = NodeOutcome {
                    value,
                    best_move: Some(mv),
                };
            }

            if maximizing {
                alpha = alpha.max(value);
            } else {
                beta = beta.min(value);
            }
            if beta <= alpha {
                break;
            }

            next = candidates.next_move();
        }

        Ok(best)
    }
}
