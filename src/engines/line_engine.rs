//! Engine move routine: grow the principal line pass by pass, then play its
//! first move.
//!
//! Each pass asks for a line one ply longer than the last and is handed the
//! previous pass's line as a move-ordering hint.

use chrono::{Duration, Utc};
use tracing::info;

use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::move_generation::move_generator::MoveGenResult;
use crate::moves::chess_move::Move;
use crate::search::principal_line::{compute_line_with_hint, SearchConfig};
use crate::utils::long_algebraic::line_to_long_algebraic;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Line length of the first pass.
    pub min_plies: usize,
    /// Line length of the last pass.
    pub max_plies: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_plies: 2,
            max_plies: 5,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DepthPass {
    pub plies: usize,
    pub elapsed: Duration,
    pub nodes: u64,
    pub value: i32,
    pub line: Vec<Move>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineReport {
    /// Move applied to the board; `None` if the side to move had none.
    pub played: Option<Move>,
    pub passes: Vec<DepthPass>,
}

impl EngineReport {
    /// Line of the deepest pass.
    pub fn final_line(&self) -> &[Move] {
        self.passes
            .last()
            .map(|pass| pass.line.as_slice())
            .unwrap_or_default()
    }

    pub fn total_nodes(&self) -> u64 {
        self.passes.iter().map(|pass| pass.nodes).sum()
    }
}

/// Searches for `player` and applies the first move of the deepest line to
/// `board`.
pub fn choose_and_play(
    board: &mut Board,
    player: Color,
    config: &EngineConfig,
) -> MoveGenResult<EngineReport> {
    let mut report = EngineReport::default();
    let mut hint: Vec<Move> = Vec::new();

    let first = config.min_plies.max(1);
    for plies in first..=config.max_plies.max(first) {
        let started = Utc::now();
        let line = compute_line_with_hint(board, player, SearchConfig { max_plies: plies }, &hint)?;
        let elapsed = Utc::now() - started;

        info!(
            ?player,
            plies,
            elapsed_us = elapsed.num_microseconds().unwrap_or(i64::MAX),
            nodes = line.nodes,
            value = line.value,
            line = %line_to_long_algebraic(board, &line.moves),
            "depth pass complete"
        );

        hint = line.moves.clone();
        report.passes.push(DepthPass {
            plies,
            elapsed,
            nodes: line.nodes,
            value: line.value,
            line: line.moves,
        });
    }

    if let Some(&best) = report.final_line().first() {
        let mut played = best;
        played.apply(board);
        report.played = Some(best);
    }

    Ok(report)
}
