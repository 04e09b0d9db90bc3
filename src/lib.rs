//! Crate root module declarations for the line chess engine.
//!
//! The engine searches a single mailbox board in place: moves are reversible
//! edits, generation is pseudo-legal, and the search is material-only
//! alpha-beta driven by an iterative deepening loop that returns a principal
//! line.

pub mod game_state {
    pub mod board;
    pub mod chess_types;
}

pub mod moves {
    pub mod chess_move;
    pub mod move_collector;
}

pub mod move_generation {
    pub mod landing_rules;
    pub mod move_generator;
    pub mod pseudo_move_shared;
    pub mod pseudo_moves_king;
    pub mod pseudo_moves_knight;
    pub mod pseudo_moves_pawn;
    pub mod pseudo_moves_sliders;
}

pub mod search {
    pub mod alpha_beta;
    pub mod principal_line;
}

pub mod engines {
    pub mod line_engine;
}

pub mod utils {
    pub mod long_algebraic;
    pub mod position_json;
    pub mod render_board;
}
