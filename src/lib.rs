//! Crate root module declarations for the puzzle tutor.
//!
//! The tutor evaluates chess positions, searches for a best move with
//! alpha-beta minimax and turns that move into tiered hints. Chess rules come
//! from the `ChessRules` capability, implemented here on top of `shakmaty`.

pub mod errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod undo_state;
}

pub mod search {
    pub mod applied_move;
    pub mod board_scoring;
    pub mod minimax;
}

pub mod hints {
    pub mod hint_generator;
    pub mod hint_report;
    pub mod hint_tier;
}

pub mod tables {
    pub mod puzzle_catalog;
}

pub mod engines {
    pub mod puzzle_tutor;
}
