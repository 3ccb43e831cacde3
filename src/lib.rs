//! Crate root module declarations.
//!
//! A grid-based chess rules engine: board container, per-piece movement
//! predicates, destination generation and move application, plus the
//! selection session, a random engine and terminal helpers used by the
//! driver binary.

pub mod config;
pub mod errors;

pub mod game_state {
    pub mod captured_pieces;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod move_generator;
    pub mod perft;
}

pub mod session {
    pub mod game_session;
}

pub mod engines {
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod render_game_state;
}
