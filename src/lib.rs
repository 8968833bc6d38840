//! Crate root module declarations for the mailbox chess rules engine.
//!
//! This file exposes the top-level subsystems (game state, move geometry,
//! move generation, the rules engine, the terminal controller and utility
//! helpers) so the binary, tests, benches and external controllers can import
//! stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod history;
    pub mod undo_state;
}

pub mod moves {
    pub mod attack_tables;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_descriptions;
    pub mod pawn_moves;
    pub mod sliding_moves;
}

pub mod move_generation {
    pub mod castling;
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod perft;
    pub mod pseudo_legal_generator;
    pub mod pseudo_moves_pawn;
    pub mod pseudo_moves_sliding;
    pub mod pseudo_moves_step;
}

pub mod controller {
    pub mod controller_top;
}

pub mod engines {
    pub mod engine_random;
    pub mod rules_engine;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod render_game_state;
}
