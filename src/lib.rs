//! Crate root module declarations for the bitboard chess rules engine.
//!
//! The core turns a position into its legal moves and applies a chosen move
//! to produce the next position, tracking castling rights, en passant, the
//! halfmove clock and repetitions along the way. Move selection lives behind
//! the `engines::engine_trait::Engine` seam; notation and FEN helpers live in
//! `utils`.

pub mod errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_options;
    pub mod game_state;
    pub mod game_status;
    pub mod position;
    pub mod repetition;
}

pub mod moves {
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod sliding_moves;
    pub mod square_offsets;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod perft;
    pub mod pseudo_legal_moves;
    pub mod pseudo_moves_king;
    pub mod pseudo_moves_knight;
    pub mod pseudo_moves_pawn;
    pub mod pseudo_moves_sliding;
}

pub mod engines {
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
}

pub use errors::ChessError;
pub use game_state::chess_types::{Color, Move, PieceKind, Promotion, Square};
pub use game_state::game_state::GameState;
pub use game_state::game_status::{draw_by_insufficient_material, game_over_status};
pub use move_generation::legal_move_apply::apply_move;
pub use move_generation::legal_move_generator::find_legal_moves;
