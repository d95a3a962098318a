//! Canonical chess-rule constants.
//!
//! Starting setup, castling geometry and the thresholds of the automatic draw
//! rules.

use crate::game_state::chess_types::{
    CastlingRights, Color, Square, CASTLE_DARK_KINGSIDE, CASTLE_DARK_QUEENSIDE, CASTLE_LIGHT_KINGSIDE,
    CASTLE_LIGHT_QUEENSIDE,
};

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Halfmove clock value that forces a draw (50 full moves).
pub const HALFMOVE_DRAW_LIMIT: u16 = 100;

/// Occurrence count of one position key that forces a draw.
pub const REPETITION_DRAW_LIMIT: u8 = 3;

/// King start square for `color`.
#[inline]
pub const fn king_home_square(color: Color) -> Square {
    color.back_rank() * 8 + 4
}

/// Original rook squares with the right each one guards.
pub const ROOK_HOME_RIGHTS: [(Color, Square, CastlingRights); 4] = [
    (Color::Light, 0, CASTLE_LIGHT_QUEENSIDE),
    (Color::Light, 7, CASTLE_LIGHT_KINGSIDE),
    (Color::Dark, 56, CASTLE_DARK_QUEENSIDE),
    (Color::Dark, 63, CASTLE_DARK_KINGSIDE),
];

/// Castling right lost when `color`'s rook leaves or is captured on `square`.
#[inline]
pub fn rook_home_right(color: Color, square: Square) -> Option<CastlingRights> {
    ROOK_HOME_RIGHTS
        .iter()
        .find(|(c, sq, _)| *c == color && *sq == square)
        .map(|(_, _, right)| *right)
}

/// Rook relocation `(from, to)` for a castling king move `king_from -> king_to`.
#[inline]
pub const fn castling_rook_squares(king_from: Square, king_to: Square) -> (Square, Square) {
    let rank_base = (king_from / 8) * 8;
    if king_to > king_from {
        (rank_base + 7, rank_base + 5)
    } else {
        (rank_base, rank_base + 3)
    }
}
