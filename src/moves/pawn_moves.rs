use crate::game_state::chess_types::{Bitboard, Color, Square};
use crate::moves::square_offsets::step_table;

pub const LIGHT_PAWN_ATTACKS: [Bitboard; 64] = step_table(&[(-1, 1), (1, 1)]);
pub const DARK_PAWN_ATTACKS: [Bitboard; 64] = step_table(&[(-1, -1), (1, -1)]);

/// Diagonal capture targets of a `color` pawn standing on `square`.
#[inline]
pub const fn pawn_attacks(color: Color, square: Square) -> Bitboard {
    match color {
        Color::Light => LIGHT_PAWN_ATTACKS[square as usize],
        Color::Dark => DARK_PAWN_ATTACKS[square as usize],
    }
}

/// Rank step of a forward pawn move for `color`.
#[inline]
pub const fn pawn_forward(color: Color) -> i8 {
    match color {
        Color::Light => 1,
        Color::Dark => -1,
    }
}
