//! King step geometry.
//!
//! The eight adjacent-square targets per square, precomputed at compile time.
//! Used both for king move generation and for king-adjacency attacks.

use crate::game_state::chess_types::{Bitboard, Square};
use crate::moves::square_offsets::step_table;

pub const KING_DELTAS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

pub const KING_ATTACKS: [Bitboard; 64] = step_table(&KING_DELTAS);

#[inline]
pub const fn king_attacks(square: Square) -> Bitboard {
    KING_ATTACKS[square as usize]
}
