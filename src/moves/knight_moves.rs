use crate::game_state::chess_types::{Bitboard, Square};
use crate::moves::square_offsets::step_table;

/// Knight jumps as `(file_delta, rank_delta)`.
pub const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

pub const KNIGHT_ATTACKS: [Bitboard; 64] = step_table(&KNIGHT_DELTAS);

#[inline]
pub const fn knight_attacks(square: Square) -> Bitboard {
    KNIGHT_ATTACKS[square as usize]
}
