//! Ray walking shared by rooks, bishops and queens.

use crate::game_state::chess_types::{square_bit, Bitboard, Square};
use crate::moves::square_offsets::offset_square;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Walk one direction from `square` until the edge or a blocker.
///
/// A friendly blocker is excluded; an enemy blocker is included and ends the
/// ray.
pub fn walk_ray(
    square: Square,
    file_step: i8,
    rank_step: i8,
    own_occ: Bitboard,
    enemy_occ: Bitboard,
) -> Bitboard {
    let mut targets = 0u64;
    let mut current = square;

    while let Some(next) = offset_square(current, file_step, rank_step) {
        let bit = square_bit(next);
        if own_occ & bit != 0 {
            break;
        }
        targets |= bit;
        if enemy_occ & bit != 0 {
            break;
        }
        current = next;
    }

    targets
}

/// Union of `walk_ray` over every direction in `directions`.
pub fn sliding_targets(
    square: Square,
    directions: &[(i8, i8)],
    own_occ: Bitboard,
    enemy_occ: Bitboard,
) -> Bitboard {
    directions
        .iter()
        .fold(0u64, |acc, &(df, dr)| acc | walk_ray(square, df, dr, own_occ, enemy_occ))
}
