//! Bounds-checked square arithmetic.
//!
//! Every step is validated on rank and file separately, so a delta can never
//! wrap from the h-file onto the a-file of the next rank.

use crate::game_state::chess_types::Square;

/// Square reached from `square` by `(file_delta, rank_delta)`, if on the board.
#[inline]
pub const fn offset_square(square: Square, file_delta: i8, rank_delta: i8) -> Option<Square> {
    let file = (square % 8) as i8 + file_delta;
    let rank = (square / 8) as i8 + rank_delta;
    if file < 0 || file > 7 || rank < 0 || rank > 7 {
        return None;
    }
    Some((rank * 8 + file) as Square)
}

/// Build a 64-entry table of single-step targets for a fixed delta list.
pub const fn step_table(deltas: &[(i8, i8)]) -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let mut targets = 0u64;
        let mut i = 0usize;
        while i < deltas.len() {
            if let Some(to) = offset_square(sq as Square, deltas[i].0, deltas[i].1) {
                targets |= 1u64 << to;
            }
            i += 1;
        }
        table[sq] = targets;
        sq += 1;
    }

    table
}
