//! Per-side bitboard piece sets and the auxiliary per-ply state.
//!
//! A `PieceSet` holds six bitboards for one side, ordered pawn, rook, knight,
//! bishop, queen, king. Both types are small `Copy` values: every operation
//! that "changes" a position returns a fresh one.

use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PieceSet {
    pub boards: [Bitboard; 6],
}

impl PieceSet {
    #[inline]
    pub const fn empty() -> Self {
        Self { boards: [0; 6] }
    }

    /// Standard starting material for `color`.
    pub const fn starting(color: Color) -> Self {
        let shift = (color.back_rank() as u32) * 8;
        let pawn_shift = (color.pawn_start_rank() as u32) * 8;
        Self {
            boards: [
                0xFFu64 << pawn_shift,
                0b1000_0001u64 << shift,
                0b0100_0010u64 << shift,
                0b0010_0100u64 << shift,
                0b0000_1000u64 << shift,
                0b0001_0000u64 << shift,
            ],
        }
    }

    #[inline]
    pub const fn board(&self, piece: PieceKind) -> Bitboard {
        self.boards[piece.index()]
    }

    #[inline]
    pub fn place(&mut self, piece: PieceKind, square: Square) {
        self.boards[piece.index()] |= square_bit(square);
    }

    #[inline]
    pub fn remove(&mut self, piece: PieceKind, square: Square) {
        self.boards[piece.index()] &= !square_bit(square);
    }

    /// Union of all six bitboards.
    #[inline]
    pub fn occupancy(&self) -> Bitboard {
        self.boards.iter().fold(0u64, |acc, bb| acc | bb)
    }

    #[inline]
    pub fn is_occupied(&self, square: Square) -> bool {
        self.occupancy() & square_bit(square) != 0
    }

    pub fn piece_on(&self, square: Square) -> Option<PieceKind> {
        let mask = square_bit(square);
        ALL_PIECE_KINDS
            .into_iter()
            .find(|piece| self.boards[piece.index()] & mask != 0)
    }

    #[inline]
    pub fn king_square(&self) -> Option<Square> {
        let kings = self.board(PieceKind::King);
        if kings == 0 {
            None
        } else {
            Some(kings.trailing_zeros() as Square)
        }
    }

    /// Total number of pieces, king included.
    #[inline]
    pub fn count(&self) -> u32 {
        self.boards.iter().map(|bb| bb.count_ones()).sum()
    }
}

/// En-passant state left behind by a double pawn push.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnPassant {
    /// Square a capturing pawn lands on.
    pub target: Square,
    /// Square holding the pawn that gets removed.
    pub captured: Square,
}

/// Auxiliary state threaded through every ply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuxState {
    pub castling_rights: CastlingRights,
    pub en_passant: Option<EnPassant>,
    pub halfmove_clock: u16,
}

impl Default for AuxState {
    fn default() -> Self {
        Self {
            castling_rights: CASTLE_ALL,
            en_passant: None,
            halfmove_clock: 0,
        }
    }
}

impl AuxState {
    /// No rights, no en passant, zero clock.
    #[inline]
    pub const fn cleared() -> Self {
        Self {
            castling_rights: 0,
            en_passant: None,
            halfmove_clock: 0,
        }
    }

    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant.map(|ep| ep.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_sets_are_disjoint_and_complete() {
        let light = PieceSet::starting(Color::Light);
        let dark = PieceSet::starting(Color::Dark);
        assert_eq!(light.count(), 16);
        assert_eq!(dark.count(), 16);
        assert_eq!(light.occupancy() & dark.occupancy(), 0);
        assert_eq!(light.king_square(), Some(4));
        assert_eq!(dark.king_square(), Some(60));
        assert_eq!(dark.piece_on(59), Some(PieceKind::Queen));
        assert_eq!(light.piece_on(1), Some(PieceKind::Knight));
        assert_eq!(light.piece_on(2), Some(PieceKind::Bishop));
    }

    #[test]
    fn place_and_remove_toggle_single_bits() {
        let mut set = PieceSet::empty();
        set.place(PieceKind::Rook, 27);
        assert!(set.is_occupied(27));
        set.remove(PieceKind::Rook, 27);
        assert_eq!(set, PieceSet::empty());
    }
}
