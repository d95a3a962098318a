//! Pseudo-legal move aggregation.
//!
//! Runs every piece generator for one side and sorts the output into the four
//! categories the legality filter works on. Nothing here looks at checks.

use crate::game_state::chess_types::*;
use crate::game_state::position::{AuxState, PieceSet};
use crate::move_generation::pseudo_moves_king::generate_king_moves;
use crate::move_generation::pseudo_moves_knight::generate_knight_moves;
use crate::move_generation::pseudo_moves_pawn::generate_pawn_moves;
use crate::move_generation::pseudo_moves_sliding::generate_sliding_moves;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PseudoLegalMoves {
    /// Moves that capture, or would capture, whatever stands on their
    /// destination: knight and slider moves plus pawn diagonal captures.
    pub captures: Vec<Move>,
    pub king_moves: Vec<Move>,
    pub castling: Vec<Move>,
    /// Quiet pawn pushes, which never attack their destination.
    pub pawn_pushes: Vec<Move>,
}

impl PseudoLegalMoves {
    /// Squares this side attacks: destinations of captures and king steps.
    pub fn attacked_squares(&self) -> Bitboard {
        self.captures
            .iter()
            .chain(self.king_moves.iter())
            .fold(0u64, |acc, mv| acc | square_bit(mv.to))
    }

    pub fn len(&self) -> usize {
        self.captures.len() + self.king_moves.len() + self.castling.len() + self.pawn_pushes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub fn find_pseudo_legal_moves(
    player: &PieceSet,
    opponent: &PieceSet,
    side: Color,
    aux: &AuxState,
) -> PseudoLegalMoves {
    let mut moves = PseudoLegalMoves {
        captures: Vec::with_capacity(64),
        king_moves: Vec::with_capacity(8),
        castling: Vec::with_capacity(2),
        pawn_pushes: Vec::with_capacity(16),
    };

    generate_pawn_moves(
        player,
        opponent,
        side,
        aux.en_passant,
        &mut moves.pawn_pushes,
        &mut moves.captures,
    );
    generate_knight_moves(player, &mut moves.captures);
    generate_sliding_moves(player, opponent, &mut moves.captures);
    generate_king_moves(
        player,
        opponent,
        side,
        aux.castling_rights,
        &mut moves.king_moves,
        &mut moves.castling,
    );

    moves
}
