//! Attack and check detection.
//!
//! Attacks are the opponent's pseudo-legal capture and king-step destinations.
//! This is one level deep: attack generation never filters for legality.

use crate::game_state::chess_types::*;
use crate::game_state::position::{AuxState, PieceSet};
use crate::move_generation::pseudo_legal_moves::find_pseudo_legal_moves;

/// Every square `attacker` (playing `attacker_color`) attacks against `defender`.
pub fn attacked_squares(attacker: &PieceSet, defender: &PieceSet, attacker_color: Color) -> Bitboard {
    find_pseudo_legal_moves(attacker, defender, attacker_color, &AuxState::cleared())
        .attacked_squares()
}

/// True if `player`'s king is attacked by `opponent`. A side with no king is
/// never in check.
pub fn is_in_check(player: &PieceSet, opponent: &PieceSet, side: Color) -> bool {
    let Some(king_sq) = player.king_square() else {
        return false;
    };
    attacked_squares(opponent, player, side.opposite()) & square_bit(king_sq) != 0
}
