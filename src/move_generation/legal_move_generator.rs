//! Full legal move generation pipeline.
//!
//! Generates pseudo-legal candidates, then keeps only those that do not leave
//! the mover's king attacked. Each candidate is applied to a copy of the
//! position and the opponent's attack set is regenerated on the result.
//! Castling additionally may not start in, pass through or land on an
//! attacked square.

use log::trace;

use crate::game_state::chess_types::*;
use crate::game_state::position::{AuxState, PieceSet};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::{attacked_squares, is_in_check};
use crate::move_generation::pseudo_legal_moves::{find_pseudo_legal_moves, PseudoLegalMoves};

/// Every legal move for `side`.
pub fn find_legal_moves(
    player: &PieceSet,
    opponent: &PieceSet,
    side: Color,
    aux: &AuxState,
) -> Vec<Move> {
    let pseudo = find_pseudo_legal_moves(player, opponent, side, aux);
    filter_legal_moves(player, opponent, side, aux, &pseudo)
}

/// The subset of `pseudo` that is legal. Unsafe moves are dropped silently.
pub fn filter_legal_moves(
    player: &PieceSet,
    opponent: &PieceSet,
    side: Color,
    aux: &AuxState,
    pseudo: &PseudoLegalMoves,
) -> Vec<Move> {
    let is_safe = |mv: &Move| {
        let safe = leaves_king_safe(player, opponent, side, aux, *mv);
        if !safe {
            trace!("dropping {mv} for {side}: king left attacked");
        }
        safe
    };

    let safe_king_moves: Vec<Move> = pseudo.king_moves.iter().copied().filter(is_safe).collect();

    let mut legal = Vec::with_capacity(pseudo.len());
    legal.extend(
        pseudo
            .captures
            .iter()
            .chain(pseudo.pawn_pushes.iter())
            .copied()
            .filter(is_safe),
    );
    legal.extend(legal_castling_moves(
        player,
        opponent,
        side,
        aux,
        &pseudo.castling,
        &safe_king_moves,
    ));
    legal.extend(safe_king_moves);
    legal
}

/// True if `mv` does not leave `side`'s king attacked.
pub fn leaves_king_safe(
    player: &PieceSet,
    opponent: &PieceSet,
    side: Color,
    aux: &AuxState,
    mv: Move,
) -> bool {
    let next = apply_move(player, opponent, side, mv, aux);
    !is_in_check(&next.player, &next.opponent, side)
}

fn legal_castling_moves(
    player: &PieceSet,
    opponent: &PieceSet,
    side: Color,
    aux: &AuxState,
    candidates: &[Move],
    safe_king_moves: &[Move],
) -> Vec<Move> {
    if candidates.is_empty() {
        return Vec::new();
    }
    let Some(king_sq) = player.king_square() else {
        return Vec::new();
    };

    let attacked_now = attacked_squares(opponent, player, side.opposite());
    if attacked_now & square_bit(king_sq) != 0 {
        trace!("{side} cannot castle out of check");
        return Vec::new();
    }

    candidates
        .iter()
        .copied()
        .filter(|mv| {
            let step = if mv.to > mv.from { mv.from + 1 } else { mv.from - 1 };
            if !safe_king_moves.iter().any(|king_move| king_move.to == step) {
                return false;
            }

            let (low, high) = (mv.from.min(mv.to), mv.from.max(mv.to));
            let path = (low..=high).fold(0u64, |acc, sq| acc | square_bit(sq));
            if attacked_now & path != 0 {
                return false;
            }

            leaves_king_safe(player, opponent, side, aux, *mv)
        })
        .collect()
}
