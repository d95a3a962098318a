//! Move application.
//!
//! A pure state transition: given both piece sets, the side to move, a move
//! and the current auxiliary state, produce fresh piece sets and fresh
//! auxiliary state. Inputs are never mutated.

use log::warn;

use crate::game_state::chess_rules::{castling_rook_squares, rook_home_right};
use crate::game_state::chess_types::*;
use crate::game_state::position::{AuxState, EnPassant, PieceSet};

/// Result of applying one move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    /// The mover's pieces after the move.
    pub player: PieceSet,
    /// The opponent's pieces after the move.
    pub opponent: PieceSet,
    pub aux: AuxState,
    /// Piece removed from the opponent, including en-passant pawns.
    pub captured: Option<PieceKind>,
}

pub fn apply_move(
    player: &PieceSet,
    opponent: &PieceSet,
    side: Color,
    mv: Move,
    aux: &AuxState,
) -> AppliedMove {
    let mut next_player = *player;
    let mut next_opponent = *opponent;
    let mut next_aux = AuxState {
        castling_rights: aux.castling_rights,
        en_passant: None,
        halfmove_clock: aux.halfmove_clock,
    };

    let Some(moved_piece) = player.piece_on(mv.from) else {
        warn!("apply_move called with no {side} piece on square {}", mv.from);
        return AppliedMove {
            player: next_player,
            opponent: next_opponent,
            aux: next_aux,
            captured: None,
        };
    };

    next_player.remove(moved_piece, mv.from);
    next_player.place(moved_piece, mv.to);

    let mut reset_clock = false;

    match moved_piece {
        PieceKind::King => {
            if mv.from.abs_diff(mv.to) == 2 {
                let (rook_from, rook_to) = castling_rook_squares(mv.from, mv.to);
                next_player.remove(PieceKind::Rook, rook_from);
                next_player.place(PieceKind::Rook, rook_to);
            }
            next_aux.castling_rights &= !(side.kingside_right() | side.queenside_right());
        }
        PieceKind::Rook => {
            if let Some(right) = rook_home_right(side, mv.from) {
                next_aux.castling_rights &= !right;
            }
        }
        PieceKind::Pawn => {
            reset_clock = true;
            if rank_of(mv.to) == side.promotion_rank() {
                let promoted = mv.promotion.unwrap_or(Promotion::Queen).piece_kind();
                next_player.remove(PieceKind::Pawn, mv.to);
                next_player.place(promoted, mv.to);
            } else if mv.from.abs_diff(mv.to) == 16 {
                next_aux.en_passant = Some(EnPassant {
                    target: (mv.from + mv.to) / 2,
                    captured: mv.to,
                });
            }
        }
        _ => {}
    }

    let mut captured = opponent.piece_on(mv.to);
    if let Some(piece) = captured {
        next_opponent.remove(piece, mv.to);
        reset_clock = true;
        if piece == PieceKind::Rook {
            if let Some(right) = rook_home_right(side.opposite(), mv.to) {
                next_aux.castling_rights &= !right;
            }
        }
    } else if moved_piece == PieceKind::Pawn {
        if let Some(ep) = aux.en_passant.filter(|ep| ep.target == mv.to) {
            next_opponent.remove(PieceKind::Pawn, ep.captured);
            captured = Some(PieceKind::Pawn);
        }
    }

    next_aux.halfmove_clock = if reset_clock {
        0
    } else {
        aux.halfmove_clock.saturating_add(1)
    };

    AppliedMove {
        player: next_player,
        opponent: next_opponent,
        aux: next_aux,
        captured,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_with(pieces: &[(PieceKind, Square)]) -> PieceSet {
        let mut set = PieceSet::empty();
        for &(piece, sq) in pieces {
            set.place(piece, sq);
        }
        set
    }

    #[test]
    fn double_push_sets_en_passant_and_resets_clock() {
        let player = PieceSet::starting(Color::Light);
        let opponent = PieceSet::starting(Color::Dark);
        let aux = AuxState {
            halfmove_clock: 7,
            ..AuxState::default()
        };
        let out = apply_move(&player, &opponent, Color::Light, Move::new(12, 28), &aux);

        assert_eq!(
            out.aux.en_passant,
            Some(EnPassant {
                target: 20,
                captured: 28
            })
        );
        assert_eq!(out.aux.halfmove_clock, 0);
        assert_eq!(out.player.piece_on(28), Some(PieceKind::Pawn));
        assert_eq!(out.player.piece_on(12), None);
        assert_eq!(out.player.count(), 16);
        // Inputs are untouched.
        assert_eq!(player, PieceSet::starting(Color::Light));
    }

    #[test]
    fn quiet_knight_move_increments_clock_and_clears_en_passant() {
        let aux = AuxState {
            en_passant: Some(EnPassant {
                target: 44,
                captured: 36,
            }),
            halfmove_clock: 3,
            ..AuxState::default()
        };
        let out = apply_move(
            &PieceSet::starting(Color::Light),
            &PieceSet::starting(Color::Dark),
            Color::Light,
            Move::new(6, 21),
            &aux,
        );

        assert_eq!(out.aux.halfmove_clock, 4);
        assert_eq!(out.aux.en_passant, None);
        assert_eq!(out.captured, None);
    }

    #[test]
    fn en_passant_removes_pawn_from_real_capture_square() {
        let player = set_with(&[(PieceKind::Pawn, 36), (PieceKind::King, 4)]);
        let opponent = set_with(&[(PieceKind::Pawn, 35), (PieceKind::King, 60)]);
        let aux = AuxState {
            castling_rights: 0,
            en_passant: Some(EnPassant {
                target: 43,
                captured: 35,
            }),
            halfmove_clock: 0,
        };
        let out = apply_move(&player, &opponent, Color::Light, Move::new(36, 43), &aux);

        assert_eq!(out.captured, Some(PieceKind::Pawn));
        assert_eq!(out.opponent.board(PieceKind::Pawn), 0);
        assert_eq!(out.opponent.count(), opponent.count() - 1);
        assert_eq!(out.player.piece_on(43), Some(PieceKind::Pawn));
    }

    #[test]
    fn kingside_castle_moves_rook_and_clears_both_rights() {
        let player = set_with(&[
            (PieceKind::King, 4),
            (PieceKind::Rook, 0),
            (PieceKind::Rook, 7),
        ]);
        let opponent = set_with(&[(PieceKind::King, 60)]);
        let out = apply_move(
            &player,
            &opponent,
            Color::Light,
            Move::new(4, 6),
            &AuxState::default(),
        );

        assert_eq!(out.player.piece_on(6), Some(PieceKind::King));
        assert_eq!(out.player.piece_on(5), Some(PieceKind::Rook));
        assert_eq!(out.player.piece_on(7), None);
        assert_eq!(
            out.aux.castling_rights,
            CASTLE_DARK_KINGSIDE | CASTLE_DARK_QUEENSIDE
        );
    }

    #[test]
    fn any_king_step_clears_both_rights() {
        let player = set_with(&[(PieceKind::King, 60)]);
        let opponent = set_with(&[(PieceKind::King, 4)]);
        let out = apply_move(
            &player,
            &opponent,
            Color::Dark,
            Move::new(60, 52),
            &AuxState::default(),
        );

        assert_eq!(
            out.aux.castling_rights,
            CASTLE_LIGHT_KINGSIDE | CASTLE_LIGHT_QUEENSIDE
        );
    }

    #[test]
    fn rook_leaving_home_square_clears_only_its_right() {
        let player = set_with(&[
            (PieceKind::King, 4),
            (PieceKind::Rook, 0),
            (PieceKind::Rook, 7),
        ]);
        let opponent = set_with(&[(PieceKind::King, 60)]);
        let out = apply_move(
            &player,
            &opponent,
            Color::Light,
            Move::new(0, 8),
            &AuxState::default(),
        );

        assert_eq!(out.aux.castling_rights, CASTLE_ALL & !CASTLE_LIGHT_QUEENSIDE);
        assert_eq!(out.player.piece_on(8), Some(PieceKind::Rook));
    }

    #[test]
    fn rook_moving_off_a_non_home_square_keeps_rights() {
        let player = set_with(&[(PieceKind::King, 4), (PieceKind::Rook, 8)]);
        let opponent = set_with(&[(PieceKind::King, 60)]);
        let out = apply_move(
            &player,
            &opponent,
            Color::Light,
            Move::new(8, 0),
            &AuxState::default(),
        );

        assert_eq!(out.aux.castling_rights, CASTLE_ALL);
    }

    #[test]
    fn capturing_rook_on_home_square_clears_opponent_right() {
        let player = set_with(&[(PieceKind::Bishop, 54), (PieceKind::King, 4)]);
        let opponent = set_with(&[(PieceKind::Rook, 63), (PieceKind::King, 60)]);
        let aux = AuxState {
            halfmove_clock: 12,
            ..AuxState::default()
        };
        let out = apply_move(&player, &opponent, Color::Light, Move::new(54, 63), &aux);

        assert_eq!(out.captured, Some(PieceKind::Rook));
        assert_eq!(out.aux.halfmove_clock, 0);
        assert_eq!(out.aux.castling_rights & CASTLE_DARK_KINGSIDE, 0);
        assert_ne!(out.aux.castling_rights & CASTLE_DARK_QUEENSIDE, 0);
    }

    #[test]
    fn underpromotion_replaces_pawn_with_declared_piece() {
        let player = set_with(&[(PieceKind::Pawn, 9), (PieceKind::King, 60)]);
        let opponent = set_with(&[(PieceKind::King, 40)]);
        let out = apply_move(
            &player,
            &opponent,
            Color::Dark,
            Move::promoting(9, 1, Promotion::Knight),
            &AuxState::cleared(),
        );

        assert_eq!(out.player.piece_on(1), Some(PieceKind::Knight));
        assert_eq!(out.player.board(PieceKind::Pawn), 0);
    }
}
