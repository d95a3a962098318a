use crate::game_state::chess_types::*;
use crate::game_state::position::{EnPassant, PieceSet};
use crate::moves::pawn_moves::{pawn_attacks, pawn_forward};
use crate::moves::square_offsets::offset_square;

/// Pseudo-legal pawn moves for `side`.
///
/// Forward pushes go to `pushes`; diagonal captures and en-passant captures go
/// to `captures`. Any move landing on the promotion rank is expanded into all
/// four promotion variants.
pub fn generate_pawn_moves(
    player: &PieceSet,
    opponent: &PieceSet,
    side: Color,
    en_passant: Option<EnPassant>,
    pushes: &mut Vec<Move>,
    captures: &mut Vec<Move>,
) {
    let enemy_occ = opponent.occupancy();
    let empty = !(player.occupancy() | enemy_occ);
    let forward = pawn_forward(side);
    let ep_target = en_passant.map(|ep| ep.target);

    let mut pawns = player.board(PieceKind::Pawn);
    while pawns != 0 {
        let from = pawns.trailing_zeros() as Square;

        if let Some(one_step) = offset_square(from, 0, forward) {
            if square_bit(one_step) & empty != 0 {
                push_pawn_move(pushes, side, from, one_step);

                if rank_of(from) == side.pawn_start_rank() {
                    if let Some(two_step) = offset_square(one_step, 0, forward) {
                        if square_bit(two_step) & empty != 0 {
                            pushes.push(Move::new(from, two_step));
                        }
                    }
                }
            }
        }

        let mut attacks = pawn_attacks(side, from);
        while attacks != 0 {
            let to = attacks.trailing_zeros() as Square;
            if square_bit(to) & enemy_occ != 0 {
                push_pawn_move(captures, side, from, to);
            } else if ep_target == Some(to) {
                captures.push(Move::new(from, to));
            }
            attacks &= attacks - 1;
        }

        pawns &= pawns - 1;
    }
}

fn push_pawn_move(out: &mut Vec<Move>, side: Color, from: Square, to: Square) {
    if rank_of(to) == side.promotion_rank() {
        out.extend(
            Promotion::ALL
                .into_iter()
                .map(|promotion| Move::promoting(from, to, promotion)),
        );
    } else {
        out.push(Move::new(from, to));
    }
}
