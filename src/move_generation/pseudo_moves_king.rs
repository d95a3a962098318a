use crate::game_state::chess_rules::{castling_rook_squares, king_home_square};
use crate::game_state::chess_types::*;
use crate::game_state::position::PieceSet;
use crate::moves::king_moves::king_attacks;

/// King steps go to `king_moves`; castling candidates go to `castling`.
///
/// Castling candidates only require the right, an empty path between king
/// and rook, and the rook on its original square. Whether the king is in
/// check or crosses an attacked square is left to the legality filter.
pub fn generate_king_moves(
    player: &PieceSet,
    opponent: &PieceSet,
    side: Color,
    castling_rights: CastlingRights,
    king_moves: &mut Vec<Move>,
    castling: &mut Vec<Move>,
) {
    let Some(from) = player.king_square() else {
        return;
    };
    let own_occ = player.occupancy();
    let all_occ = own_occ | opponent.occupancy();

    let mut targets = king_attacks(from) & !own_occ;
    while targets != 0 {
        let to = targets.trailing_zeros() as Square;
        king_moves.push(Move::new(from, to));
        targets &= targets - 1;
    }

    if from != king_home_square(side) {
        return;
    }

    // The square next to the king must be empty: neither ours nor a capture.
    let kingside_step_clear = all_occ & square_bit(from + 1) == 0;
    let queenside_step_clear = all_occ & square_bit(from - 1) == 0;

    if kingside_step_clear && castling_rights & side.kingside_right() != 0 {
        push_castling_candidate(player, all_occ, from, from + 2, castling);
    }
    if queenside_step_clear && castling_rights & side.queenside_right() != 0 {
        push_castling_candidate(player, all_occ, from, from - 2, castling);
    }
}

fn push_castling_candidate(
    player: &PieceSet,
    all_occ: Bitboard,
    king_from: Square,
    king_to: Square,
    out: &mut Vec<Move>,
) {
    let (rook_from, _) = castling_rook_squares(king_from, king_to);
    if player.board(PieceKind::Rook) & square_bit(rook_from) == 0 {
        return;
    }

    let (low, high) = if rook_from > king_from {
        (king_from + 1, rook_from)
    } else {
        (rook_from + 1, king_from)
    };
    let between = (low..high).fold(0u64, |acc, sq| acc | square_bit(sq));
    if all_occ & between == 0 {
        out.push(Move::new(king_from, king_to));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn back_rank(side: Color) -> PieceSet {
        let base = side.back_rank() * 8;
        let mut set = PieceSet::empty();
        set.place(PieceKind::King, base + 4);
        set.place(PieceKind::Rook, base);
        set.place(PieceKind::Rook, base + 7);
        set
    }

    #[test]
    fn both_castling_candidates_with_clear_paths() {
        let player = back_rank(Color::Light);
        let (mut king_moves, mut castling) = (Vec::new(), Vec::new());
        generate_king_moves(
            &player,
            &PieceSet::empty(),
            Color::Light,
            CASTLE_ALL,
            &mut king_moves,
            &mut castling,
        );

        assert_eq!(king_moves.len(), 5);
        assert_eq!(castling, vec![Move::new(4, 6), Move::new(4, 2)]);
    }

    #[test]
    fn blocked_b_file_square_prevents_queenside_candidate() {
        let player = back_rank(Color::Dark);
        let mut opponent = PieceSet::empty();
        opponent.place(PieceKind::Knight, 57);
        let (mut king_moves, mut castling) = (Vec::new(), Vec::new());
        generate_king_moves(
            &player,
            &opponent,
            Color::Dark,
            CASTLE_ALL,
            &mut king_moves,
            &mut castling,
        );

        assert_eq!(castling, vec![Move::new(60, 62)]);
    }

    #[test]
    fn missing_right_or_rook_means_no_candidate() {
        let mut player = back_rank(Color::Light);
        player.remove(PieceKind::Rook, 7);
        let (mut king_moves, mut castling) = (Vec::new(), Vec::new());
        generate_king_moves(
            &player,
            &PieceSet::empty(),
            Color::Light,
            CASTLE_LIGHT_KINGSIDE,
            &mut king_moves,
            &mut castling,
        );

        assert!(castling.is_empty());
    }
}
