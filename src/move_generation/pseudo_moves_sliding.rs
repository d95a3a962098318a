use crate::game_state::chess_types::*;
use crate::game_state::position::PieceSet;
use crate::moves::sliding_moves::{
    sliding_targets, BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS,
};

/// Rook, bishop and queen moves of `player`.
pub fn generate_sliding_moves(player: &PieceSet, opponent: &PieceSet, out: &mut Vec<Move>) {
    let own_occ = player.occupancy();
    let enemy_occ = opponent.occupancy();

    for (piece, directions) in [
        (PieceKind::Rook, &ROOK_DIRECTIONS[..]),
        (PieceKind::Bishop, &BISHOP_DIRECTIONS[..]),
        (PieceKind::Queen, &QUEEN_DIRECTIONS[..]),
    ] {
        let mut sliders = player.board(piece);
        while sliders != 0 {
            let from = sliders.trailing_zeros() as Square;
            let mut targets = sliding_targets(from, directions, own_occ, enemy_occ);

            while targets != 0 {
                let to = targets.trailing_zeros() as Square;
                out.push(Move::new(from, to));
                targets &= targets - 1;
            }

            sliders &= sliders - 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queen_in_corner_of_empty_board_has_twenty_one_moves() {
        let mut player = PieceSet::empty();
        player.place(PieceKind::Queen, 0);
        let mut out = Vec::new();
        generate_sliding_moves(&player, &PieceSet::empty(), &mut out);
        assert_eq!(out.len(), 21);
    }

    #[test]
    fn capture_ends_the_ray() {
        let mut player = PieceSet::empty();
        player.place(PieceKind::Bishop, 2);
        let mut opponent = PieceSet::empty();
        opponent.place(PieceKind::Pawn, 20);
        let mut out = Vec::new();
        generate_sliding_moves(&player, &opponent, &mut out);

        assert!(out.contains(&Move::new(2, 20)));
        assert!(!out.contains(&Move::new(2, 29)));
        // b2, a3 on the other diagonal.
        assert_eq!(out.len(), 4);
    }
}
