use crate::game_state::chess_types::*;
use crate::game_state::position::PieceSet;
use crate::moves::knight_moves::knight_attacks;

pub fn generate_knight_moves(player: &PieceSet, out: &mut Vec<Move>) {
    let own_occ = player.occupancy();

    let mut knights = player.board(PieceKind::Knight);
    while knights != 0 {
        let from = knights.trailing_zeros() as Square;
        let mut targets = knight_attacks(from) & !own_occ;

        while targets != 0 {
            let to = targets.trailing_zeros() as Square;
            out.push(Move::new(from, to));
            targets &= targets - 1;
        }

        knights &= knights - 1;
    }
}
