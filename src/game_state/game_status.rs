//! Terminal-state evaluation and draw rules.

use crate::game_state::chess_types::*;
use crate::game_state::position::PieceSet;
use crate::move_generation::legal_move_checks::is_in_check;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawReason {
    Stalemate,
    FiftyMoveRule,
    ThreefoldRepetition,
    InsufficientMaterial,
}

/// State of a game after a ply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Checkmate { winner: Color },
    Draw(DrawReason),
}

impl GameStatus {
    #[inline]
    pub fn is_over(self) -> bool {
        self != GameStatus::Ongoing
    }
}

/// Game result from the point of view of the user's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverStatus {
    Draw,
    UserWins,
    OpponentWins,
}

/// Result for a side with no legal moves: checkmate if its king is attacked,
/// stalemate otherwise.
///
/// Only meaningful when `side` has no legal moves.
pub fn game_over_status(
    player: &PieceSet,
    opponent: &PieceSet,
    side: Color,
    is_users_move: bool,
) -> GameOverStatus {
    if !is_in_check(player, opponent, side) {
        return GameOverStatus::Draw;
    }
    if is_users_move {
        GameOverStatus::OpponentWins
    } else {
        GameOverStatus::UserWins
    }
}

/// Checkmate, stalemate or ongoing, from the legal moves of `side`.
pub fn terminal_status(
    player: &PieceSet,
    opponent: &PieceSet,
    side: Color,
    legal_moves: &[Move],
) -> GameStatus {
    if !legal_moves.is_empty() {
        return GameStatus::Ongoing;
    }
    if is_in_check(player, opponent, side) {
        GameStatus::Checkmate {
            winner: side.opposite(),
        }
    } else {
        GameStatus::Draw(DrawReason::Stalemate)
    }
}

/// Neither side can possibly deliver mate.
///
/// No pawn, rook or queen may remain. Then at most one minor piece in total
/// is insufficient, and so are exactly two bishops standing on the same
/// square colour, whoever owns them. Every other pair of minors is not.
pub fn draw_by_insufficient_material(side_a: &PieceSet, side_b: &PieceSet) -> bool {
    let heavy = [PieceKind::Pawn, PieceKind::Rook, PieceKind::Queen];
    if heavy
        .iter()
        .any(|&piece| side_a.board(piece) | side_b.board(piece) != 0)
    {
        return false;
    }

    let bishops = side_a.board(PieceKind::Bishop) | side_b.board(PieceKind::Bishop);
    let knights = side_a.board(PieceKind::Knight) | side_b.board(PieceKind::Knight);
    let minors = bishops.count_ones() + knights.count_ones();

    match minors {
        0 | 1 => true,
        2 if knights == 0 => {
            let first = bishops.trailing_zeros() as Square;
            let second = (63 - bishops.leading_zeros()) as Square;
            square_color(first) == square_color(second)
        }
        _ => false,
    }
}

/// `0` for dark squares, `1` for light squares.
#[inline]
pub const fn square_color(square: Square) -> u8 {
    (rank_of(square) + file_of(square)) % 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::position::AuxState;
    use crate::move_generation::legal_move_generator::find_legal_moves;

    fn set_with(pieces: &[(PieceKind, Square)]) -> PieceSet {
        let mut set = PieceSet::empty();
        for &(piece, sq) in pieces {
            set.place(piece, sq);
        }
        set
    }

    #[test]
    fn insufficient_material_cases() {
        let lone_light = set_with(&[(PieceKind::King, 4)]);
        let lone_dark = set_with(&[(PieceKind::King, 60)]);
        assert!(draw_by_insufficient_material(&lone_light, &lone_dark));

        let knight = set_with(&[(PieceKind::King, 4), (PieceKind::Knight, 1)]);
        assert!(draw_by_insufficient_material(&knight, &lone_dark));

        // c1 and f8 are both dark squares; c1 and c8 differ.
        let bishop_c1 = set_with(&[(PieceKind::King, 4), (PieceKind::Bishop, 2)]);
        let bishop_f8 = set_with(&[(PieceKind::King, 60), (PieceKind::Bishop, 61)]);
        let bishop_c8 = set_with(&[(PieceKind::King, 60), (PieceKind::Bishop, 58)]);
        assert!(draw_by_insufficient_material(&bishop_c1, &bishop_f8));
        assert!(!draw_by_insufficient_material(&bishop_c1, &bishop_c8));

        let two_same_bishops = set_with(&[
            (PieceKind::King, 4),
            (PieceKind::Bishop, 2),
            (PieceKind::Bishop, 9),
        ]);
        assert!(draw_by_insufficient_material(&two_same_bishops, &lone_dark));

        let two_knights = set_with(&[
            (PieceKind::King, 4),
            (PieceKind::Knight, 1),
            (PieceKind::Knight, 6),
        ]);
        assert!(!draw_by_insufficient_material(&two_knights, &lone_dark));
        assert!(!draw_by_insufficient_material(&knight, &bishop_f8));

        let pawn = set_with(&[(PieceKind::King, 4), (PieceKind::Pawn, 12)]);
        let rook = set_with(&[(PieceKind::King, 4), (PieceKind::Rook, 0)]);
        let queen = set_with(&[(PieceKind::King, 4), (PieceKind::Queen, 3)]);
        assert!(!draw_by_insufficient_material(&pawn, &lone_dark));
        assert!(!draw_by_insufficient_material(&lone_light, &rook));
        assert!(!draw_by_insufficient_material(&queen, &lone_dark));
    }

    #[test]
    fn mate_and_the_stalemate_left_when_the_checker_is_removed() {
        // Dark king h8; light queen g6 covers g8, g7 and h7; light rook a8 checks.
        let dark = set_with(&[(PieceKind::King, 63)]);
        let light = set_with(&[
            (PieceKind::King, 4),
            (PieceKind::Queen, 46),
            (PieceKind::Rook, 56),
        ]);
        let aux = AuxState::cleared();
        let legal = find_legal_moves(&dark, &light, Color::Dark, &aux);
        assert!(legal.is_empty());
        assert_eq!(
            game_over_status(&dark, &light, Color::Dark, false),
            GameOverStatus::UserWins
        );
        assert_eq!(
            game_over_status(&dark, &light, Color::Dark, true),
            GameOverStatus::OpponentWins
        );
        assert_eq!(
            terminal_status(&dark, &light, Color::Dark, &legal),
            GameStatus::Checkmate {
                winner: Color::Light
            }
        );

        let mut light_without_rook = light;
        light_without_rook.remove(PieceKind::Rook, 56);
        let legal = find_legal_moves(&dark, &light_without_rook, Color::Dark, &aux);
        assert!(legal.is_empty());
        assert_eq!(
            game_over_status(&dark, &light_without_rook, Color::Dark, false),
            GameOverStatus::Draw
        );
        assert_eq!(
            terminal_status(&dark, &light_without_rook, Color::Dark, &legal),
            GameStatus::Draw(DrawReason::Stalemate)
        );
    }

    #[test]
    fn legal_moves_mean_the_game_goes_on() {
        let light = PieceSet::starting(Color::Light);
        let dark = PieceSet::starting(Color::Dark);
        let legal = find_legal_moves(&light, &dark, Color::Light, &AuxState::default());
        assert_eq!(
            terminal_status(&light, &dark, Color::Light, &legal),
            GameStatus::Ongoing
        );
    }
}
