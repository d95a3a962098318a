use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::game_state::position::PieceSet;
use crate::utils::algebraic::square_to_algebraic;

pub fn generate_fen(game_state: &GameState) -> String {
    let aux = game_state.aux();
    let side_to_move = match game_state.side_to_move() {
        Color::Light => "w",
        Color::Dark => "b",
    };
    let en_passant = aux
        .en_passant_target()
        .and_then(|sq| square_to_algebraic(sq).ok())
        .unwrap_or_else(|| "-".to_owned());

    format!(
        "{} {} {} {} {} {}",
        generate_board_field(game_state.pieces()),
        side_to_move,
        generate_castling_field(aux.castling_rights),
        en_passant,
        aux.halfmove_clock,
        game_state.fullmove_number()
    )
}

fn generate_board_field(pieces: &[PieceSet; 2]) -> String {
    let mut out = String::new();

    for rank in (0..8u8).rev() {
        let mut empty_count = 0u8;

        for file in 0..8u8 {
            match piece_fen_char(pieces, rank * 8 + file) {
                Some(ch) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(ch);
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }
        if rank > 0 {
            out.push('/');
        }
    }

    out
}

fn piece_fen_char(pieces: &[PieceSet; 2], square: Square) -> Option<char> {
    [Color::Light, Color::Dark].into_iter().find_map(|color| {
        pieces[color.index()].piece_on(square).map(|piece| {
            let ch = match piece {
                PieceKind::Pawn => 'p',
                PieceKind::Rook => 'r',
                PieceKind::Knight => 'n',
                PieceKind::Bishop => 'b',
                PieceKind::Queen => 'q',
                PieceKind::King => 'k',
            };
            match color {
                Color::Light => ch.to_ascii_uppercase(),
                Color::Dark => ch,
            }
        })
    })
}

fn generate_castling_field(rights: CastlingRights) -> String {
    let out: String = [
        (CASTLE_LIGHT_KINGSIDE, 'K'),
        (CASTLE_LIGHT_QUEENSIDE, 'Q'),
        (CASTLE_DARK_KINGSIDE, 'k'),
        (CASTLE_DARK_QUEENSIDE, 'q'),
    ]
    .into_iter()
    .filter(|(right, _)| rights & right != 0)
    .map(|(_, ch)| ch)
    .collect();

    if out.is_empty() {
        "-".to_owned()
    } else {
        out
    }
}
