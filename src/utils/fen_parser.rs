//! FEN-to-GameState parser.
//!
//! Builds a game from a Forsyth-Edwards Notation string: piece sets, side to
//! move, castling rights, en-passant state and both clocks. FEN only names
//! the en-passant target; the square of the pawn to remove is derived from it.

use crate::errors::ChessError;
use crate::game_state::chess_types::*;
use crate::game_state::game_options::GameOptions;
use crate::game_state::game_state::GameState;
use crate::game_state::position::{AuxState, EnPassant, PieceSet};
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str, options: GameOptions) -> Result<GameState, ChessError> {
    let invalid = |msg: &str| ChessError::InvalidFen(format!("{msg}: {fen}"));
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side to move"))?;
    let castling_part = parts.next().ok_or_else(|| invalid("missing castling rights"))?;
    let en_passant_part = parts.next().ok_or_else(|| invalid("missing en-passant square"))?;
    let halfmove_part = parts.next().ok_or_else(|| invalid("missing halfmove clock"))?;
    let fullmove_part = parts.next().ok_or_else(|| invalid("missing fullmove number"))?;

    if parts.next().is_some() {
        return Err(invalid("extra trailing fields"));
    }

    let pieces = parse_board(board_part)?;
    let side_to_move = match side_part {
        "w" => Color::Light,
        "b" => Color::Dark,
        _ => return Err(invalid("invalid side to move")),
    };
    let castling_rights = parse_castling_rights(castling_part)?;
    let en_passant = parse_en_passant(en_passant_part, side_to_move, &pieces)?;
    let halfmove_clock = halfmove_part
        .parse::<u16>()
        .map_err(|_| invalid("invalid halfmove clock"))?;
    let fullmove_number = fullmove_part
        .parse::<u16>()
        .map_err(|_| invalid("invalid fullmove number"))?;

    Ok(GameState::from_parts(
        pieces,
        side_to_move,
        AuxState {
            castling_rights,
            en_passant,
            halfmove_clock,
        },
        fullmove_number,
        options,
    ))
}

fn parse_board(board_part: &str) -> Result<[PieceSet; 2], ChessError> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessError::InvalidFen(
            "board layout must contain 8 ranks".to_owned(),
        ));
    }

    let mut pieces = [PieceSet::empty(), PieceSet::empty()];

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let board_rank = 7 - fen_rank_idx;
        let mut file = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessError::InvalidFen(format!(
                        "invalid empty-square count '{ch}'"
                    )));
                }
                file += empty_count as usize;
                continue;
            }

            let (color, piece) = piece_from_fen_char(ch).ok_or_else(|| {
                ChessError::InvalidFen(format!("invalid piece character '{ch}'"))
            })?;

            if file >= 8 {
                return Err(ChessError::InvalidFen(format!(
                    "rank '{rank_str}' has too many files"
                )));
            }

            pieces[color.index()].place(piece, (board_rank * 8 + file) as Square);
            file += 1;
        }

        if file != 8 {
            return Err(ChessError::InvalidFen(format!(
                "rank '{rank_str}' does not sum to 8 files"
            )));
        }
    }

    Ok(pieces)
}

fn parse_castling_rights(castling_part: &str) -> Result<CastlingRights, ChessError> {
    if castling_part == "-" {
        return Ok(0);
    }

    castling_part.chars().try_fold(0, |rights, ch| {
        let right = match ch {
            'K' => CASTLE_LIGHT_KINGSIDE,
            'Q' => CASTLE_LIGHT_QUEENSIDE,
            'k' => CASTLE_DARK_KINGSIDE,
            'q' => CASTLE_DARK_QUEENSIDE,
            _ => {
                return Err(ChessError::InvalidFen(format!(
                    "invalid castling rights character '{ch}'"
                )))
            }
        };
        Ok(rights | right)
    })
}

/// The target must sit behind a pawn of the side that just moved, with the
/// target and that pawn's start square both empty.
fn parse_en_passant(
    en_passant_part: &str,
    side_to_move: Color,
    pieces: &[PieceSet; 2],
) -> Result<Option<EnPassant>, ChessError> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let target = algebraic_to_square(en_passant_part)?;
    let invalid = |reason: &str| {
        ChessError::InvalidFen(format!("en-passant square {en_passant_part}: {reason}"))
    };

    // Targets on rank 3 or 6 always have both neighbours on the board.
    let (expected_rank, captured, start) = match side_to_move {
        Color::Light => (5, target.wrapping_sub(8), target.wrapping_add(8)),
        Color::Dark => (2, target.wrapping_add(8), target.wrapping_sub(8)),
    };
    if rank_of(target) != expected_rank {
        return Err(invalid("wrong rank for the side to move"));
    }

    let pusher = &pieces[side_to_move.opposite().index()];
    if pusher.board(PieceKind::Pawn) & square_bit(captured) == 0 {
        return Err(invalid("no double-pushed pawn to capture"));
    }

    let occupied = pieces[0].occupancy() | pieces[1].occupancy();
    if occupied & (square_bit(target) | square_bit(start)) != 0 {
        return Err(invalid("target or pawn start square is occupied"));
    }

    Ok(Some(EnPassant { target, captured }))
}

fn piece_from_fen_char(ch: char) -> Option<(Color, PieceKind)> {
    let color = if ch.is_ascii_uppercase() {
        Color::Light
    } else if ch.is_ascii_lowercase() {
        Color::Dark
    } else {
        return None;
    };

    let piece = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'r' => PieceKind::Rook,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some((color, piece))
}
