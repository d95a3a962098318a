//! Long algebraic move notation (`e2e4`, `e7e8q`).
//!
//! Parsing only checks the notation itself. Whether the move is legal is
//! decided by looking it up in the legal move list.

use crate::errors::ChessError;
use crate::game_state::chess_types::{Move, Promotion};
use crate::utils::algebraic::algebraic_to_square;

pub fn long_algebraic_to_move(long_algebraic: &str) -> Result<Move, ChessError> {
    let text = long_algebraic.trim();
    if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
        return Err(ChessError::InvalidMoveNotation(long_algebraic.to_owned()));
    }

    let from = algebraic_to_square(&text[0..2])?;
    let to = algebraic_to_square(&text[2..4])?;
    let promotion = text[4..]
        .chars()
        .next()
        .map(Promotion::try_from)
        .transpose()?;

    if from == to {
        return Err(ChessError::InvalidMoveNotation(long_algebraic.to_owned()));
    }

    Ok(Move {
        from,
        to,
        promotion,
    })
}

#[inline]
pub fn move_to_long_algebraic(mv: Move) -> String {
    mv.to_string()
}
