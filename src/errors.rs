//! Crate-wide error type.
//!
//! Move generation, move application and terminal evaluation never fail:
//! their "failures" are plain data (an empty move list, a draw flag, a status
//! value). `ChessError` covers the boundary only: parsing notation and FEN,
//! options, and playing a move through the game controller.

use thiserror::Error;

use crate::game_state::chess_types::Move;
use crate::game_state::game_status::GameStatus;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    #[error("invalid algebraic square: {0}")]
    InvalidSquare(String),

    #[error("invalid promotion piece: '{0}'")]
    InvalidPromotion(char),

    #[error("invalid long algebraic move: {0}")]
    InvalidMoveNotation(String),

    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    #[error("illegal move: {0}")]
    IllegalMove(Move),

    #[error("game is already over: {0:?}")]
    GameOver(GameStatus),

    #[error("no legal moves to choose from")]
    NoLegalMoves,

    #[error("unknown option: {0}")]
    UnknownOption(String),

    #[error("invalid value '{value}' for option {name}")]
    InvalidOptionValue { name: String, value: String },
}
