//! Move-selection strategy seam.
//!
//! The rules core only produces legal moves; picking one is delegated to an
//! `Engine`. Strategies are selected at runtime behind this trait.

use crate::errors::ChessError;
use crate::game_state::chess_types::Move;
use crate::game_state::game_state::GameState;

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn set_option(&mut self, name: &str, _value: &str) -> Result<(), ChessError> {
        Err(ChessError::UnknownOption(name.to_owned()))
    }

    /// Pick one of `legal_moves` for the side to move in `game_state`.
    ///
    /// Callers must not ask for a move when `legal_moves` is empty;
    /// implementations answer that with `ChessError::NoLegalMoves`.
    fn choose_move(
        &mut self,
        game_state: &GameState,
        legal_moves: &[Move],
    ) -> Result<Move, ChessError>;
}
