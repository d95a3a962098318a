//! Uniform random-move engine.
//!
//! Picks any legal move with equal probability. Used to drive whole games
//! through the rules core in tests.

use log::debug;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use crate::engines::engine_trait::Engine;
use crate::errors::ChessError;
use crate::game_state::chess_types::Move;
use crate::game_state::game_state::GameState;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic engine, for reproducible test games.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Random"
    }

    fn set_option(&mut self, name: &str, value: &str) -> Result<(), ChessError> {
        if !name.trim().eq_ignore_ascii_case("seed") {
            return Err(ChessError::UnknownOption(name.to_owned()));
        }
        let seed = value
            .trim()
            .parse::<u64>()
            .map_err(|_| ChessError::InvalidOptionValue {
                name: name.to_owned(),
                value: value.to_owned(),
            })?;
        self.rng = StdRng::seed_from_u64(seed);
        Ok(())
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        legal_moves: &[Move],
    ) -> Result<Move, ChessError> {
        let picked = *legal_moves
            .choose(&mut self.rng)
            .ok_or(ChessError::NoLegalMoves)?;
        debug!(
            "random engine picked {picked} out of {} moves at ply {}",
            legal_moves.len(),
            game_state.ply()
        );
        Ok(picked)
    }
}
