//! Per-game configuration.
//!
//! Options are set by name/value pairs, the same way a UCI front end forwards
//! `setoption name <name> value <value>`.

use crate::errors::ChessError;
use crate::game_state::chess_rules::{HALFMOVE_DRAW_LIMIT, REPETITION_DRAW_LIMIT};
use crate::game_state::chess_types::Color;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Side played by the user; decides who "wins" in `GameOverStatus`.
    pub user_color: Color,
    /// Halfmove clock value that ends the game in a draw.
    pub halfmove_draw_limit: u16,
    /// Occurrences of one position that end the game in a draw.
    pub repetition_limit: u8,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            user_color: Color::Light,
            halfmove_draw_limit: HALFMOVE_DRAW_LIMIT,
            repetition_limit: REPETITION_DRAW_LIMIT,
        }
    }
}

impl GameOptions {
    pub fn set_option(&mut self, name: &str, value: &str) -> Result<(), ChessError> {
        let invalid = || ChessError::InvalidOptionValue {
            name: name.to_owned(),
            value: value.to_owned(),
        };

        match name.trim().to_ascii_lowercase().as_str() {
            "usercolor" | "user_color" => {
                self.user_color = match value.trim().to_ascii_lowercase().as_str() {
                    "white" | "w" | "light" => Color::Light,
                    "black" | "b" | "dark" => Color::Dark,
                    _ => return Err(invalid()),
                };
            }
            "halfmovedrawlimit" | "halfmove_draw_limit" => {
                self.halfmove_draw_limit = value
                    .trim()
                    .parse::<u16>()
                    .ok()
                    .filter(|limit| *limit > 0)
                    .ok_or_else(invalid)?;
            }
            "repetitionlimit" | "repetition_limit" => {
                self.repetition_limit = value
                    .trim()
                    .parse::<u8>()
                    .ok()
                    .filter(|limit| *limit > 0)
                    .ok_or_else(invalid)?;
            }
            _ => return Err(ChessError::UnknownOption(name.to_owned())),
        }

        Ok(())
    }
}
