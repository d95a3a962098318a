//! Game controller.
//!
//! `GameState` owns the single mutable thread of a game: both piece sets, the
//! side to move, the auxiliary state (castling rights, en passant, halfmove
//! clock) and the repetition table. Every position it hands out is a copy, so
//! callers may keep old snapshots for undo or analysis.

use log::{debug, info};

use crate::errors::ChessError;
use crate::game_state::chess_types::*;
use crate::game_state::game_options::GameOptions;
use crate::game_state::game_status::{
    draw_by_insufficient_material, terminal_status, DrawReason, GameOverStatus, GameStatus,
};
use crate::game_state::position::{AuxState, PieceSet};
use crate::game_state::repetition::RepetitionTable;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_generator::find_legal_moves;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone)]
pub struct GameState {
    /// Piece sets indexed by `Color::index()`.
    pieces: [PieceSet; 2],
    side_to_move: Color,
    aux: AuxState,
    fullmove_number: u16,
    ply: u16,
    options: GameOptions,
    repetitions: RepetitionTable,
    threefold_repetition: bool,
    legal_moves: Vec<Move>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    #[inline]
    pub fn new_game() -> Self {
        Self::with_options(GameOptions::default())
    }

    pub fn with_options(options: GameOptions) -> Self {
        Self::from_parts(
            [
                PieceSet::starting(Color::Light),
                PieceSet::starting(Color::Dark),
            ],
            Color::Light,
            AuxState::default(),
            1,
            options,
        )
    }

    /// Build a game from an arbitrary setup. The setup counts as the first
    /// occurrence of its position.
    pub fn from_parts(
        pieces: [PieceSet; 2],
        side_to_move: Color,
        aux: AuxState,
        fullmove_number: u16,
        options: GameOptions,
    ) -> Self {
        let mut game = Self {
            pieces,
            side_to_move,
            aux,
            fullmove_number,
            ply: 0,
            repetitions: RepetitionTable::with_limit(options.repetition_limit),
            options,
            threefold_repetition: false,
            legal_moves: Vec::new(),
        };
        game.refresh_position();
        game
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, ChessError> {
        parse_fen(fen, GameOptions::default())
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn pieces(&self) -> &[PieceSet; 2] {
        &self.pieces
    }

    #[inline]
    pub fn pieces_of(&self, color: Color) -> &PieceSet {
        &self.pieces[color.index()]
    }

    /// Pieces of the side to move.
    #[inline]
    pub fn player(&self) -> &PieceSet {
        self.pieces_of(self.side_to_move)
    }

    /// Pieces of the side not to move.
    #[inline]
    pub fn opponent(&self) -> &PieceSet {
        self.pieces_of(self.side_to_move.opposite())
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn aux(&self) -> &AuxState {
        &self.aux
    }

    #[inline]
    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    #[inline]
    pub fn ply(&self) -> u16 {
        self.ply
    }

    #[inline]
    pub fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Legal moves of the side to move, computed once per position.
    #[inline]
    pub fn legal_moves(&self) -> &[Move] {
        &self.legal_moves
    }

    pub fn is_in_check(&self) -> bool {
        is_in_check(self.player(), self.opponent(), self.side_to_move)
    }

    pub fn is_fifty_move_draw(&self) -> bool {
        self.aux.halfmove_clock >= self.options.halfmove_draw_limit
    }

    pub fn is_threefold_repetition(&self) -> bool {
        self.threefold_repetition
    }

    pub fn is_insufficient_material(&self) -> bool {
        draw_by_insufficient_material(&self.pieces[0], &self.pieces[1])
    }

    /// Checkmate and stalemate take precedence over the automatic draws.
    pub fn status(&self) -> GameStatus {
        let terminal = terminal_status(
            self.player(),
            self.opponent(),
            self.side_to_move,
            &self.legal_moves,
        );
        if terminal.is_over() {
            terminal
        } else if self.is_insufficient_material() {
            GameStatus::Draw(DrawReason::InsufficientMaterial)
        } else if self.is_fifty_move_draw() {
            GameStatus::Draw(DrawReason::FiftyMoveRule)
        } else if self.threefold_repetition {
            GameStatus::Draw(DrawReason::ThreefoldRepetition)
        } else {
            GameStatus::Ongoing
        }
    }

    /// The result seen from the user's side, `None` while the game goes on.
    pub fn game_over_status(&self) -> Option<GameOverStatus> {
        match self.status() {
            GameStatus::Ongoing => None,
            GameStatus::Draw(_) => Some(GameOverStatus::Draw),
            GameStatus::Checkmate { winner } if winner == self.options.user_color => {
                Some(GameOverStatus::UserWins)
            }
            GameStatus::Checkmate { .. } => Some(GameOverStatus::OpponentWins),
        }
    }

    /// Play `mv` for the side to move and return the resulting status.
    pub fn play_move(&mut self, mv: Move) -> Result<GameStatus, ChessError> {
        let status = self.status();
        if status.is_over() {
            return Err(ChessError::GameOver(status));
        }
        if !self.legal_moves.contains(&mv) {
            return Err(ChessError::IllegalMove(mv));
        }

        let side = self.side_to_move;
        let applied = apply_move(self.player(), self.opponent(), side, mv, &self.aux);
        debug!(
            "{side} plays {mv}{}",
            applied
                .captured
                .map(|piece| format!(" capturing {piece:?}"))
                .unwrap_or_default()
        );

        self.pieces[side.index()] = applied.player;
        self.pieces[side.opposite().index()] = applied.opponent;
        self.aux = applied.aux;
        if side == Color::Dark {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }
        self.side_to_move = side.opposite();
        self.ply = self.ply.saturating_add(1);
        self.refresh_position();

        let status = self.status();
        if status.is_over() {
            info!("game over after ply {}: {status:?}", self.ply);
        }
        Ok(status)
    }

    fn refresh_position(&mut self) {
        self.legal_moves = find_legal_moves(
            self.player(),
            self.opponent(),
            self.side_to_move,
            &self.aux,
        );
        if self.repetitions.update_repetition_count(
            &self.pieces,
            self.side_to_move,
            &self.aux,
            &self.legal_moves,
        ) {
            if !self.threefold_repetition {
                info!("position repeated {} times", self.options.repetition_limit);
            }
            self.threefold_repetition = true;
        }
    }
}
