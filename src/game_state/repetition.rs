//! Repetition tracking.
//!
//! Counts occurrences of normalized positions. The key is the exact position
//! signature, so two different positions never share a count. The en-passant
//! target only takes part in the key when the side to move can legally use it.

use std::collections::HashMap;

use crate::game_state::chess_rules::REPETITION_DRAW_LIMIT;
use crate::game_state::chess_types::*;
use crate::game_state::position::{AuxState, PieceSet};

/// Normalized signature of a position for repetition purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionKey {
    /// Piece sets indexed by `Color::index()`.
    pub pieces: [PieceSet; 2],
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    /// Only set when an en-passant capture is legal.
    pub en_passant: Option<Square>,
}

impl PositionKey {
    /// Key of a position whose side to move has `legal_moves`.
    pub fn new(
        pieces: &[PieceSet; 2],
        side_to_move: Color,
        aux: &AuxState,
        legal_moves: &[Move],
    ) -> Self {
        Self {
            pieces: *pieces,
            side_to_move,
            castling_rights: aux.castling_rights,
            en_passant: usable_en_passant_target(
                &pieces[side_to_move.index()],
                aux,
                legal_moves,
            ),
        }
    }
}

/// En-passant target worth keying on: some legal move is a pawn capture onto it.
pub fn usable_en_passant_target(
    player: &PieceSet,
    aux: &AuxState,
    legal_moves: &[Move],
) -> Option<Square> {
    let target = aux.en_passant_target()?;
    let pawns = player.board(PieceKind::Pawn);
    legal_moves
        .iter()
        .any(|mv| mv.to == target && pawns & square_bit(mv.from) != 0)
        .then_some(target)
}

#[derive(Debug, Clone)]
pub struct RepetitionTable {
    counts: HashMap<PositionKey, u8>,
    limit: u8,
}

impl Default for RepetitionTable {
    fn default() -> Self {
        Self::with_limit(REPETITION_DRAW_LIMIT)
    }
}

impl RepetitionTable {
    pub fn with_limit(limit: u8) -> Self {
        Self {
            counts: HashMap::new(),
            limit,
        }
    }

    /// Record one occurrence of `key`. True once the key reaches the limit.
    pub fn record(&mut self, key: PositionKey) -> bool {
        let count = self.counts.entry(key).or_insert(0);
        *count = count.saturating_add(1);
        *count >= self.limit
    }

    pub fn count(&self, key: &PositionKey) -> u8 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Key the position and record it. True signals the repetition draw.
    ///
    /// `pieces` is indexed by `Color::index()`; `legal_moves` are the moves
    /// of `side_to_move` in this position.
    pub fn update_repetition_count(
        &mut self,
        pieces: &[PieceSet; 2],
        side_to_move: Color,
        aux: &AuxState,
        legal_moves: &[Move],
    ) -> bool {
        self.record(PositionKey::new(pieces, side_to_move, aux, legal_moves))
    }
}
