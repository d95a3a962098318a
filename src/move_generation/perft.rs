//! Move-path enumeration (perft) for validating move generation.
//!
//! Counts leaf nodes of the legal move tree to a fixed depth, with per-leaf
//! tallies of captures, en-passant captures, castles and promotions. The
//! reference node counts for the standard test positions are well known, so
//! any disagreement pinpoints a move generation bug.

use std::thread;

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::game_state::position::{AuxState, PieceSet};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::find_legal_moves;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
    }
}

/// Perft from the current position of `game_state`.
pub fn perft(game_state: &GameState, depth: u8) -> PerftCounts {
    perft_from(
        game_state.player(),
        game_state.opponent(),
        game_state.side_to_move(),
        game_state.aux(),
        depth,
    )
}

pub fn perft_from(
    player: &PieceSet,
    opponent: &PieceSet,
    side: Color,
    aux: &AuxState,
    depth: u8,
) -> PerftCounts {
    let mut counts = PerftCounts::default();
    if depth == 0 {
        counts.nodes = 1;
        return counts;
    }
    perft_recurse(player, opponent, side, aux, depth, &mut counts);
    counts
}

/// Same counts as `perft`, with one worker thread per root move.
pub fn perft_multi_threaded(game_state: &GameState, depth: u8) -> PerftCounts {
    if depth <= 1 {
        return perft(game_state, depth);
    }

    let side = game_state.side_to_move();
    let (player, opponent, aux) = (*game_state.player(), *game_state.opponent(), *game_state.aux());

    thread::scope(|scope| {
        let handles: Vec<_> = game_state
            .legal_moves()
            .iter()
            .map(|&mv| {
                scope.spawn(move || {
                    let next = apply_move(&player, &opponent, side, mv, &aux);
                    perft_from(&next.opponent, &next.player, side.opposite(), &next.aux, depth - 1)
                })
            })
            .collect();

        let mut total = PerftCounts::default();
        for handle in handles {
            match handle.join() {
                Ok(counts) => total.merge(counts),
                Err(panic) => std::panic::resume_unwind(panic),
            }
        }
        total
    })
}

fn perft_recurse(
    player: &PieceSet,
    opponent: &PieceSet,
    side: Color,
    aux: &AuxState,
    depth: u8,
    counts: &mut PerftCounts,
) {
    let moves = find_legal_moves(player, opponent, side, aux);

    if depth == 1 {
        for mv in moves {
            let moved = player.piece_on(mv.from);
            counts.nodes += 1;
            if opponent.is_occupied(mv.to) {
                counts.captures += 1;
            } else if moved == Some(PieceKind::Pawn) && file_of(mv.from) != file_of(mv.to) {
                counts.captures += 1;
                counts.en_passant += 1;
            }
            if moved == Some(PieceKind::King) && mv.from.abs_diff(mv.to) == 2 {
                counts.castles += 1;
            }
            if mv.promotion.is_some() {
                counts.promotions += 1;
            }
        }
        return;
    }

    for mv in moves {
        let next = apply_move(player, opponent, side, mv, aux);
        perft_recurse(
            &next.opponent,
            &next.player,
            side.opposite(),
            &next.aux,
            depth - 1,
            counts,
        );
    }
}
