use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use bitboard_chess::engines::engine_random::RandomEngine;
use bitboard_chess::engines::engine_trait::Engine;
use bitboard_chess::game_state::game_state::GameState;
use bitboard_chess::move_generation::legal_move_generator::find_legal_moves;
use bitboard_chess::move_generation::perft::{perft, perft_multi_threaded};

/// (label, FEN, perft depth, expected leaf nodes at that depth)
const POSITIONS: &[(&str, &str, u8, usize)] = &[
    (
        "startpos",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        3,
        8902,
    ),
    (
        "kiwipete",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        2,
        2039,
    ),
    ("endgame_pins", "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1", 3, 2812),
    (
        "promotions",
        "r2q1rk1/pP1p2pp/Q4n2/bbp1p3/Np6/1B3NBn/pPPP1PPP/R3K2R b KQ - 0 1",
        2,
        264,
    ),
];

fn load(fen: &str) -> GameState {
    GameState::from_fen(fen).expect("benchmark FEN should parse")
}

fn bench_legal_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("legal_moves");

    for &(label, fen, _, _) in POSITIONS {
        let game = load(fen);
        group.bench_function(label, |b| {
            b.iter(|| {
                find_legal_moves(
                    black_box(game.player()),
                    black_box(game.opponent()),
                    game.side_to_move(),
                    black_box(game.aux()),
                )
            })
        });
    }

    group.finish();
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");
    group.sample_size(10);

    for &(label, fen, depth, expected) in POSITIONS {
        let game = load(fen);
        // Timing a wrong move generator is pointless.
        assert_eq!(perft(&game, depth).nodes, expected, "{label} depth {depth}");

        group.throughput(Throughput::Elements(expected as u64));
        group.bench_with_input(BenchmarkId::new("single", label), &depth, |b, &depth| {
            b.iter(|| perft(black_box(&game), depth).nodes)
        });
        group.bench_with_input(BenchmarkId::new("threaded", label), &depth, |b, &depth| {
            b.iter(|| perft_multi_threaded(black_box(&game), depth).nodes)
        });
    }

    group.finish();
}

fn bench_random_game(c: &mut Criterion) {
    c.bench_function("random_game_200_plies", |b| {
        b.iter(|| {
            let mut engine = RandomEngine::with_seed(2024);
            let mut game = GameState::new_game();
            while game.ply() < 200 && !game.status().is_over() {
                let legal = game.legal_moves().to_vec();
                let Ok(mv) = engine.choose_move(&game, &legal) else {
                    break;
                };
                if game.play_move(mv).is_err() {
                    break;
                }
            }
            black_box(game.ply())
        })
    });
}

criterion_group!(benches, bench_legal_moves, bench_perft, bench_random_game);
criterion_main!(benches);
