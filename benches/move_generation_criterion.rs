use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chess_rules_engine::game_state::chess_types::Square;
use chess_rules_engine::game_state::game_state::GameState;
use chess_rules_engine::move_generation::legal_move_generator::{
    legal_destinations, LegalMoveGenerator,
};
use chess_rules_engine::move_generation::perft::perft;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    fen: &'static str,
    expected_nodes: &'static [usize],
}

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "startpos",
        fen: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w",
        expected_nodes: &[20, 400, 8902],
    },
    BenchCase {
        name: "open_lines",
        fen: "r3k2r/8/8/8/8/8/8/R3K2R w",
        expected_nodes: &[],
    },
];

fn bench_destinations(c: &mut Criterion) {
    let mut group = c.benchmark_group("legal_destinations");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));

    for case in CASES {
        let game = GameState::from_fen(case.fen).expect("benchmark FEN should parse");
        let origins: Vec<Square> = game
            .pieces()
            .filter(|(_, piece)| piece.color == game.side_to_move)
            .map(|(square, _)| square)
            .collect();

        group.throughput(Throughput::Elements(origins.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(case.name), &origins, |b, origins| {
            b.iter(|| {
                let mut total = 0usize;
                for &from in origins {
                    total += legal_destinations(black_box(&game), black_box(from)).len();
                }
                black_box(total)
            });
        });
    }

    group.finish();
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for case in CASES {
        let game = GameState::from_fen(case.fen).expect("benchmark FEN should parse");

        for (depth_idx, expected_nodes) in case.expected_nodes.iter().enumerate() {
            let depth = (depth_idx + 1) as u8;

            // Correctness guard before benchmarking.
            let warmup = perft(&LegalMoveGenerator, &game, depth).expect("perft should run");
            assert_eq!(
                warmup.nodes, *expected_nodes,
                "node mismatch in warmup for {} depth {}",
                case.name, depth
            );

            group.throughput(Throughput::Elements(*expected_nodes as u64));
            group.bench_with_input(
                BenchmarkId::from_parameter(format!("{}_d{}", case.name, depth)),
                expected_nodes,
                |b, expected| {
                    b.iter(|| {
                        let counts = perft(&LegalMoveGenerator, black_box(&game), black_box(depth))
                            .expect("perft benchmark run should succeed");
                        assert_eq!(counts.nodes, *expected);
                        black_box(counts.nodes)
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(move_generation_benches, bench_destinations, bench_perft);
criterion_main!(move_generation_benches);
