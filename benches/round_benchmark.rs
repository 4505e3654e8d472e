//! Benchmarks for rounds and whole games between automated seats.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use citadels_engine::core::GameConfig;
use citadels_engine::events::NullSink;
use citadels_engine::game::GameBuilder;
use citadels_engine::persistence::GameSnapshot;

fn config() -> GameConfig {
    GameConfig::default().with_round_limit(80)
}

fn bench_full_game(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_game");
    for players in [4usize, 5, 6, 7] {
        group.bench_with_input(BenchmarkId::from_parameter(players), &players, |b, &players| {
            let mut seed = 0u64;
            b.iter(|| {
                seed += 1;
                let mut game = GameBuilder::new()
                    .player_count(players)
                    .config(config())
                    .sink(Box::new(NullSink))
                    .build(seed)
                    .unwrap();
                black_box(game.run())
            });
        });
    }
    group.finish();
}

fn bench_single_round(c: &mut Criterion) {
    c.bench_function("single_round_7_players", |b| {
        b.iter(|| {
            let mut game = GameBuilder::new()
                .player_count(7)
                .config(config())
                .sink(Box::new(NullSink))
                .build(black_box(17))
                .unwrap();
            black_box(game.play_round())
        });
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut game = GameBuilder::new()
        .player_count(6)
        .config(config())
        .sink(Box::new(NullSink))
        .build(3)
        .unwrap();
    for _ in 0..4 {
        game.play_round();
    }

    c.bench_function("snapshot_json", |b| {
        b.iter(|| black_box(game.snapshot().to_json().unwrap()))
    });

    let bytes = game.snapshot().to_bytes().unwrap();
    c.bench_function("snapshot_restore_binary", |b| {
        b.iter(|| {
            let snapshot = GameSnapshot::from_bytes(black_box(&bytes)).unwrap();
            black_box(snapshot.restore(config()).unwrap())
        })
    });
}

criterion_group!(benches, bench_full_game, bench_single_round, bench_snapshot);
criterion_main!(benches);
