//! Benchmarks for the Monte-Carlo column chooser.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mc_connect_four::ai::{MonteCarloAgent, StdRandomSource};
use mc_connect_four::game::{Board, GameStatus};

fn choose_on_empty_board(c: &mut Criterion) {
    let board = Board::new();

    for difficulty in [3, 5, 7] {
        c.bench_function(&format!("choose_column_d{difficulty}"), |b| {
            let mut agent = MonteCarloAgent::new(StdRandomSource::seeded(42));
            b.iter(|| {
                agent
                    .choose_column(GameStatus::RedWins, black_box(difficulty), &board)
                    .unwrap()
            })
        });
    }
}

fn choose_midgame(c: &mut Criterion) {
    let mut board = Board::new();
    for col in [3, 3, 2, 4, 4, 2, 5, 1] {
        assert!(board.insert(col));
    }

    c.bench_function("choose_column_midgame_d5", |b| {
        let mut agent = MonteCarloAgent::new(StdRandomSource::seeded(42));
        b.iter(|| {
            agent
                .choose_column(GameStatus::RedWins, black_box(5), &board)
                .unwrap()
        })
    });
}

criterion_group!(benches, choose_on_empty_board, choose_midgame);
criterion_main!(benches);
