use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use sapper_core::{Board, GameConfig, RandomGenerator};

fn flood_fill(c: &mut Criterion) {
    let sparse = GameConfig::new(64, 40).unwrap();
    c.bench_function("reveal_corner_sparse_64", |b| {
        b.iter_batched(
            || Board::new(&sparse, RandomGenerator::new(1234)).unwrap(),
            |mut board| board.reveal((0, 0)),
            BatchSize::SmallInput,
        )
    });

    c.bench_function("reveal_full_mineless_200", |b| {
        b.iter_batched(
            || Board::with_mine_coords(200, &[]).unwrap(),
            |mut board| board.reveal((0, 0)),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, flood_fill);
criterion_main!(benches);
