//! Criterion benchmarks for the toggle hot path and scrambling.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lights_out::{BoardEngine, Coord, Dims, Grid, ScrambleRng};

fn bench_toggle_rules(c: &mut Criterion) {
    c.bench_function("grid apply_move 5x5 interior", |b| {
        let mut grid = Grid::new(Dims::CLASSIC);
        b.iter(|| {
            grid.apply_move(black_box(Coord::new(2, 2)));
        });
    });

    c.bench_function("grid uniformity scan 16x16", |b| {
        let grid = Grid::new(Dims::new(16, 16).unwrap());
        b.iter(|| black_box(grid.uniform_state()));
    });
}

fn bench_scramble(c: &mut Criterion) {
    // Each iteration builds its own engine, so the numbers include board
    // construction alongside the draw-and-apply loop.
    c.bench_function("scramble 5x5", |b| {
        let mut rng = ScrambleRng::new(42);
        b.iter(|| {
            let mut engine = BoardEngine::classic();
            engine.scramble(&mut rng);
            black_box(engine.grid().lit_count())
        });
    });

    c.bench_function("scramble 16x16", |b| {
        let dims = Dims::new(16, 16).unwrap();
        let mut rng = ScrambleRng::new(42);
        b.iter(|| {
            let mut engine = BoardEngine::new(dims);
            engine.scramble(&mut rng);
            black_box(engine.grid().lit_count())
        });
    });
}

criterion_group!(benches, bench_toggle_rules, bench_scramble);
criterion_main!(benches);
