use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rochambeau_core::builder::ArenaBuilder;
use rochambeau_data::Neighborhood;

fn bench_advance_batch(c: &mut Criterion) {
    let mut arena = ArenaBuilder::new()
        .num_breeds(3)
        .arena_size(100)
        .seed(42)
        .build()
        .unwrap();
    arena.init();

    c.bench_function("arena_advance_500", |b| {
        b.iter(|| {
            arena.advance_by(500).unwrap();
            black_box(arena.interactions())
        })
    });
}

fn bench_advance_moore(c: &mut Criterion) {
    let mut arena = ArenaBuilder::new()
        .num_breeds(5)
        .arena_size(100)
        .neighborhood(Neighborhood::Moore)
        .seed(42)
        .build()
        .unwrap();
    arena.init();

    c.bench_function("arena_advance_500_moore", |b| {
        b.iter(|| {
            arena.advance_by(500).unwrap();
            black_box(arena.interactions())
        })
    });
}

fn bench_checkpoint(c: &mut Criterion) {
    let mut arena = ArenaBuilder::new()
        .arena_size(100)
        .seed(42)
        .build()
        .unwrap();
    arena.init();

    c.bench_function("arena_checkpoint_100x100", |b| {
        b.iter(|| black_box(arena.checkpoint().unwrap()))
    });
}

fn bench_view_snapshot(c: &mut Criterion) {
    let mut arena = ArenaBuilder::new()
        .arena_size(100)
        .seed(42)
        .build()
        .unwrap();
    arena.init();
    let view = arena.view();
    let mut buffer = view.new_buffer();

    c.bench_function("view_snapshot_100x100", |b| {
        b.iter(|| black_box(view.snapshot_into(&mut buffer).unwrap()))
    });
}

criterion_group!(
    benches,
    bench_advance_batch,
    bench_advance_moore,
    bench_checkpoint,
    bench_view_snapshot
);
criterion_main!(benches);
