use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tower_crane::core::{classify, Crane, GameSnapshot, GameState, SimpleRng, Stack};
use tower_crane::types::{Direction, PLATFORM_CENTER_X, WIN_HEIGHT};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    let mut now = 0u64;

    c.bench_function("game_tick_1_step", |b| {
        b.iter(|| {
            now += 10;
            state.tick(black_box(1), false, now);
        })
    });
}

fn bench_drop(c: &mut Criterion) {
    c.bench_function("build_tower_to_win", |b| {
        b.iter(|| {
            let crane = Crane::new(PLATFORM_CENTER_X, 200, 0, PLATFORM_CENTER_X, Direction::Right);
            let mut state = GameState::from_parts(crane, SimpleRng::new(1));
            for i in 0..=WIN_HEIGHT as u64 {
                state.tick(1, true, i);
            }
            black_box(state.won())
        })
    });
}

fn bench_classify(c: &mut Criterion) {
    c.bench_function("classify", |b| {
        b.iter(|| {
            for x in 150..650 {
                black_box(classify(black_box(x), PLATFORM_CENTER_X));
            }
        })
    });
}

fn bench_stack_fill(c: &mut Criterion) {
    c.bench_function("stack_fill_clear", |b| {
        let mut stack = Stack::new();
        b.iter(|| {
            for i in 0..=WIN_HEIGHT as u32 {
                stack.add_block(black_box(388), i);
            }
            stack.clear();
        })
    });
}

fn bench_snapshot_into(c: &mut Criterion) {
    let crane = Crane::new(PLATFORM_CENTER_X, 200, 0, PLATFORM_CENTER_X, Direction::Right);
    let mut state = GameState::from_parts(crane, SimpleRng::new(7));
    for i in 0..5u64 {
        state.tick(1, true, i);
    }
    let mut snap = GameSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            state.snapshot_into(&mut snap);
            black_box(snap.fingerprint())
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_drop,
    bench_classify,
    bench_stack_fill,
    bench_snapshot_into
);
criterion_main!(benches);
