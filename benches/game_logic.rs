use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tetris_reserve::core::{GameState, PieceGenerator};
use tetris_reserve::term::StateView;

fn bench_play(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("play_and_refill", |b| {
        b.iter(|| {
            black_box(state.play().ok());
        })
    });
}

fn bench_reserve_cycle(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("reserve_then_use", |b| {
        b.iter(|| {
            black_box(state.reserve().ok());
            black_box(state.use_reserved().ok());
        })
    });
}

fn bench_swap_three(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    for _ in 0..3 {
        let _ = state.reserve();
    }

    c.bench_function("swap_three", |b| {
        b.iter(|| {
            black_box(state.swap_three().ok());
        })
    });
}

fn bench_generate(c: &mut Criterion) {
    let mut generator = PieceGenerator::new(12345);
    let mut id = 0u32;

    c.bench_function("generate_piece", |b| {
        b.iter(|| {
            id = id.wrapping_add(1);
            black_box(generator.generate(id));
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    for _ in 0..3 {
        let _ = state.reserve();
    }
    let snap = state.snapshot();
    let view = StateView::new();

    c.bench_function("render_state", |b| {
        b.iter(|| {
            black_box(view.render(black_box(&snap)));
        })
    });
}

criterion_group!(
    benches,
    bench_play,
    bench_reserve_cycle,
    bench_swap_three,
    bench_generate,
    bench_render
);
criterion_main!(benches);
