use catmaze::{Agent, Dimensions, GameState, Position, minimax, rank_root_moves};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn classic_board() -> GameState {
    let mut rng = StdRng::seed_from_u64(1);
    GameState::create(
        Position::new(0, 0),
        Position::new(5, 5),
        Dimensions::new(8, 8),
        10,
        &mut rng,
    )
    .expect("classic board fits")
}

fn bench_minimax(c: &mut Criterion) {
    let state = classic_board();
    let mut group = c.benchmark_group("minimax");
    for depth in 1..=4u8 {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| minimax(black_box(&state), depth, true))
        });
    }
    group.finish();
}

fn bench_root_ranking(c: &mut Criterion) {
    let state = classic_board();
    c.bench_function("rank_root_moves mouse depth 4", |b| {
        b.iter(|| rank_root_moves(black_box(&state), Agent::Mouse, 4))
    });
}

fn bench_board_creation(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(2);
    c.bench_function("create 8x8 with 10 obstacles", |b| {
        b.iter(|| {
            GameState::create(
                Position::new(0, 0),
                Position::new(5, 5),
                Dimensions::new(8, 8),
                black_box(10),
                &mut rng,
            )
        })
    });
}

criterion_group!(benches, bench_minimax, bench_root_ranking, bench_board_creation);
criterion_main!(benches);
