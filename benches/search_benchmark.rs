use number_duel::searcher::{Algorithm, SearchContext};
use number_duel::state::{GameState, Player};

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("search from 8");
    let state = GameState::new(8, Player::Computer).unwrap();

    for depth in 1..=6u8 {
        for algorithm in Algorithm::ALL.iter() {
            group.bench_with_input(
                BenchmarkId::new(algorithm.label(), depth),
                &depth,
                |b, &depth| {
                    let mut context = SearchContext::new(depth);
                    b.iter(|| {
                        algorithm
                            .search(&mut context, black_box(&state), depth, true)
                            .unwrap()
                    })
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
