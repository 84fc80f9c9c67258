use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gridmdp::{GridMdp, SolverConfig, State, ValueIteration};

fn gridworld(size: usize) -> GridMdp {
    GridMdp::builder(size, size)
        .reward(State::new(size, size), 1.0)
        .reward(State::new(size, size - 1), -1.0)
        .terminals([State::new(size, size), State::new(size, size - 1)])
        .probabilities(0.8, 0.1)
        .default_reward(-0.04)
        .build()
        .unwrap()
}

fn bench_value_iteration(c: &mut Criterion) {
    let mut group = c.benchmark_group("value_iteration");

    for size in [4, 16, 32].iter() {
        let mdp = gridworld(*size);

        group.bench_with_input(BenchmarkId::new("sequential", size), &mdp, |b, mdp| {
            let solver = ValueIteration::new(SolverConfig::new(0.95, 1e-6));
            b.iter(|| solver.run(black_box(mdp)).unwrap())
        });

        group.bench_with_input(BenchmarkId::new("parallel", size), &mdp, |b, mdp| {
            let solver = ValueIteration::new(SolverConfig {
                parallel: true,
                ..SolverConfig::new(0.95, 1e-6)
            });
            b.iter(|| solver.run(black_box(mdp)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_value_iteration);
criterion_main!(benches);
