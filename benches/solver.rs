use criterion::{criterion_group, criterion_main, Criterion};
use pipenet::{solver, Game, GeneratorConfig};

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("solver");

    for (rows, cols, seed) in [(5, 5, 1u64), (7, 7, 2), (9, 9, 3)] {
        let mut config = GeneratorConfig::new(rows, cols);
        config.seed = Some(seed);
        let game = Game::new_random(&config).unwrap();

        let name = format!("solve_{}x{}", rows, cols);
        group.bench_function(name.as_str(), |b| {
            b.iter(|| {
                let mut board = game.board().clone();
                solver::solve(&mut board).unwrap();
                board
            });
        });
    }

    let default_game = Game::new_default();
    group.bench_function("count_solutions_default", |b| {
        b.iter(|| solver::count_solutions(default_game.board()));
    });

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
