//! Criterion benchmarks for the u-shiftopt engines.
//!
//! Annealing runs a fixed number of steps, so its cost tracks the price of
//! one fitness evaluation; hill climbing also depends on how long the
//! climb lasts.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use u_shiftopt::climb::{ClimbConfig, ClimbRunner};
use u_shiftopt::heuristic::{Heuristic, Objective};
use u_shiftopt::sa::{SaConfig, SaRunner};
use u_shiftopt::schedule::Schedule;

fn instance(days: usize, workers: usize) -> Schedule {
    let mut rng = StdRng::seed_from_u64(42);
    Schedule::random(days, workers, &mut rng).expect("valid instance")
}

fn bench_fitness(c: &mut Criterion) {
    let mut group = c.benchmark_group("fitness");

    for &days in &[10usize, 50, 200] {
        let schedule = instance(days, (days * 7 / 10).max(4));
        for h in Heuristic::ALL {
            group.bench_with_input(
                BenchmarkId::new(format!("h{}", h.id()), days),
                &schedule,
                |b, s| b.iter(|| black_box(h.fitness(black_box(s)))),
            );
        }
    }
    group.finish();
}

fn bench_climb(c: &mut Criterion) {
    let mut group = c.benchmark_group("climb");
    group.sample_size(10);

    for &days in &[10usize, 30, 50] {
        let schedule = instance(days, (days * 7 / 10).max(4));
        let config = ClimbConfig::default();
        group.bench_with_input(BenchmarkId::from_parameter(days), &schedule, |b, s| {
            b.iter(|| {
                let mut rng = StdRng::seed_from_u64(7);
                let result =
                    ClimbRunner::run_with_rng(s.clone(), &Heuristic::Weighted, &config, &mut rng);
                black_box(result)
            })
        });
    }
    group.finish();
}

fn bench_anneal(c: &mut Criterion) {
    let mut group = c.benchmark_group("anneal");
    group.sample_size(10);

    for &days in &[10usize, 30, 50] {
        let schedule = instance(days, (days * 7 / 10).max(4));
        let config = SaConfig::default();
        group.bench_with_input(BenchmarkId::from_parameter(days), &schedule, |b, s| {
            b.iter(|| {
                let mut rng = StdRng::seed_from_u64(7);
                let result =
                    SaRunner::run_with_rng(s.clone(), &Heuristic::Weighted, &config, &mut rng);
                black_box(result)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_fitness, bench_climb, bench_anneal);
criterion_main!(benches);
