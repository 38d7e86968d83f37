//! Criterion benchmarks for Heston scenario generation.
//!
//! Benchmarks cover:
//! - Gaussian sources (inverse-CDF Mersenne Twister vs `rand_distr`)
//! - ensemble generation at increasing scenario counts
//! - antithetic vs plain generation

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use esg_math::{GaussianSequence, InverseCumulativeNormalRng, StandardNormalRng};
use esg_methods::{ScenarioGenerator, SimulationGrid};
use esg_processes::{HestonParams, HestonProcess};

fn process() -> HestonProcess {
    HestonProcess::new(HestonParams {
        p0: 100.0,
        v0: 0.04,
        kappa: 1.5,
        theta: 0.04,
        xi: 0.3,
        mu: 0.03,
        rho: -0.7,
    })
    .unwrap()
}

fn bench_gaussian_sources(c: &mut Criterion) {
    let mut group = c.benchmark_group("gaussian_sources");
    let mut buffer = vec![0.0; 10_000];

    group.bench_function("inverse_cumulative_mt", |b| {
        let mut rng = InverseCumulativeNormalRng::new(42);
        b.iter(|| {
            rng.fill_gaussian(&mut buffer);
            black_box(buffer.iter().sum::<f64>())
        });
    });
    group.bench_function("rand_distr_standard_normal", |b| {
        let mut rng = StandardNormalRng::seeded(42);
        b.iter(|| {
            rng.fill_gaussian(&mut buffer);
            black_box(buffer.iter().sum::<f64>())
        });
    });

    group.finish();
}

fn bench_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenario_generation");
    group.sample_size(20);
    let process = process();

    for scenarios in [1_000, 10_000] {
        let grid = SimulationGrid::new(scenarios, 53, 1.0 / 52.0).unwrap();
        group.bench_with_input(BenchmarkId::new("plain", scenarios), &grid, |b, &grid| {
            let gen = ScenarioGenerator::new(&process, grid);
            let mut rng = InverseCumulativeNormalRng::new(7);
            b.iter(|| black_box(gen.generate(&mut rng).unwrap()));
        });
        group.bench_with_input(
            BenchmarkId::new("antithetic", scenarios),
            &grid,
            |b, &grid| {
                let gen = ScenarioGenerator::new(&process, grid).antithetic(true);
                let mut rng = InverseCumulativeNormalRng::new(7);
                b.iter(|| black_box(gen.generate(&mut rng).unwrap()));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_gaussian_sources, bench_generation);
criterion_main!(benches);
