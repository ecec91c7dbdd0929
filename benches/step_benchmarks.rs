//! Step throughput benchmarks for both simulation variants.
//!
//! The gravity kernel dominates at O(n^2), so it is benchmarked both in
//! isolation and as a full step; the reflector step is linear and serves as
//! the baseline for per-particle overhead.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

extern crate particlebox;
use particlebox::physics::forces;
use particlebox::physics::integrators::SymplecticEuler;
use particlebox::physics::math::{Dimensionality, Domain, Vector};
use particlebox::physics::particles::ParticleStore;
use particlebox::resources::SharedRng;
use particlebox::simulation::{GravitySimulation, ReflectorSimulation, Simulation};

const G: f64 = 6.67384e-11;

fn gravity_store(n: usize) -> ParticleStore {
    let domain = Domain::new(1024.0, 512.0, 512.0);
    let mut rng = SharedRng::from_seed(42);
    ParticleStore::gravity(n, &domain, 1.0e6, Dimensionality::Three, &mut rng).unwrap()
}

fn bench_gravity_kernel(c: &mut Criterion) {
    let mut group = c.benchmark_group("gravity_kernel");

    for n in [64, 256, 1024] {
        let mut store = gravity_store(n);

        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| {
                let (positions, masses, accelerations) = store.split_evaluation();
                forces::accumulate_gravity(
                    black_box(positions),
                    black_box(masses),
                    accelerations,
                    G,
                    1.0,
                );
            });
        });
    }

    group.finish();
}

fn bench_gravity_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("gravity_step");

    for n in [64, 256, 1024] {
        let store = gravity_store(n);
        let mut sim = GravitySimulation::new(store, Box::new(SymplecticEuler), G, 1.0, 100.0);

        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| {
                sim.step();
                black_box(sim.store().positions().len());
            });
        });
    }

    group.finish();
}

fn bench_reflector_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("reflector_step");

    for n in [64, 1024, 16384] {
        let domain = Domain::new(800.0, 800.0, 800.0);
        let mut rng = SharedRng::from_seed(42);
        let store = ParticleStore::reflector(
            n,
            &domain,
            5.0,
            Vector::new(50.0, 50.0, 0.0),
            Dimensionality::Two,
            &mut rng,
        )
        .unwrap();
        let mut sim = ReflectorSimulation::new(store, domain, 5.0, -9.8, 1.0, Dimensionality::Two);

        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| {
                sim.step();
                black_box(sim.store().positions().len());
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_gravity_kernel,
    bench_gravity_step,
    bench_reflector_step
);
criterion_main!(benches);
