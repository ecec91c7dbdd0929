//! Step driver: advances a simulation and hands each state to the exporter.

use std::time::{Duration, Instant};

use log::info;

use super::Simulation;
use crate::errors::SimulationError;
use crate::export::SnapshotExporter;

/// Timing report for a completed run.
#[derive(Debug, Clone, Copy)]
pub struct RunSummary {
    pub steps: usize,
    pub particles: usize,
    pub elapsed: Duration,
}

impl RunSummary {
    /// Average wall time per particle per step, in nanoseconds.
    pub fn ns_per_particle_step(&self) -> f64 {
        let work = (self.steps * self.particles) as f64;
        if work == 0.0 {
            return 0.0;
        }
        self.elapsed.as_nanos() as f64 / work
    }
}

/// Run `steps` timesteps, exporting a snapshot after each one.
///
/// Zero steps means zero snapshots and an untouched particle store. A failed
/// snapshot write aborts the run immediately.
pub fn run(
    simulation: &mut dyn Simulation,
    steps: usize,
    exporter: &mut dyn SnapshotExporter,
) -> Result<RunSummary, SimulationError> {
    let particles = simulation.store().len();
    info!(
        "running {} simulation: {} particles, {} steps",
        simulation.name(),
        particles,
        steps
    );

    let started = Instant::now();

    for step in 0..steps {
        simulation.step();
        exporter.write_step(step, simulation.store())?;
    }

    let summary = RunSummary {
        steps,
        particles,
        elapsed: started.elapsed(),
    };

    info!(
        "completed {} steps in {:.3?} ({:.1} ns per particle-step)",
        summary.steps,
        summary.elapsed,
        summary.ns_per_particle_step()
    );

    Ok(summary)
}
