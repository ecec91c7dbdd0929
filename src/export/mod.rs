//! Snapshot export interfaces.

pub mod vtk;

pub use vtk::VtkExporter;

use crate::errors::SimulationError;
use crate::physics::particles::ParticleStore;

/// Sink for per-step particle snapshots.
///
/// The step driver calls this once after each completed step. A failed write
/// is fatal to the run, so implementations should return an error rather
/// than silently dropping a snapshot.
pub trait SnapshotExporter {
    fn write_step(&mut self, step: usize, store: &ParticleStore) -> Result<(), SimulationError>;
}

/// Discards every snapshot. Used when export is disabled.
#[derive(Debug, Default)]
pub struct NullExporter;

impl SnapshotExporter for NullExporter {
    fn write_step(&mut self, _step: usize, _store: &ParticleStore) -> Result<(), SimulationError> {
        Ok(())
    }
}
