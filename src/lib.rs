//! Particlebox: two sibling particle simulations sharing one data model.
//!
//! The reflector variant confines particles to an axis-aligned box under a
//! constant vertical force, bouncing them elastically off the walls. The
//! gravity variant lets an unbounded population attract itself through
//! direct-summation Newtonian gravity with a softened distance. Both advance
//! in fixed timesteps and can write a legacy ASCII VTK snapshot of every
//! particle position after each step.

pub mod cli;
pub mod config;
pub mod errors;
pub mod export;
pub mod physics;
pub mod resources;
pub mod simulation;

pub mod prelude {
    pub use crate::config::{SimulationConfig, SimulationVariant};
    pub use crate::errors::SimulationError;
    pub use crate::export::{NullExporter, SnapshotExporter, VtkExporter};
    pub use crate::physics::integrators::{Integrator, SymplecticEuler};
    pub use crate::physics::math::{Axis, Dimensionality, Domain, Scalar, Vector};
    pub use crate::physics::particles::ParticleStore;
    pub use crate::resources::SharedRng;
    pub use crate::simulation::runner::{self, RunSummary};
    pub use crate::simulation::{GravitySimulation, ReflectorSimulation, Simulation};
}
