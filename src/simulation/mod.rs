//! Simulation variants and the step driver.

pub mod gravity;
pub mod reflector;
pub mod runner;

pub use gravity::GravitySimulation;
pub use reflector::ReflectorSimulation;

use crate::physics::particles::ParticleStore;

/// A particle system that can be advanced one timestep at a time.
///
/// Each `step` runs the variant's full update in order: evaluate
/// accelerations (or wall reflections), integrate motion, then enforce any
/// positional constraints. The particle population never changes.
pub trait Simulation {
    fn step(&mut self);

    fn store(&self) -> &ParticleStore;

    fn name(&self) -> &'static str;
}
