//! Time integration schemes.

mod symplectic_euler;

pub use symplectic_euler::SymplecticEuler;

use crate::physics::math::{Scalar, Vector};

/// A scheme for advancing one particle's motion state by a single timestep.
///
/// Implementations read the acceleration produced by the evaluation pass and
/// update velocity and position in place. They never touch accelerations.
pub trait Integrator: Send + Sync {
    /// Advance `position` and `velocity` by `dt` under `acceleration`.
    fn step(&self, position: &mut Vector, velocity: &mut Vector, acceleration: Vector, dt: Scalar);

    /// Human-readable name for logs and diagnostics.
    fn name(&self) -> &'static str;

    /// Formal order of accuracy of the scheme.
    fn convergence_order(&self) -> u32;
}

/// Apply an integrator across whole motion-state slices.
pub fn integrate_all(
    integrator: &dyn Integrator,
    positions: &mut [Vector],
    velocities: &mut [Vector],
    accelerations: &[Vector],
    dt: Scalar,
) {
    debug_assert_eq!(positions.len(), velocities.len());
    debug_assert_eq!(positions.len(), accelerations.len());

    for i in 0..positions.len() {
        integrator.step(&mut positions[i], &mut velocities[i], accelerations[i], dt);
    }
}
