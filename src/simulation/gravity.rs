//! Direct-summation gravitational N-body simulation.

use super::Simulation;
use crate::physics::forces;
use crate::physics::integrators::{self, Integrator};
use crate::physics::math::Scalar;
use crate::physics::particles::ParticleStore;

/// Unbounded N-body system under pairwise Newtonian attraction.
///
/// Every step evaluates all O(n^2) pairwise interactions with a softened
/// distance, then advances the motion state with the configured integrator.
/// No boundary is enforced; particles roam freely.
pub struct GravitySimulation {
    store: ParticleStore,
    integrator: Box<dyn Integrator>,
    g: Scalar,
    eps: Scalar,
    dt: Scalar,
}

impl GravitySimulation {
    pub fn new(
        store: ParticleStore,
        integrator: Box<dyn Integrator>,
        g: Scalar,
        eps: Scalar,
        dt: Scalar,
    ) -> Self {
        Self {
            store,
            integrator,
            g,
            eps,
            dt,
        }
    }

    pub fn integrator(&self) -> &dyn Integrator {
        self.integrator.as_ref()
    }
}

impl Simulation for GravitySimulation {
    fn step(&mut self) {
        let (positions, masses, accelerations) = self.store.split_evaluation();
        forces::accumulate_gravity(positions, masses, accelerations, self.g, self.eps);

        // Integration only starts once every acceleration is finalized.
        let (positions, velocities, accelerations) = self.store.split_integration();
        integrators::integrate_all(
            self.integrator.as_ref(),
            positions,
            velocities,
            accelerations,
            self.dt,
        );
    }

    fn store(&self) -> &ParticleStore {
        &self.store
    }

    fn name(&self) -> &'static str {
        "gravity"
    }
}
