//! Structure-of-arrays particle storage and initialization policies

use crate::errors::SimulationError;
use crate::physics::math::{Dimensionality, Domain, Scalar, Vector};
use crate::resources::SharedRng;
use rand::Rng;

/// Fixed-size, index-stable storage for all per-particle state.
///
/// All four arrays always have the same length; index i across every array
/// describes the same particle. The population is fixed at creation and no
/// particle is created or destroyed during a run.
///
/// The constant-field (reflector) variant does not use masses or
/// accelerations; those arrays are still allocated (mass 1, acceleration
/// zero) so the lock-step invariant holds unconditionally.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleStore {
    positions: Vec<Vector>,
    velocities: Vec<Vector>,
    accelerations: Vec<Vector>,
    masses: Vec<Scalar>,
}

impl ParticleStore {
    /// Allocate storage for `n` particles, all fields zeroed (mass 1).
    ///
    /// Fails with [`SimulationError::Allocation`] if the backing memory
    /// cannot be obtained.
    pub fn allocate(n: usize) -> Result<Self, SimulationError> {
        fn reserve<T: Clone>(n: usize, fill: T) -> Result<Vec<T>, SimulationError> {
            let mut v = Vec::new();
            v.try_reserve_exact(n)
                .map_err(|e| SimulationError::Allocation(e.to_string()))?;
            v.resize(n, fill);
            Ok(v)
        }

        Ok(Self {
            positions: reserve(n, Vector::ZERO)?,
            velocities: reserve(n, Vector::ZERO)?,
            accelerations: reserve(n, Vector::ZERO)?,
            masses: reserve(n, 1.0)?,
        })
    }

    /// Initialize particles for the bounded-reflector variant.
    ///
    /// Positions are drawn uniformly over the domain and immediately clamped
    /// into `[radius, extent - radius]`; velocity components are drawn
    /// uniformly over `[0, seed]` per axis (the force-field seed values).
    pub fn reflector(
        n: usize,
        domain: &Domain,
        radius: Scalar,
        velocity_seed: Vector,
        dimensionality: Dimensionality,
        rng: &mut SharedRng,
    ) -> Result<Self, SimulationError> {
        let mut store = Self::allocate(n)?;

        for i in 0..n {
            for &axis in dimensionality.axes() {
                let a = axis.index();
                let extent = domain.extent(axis);

                let p = rng.random::<Scalar>() * extent;
                store.positions[i][a] = p.clamp(radius, extent - radius);
                store.velocities[i][a] = rng.random::<Scalar>() * velocity_seed[a];
            }
        }

        store.debug_assert_lock_step();
        Ok(store)
    }

    /// Initialize particles for the gravity variant.
    ///
    /// Positions are drawn uniformly over `[-0.5, 0.5]`, scaled per axis by
    /// the domain extent, and re-centered on the domain center; velocities
    /// and accelerations start at zero; masses are drawn uniformly over
    /// `[0, scale_mass]`.
    pub fn gravity(
        n: usize,
        domain: &Domain,
        scale_mass: Scalar,
        dimensionality: Dimensionality,
        rng: &mut SharedRng,
    ) -> Result<Self, SimulationError> {
        let mut store = Self::allocate(n)?;
        let center = domain.center();

        for i in 0..n {
            for &axis in dimensionality.axes() {
                let a = axis.index();
                let p = rng.random::<Scalar>() - 0.5;
                store.positions[i][a] = p * domain.extent(axis) + center[a];
            }
        }

        for mass in &mut store.masses {
            *mass = rng.random::<Scalar>() * scale_mass;
        }

        store.debug_assert_lock_step();
        Ok(store)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    #[inline]
    pub fn positions(&self) -> &[Vector] {
        &self.positions
    }

    #[inline]
    pub fn velocities(&self) -> &[Vector] {
        &self.velocities
    }

    #[inline]
    pub fn accelerations(&self) -> &[Vector] {
        &self.accelerations
    }

    #[inline]
    pub fn masses(&self) -> &[Scalar] {
        &self.masses
    }

    /// Split the store into the force-evaluation views: immutable positions
    /// and masses, mutable accelerations.
    ///
    /// The borrow split is what makes the evaluator's read/write separation
    /// checkable at compile time (see the concurrency contract on
    /// [`crate::physics::forces::accumulate_gravity`]).
    pub fn split_evaluation(&mut self) -> (&[Vector], &[Scalar], &mut [Vector]) {
        (&self.positions, &self.masses, &mut self.accelerations)
    }

    /// Mutable motion state for the integration pass: positions, velocities,
    /// and the finalized accelerations from the evaluation pass.
    pub fn split_integration(&mut self) -> (&mut [Vector], &mut [Vector], &[Vector]) {
        (
            &mut self.positions,
            &mut self.velocities,
            &self.accelerations,
        )
    }

    pub fn positions_mut(&mut self) -> &mut [Vector] {
        &mut self.positions
    }

    pub fn velocities_mut(&mut self) -> &mut [Vector] {
        &mut self.velocities
    }

    pub fn masses_mut(&mut self) -> &mut [Scalar] {
        &mut self.masses
    }

    #[inline]
    fn debug_assert_lock_step(&self) {
        debug_assert_eq!(self.positions.len(), self.velocities.len());
        debug_assert_eq!(self.positions.len(), self.accelerations.len());
        debug_assert_eq!(self.positions.len(), self.masses.len());
    }
}
