//! Bounded box simulation with elastic wall reflection.

use super::Simulation;
use crate::physics::forces;
use crate::physics::math::{Axis, Dimensionality, Domain, Scalar};
use crate::physics::particles::ParticleStore;

/// Particles inside an axis-aligned box under a constant vertical force.
///
/// Each step first reflects velocities at any wall a particle's bounding
/// sphere touches (using the positions as they stand before the update),
/// then advances motion, then clamps every position back inside
/// `[radius, extent - radius]` so no particle ever escapes the box.
///
/// Only the vertical axis accelerates; the other axes drift at their seeded
/// velocity between reflections.
pub struct ReflectorSimulation {
    store: ParticleStore,
    domain: Domain,
    radius: Scalar,
    gravity: Scalar,
    dt: Scalar,
    dimensionality: Dimensionality,
}

impl ReflectorSimulation {
    pub fn new(
        store: ParticleStore,
        domain: Domain,
        radius: Scalar,
        gravity: Scalar,
        dt: Scalar,
        dimensionality: Dimensionality,
    ) -> Self {
        Self {
            store,
            domain,
            radius,
            gravity,
            dt,
            dimensionality,
        }
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }
}

impl Simulation for ReflectorSimulation {
    fn step(&mut self) {
        let (positions, velocities, _) = self.store.split_integration();

        forces::reflect_at_walls(
            positions,
            velocities,
            &self.domain,
            self.radius,
            self.dimensionality,
        );

        let y = Axis::Y.index();
        let half_g = 0.5 * self.gravity * self.dt;

        for (p, v) in positions.iter_mut().zip(velocities.iter_mut()) {
            for &axis in self.dimensionality.axes() {
                let a = axis.index();
                if a == y {
                    // Vertical: midpoint kick, drift, then the other half kick.
                    p[a] -= v[a] * self.dt + half_g * self.dt;
                    v[a] += half_g;
                } else {
                    p[a] += v[a] * self.dt;
                }
            }
        }

        forces::clamp_to_domain(positions, &self.domain, self.radius, self.dimensionality);
    }

    fn store(&self) -> &ParticleStore {
        &self.store
    }

    fn name(&self) -> &'static str {
        "reflector"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::math::Vector;

    fn single_particle(position: Vector, velocity: Vector) -> ParticleStore {
        let mut store = ParticleStore::allocate(1).unwrap();
        store.positions_mut()[0] = position;
        store.velocities_mut()[0] = velocity;
        store
    }

    fn make_sim(store: ParticleStore) -> ReflectorSimulation {
        ReflectorSimulation::new(
            store,
            Domain::new(800.0, 800.0, 800.0),
            5.0,
            -9.8,
            1.0,
            Dimensionality::Two,
        )
    }

    #[test]
    fn test_left_wall_reflection() {
        let store = single_particle(Vector::new(5.0, 400.0, 0.0), Vector::new(-10.0, 0.0, 0.0));
        let mut sim = make_sim(store);

        sim.step();

        let v = sim.store().velocities()[0];
        let p = sim.store().positions()[0];
        assert_eq!(v.x, 10.0, "horizontal velocity flips at the wall");
        assert_eq!(p.x, 15.0, "particle moves away from the wall");
    }

    #[test]
    fn test_interior_particle_keeps_horizontal_velocity() {
        let store = single_particle(Vector::new(400.0, 400.0, 0.0), Vector::new(3.0, 0.0, 0.0));
        let mut sim = make_sim(store);

        sim.step();

        assert_eq!(sim.store().velocities()[0].x, 3.0);
        assert_eq!(sim.store().positions()[0].x, 403.0);
    }

    #[test]
    fn test_positions_never_leave_the_box() {
        let mut rng = crate::resources::SharedRng::from_seed(42);
        let domain = Domain::new(800.0, 800.0, 800.0);
        let store = ParticleStore::reflector(
            40,
            &domain,
            5.0,
            Vector::new(50.0, 50.0, 0.0),
            Dimensionality::Two,
            &mut rng,
        )
        .unwrap();
        let mut sim = make_sim(store);

        for _ in 0..200 {
            sim.step();
            for p in sim.store().positions() {
                assert!(p.x >= 5.0 && p.x <= 795.0, "x out of bounds: {}", p.x);
                assert!(p.y >= 5.0 && p.y <= 795.0, "y out of bounds: {}", p.y);
                assert_eq!(p.z, 0.0);
            }
        }
    }

    #[test]
    fn test_escaping_particle_snaps_to_wall() {
        // Fast enough to jump past the wall in one step; the clamp catches it.
        let store = single_particle(Vector::new(400.0, 400.0, 0.0), Vector::new(1000.0, 0.0, 0.0));
        let mut sim = make_sim(store);

        sim.step();

        assert_eq!(sim.store().positions()[0].x, 795.0);
    }

    #[test]
    fn test_depth_axis_untouched_in_2d() {
        let store = single_particle(Vector::new(400.0, 400.0, 0.0), Vector::new(0.0, 0.0, 25.0));
        let mut sim = make_sim(store);

        sim.step();

        assert_eq!(sim.store().positions()[0].z, 0.0);
    }
}
