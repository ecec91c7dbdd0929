//! Semi-implicit (symplectic) Euler integration.

use super::Integrator;
use crate::physics::math::{Scalar, Vector};

/// First-order symplectic integrator.
///
/// Updates velocity first, then position using the already-updated velocity:
///
/// ```text
/// v(t + dt) = v(t) + a(t) * dt
/// p(t + dt) = p(t) + v(t + dt) * dt
/// ```
///
/// The velocity-first ordering is what distinguishes this from explicit
/// Euler and is what gives the scheme its long-term energy behavior.
#[derive(Debug, Default, Clone, Copy)]
pub struct SymplecticEuler;

impl Integrator for SymplecticEuler {
    fn step(&self, position: &mut Vector, velocity: &mut Vector, acceleration: Vector, dt: Scalar) {
        *velocity += acceleration * dt;
        *position += *velocity * dt;
    }

    fn name(&self) -> &'static str {
        "Symplectic Euler"
    }

    fn convergence_order(&self) -> u32 {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_velocity_updates_before_position() {
        let integrator = SymplecticEuler;
        let mut position = Vector::ZERO;
        let mut velocity = Vector::ZERO;
        let acceleration = Vector::new(0.0, -9.8, 0.0);

        integrator.step(&mut position, &mut velocity, acceleration, 1.0);

        // Position advances by the updated velocity, not the old (zero) one.
        assert_eq!(velocity, Vector::new(0.0, -9.8, 0.0));
        assert_eq!(position, Vector::new(0.0, -9.8, 0.0));
    }

    #[test]
    fn test_zero_acceleration_is_linear_motion() {
        let integrator = SymplecticEuler;
        let mut position = Vector::new(1.0, 2.0, 3.0);
        let mut velocity = Vector::new(4.0, 5.0, 6.0);

        integrator.step(&mut position, &mut velocity, Vector::ZERO, 0.5);

        assert_eq!(velocity, Vector::new(4.0, 5.0, 6.0));
        assert_eq!(position, Vector::new(3.0, 4.5, 6.0));
    }

    #[test]
    fn test_zero_dt_is_identity() {
        let integrator = SymplecticEuler;
        let mut position = Vector::new(1.0, 1.0, 1.0);
        let mut velocity = Vector::new(2.0, 2.0, 2.0);

        integrator.step(&mut position, &mut velocity, Vector::splat(100.0), 0.0);

        assert_eq!(position, Vector::new(1.0, 1.0, 1.0));
        assert_eq!(velocity, Vector::new(2.0, 2.0, 2.0));
    }

    #[test]
    fn test_metadata() {
        let integrator = SymplecticEuler;
        assert_eq!(integrator.name(), "Symplectic Euler");
        assert_eq!(integrator.convergence_order(), 1);
    }
}
