//! Force and acceleration evaluation kernels.

use crate::physics::math::{Dimensionality, Domain, Scalar, Vector};

/// Newtonian gravitational constant, m^3 kg^-1 s^-2.
pub const GRAVITATIONAL_CONSTANT: Scalar = 6.67384e-11;

/// Default softening length added to every pairwise distance.
pub const DEFAULT_SOFTENING: Scalar = 1.0;

/// Accumulate pairwise gravitational accelerations into `accelerations`.
///
/// For each particle i the acceleration is reset to zero and then every other
/// particle j contributes an attraction along the separation direction:
///
/// ```text
/// d   = |p_j - p_i| + eps
/// f   = g * m_i * m_j / d^2
/// a_i += (f / m_i) * (p_j - p_i) / d
/// ```
///
/// The softening `eps` keeps the magnitude finite even for coincident
/// particles (zero separation yields a zero direction vector, so the
/// contribution vanishes rather than producing NaN). The self-pair i == j is
/// skipped outright.
///
/// Concurrency contract: positions and masses are read-only for the whole
/// pass, and each slot of `accelerations` is written only from its own
/// particle's accumulation. A parallel evaluator may therefore partition the
/// outer loop freely; integration must not begin until the pass completes.
pub fn accumulate_gravity(
    positions: &[Vector],
    masses: &[Scalar],
    accelerations: &mut [Vector],
    g: Scalar,
    eps: Scalar,
) {
    debug_assert_eq!(positions.len(), masses.len());
    debug_assert_eq!(positions.len(), accelerations.len());

    for i in 0..positions.len() {
        let mut acc = Vector::ZERO;

        for j in 0..positions.len() {
            if i == j {
                continue;
            }

            let delta = positions[j] - positions[i];
            let distance = libm::sqrt(delta.length_squared()) + eps;
            let force = g * masses[i] * masses[j] / (distance * distance);

            acc += delta * (force / (distance * masses[i]));
        }

        accelerations[i] = acc;
    }
}

/// Reflect velocities at the domain walls.
///
/// A particle whose bounding sphere touches or crosses a wall along an axis
/// has that velocity component negated. The test uses the positions as they
/// stand before this step's position update; the positional clamp that keeps
/// particles inside the domain is applied separately after integration (see
/// [`clamp_to_domain`]).
pub fn reflect_at_walls(
    positions: &[Vector],
    velocities: &mut [Vector],
    domain: &Domain,
    radius: Scalar,
    dimensionality: Dimensionality,
) {
    debug_assert_eq!(positions.len(), velocities.len());

    for (p, v) in positions.iter().zip(velocities.iter_mut()) {
        for &axis in dimensionality.axes() {
            let a = axis.index();
            if p[a] + radius >= domain.extent(axis) || p[a] - radius <= 0.0 {
                v[a] = -v[a];
            }
        }
    }
}

/// Clamp every particle back inside `[radius, extent - radius]` per axis.
///
/// Run after integration so that no position ever escapes the domain, even
/// when a single step carries a particle past a wall.
pub fn clamp_to_domain(
    positions: &mut [Vector],
    domain: &Domain,
    radius: Scalar,
    dimensionality: Dimensionality,
) {
    for p in positions.iter_mut() {
        for &axis in dimensionality.axes() {
            let a = axis.index();
            let extent = domain.extent(axis);

            if p[a] - radius <= 0.0 {
                p[a] = radius;
            } else if p[a] + radius >= extent {
                p[a] = extent - radius;
            }
        }
    }
}
