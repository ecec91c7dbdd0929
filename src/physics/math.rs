//! Scalar and vector types shared by the physics modules

use serde::{Deserialize, Serialize};

/// Scalar type for physics calculations (f64 for precision)
pub type Scalar = f64;

/// 3D vector type for positions, velocities, and accelerations
pub type Vector = glam::DVec3;

/// Coordinate axes, usable as component indices into [`Vector`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X = 0,
    Y = 1,
    Z = 2,
}

impl Axis {
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Number of spatial dimensions a simulation runs in.
///
/// The engine always stores three components per vector; a 2D run keeps the
/// depth component at zero (initialization never populates it and wall logic
/// skips the Z axis), which matches the z=0 column in exported snapshots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum Dimensionality {
    #[default]
    #[value(name = "2d")]
    #[serde(rename = "2d")]
    Two,
    #[value(name = "3d")]
    #[serde(rename = "3d")]
    Three,
}

impl Dimensionality {
    /// Axes with wall logic and random initialization enabled
    pub fn axes(self) -> &'static [Axis] {
        match self {
            Dimensionality::Two => &[Axis::X, Axis::Y],
            Dimensionality::Three => &[Axis::X, Axis::Y, Axis::Z],
        }
    }
}

/// Axis-aligned simulation domain `[0,width]×[0,height]×[0,depth]`
///
/// Only the reflector variant confines particles to the domain; the gravity
/// variant uses it to scale and center the initial position distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    pub extents: Vector,
}

impl Domain {
    pub fn new(width: Scalar, height: Scalar, depth: Scalar) -> Self {
        Self {
            extents: Vector::new(width, height, depth),
        }
    }

    #[inline]
    pub fn extent(&self, axis: Axis) -> Scalar {
        self.extents[axis.index()]
    }

    #[inline]
    pub fn center(&self) -> Vector {
        self.extents * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_indexes_vector_components() {
        let v = Vector::new(1.0, 2.0, 3.0);
        assert_eq!(v[Axis::X.index()], 1.0);
        assert_eq!(v[Axis::Y.index()], 2.0);
        assert_eq!(v[Axis::Z.index()], 3.0);
    }

    #[test]
    fn test_dimensionality_axes() {
        assert_eq!(Dimensionality::Two.axes(), &[Axis::X, Axis::Y]);
        assert_eq!(Dimensionality::Three.axes(), &[Axis::X, Axis::Y, Axis::Z]);
    }

    #[test]
    fn test_domain_center() {
        let domain = Domain::new(800.0, 600.0, 400.0);
        assert_eq!(domain.center(), Vector::new(400.0, 300.0, 200.0));
        assert_eq!(domain.extent(Axis::Y), 600.0);
    }
}
