//! Physics primitives shared by both simulation variants.

pub mod forces;
pub mod integrators;
pub mod math;
pub mod particles;
