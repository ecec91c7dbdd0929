//! Error types for simulation setup and the run loop

use std::fmt;

/// Failures that can abort a simulation run.
///
/// Every fallible operation in the core is attempted exactly once; there is
/// no retry path. Export failures are fatal: the snapshot series is the run's
/// only durable output, so a gap would silently corrupt it.
#[derive(Debug)]
pub enum SimulationError {
    /// Particle array allocation failed
    Allocation(String),
    /// A configuration value is out of range or inconsistent
    InvalidParameter(String),
    /// A snapshot could not be persisted
    Export(String),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::Allocation(msg) => {
                write!(f, "Could not allocate space for particle details: {msg}")
            }
            SimulationError::InvalidParameter(msg) => write!(f, "Invalid parameter: {msg}"),
            SimulationError::Export(msg) => write!(f, "Could not write snapshot: {msg}"),
        }
    }
}

impl std::error::Error for SimulationError {}
