//! Command line interface for Particlebox

use clap::Parser;
use std::fmt;

use crate::config::{SimulationConfig, SimulationVariant};
use crate::physics::math::Dimensionality;

/// CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Configuration file could not be loaded
    ConfigLoad(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::ConfigLoad(msg) => write!(f, "Failed to load configuration: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Particlebox - particle simulations with VTK snapshot export
#[derive(Parser, Debug)]
#[command(
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_DATE"), ")"),
    about,
    long_about = None
)]
pub struct Args {
    /// Path to configuration file (TOML format)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<String>,

    /// Simulation variant to run (overrides config file)
    #[arg(long, value_name = "VARIANT", value_enum)]
    pub variant: Option<SimulationVariant>,

    /// Spatial dimensionality (overrides config file)
    #[arg(short = 'd', long, value_name = "DIMS", value_enum)]
    pub dimensions: Option<Dimensionality>,

    /// Number of particles to simulate (overrides config file)
    #[arg(short = 'n', long, value_name = "COUNT")]
    pub particles: Option<usize>,

    /// Number of timesteps to run (overrides config file)
    #[arg(long, value_name = "COUNT")]
    pub steps: Option<usize>,

    /// Timestep length (overrides config file)
    #[arg(long, value_name = "VALUE")]
    pub delta: Option<f64>,

    /// Vertical acceleration for the reflector variant (overrides config file)
    #[arg(short = 'g', long, value_name = "VALUE")]
    pub gravity: Option<f64>,

    /// Particle bounding-sphere radius (overrides config file)
    #[arg(short = 'r', long, value_name = "VALUE")]
    pub radius: Option<f64>,

    /// Random seed for particle initialization
    #[arg(short = 's', long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Directory for VTK snapshots (overrides config file)
    #[arg(short = 'o', long, value_name = "PATH")]
    pub output_dir: Option<String>,

    /// Disable snapshot export entirely
    #[arg(long)]
    pub no_export: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

/// Loads configuration from file or defaults, then applies command-line overrides
pub fn load_and_apply_config(args: &Args) -> Result<SimulationConfig, CliError> {
    // Load configuration
    let mut config = if let Some(config_path) = &args.config {
        println!("Loading configuration from: {config_path}");
        SimulationConfig::load_or_default(config_path)
    } else {
        SimulationConfig::load_from_user_config()
    };

    // Apply command-line overrides
    if let Some(variant) = args.variant {
        config.simulation.variant = variant;
    }

    if let Some(dimensions) = args.dimensions {
        config.simulation.dimensionality = dimensions;
    }

    if let Some(particle_count) = args.particles {
        println!("Overriding particle count to: {particle_count}");
        config.simulation.particle_count = particle_count;
    }

    if let Some(steps) = args.steps {
        config.simulation.steps = steps;
    }

    if let Some(delta) = args.delta {
        config.physics.delta = delta;
    }

    if let Some(gravity) = args.gravity {
        println!("Overriding vertical acceleration to: {gravity}");
        config.physics.gravity = gravity;
    }

    if let Some(radius) = args.radius {
        config.physics.radius = radius;
    }

    if let Some(seed) = args.seed {
        println!("Using random seed: {seed}");
        config.simulation.seed = Some(seed);
    }

    if let Some(output_dir) = &args.output_dir {
        config.export.directory = output_dir.clone();
    }

    if args.no_export {
        config.export.enabled = false;
    }

    Ok(config)
}
