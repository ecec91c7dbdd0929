use clap::ValueEnum;
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::errors::SimulationError;
use crate::physics::forces::{DEFAULT_SOFTENING, GRAVITATIONAL_CONSTANT};
use crate::physics::math::{Dimensionality, Domain, Scalar, Vector};

/// Which of the two sibling engines to run.
#[derive(Serialize, Deserialize, ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SimulationVariant {
    /// Particles in a box under constant vertical force, reflecting at walls.
    Reflector,
    /// Unbounded pairwise Newtonian attraction.
    Gravity,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SimulationConfig {
    pub simulation: RunConfig,
    pub physics: PhysicsConfig,
    pub domain: DomainConfig,
    pub export: ExportConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            simulation: RunConfig::default(),
            physics: PhysicsConfig::default(),
            domain: DomainConfig::default(),
            export: ExportConfig::default(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RunConfig {
    pub variant: SimulationVariant,
    pub dimensionality: Dimensionality,
    pub particle_count: usize,
    pub steps: usize,
    pub seed: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            variant: SimulationVariant::Reflector,
            dimensionality: Dimensionality::Two,
            particle_count: 5,
            steps: 10,
            seed: None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PhysicsConfig {
    /// Timestep length.
    pub delta: Scalar,
    /// Constant vertical acceleration for the reflector variant.
    pub gravity: Scalar,
    /// Newtonian constant for the gravity variant.
    pub gravitational_constant: Scalar,
    /// Softening length added to every pairwise distance.
    pub softening: Scalar,
    /// Particle bounding-sphere radius (reflector walls).
    pub radius: Scalar,
    /// Upper bound for randomly drawn masses (gravity variant).
    pub scale_mass: Scalar,
    /// Per-axis upper bounds for randomly seeded velocities (reflector).
    pub velocity_seed: [Scalar; 3],
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            delta: 1.0,
            gravity: -9.8,
            gravitational_constant: GRAVITATIONAL_CONSTANT,
            softening: DEFAULT_SOFTENING,
            radius: 5.0,
            scale_mass: 1.0e6,
            velocity_seed: [50.0, 50.0, 50.0],
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct DomainConfig {
    pub width: Scalar,
    pub height: Scalar,
    pub depth: Scalar,
}

impl Default for DomainConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 800.0,
            depth: 800.0,
        }
    }
}

impl DomainConfig {
    pub fn to_domain(&self) -> Domain {
        Domain::new(self.width, self.height, self.depth)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExportConfig {
    pub enabled: bool,
    pub directory: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            directory: "./particle_positions".to_string(),
        }
    }
}

impl SimulationConfig {
    /// Load configuration from a file, falling back to defaults if the file doesn't exist
    pub fn load_or_default(path: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!("Failed to parse config file {path}: {e}. Using defaults.");
                    Self::default()
                }
            },
            Err(_) => {
                info!("Config file {path} not found. Using defaults.");
                Self::default()
            }
        }
    }

    /// Load from the platform user-config location, if a file exists there.
    pub fn load_from_user_config() -> Self {
        let Some(dirs) = directories::ProjectDirs::from("", "", "particlebox") else {
            return Self::default();
        };
        let path = dirs.config_dir().join("config.toml");
        match path.to_str() {
            Some(path) => Self::load_or_default(path),
            None => Self::default(),
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Reject parameter combinations that cannot run.
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.simulation.particle_count == 0 {
            return Err(SimulationError::InvalidParameter(
                "particle count must be at least 1".into(),
            ));
        }
        if self.physics.delta <= 0.0 || self.physics.delta.is_nan() {
            return Err(SimulationError::InvalidParameter(format!(
                "timestep must be positive, got {}",
                self.physics.delta
            )));
        }
        if self.physics.radius < 0.0 {
            return Err(SimulationError::InvalidParameter(format!(
                "radius must be non-negative, got {}",
                self.physics.radius
            )));
        }
        if self.physics.softening < 0.0 {
            return Err(SimulationError::InvalidParameter(format!(
                "softening must be non-negative, got {}",
                self.physics.softening
            )));
        }

        if self.simulation.variant == SimulationVariant::Reflector {
            let domain = self.domain.to_domain();
            for &axis in self.simulation.dimensionality.axes() {
                let extent = domain.extent(axis);
                if extent < 2.0 * self.physics.radius {
                    return Err(SimulationError::InvalidParameter(format!(
                        "domain extent {extent} too small for particle radius {}",
                        self.physics.radius
                    )));
                }
            }
        }

        Ok(())
    }

    pub fn velocity_seed_vector(&self) -> Vector {
        Vector::from_array(self.physics.velocity_seed)
    }
}
