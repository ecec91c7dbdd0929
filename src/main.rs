use clap::Parser;
use log::LevelFilter;

use particlebox::cli::{self, Args};
use particlebox::config::{SimulationConfig, SimulationVariant};
use particlebox::export::{NullExporter, SnapshotExporter, VtkExporter};
use particlebox::physics::integrators::SymplecticEuler;
use particlebox::physics::particles::ParticleStore;
use particlebox::resources::SharedRng;
use particlebox::simulation::{runner, GravitySimulation, ReflectorSimulation, Simulation};

fn main() {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if args.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .init();

    if let Err(e) = run(&args) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = cli::load_and_apply_config(args)?;
    config.validate()?;

    let mut rng = SharedRng::from_optional_seed(config.simulation.seed);
    let mut simulation = build_simulation(&config, &mut rng)?;

    let mut exporter: Box<dyn SnapshotExporter> = if config.export.enabled {
        Box::new(VtkExporter::new(&config.export.directory)?)
    } else {
        Box::new(NullExporter)
    };

    runner::run(
        simulation.as_mut(),
        config.simulation.steps,
        exporter.as_mut(),
    )?;

    Ok(())
}

fn build_simulation(
    config: &SimulationConfig,
    rng: &mut SharedRng,
) -> Result<Box<dyn Simulation>, particlebox::errors::SimulationError> {
    let n = config.simulation.particle_count;
    let dimensionality = config.simulation.dimensionality;
    let domain = config.domain.to_domain();

    let simulation: Box<dyn Simulation> = match config.simulation.variant {
        SimulationVariant::Reflector => {
            let store = ParticleStore::reflector(
                n,
                &domain,
                config.physics.radius,
                config.velocity_seed_vector(),
                dimensionality,
                rng,
            )?;
            Box::new(ReflectorSimulation::new(
                store,
                domain,
                config.physics.radius,
                config.physics.gravity,
                config.physics.delta,
                dimensionality,
            ))
        }
        SimulationVariant::Gravity => {
            let store = ParticleStore::gravity(
                n,
                &domain,
                config.physics.scale_mass,
                dimensionality,
                rng,
            )?;
            Box::new(GravitySimulation::new(
                store,
                Box::new(SymplecticEuler),
                config.physics.gravitational_constant,
                config.physics.softening,
                config.physics.delta,
            ))
        }
    };

    Ok(simulation)
}
