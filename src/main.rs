use std::{
    env::args,
    io::{stdout, Write},
    process::exit,
};

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

pub use utils::Pos;
mod utils;

pub use world::{Cell, Grid, LiveSet, World};
pub mod world;

pub use sim::{step, Sim, SimConfig};
mod sim;

pub use view::{Canvas, View, ViewMode, Viewport};
mod view;

pub use patterns::Pattern;
mod patterns;

pub use config::{Command, Config, Universe};
mod config;

pub use error::{ConfigError, Error, StoreError};
mod error;

pub mod store;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Seeds the world from the saved file when there is one, from the pattern otherwise.
fn seed<W>(config: &Config, empty: W) -> Result<W, Error>
where
    W: World,
{
    if let Some(path) = &config.load {
        if let Some(world) = store::load(path, empty.cleared())? {
            info!(path = %path.display(), "universe loaded from file");
            return Ok(world);
        }
        warn!(pattern = config.pattern.name(), "starting from the seed pattern instead");
    }
    let mut world = empty;
    config.pattern.place_on(&mut world, config.offset);
    Ok(world)
}

fn run<W>(config: &Config, empty: W, out: &mut impl Write) -> Result<(), Error>
where
    W: World,
{
    let world = seed(config, empty)?;
    let view = View::new(config.mode, config.clear);
    let simulation = Sim::new(world, view, config.sim);
    let last = simulation.run(out)?;

    if let Some(path) = &config.save {
        store::save(&last, path)?;
        info!(path = %path.display(), "universe saved");
    }
    Ok(())
}

pub fn main() {
    init_logging();

    let config = match Config::from_args(args().skip(1)) {
        Ok(Command::Run(config)) => config,
        Ok(Command::Help) => {
            println!("{}", config::USAGE);
            return;
        }
        Err(err) => {
            error!("{err}");
            eprintln!("{}", config::USAGE);
            exit(1);
        }
    };

    let out = &mut stdout().lock();
    let result = match config.universe {
        Universe::Sparse => run(&config, LiveSet::new(), out),
        Universe::Grid { rows, cols } => run(&config, Grid::new(rows, cols), out),
    };
    if let Err(err) = result {
        error!("{err}");
        exit(1);
    }
}
