//! AOC CLI - scaffold and run Advent of Code solutions

mod cli;
mod config;
mod error;
mod logging;
mod perfwatch;
mod runner;
mod scaffold;

// Import aoc-solutions to link the solution plugins
use aoc_solutions as _;

use aoc_solver::SolutionRegistryBuilder;
use clap::Parser;
use cli::Args;
use config::{Action, Config};
use error::CliError;
use tracing::debug;

fn main() {
    logging::init();
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args)?;
    debug!(?config, "resolved configuration");

    match &config.action {
        Action::Run(settings) => {
            let registry = SolutionRegistryBuilder::new()
                .register_all_plugins()?
                .build();
            debug!(solutions = registry.len(), "registry built");

            runner::run(&config, settings, &registry, &mut std::io::stdout().lock())?;
        }
        Action::New => {
            let report = scaffold::scaffold(&config.layout, config.year, config.day)?;
            debug!(?report, "scaffold finished");
        }
    }
    Ok(())
}
