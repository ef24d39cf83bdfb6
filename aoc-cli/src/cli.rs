//! CLI argument parsing using clap

use aoc_solver::TEST_INPUT_FILE;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Advent of Code templater and runner
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Advent of Code templater and runner", version)]
pub struct Args {
    /// Puzzle year (defaults to the current Advent of Code year)
    #[arg(long, global = true, value_parser = clap::value_parser!(u16).range(2015..=2030))]
    pub year: Option<u16>,

    /// Day [1..25]; 0 picks the latest day for `run` and the next one for `new`
    #[arg(long, global = true, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=25))]
    pub day: u8,

    /// Root of the `<year>/day_<NN>` tree
    #[arg(long, global = true, env = "AOC_SOLUTIONS_DIR", default_value = "solutions")]
    pub solutions_dir: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run a day's code
    Run(RunArgs),
    /// Create a template for a new day
    New,
}

#[derive(clap::Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct RunArgs {
    /// Run using test input (`input.test.txt` unless FILE is given)
    #[arg(
        short = 't',
        long,
        value_name = "FILE",
        num_args = 0..=1,
        default_missing_value = TEST_INPUT_FILE
    )]
    pub test_data: Option<String>,

    /// Print normally-hidden debugging statements
    #[arg(long)]
    pub debug: bool,

    /// Print per-step timing statistics
    #[arg(long)]
    pub profile: bool,

    /// Run long-running steps (or those requiring manual input)
    #[arg(long)]
    pub slow: bool,

    /// Print how long the solution (both parts) took to run
    #[arg(long)]
    pub time: bool,
}
