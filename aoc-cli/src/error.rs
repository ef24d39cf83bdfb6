//! Error types for the CLI

use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Creating or running a solution failed
    #[error(transparent)]
    Solution(#[from] aoc_solver::SolutionError),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),

    /// Rendering the solution template failed
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The resolved day for a new solution is past the last puzzle
    #[error("Day {day} is out of range for {year}; Advent of Code ends on day 25")]
    DayOutOfRange { year: u16, day: u8 },
}
