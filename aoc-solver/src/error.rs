//! Error types for the solver library

use crate::answer::Answer;
use crate::input::InputKind;
use std::num::ParseIntError;
use thiserror::Error;

/// Error type for locating and parsing a day's input file
#[derive(Debug, Error)]
pub enum InputError {
    /// The resolved input file does not exist
    #[error("Failed to find an input file at path \"{path}\".")]
    NotFound { path: String },
    /// The file exists but holds nothing once newlines are stripped
    #[error("Found a file at path \"{path}\", but it was empty. Make sure to paste some input!")]
    Empty { path: String },
    /// The file could not be read or is not valid UTF-8
    #[error("Failed to read input file \"{path}\": {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// An element could not be parsed as a base-10 integer
    #[error("Invalid integer in input: {value:?}")]
    InvalidInteger {
        value: String,
        #[source]
        source: ParseIntError,
    },
    /// The solution's input type does not accept the loaded input kind
    #[error("Solution expects {declared} input, but {loaded} was loaded")]
    KindMismatch {
        declared: InputKind,
        loaded: InputKind,
    },
}

/// Error type for solving steps
#[derive(Debug, Error)]
pub enum SolveError {
    /// The requested part has no implementation
    #[error("Part {part} is not implemented")]
    NotImplemented { part: u8 },
    /// A step returned something other than its declared answer
    #[error(
        "Failed answer assertion for {year} / day_{day:02} / {step}:\n  returned: {actual}\n  expected: {expected}"
    )]
    AnswerMismatch {
        year: u16,
        day: u8,
        step: String,
        actual: Answer,
        expected: Answer,
    },
    /// A combined step did not produce exactly two answers
    #[error("Unable to unpack two answers from the combined step, got {0}")]
    MalformedResult(Answer),
    /// Solving code failed with its own error
    #[error("Solve failed: {0}")]
    Failed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SolveError {
    /// Wrap an arbitrary error (for example an `anyhow::Error`) raised by solving code
    pub fn failed(error: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Failed(error.into())
    }
}

/// A solution did not declare its year or day
#[derive(Debug, Clone, Error)]
#[error("explicitly define {solution}::{field}; no day can run until every compiled-in solution declares it")]
pub struct ConfigurationMissing {
    /// Type name of the offending solution
    pub solution: &'static str,
    /// The missing constant (`YEAR` or `DAY`)
    pub field: &'static str,
}

/// Error type for creating and running a solution
#[derive(Debug, Error)]
pub enum SolutionError {
    /// No solution is registered for the given year and day
    #[error("No solution registered for year {year} day {day:02}")]
    NotFound { year: u16, day: u8 },
    /// The solution did not declare its year or day
    #[error(transparent)]
    ConfigurationMissing(#[from] ConfigurationMissing),
    /// Input loading failed
    #[error(transparent)]
    Input(#[from] InputError),
    /// A solving step failed
    #[error(transparent)]
    Solve(#[from] SolveError),
    /// Writing the report failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error type for registration failures
#[derive(Debug, Clone, Error)]
pub enum RegistrationError {
    /// Attempted to register a solution for a year-day combination that already exists
    #[error(
        "Duplicate solution registration for year {0} day {1}; check the YEAR and DAY constants of copied solution files"
    )]
    Duplicate(u16, u8),
    /// Year or day outside the supported range (2015-2034, days 1-25)
    #[error("Invalid year {0} or day {1}")]
    InvalidYearDay(u16, u8),
    /// The solution did not declare its year or day
    #[error(transparent)]
    ConfigurationMissing(#[from] ConfigurationMissing),
}
