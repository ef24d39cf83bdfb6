//! Execution flags fixed for the duration of a run

use crate::layout::TEST_INPUT_FILE;

/// Which input file a run reads
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TestData {
    /// Real puzzle input (`input.txt`)
    #[default]
    Off,
    /// The standard test input (`input.test.txt`)
    Standard,
    /// A named file inside the day directory
    Named(String),
}

impl TestData {
    /// Build from an optional file name, mapping the standard name to `Standard`
    pub fn from_file_name(name: Option<&str>) -> Self {
        match name {
            None => Self::Off,
            Some(TEST_INPUT_FILE) => Self::Standard,
            Some(name) => Self::Named(name.to_string()),
        }
    }

    /// Whether any test data file is in use
    pub fn is_enabled(&self) -> bool {
        !matches!(self, Self::Off)
    }

    /// File name to read inside the day directory, `None` for real input
    pub fn file_name(&self) -> Option<&str> {
        match self {
            Self::Off => None,
            Self::Standard => Some(TEST_INPUT_FILE),
            Self::Named(name) => Some(name),
        }
    }
}

/// Flags a solution is constructed with; never mutated while solving
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Run steps marked slow
    pub run_slow: bool,
    /// Enable `Context::debug` output
    pub debugging: bool,
    /// Test data selection
    pub use_test_data: TestData,
}

impl RunOptions {
    /// Options for a run against the standard test input
    pub fn test() -> Self {
        Self {
            use_test_data: TestData::Standard,
            ..Self::default()
        }
    }
}
