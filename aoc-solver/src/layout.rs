//! On-disk layout of the solutions tree
//!
//! Directory structure: `{root}/{year}/day_{day:02}/` holding
//! `input.txt`, `input.test.txt` and `solution.rs`.

use crate::options::TestData;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Real puzzle input file name
pub const INPUT_FILE: &str = "input.txt";
/// Developer-supplied test input file name
pub const TEST_INPUT_FILE: &str = "input.test.txt";
/// Solution source file name
pub const SOLUTION_FILE: &str = "solution.rs";

const DAY_DIR_PREFIX: &str = "day_";

/// Path resolution for the solutions tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionsLayout {
    root: PathBuf,
}

impl SolutionsLayout {
    /// Create a layout rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `{root}/{year}`
    pub fn year_dir(&self, year: u16) -> PathBuf {
        self.root.join(year.to_string())
    }

    /// `{root}/{year}/day_{day:02}`
    pub fn day_dir(&self, year: u16, day: u8) -> PathBuf {
        self.year_dir(year).join(day_dir_name(day))
    }

    /// Input file for a run, honoring the test data selection
    pub fn input_path(&self, year: u16, day: u8, test_data: &TestData) -> PathBuf {
        self.day_dir(year, day)
            .join(test_data.file_name().unwrap_or(INPUT_FILE))
    }

    pub fn solution_file(&self, year: u16, day: u8) -> PathBuf {
        self.day_dir(year, day).join(SOLUTION_FILE)
    }

    /// Highest `day_NN` directory under the year, `None` if there is none
    ///
    /// A missing year directory counts as empty.
    pub fn last_day(&self, year: u16) -> io::Result<Option<u8>> {
        let entries = match fs::read_dir(self.year_dir(year)) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e),
        };

        let mut last = None;
        for entry in entries {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            if let Some(day) = entry.file_name().to_str().and_then(parse_day_dir_name) {
                last = last.max(Some(day));
            }
        }
        Ok(last)
    }
}

/// `day_07` for day 7
pub fn day_dir_name(day: u8) -> String {
    format!("{DAY_DIR_PREFIX}{day:02}")
}

/// Parse a `day_NN` directory name (exactly two digits)
pub fn parse_day_dir_name(name: &str) -> Option<u8> {
    let digits = name.strip_prefix(DAY_DIR_PREFIX)?;
    if digits.len() != 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Render a path the way error messages show it: `./relative/path` when it
/// is relative to (or below) the working directory
pub fn display_path(path: &Path) -> String {
    let relative = if path.is_absolute() {
        std::env::current_dir()
            .ok()
            .and_then(|cwd| path.strip_prefix(cwd).ok().map(Path::to_path_buf))
    } else {
        Some(path.to_path_buf())
    };

    match relative {
        Some(rel) if rel.starts_with(".") => rel.display().to_string(),
        Some(rel) => format!("./{}", rel.display()),
        None => path.display().to_string(),
    }
}
