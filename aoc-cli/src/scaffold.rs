//! Creating the directory, input files and solution template for a new day

use crate::error::CliError;
use aoc_solver::{display_path, SolutionsLayout, TestData};
use minijinja::{context, Environment};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::info;

const SOLUTION_TEMPLATE: &str = include_str!("../templates/solution.rs.j2");

/// Last puzzle day of every event
const LAST_DAY: u8 = 25;

/// What a scaffold run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub day: u8,
    pub day_dir: PathBuf,
    /// Files written by this run
    pub created: Vec<PathBuf>,
    /// Files that already existed and were left alone
    pub skipped: Vec<PathBuf>,
}

/// Day to create: the requested one, or one past the highest existing day for 0
pub fn resolve_day(layout: &SolutionsLayout, year: u16, day: u8) -> Result<u8, CliError> {
    let day = match day {
        0 => layout.last_day(year)?.unwrap_or(0) + 1,
        day => day,
    };
    if day > LAST_DAY {
        return Err(CliError::DayOutOfRange { year, day });
    }
    Ok(day)
}

/// Create the day directory with empty input files and a solution template
///
/// Existing files are never modified, so running it twice is harmless.
pub fn scaffold(layout: &SolutionsLayout, year: u16, day: u8) -> Result<ScaffoldReport, CliError> {
    fs::create_dir_all(layout.year_dir(year))?;
    let day = resolve_day(layout, year, day)?;

    let day_dir = layout.day_dir(year, day);
    info!("Initializing {}", display_path(&day_dir));
    fs::create_dir_all(&day_dir)?;

    let mut report = ScaffoldReport {
        day,
        day_dir,
        created: Vec::new(),
        skipped: Vec::new(),
    };

    for test_data in [TestData::Off, TestData::Standard] {
        let path = layout.input_path(year, day, &test_data);
        let created = create_new(&path, b"")?;
        report.record(path, created);
    }

    let solution_file = layout.solution_file(year, day);
    let created = if solution_file.exists() {
        info!("not touching existing {}", display_path(&solution_file));
        false
    } else {
        create_new(&solution_file, render_solution(year, day)?.as_bytes())?
    };
    report.record(solution_file, created);

    Ok(report)
}

impl ScaffoldReport {
    fn record(&mut self, path: PathBuf, created: bool) {
        if created {
            self.created.push(path);
        } else {
            self.skipped.push(path);
        }
    }
}

/// Render the solution template for `year` / `day`
pub fn render_solution(year: u16, day: u8) -> Result<String, minijinja::Error> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.add_template("solution.rs", SOLUTION_TEMPLATE)?;
    env.get_template("solution.rs")?.render(context! {
        year => year,
        day => day,
        day_padded => format!("{day:02}"),
    })
}

/// Write `contents` to a file that must not exist yet; `false` if it did
fn create_new(path: &Path, contents: &[u8]) -> io::Result<bool> {
    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(mut file) => {
            file.write_all(contents)?;
            Ok(true)
        }
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            info!("not touching existing {}", display_path(path));
            Ok(false)
        }
        Err(e) => Err(e),
    }
}
