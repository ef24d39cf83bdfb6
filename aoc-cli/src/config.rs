//! Configuration resolution from CLI args

use crate::cli::{Args, Command, RunArgs};
use crate::error::CliError;
use aoc_solver::{display_path, RunOptions, SolutionsLayout, TestData};
use chrono::{Datelike, Local, NaiveDate};
use std::path::{Path, PathBuf};

/// First and last years the CLI accepts
const FIRST_YEAR: u16 = 2015;
const LAST_YEAR: u16 = 2030;

/// Resolved runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Puzzle year
    pub year: u16,
    /// Requested day; 0 means "resolve from the solutions tree"
    pub day: u8,
    /// Solutions tree
    pub layout: SolutionsLayout,
    /// What to do
    pub action: Action,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Run(RunSettings),
    New,
}

/// Settings for the `run` command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSettings {
    /// Flags handed to the solution
    pub options: RunOptions,
    /// Print per-step timing statistics instead of the runtime line
    pub profile: bool,
    /// Print the runtime line
    pub time: bool,
}

impl From<RunArgs> for RunSettings {
    fn from(args: RunArgs) -> Self {
        Self {
            options: RunOptions {
                run_slow: args.slow,
                debugging: args.debug,
                use_test_data: TestData::from_file_name(args.test_data.as_deref()),
            },
            profile: args.profile,
            time: args.time,
        }
    }
}

impl Config {
    /// Build config from CLI args, filling in the default year
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        // Resolve solutions directory (expand ~)
        let root = expand_tilde(&args.solutions_dir);
        if root.exists() && !root.is_dir() {
            return Err(CliError::Config(format!(
                "solutions directory {} is not a directory",
                display_path(&root)
            )));
        }

        let action = match args.command {
            Command::Run(run) => Action::Run(run.into()),
            Command::New => Action::New,
        };

        Ok(Config {
            year: args.year.unwrap_or_else(current_aoc_year),
            day: args.day,
            layout: SolutionsLayout::new(root),
            action,
        })
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && (path_str.starts_with("~/") || path_str == "~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path_str.trim_start_matches('~').trim_start_matches('/'));
    }
    path.to_path_buf()
}

/// Advent of Code year in progress on the local calendar
fn current_aoc_year() -> u16 {
    default_year(Local::now().date_naive())
}

/// This year during December, otherwise the previous one
fn default_year(today: NaiveDate) -> u16 {
    let year = if today.month() == 12 {
        today.year()
    } else {
        today.year() - 1
    };
    year.clamp(FIRST_YEAR as i32, LAST_YEAR as i32) as u16
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_default_year() {
        assert_eq!(default_year(date(2024, 12, 1)), 2024);
        assert_eq!(default_year(date(2025, 11, 30)), 2024);
        assert_eq!(default_year(date(2026, 1, 15)), 2025);
        assert_eq!(default_year(date(2010, 12, 5)), 2015);
        assert_eq!(default_year(date(2040, 6, 1)), 2030);
    }

    #[test]
    fn test_expand_tilde() {
        assert_eq!(expand_tilde(Path::new("solutions")), PathBuf::from("solutions"));
        assert_eq!(expand_tilde(Path::new("/abs/dir")), PathBuf::from("/abs/dir"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde(Path::new("~/aoc")), home.join("aoc"));
            assert_eq!(expand_tilde(Path::new("~")), home);
        }
    }

    #[test]
    fn test_run_settings_from_args() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().to_str().unwrap();
        let args = Args::try_parse_from([
            "aoc", "--year", "2016", "--solutions-dir", dir, "run", "-t", "--slow", "--profile",
        ])
        .unwrap();
        let config = Config::from_args(args).unwrap();

        assert_eq!(config.year, 2016);
        assert_eq!(config.day, 0);
        assert_eq!(config.layout.root(), temp.path());
        let Action::Run(settings) = config.action else {
            panic!("expected run");
        };
        assert_eq!(settings.options.use_test_data, TestData::Standard);
        assert!(settings.options.run_slow);
        assert!(!settings.options.debugging);
        assert!(settings.profile);
        assert!(!settings.time);
    }

    #[test]
    fn test_named_test_file() {
        let settings = RunSettings::from(RunArgs {
            test_data: Some("input.alt.txt".to_string()),
            ..RunArgs::default()
        });
        assert_eq!(
            settings.options.use_test_data,
            TestData::Named("input.alt.txt".to_string())
        );
    }

    #[test]
    fn test_solutions_dir_must_be_directory() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("not-a-dir");
        std::fs::write(&file, "").unwrap();
        let args =
            Args::try_parse_from(["aoc", "--solutions-dir", file.to_str().unwrap(), "new"]).unwrap();
        assert!(matches!(Config::from_args(args), Err(CliError::Config(_))));
    }
}
