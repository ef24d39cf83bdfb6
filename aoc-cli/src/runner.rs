//! Running one day's solution and reporting its answers

use crate::config::{Config, RunSettings};
use crate::error::CliError;
use crate::perfwatch::PerfWatch;
use aoc_solver::{display_path, Answers, SolutionError, SolutionRegistry, SolutionsLayout};
use itertools::Itertools;
use std::io::Write;
use tracing::{debug, error, info};

/// Day to run: the requested one, or the highest `day_NN` directory for 0
pub fn resolve_day(layout: &SolutionsLayout, year: u16, day: u8) -> Result<u8, CliError> {
    if day != 0 {
        return Ok(day);
    }
    layout.last_day(year)?.ok_or_else(|| {
        CliError::Config(format!(
            "no day directories found in {}",
            display_path(&layout.year_dir(year))
        ))
    })
}

/// Create, run and print the configured day, then its timing or profile
pub fn run(
    config: &Config,
    settings: &RunSettings,
    registry: &SolutionRegistry,
    out: &mut dyn Write,
) -> Result<Answers, CliError> {
    let year = config.year;
    let day = resolve_day(&config.layout, year, config.day)?;
    debug!(year, day, options = ?settings.options, "running solution");

    let mut solution = registry
        .create(year, day, &config.layout, settings.options.clone())
        .inspect_err(|e| {
            error!(year, day, "{e}");
            if matches!(e, SolutionError::NotFound { .. }) {
                log_registered_days(registry, year);
            }
        })?;

    let mut watch = PerfWatch::new(settings.profile).start();
    let answers = solution
        .run_and_print(out, watch.profiler())
        .inspect_err(|e| error!(year, day, "{e}"))?;
    watch.stop();

    if settings.profile {
        watch.write_stats(out)?;
    } else if settings.time {
        writeln!(out, "== Runtime\n=== Parts ran in {:.3}s\n", watch.runtime())?;
    }

    Ok(answers)
}

/// Registered days of `year`, ascending
pub fn registered_days(registry: &SolutionRegistry, year: u16) -> Vec<u8> {
    registry
        .iter_info()
        .filter(|info| info.year == year)
        .map(|info| info.day)
        .collect()
}

fn log_registered_days(registry: &SolutionRegistry, year: u16) {
    let days = registered_days(registry, year);
    if days.is_empty() {
        info!(year, "no solutions are compiled in for {year}; rebuild after adding one");
    } else {
        info!(year, "days compiled in for {year}: {}", days.iter().join(", "));
    }
}
