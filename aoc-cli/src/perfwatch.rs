//! Wall-clock timing of a run, optionally with per-step statistics

use aoc_solver::{Profiler, StepStats};
use itertools::Itertools;
use std::io::{self, Write};
use std::time::{Duration, Instant};

/// Stopwatch around a solution run
///
/// With profiling enabled it also owns the [`Profiler`] the solution's
/// steps report into.
#[derive(Debug, Default)]
pub struct PerfWatch {
    start_time: Option<Instant>,
    stop_time: Option<Instant>,
    profiler: Option<Profiler>,
}

impl PerfWatch {
    pub fn new(profile: bool) -> Self {
        Self {
            profiler: profile.then(Profiler::new),
            ..Self::default()
        }
    }

    pub fn start(mut self) -> Self {
        self.start_time = Some(Instant::now());
        self
    }

    pub fn stop(&mut self) {
        self.stop_time = Some(Instant::now());
    }

    pub fn profiler(&self) -> Option<&Profiler> {
        self.profiler.as_ref()
    }

    /// Elapsed nanoseconds; 0 unless both started and stopped in order
    pub fn runtime_ns(&self) -> u128 {
        match (self.start_time, self.stop_time) {
            (Some(start), Some(stop)) => stop.saturating_duration_since(start).as_nanos(),
            _ => 0,
        }
    }

    /// Elapsed seconds rounded to three decimals
    pub fn runtime(&self) -> f64 {
        (self.runtime_ns() as f64 / 1_000_000.0).round() / 1_000.0
    }

    /// Write the per-step table, most expensive step first
    ///
    /// Does nothing when profiling was not requested.
    pub fn write_stats(&self, out: &mut dyn Write) -> io::Result<()> {
        let Some(profiler) = &self.profiler else {
            return Ok(());
        };
        let stats = profiler.stats();
        writeln!(
            out,
            "{} step calls in {:.3} seconds\n",
            stats.iter().map(|s| s.calls).sum::<u32>(),
            self.runtime()
        )?;
        writeln!(out, "{:>8} {:>10} {:>10}  step", "ncalls", "tottime", "percall")?;
        if !stats.is_empty() {
            writeln!(out, "{}", stats.iter().map(format_row).join("\n"))?;
        }
        writeln!(out)
    }
}

fn format_row(stats: &StepStats) -> String {
    format!(
        "{:>8} {:>10} {:>10}  {}",
        stats.calls,
        seconds(stats.total),
        seconds(stats.per_call()),
        stats.name
    )
}

fn seconds(d: Duration) -> String {
    format!("{:.6}", d.as_secs_f64())
}
