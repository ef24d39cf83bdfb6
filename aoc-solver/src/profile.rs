//! Per-step timing collected while profiling a run

use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;

/// Aggregated timing of one named step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepStats {
    pub name: String,
    pub calls: u32,
    pub total: Duration,
}

impl StepStats {
    pub fn per_call(&self) -> Duration {
        self.total / self.calls.max(1)
    }
}

/// Collects step timings during a single-threaded run
#[derive(Debug, Default)]
pub struct Profiler {
    samples: RefCell<Vec<(String, Duration)>>,
}

impl Profiler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one execution of `name`
    pub fn record(&self, name: &str, elapsed: Duration) {
        self.samples.borrow_mut().push((name.to_string(), elapsed));
    }

    /// Stats per step name, most expensive first
    pub fn stats(&self) -> Vec<StepStats> {
        let samples = self.samples.borrow();
        let mut by_name: HashMap<&str, StepStats> = HashMap::new();
        for (name, elapsed) in samples.iter() {
            let entry = by_name.entry(name.as_str()).or_insert_with(|| StepStats {
                name: name.clone(),
                calls: 0,
                total: Duration::ZERO,
            });
            entry.calls += 1;
            entry.total += *elapsed;
        }

        let mut stats: Vec<StepStats> = by_name.into_values().collect();
        stats.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.name.cmp(&b.name)));
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_aggregate_and_sort() {
        let profiler = Profiler::new();
        profiler.record("part_1", Duration::from_millis(5));
        profiler.record("part_2", Duration::from_millis(20));
        profiler.record("part_1", Duration::from_millis(7));

        let stats = profiler.stats();
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].name, "part_2");
        assert_eq!(stats[1].name, "part_1");
        assert_eq!(stats[1].calls, 2);
        assert_eq!(stats[1].total, Duration::from_millis(12));
        assert_eq!(stats[1].per_call(), Duration::from_millis(6));
    }
}
