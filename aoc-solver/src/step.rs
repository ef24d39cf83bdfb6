//! Step pipeline: slow gating, timing and expected-answer checks
//!
//! A step runs as `slow_gate -> body -> check_answer`. Each stage is a plain
//! function taking the run's [`StepGate`] and the step's [`StepConfig`];
//! [`Step`] is the builder solutions reach through `Context::step`.

use crate::answer::Answer;
use crate::error::SolveError;
use crate::options::RunOptions;
use crate::profile::Profiler;
use std::time::Instant;
use tracing::info;

/// What every step returns: an answer, or `None` when nothing was computed
pub type StepResult = Result<Option<Answer>, SolveError>;

/// Run-wide state the pipeline stages consult
#[derive(Debug, Clone, Copy)]
pub struct StepGate<'a> {
    pub year: u16,
    pub day: u8,
    pub options: &'a RunOptions,
    pub profiler: Option<&'a Profiler>,
}

impl StepGate<'_> {
    fn is_test_run(&self) -> bool {
        self.options.use_test_data.is_enabled()
    }
}

/// Per-step configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepConfig {
    pub name: String,
    /// Skip unless running slow steps or on test data
    pub slow: bool,
    /// Answer the step must produce on real input
    pub expected: Option<Answer>,
}

impl StepConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slow: false,
            expected: None,
        }
    }
}

/// Run `body` unless the step is slow and the run did not opt in
///
/// Test-data runs always execute the body.
pub fn slow_gate<F>(gate: &StepGate<'_>, config: &StepConfig, body: F) -> StepResult
where
    F: FnOnce() -> StepResult,
{
    if !config.slow || gate.options.run_slow || gate.is_test_run() {
        return body();
    }
    info!(step = %config.name, "Skipping slow function ({})", config.name);
    Ok(None)
}

/// Compare a step's result to its declared answer
///
/// Only real-input runs are checked, and an absent result always passes.
pub fn check_answer(gate: &StepGate<'_>, config: &StepConfig, result: Option<Answer>) -> StepResult {
    if let (Some(expected), Some(actual)) = (&config.expected, &result)
        && !gate.is_test_run()
        && actual != expected
    {
        return Err(SolveError::AnswerMismatch {
            year: gate.year,
            day: gate.day,
            step: config.name.clone(),
            actual: actual.clone(),
            expected: expected.clone(),
        });
    }
    Ok(result)
}

/// Run `body`, recording its duration when profiling
pub fn timed<F>(gate: &StepGate<'_>, name: &str, body: F) -> StepResult
where
    F: FnOnce() -> StepResult,
{
    let Some(profiler) = gate.profiler else {
        return body();
    };
    let start = Instant::now();
    let result = body();
    profiler.record(name, start.elapsed());
    result
}

/// The full pipeline for one step
pub fn run_step<F>(gate: &StepGate<'_>, config: &StepConfig, body: F) -> StepResult
where
    F: FnOnce() -> StepResult,
{
    let result = slow_gate(gate, config, || timed(gate, &config.name, body))?;
    check_answer(gate, config, result)
}

/// Builder over [`run_step`]
///
/// ```
/// use aoc_solver::{RunOptions, Step, StepGate};
///
/// let options = RunOptions::default();
/// let gate = StepGate { year: 2015, day: 1, options: &options, profiler: None };
/// let answer = Step::new(gate, "part_1")
///     .expect(6)
///     .run(|| Ok(Some((1 + 2 + 3).into())))
///     .unwrap();
/// assert_eq!(answer, Some(6.into()));
/// ```
#[must_use = "a step does nothing until `run` is called"]
pub struct Step<'a> {
    gate: StepGate<'a>,
    config: StepConfig,
}

impl<'a> Step<'a> {
    pub fn new(gate: StepGate<'a>, name: impl Into<String>) -> Self {
        Self {
            gate,
            config: StepConfig::new(name),
        }
    }

    /// Mark the step as slow
    pub fn slow(mut self) -> Self {
        self.config.slow = true;
        self
    }

    /// Declare the answer the step must produce on real input
    pub fn expect(mut self, expected: impl Into<Answer>) -> Self {
        self.config.expected = Some(expected.into());
        self
    }

    pub fn config(&self) -> &StepConfig {
        &self.config
    }

    pub fn run<F>(self, body: F) -> StepResult
    where
        F: FnOnce() -> StepResult,
    {
        run_step(&self.gate, &self.config, body)
    }
}
