//! Read-only view of a run handed to solution methods

use crate::options::RunOptions;
use crate::profile::Profiler;
use crate::step::{Step, StepGate};
use std::fmt::{Debug, Write as _};

/// Everything a solving step may look at: the parsed input, the puzzle id
/// and the run's flags
pub struct Context<'a, I> {
    input: &'a I,
    gate: StepGate<'a>,
}

impl<'a, I> Context<'a, I> {
    pub fn new(
        year: u16,
        day: u8,
        input: &'a I,
        options: &'a RunOptions,
        profiler: Option<&'a Profiler>,
    ) -> Self {
        Self {
            input,
            gate: StepGate {
                year,
                day,
                options,
                profiler,
            },
        }
    }

    /// The parsed puzzle input
    pub fn input(&self) -> &'a I {
        self.input
    }

    pub fn year(&self) -> u16 {
        self.gate.year
    }

    pub fn day(&self) -> u8 {
        self.gate.day
    }

    pub fn options(&self) -> &'a RunOptions {
        self.gate.options
    }

    pub fn is_test_run(&self) -> bool {
        self.gate.options.use_test_data.is_enabled()
    }

    /// Start a step named `name`
    pub fn step(&self, name: impl Into<String>) -> Step<'a> {
        Step::new(self.gate, name)
    }

    /// Pretty-print values when the run is debugging
    pub fn debug(&self, objects: &[&dyn Debug]) {
        self.debug_block(objects, false);
    }

    /// Like [`Context::debug`], optionally followed by a blank line
    pub fn debug_block(&self, objects: &[&dyn Debug], trailing_newline: bool) {
        if let Some(rendered) = self.debug_output(objects, trailing_newline) {
            print!("{rendered}");
        }
    }

    /// What [`Context::debug_block`] prints; `None` unless debugging
    pub fn debug_output(&self, objects: &[&dyn Debug], trailing_newline: bool) -> Option<String> {
        self.gate
            .options
            .debugging
            .then(|| format_debug(objects, trailing_newline))
    }
}

/// One `{:#?}` rendering per line, plus an optional blank line
pub fn format_debug(objects: &[&dyn Debug], trailing_newline: bool) -> String {
    let mut out = String::new();
    for object in objects {
        // Writing to a String cannot fail
        let _ = writeln!(out, "{object:#?}");
    }
    if trailing_newline {
        out.push('\n');
    }
    out
}
