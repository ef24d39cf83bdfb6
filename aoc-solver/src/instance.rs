//! Solution instance implementation

use crate::answer::Answer;
use crate::context::Context;
use crate::error::{SolutionError, SolveError};
use crate::input::{load_input, FromInput};
use crate::layout::SolutionsLayout;
use crate::options::RunOptions;
use crate::profile::Profiler;
use crate::solution::{Solution, SolutionExt};
use std::io::Write;
use std::time::Instant;
use tracing::debug;

/// Profiler entry covering the whole `solve` call
pub const SOLVE_TOTAL: &str = "(all parts)";

/// The two answers of a day; either may be absent
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answers {
    pub part_1: Option<Answer>,
    pub part_2: Option<Answer>,
}

impl Answers {
    /// Destructure a combined step's result
    ///
    /// `None` means nothing was computed; anything but a two-element
    /// sequence is malformed.
    pub fn from_combined(result: Option<Answer>) -> Result<Self, SolveError> {
        match result {
            None => Ok(Self::default()),
            Some(Answer::Seq(items)) if items.len() == 2 => {
                let mut items = items.into_iter();
                Ok(Self {
                    part_1: items.next().flatten(),
                    part_2: items.next().flatten(),
                })
            }
            Some(other) => Err(SolveError::MalformedResult(other)),
        }
    }

    /// Write the `Part 1` / `Part 2` sections, skipping absent parts
    pub fn write_report(&self, out: &mut dyn Write, year: u16, day: u8) -> std::io::Result<()> {
        writeln!(out, "= Solutions for {year} Day {day}")?;
        for (part, answer) in [(1, &self.part_1), (2, &self.part_2)] {
            if let Some(answer) = answer {
                writeln!(out, "\n== Part {part}")?;
                writeln!(out, "=== {answer}")?;
            }
        }
        writeln!(out)
    }
}

/// A constructed solution: puzzle id, flags, parsed input and solution state
///
/// The input is loaded exactly once, in [`SolutionInstance::new`], and only
/// lent out immutably afterwards.
pub struct SolutionInstance<S: Solution> {
    year: u16,
    day: u8,
    options: RunOptions,
    input: S::Input,
    solution: S,
}

impl<S: Solution + Default> SolutionInstance<S> {
    /// Load the day's input from `layout` and run the `post_init` hook
    pub fn new(layout: &SolutionsLayout, options: RunOptions) -> Result<Self, SolutionError> {
        let year = S::year()?;
        let day = S::day()?;
        let path = layout.input_path(year, day, &options.use_test_data);
        debug!(year, day, path = %path.display(), "loading input");

        let raw = load_input(&path, S::Input::KIND, S::SEPARATOR)?;
        let input = S::Input::from_input(raw)?;
        Self::with_input(year, day, options, input)
    }

    /// Build around an already-parsed input
    pub fn with_input(
        year: u16,
        day: u8,
        options: RunOptions,
        input: S::Input,
    ) -> Result<Self, SolutionError> {
        let mut solution = S::default();
        let ctx = Context::new(year, day, &input, &options, None);
        solution.post_init(&ctx)?;

        Ok(Self {
            year,
            day,
            options,
            input,
            solution,
        })
    }
}

impl<S: Solution> SolutionInstance<S> {
    pub fn input(&self) -> &S::Input {
        &self.input
    }

    pub fn options(&self) -> &RunOptions {
        &self.options
    }
}

/// Type-erased interface for running any solution through dynamic dispatch
///
/// # Example
///
/// ```no_run
/// use aoc_solver::DynSolution;
///
/// fn example(mut solution: Box<dyn DynSolution>) -> Result<(), aoc_solver::SolutionError> {
///     let answers = solution.run_and_print(&mut std::io::stdout(), None)?;
///     println!("part 1 was {:?}", answers.part_1);
///     Ok(())
/// }
/// ```
pub trait DynSolution {
    fn year(&self) -> u16;

    fn day(&self) -> u8;

    /// Run the solving steps and collect both answers
    fn solve(&mut self, profiler: Option<&Profiler>) -> Result<Answers, SolutionError>;

    /// Solve, then write the report to `out`
    fn run_and_print(
        &mut self,
        out: &mut dyn Write,
        profiler: Option<&Profiler>,
    ) -> Result<Answers, SolutionError> {
        let answers = self.solve(profiler)?;
        answers.write_report(out, self.year(), self.day())?;
        Ok(answers)
    }
}

impl<S: Solution> DynSolution for SolutionInstance<S> {
    fn year(&self) -> u16 {
        self.year
    }

    fn day(&self) -> u8 {
        self.day
    }

    fn solve(&mut self, profiler: Option<&Profiler>) -> Result<Answers, SolutionError> {
        let ctx = Context::new(self.year, self.day, &self.input, &self.options, profiler);
        let start = Instant::now();
        let result = self.solution.solve(&ctx)?;
        if let Some(profiler) = profiler {
            profiler.record(SOLVE_TOTAL, start.elapsed());
        }
        Ok(Answers::from_combined(result)?)
    }
}
