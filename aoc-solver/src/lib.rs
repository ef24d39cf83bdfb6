//! Advent of Code Solution Library
//!
//! The contract every day's solution implements, plus the machinery that
//! feeds it: locating and parsing input files, gating slow steps, checking
//! previously verified answers, and a registry mapping (year, day) to
//! solution factories.
//!
//! # Quick Example
//!
//! ```no_run
//! use aoc_solver::{
//!     Context, DynSolution, RunOptions, Solution, SolutionRegistryBuilder, SolutionsLayout,
//!     StepResult,
//! };
//!
//! #[derive(Default)]
//! struct Day1;
//!
//! impl Solution for Day1 {
//!     const YEAR: Option<u16> = Some(2018);
//!     const DAY: Option<u8> = Some(1);
//!     type Input = Vec<i128>;
//!
//!     fn part_1(&mut self, ctx: &Context<'_, Self::Input>) -> StepResult {
//!         ctx.step("part_1")
//!             .expect(454)
//!             .run(|| Ok(Some(ctx.input().iter().sum::<i128>().into())))
//!     }
//!
//!     fn part_2(&mut self, ctx: &Context<'_, Self::Input>) -> StepResult {
//!         ctx.step("part_2").slow().run(|| Ok(None))
//!     }
//! }
//!
//! let registry = SolutionRegistryBuilder::new().register::<Day1>().unwrap().build();
//! let layout = SolutionsLayout::new("solutions");
//!
//! // Reads solutions/2018/day_01/input.test.txt
//! let mut solution = registry.create(2018, 1, &layout, RunOptions::test()).unwrap();
//! solution.run_and_print(&mut std::io::stdout(), None).unwrap();
//! ```
//!
//! # Key Concepts
//!
//! ## Solution Trait
//!
//! [`Solution`] declares the year, day, separator and input type, and
//! implements either a combined `solve` or independent `part_1`/`part_2`.
//! The input type picks the parse: `String`, `i128`, `Vec<String>` or
//! `Vec<i128>`.
//!
//! ## Steps
//!
//! [`Context::step`] runs a body through the slow gate and the expected
//! answer check. Expected answers are only enforced on real input.
//!
//! ## Plugin System and Derive Macro
//!
//! Use `#[derive(AutoRegisterSolution)]` to register a solution with
//! `inventory`; [`SolutionRegistryBuilder::register_all_plugins`] collects
//! them at startup.

mod answer;
mod context;
mod error;
mod input;
mod instance;
mod layout;
mod options;
mod profile;
mod registry;
mod solution;
mod step;

// Re-export public API
pub use answer::Answer;
pub use context::{format_debug, Context};
pub use error::{ConfigurationMissing, InputError, RegistrationError, SolutionError, SolveError};
pub use input::{load_input, parse_input, FromInput, Input, InputKind};
pub use instance::{Answers, DynSolution, SolutionInstance, SOLVE_TOTAL};
pub use layout::{
    day_dir_name, display_path, parse_day_dir_name, SolutionsLayout, INPUT_FILE, SOLUTION_FILE,
    TEST_INPUT_FILE,
};
pub use options::{RunOptions, TestData};
pub use profile::{Profiler, StepStats};
pub use registry::{
    RegisterableSolution, SolutionFactory, SolutionInfo, SolutionPlugin, SolutionRegistry,
    SolutionRegistryBuilder, SolutionType,
};
pub use solution::{Solution, SolutionExt};
pub use step::{check_answer, run_step, slow_gate, timed, Step, StepConfig, StepGate, StepResult};

// Re-export inventory for use by the derive macro
pub use inventory;

// Re-export the derive macro
pub use aoc_solver_macros::AutoRegisterSolution;
