//! Core solution trait and related types

use crate::context::Context;
use crate::error::{ConfigurationMissing, SolveError};
use crate::input::FromInput;
use crate::step::StepResult;
use tracing::debug;

/// The shape every day's solution implements.
///
/// A solution declares its puzzle id and input type, then implements either
/// a combined [`Solution::solve`] or the independent [`Solution::part_1`] /
/// [`Solution::part_2`] steps. The implementing type holds any state the
/// steps share; it is built with `Default` and receives the parsed input
/// through the [`Context`].
///
/// # Example
///
/// ```
/// use aoc_solver::{Context, Solution, StepResult};
///
/// #[derive(Default)]
/// struct Day1;
///
/// impl Solution for Day1 {
///     const YEAR: Option<u16> = Some(2018);
///     const DAY: Option<u8> = Some(1);
///     type Input = Vec<i128>;
///
///     fn part_1(&mut self, ctx: &Context<'_, Self::Input>) -> StepResult {
///         ctx.step("part_1").run(|| Ok(Some(ctx.input().iter().sum::<i128>().into())))
///     }
/// }
/// ```
pub trait Solution {
    /// Puzzle year; must be declared
    const YEAR: Option<u16> = None;
    /// Puzzle day (1-25); must be declared
    const DAY: Option<u8> = None;
    /// Separator for split input kinds
    const SEPARATOR: &'static str = "\n";

    /// Parsed input type; fixes the input kind the loader uses
    type Input: FromInput;

    /// Called once after the input is loaded, before any step runs
    fn post_init(&mut self, _ctx: &Context<'_, Self::Input>) -> Result<(), SolveError> {
        Ok(())
    }

    /// Compute both answers.
    ///
    /// Override when one set of calculations yields both parts; the result
    /// must be a two-element [`Answer::Seq`](crate::Answer::Seq), or `None`
    /// when there is nothing to report.
    fn solve(&mut self, ctx: &Context<'_, Self::Input>) -> StepResult {
        let part_1 = self.part_1(ctx)?;
        let part_2 = self.part_2(ctx)?;
        Ok(Some(crate::Answer::pair(part_1, part_2)))
    }

    /// Answer for part 1. Only needed without a combined `solve`.
    fn part_1(&mut self, _ctx: &Context<'_, Self::Input>) -> StepResult {
        Err(SolveError::NotImplemented { part: 1 })
    }

    /// Answer for part 2. Only needed without a combined `solve`.
    ///
    /// Day 25 never has a part 2, so the default skips it there.
    fn part_2(&mut self, ctx: &Context<'_, Self::Input>) -> StepResult {
        if ctx.day() == 25 {
            debug!("skipping part 2 because day is 25");
            Ok(None)
        } else {
            Err(SolveError::NotImplemented { part: 2 })
        }
    }
}

/// Checked access to the declared puzzle id
pub trait SolutionExt: Solution {
    fn year() -> Result<u16, ConfigurationMissing> {
        Self::YEAR.ok_or(ConfigurationMissing {
            solution: std::any::type_name::<Self>(),
            field: "YEAR",
        })
    }

    fn day() -> Result<u8, ConfigurationMissing> {
        Self::DAY.ok_or(ConfigurationMissing {
            solution: std::any::type_name::<Self>(),
            field: "DAY",
        })
    }
}

impl<T: Solution + ?Sized> SolutionExt for T {}
