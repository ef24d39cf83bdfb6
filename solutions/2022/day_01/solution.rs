use anyhow::Context as _;
use aoc_solver::{AutoRegisterSolution, Context, Solution, SolveError, StepResult};

#[derive(Default, AutoRegisterSolution)]
pub struct Day01;

impl Solution for Day01 {
    const YEAR: Option<u16> = Some(2022);
    const DAY: Option<u8> = Some(1);
    const SEPARATOR: &'static str = "\n\n";
    type Input = Vec<String>;

    fn solve(&mut self, ctx: &Context<'_, Self::Input>) -> StepResult {
        ctx.step("solve").expect((1300, 3499)).run(|| {
            let mut totals = ctx
                .input()
                .iter()
                .map(|elf| calories(elf))
                .collect::<anyhow::Result<Vec<i64>>>()
                .map_err(SolveError::failed)?;
            totals.sort_unstable_by(|a, b| b.cmp(a));
            ctx.debug(&[&totals]);

            let top: i64 = totals.first().copied().unwrap_or_default();
            let top_three: i64 = totals.iter().take(3).sum();
            Ok(Some((top, top_three).into()))
        })
    }
}

fn calories(elf: &str) -> anyhow::Result<i64> {
    elf.lines()
        .map(|line| {
            line.trim()
                .parse::<i64>()
                .with_context(|| format!("invalid calorie count {line:?}"))
        })
        .sum()
}
