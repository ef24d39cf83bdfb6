use anyhow::anyhow;
use aoc_solver::{AutoRegisterSolution, Context, Solution, SolveError, StepResult};

#[derive(Default, AutoRegisterSolution)]
pub struct Day01 {
    rotations: Vec<i16>,
    counts: Option<DialCounts>,
}

#[derive(Debug, Clone, Copy)]
struct DialCounts {
    zero_counts: u16,
    pass_zero_counts: u16,
}

impl Solution for Day01 {
    const YEAR: Option<u16> = Some(2025);
    const DAY: Option<u8> = Some(1);
    type Input = Vec<String>;

    fn post_init(&mut self, ctx: &Context<'_, Self::Input>) -> Result<(), SolveError> {
        self.rotations = ctx
            .input()
            .iter()
            .enumerate()
            .map(|(line_idx, line)| {
                parse_rotation(line).map_err(|e| anyhow!("(line {}) {}", line_idx + 1, e))
            })
            .collect::<anyhow::Result<_>>()
            .map_err(SolveError::failed)?;
        Ok(())
    }

    fn part_1(&mut self, ctx: &Context<'_, Self::Input>) -> StepResult {
        ctx.step("part_1")
            .expect(1)
            .run(|| Ok(Some(self.dial_counts().zero_counts.into())))
    }

    fn part_2(&mut self, ctx: &Context<'_, Self::Input>) -> StepResult {
        ctx.step("part_2")
            .expect(10)
            .run(|| Ok(Some(self.dial_counts().pass_zero_counts.into())))
    }
}

impl Day01 {
    /// Both parts come out of one pass over the rotations
    fn dial_counts(&mut self) -> DialCounts {
        let rotations = &self.rotations;
        *self.counts.get_or_insert_with(|| {
            let (_, zero_counts, pass_zero_counts) = rotations.iter().fold(
                (50i16, 0u16, 0u16),
                |(mut dial_value, mut zero_counts, mut pass_zero_counts), rotate_val| {
                    let old_dial_value = dial_value;
                    dial_value += rotate_val;
                    if dial_value <= 0 && old_dial_value != 0 {
                        pass_zero_counts += 1;
                    }
                    pass_zero_counts += (dial_value / 100).unsigned_abs();
                    dial_value %= 100;
                    if dial_value < 0 {
                        dial_value += 100;
                    }
                    if dial_value == 0 {
                        zero_counts += 1;
                    }
                    (dial_value, zero_counts, pass_zero_counts)
                },
            );

            DialCounts {
                zero_counts,
                pass_zero_counts,
            }
        })
    }
}

fn parse_rotation(line: &str) -> anyhow::Result<i16> {
    let negative = match line.as_bytes().first() {
        Some(b'L') => true,
        Some(b'R') => false,
        _ => return Err(anyhow!("first character need to be 'L' or 'R'")),
    };
    let val: i16 = line[1..].trim().parse()?;
    if val < 0 {
        Err(anyhow!("Rotate value must be non negative"))
    } else if negative {
        Ok(-val)
    } else {
        Ok(val)
    }
}
