use anyhow::{anyhow, Context as _};
use aoc_solver::{AutoRegisterSolution, Context, Solution, SolveError, StepResult};

const FIRST_CODE: u64 = 20151125;
const MULTIPLIER: u64 = 252533;
const MODULUS: u64 = 33554393;

#[derive(Default, AutoRegisterSolution)]
pub struct Day25 {
    row: u64,
    column: u64,
}

impl Solution for Day25 {
    const YEAR: Option<u16> = Some(2015);
    const DAY: Option<u8> = Some(25);
    type Input = String;

    fn post_init(&mut self, ctx: &Context<'_, Self::Input>) -> Result<(), SolveError> {
        let text = ctx.input();
        self.row = number_after(text, "row ").map_err(SolveError::failed)?;
        self.column = number_after(text, "column ").map_err(SolveError::failed)?;
        if self.row == 0 || self.column == 0 {
            return Err(SolveError::failed(anyhow!(
                "rows and columns start at 1, got row {}, column {}",
                self.row,
                self.column
            )));
        }
        Ok(())
    }

    fn part_1(&mut self, ctx: &Context<'_, Self::Input>) -> StepResult {
        ctx.step("part_1")
            .expect(22244613)
            .run(|| Ok(Some(code_at(self.row, self.column).into())))
    }
}

fn number_after(text: &str, label: &str) -> anyhow::Result<u64> {
    let start = text
        .find(label)
        .ok_or_else(|| anyhow!("no {label:?} in input"))?
        + label.len();
    let digits: String = text[start..]
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits
        .parse()
        .with_context(|| format!("invalid number after {label:?}"))
}

/// Codes are filled in diagonals; the code at (row, column) is the n-th one
fn code_at(row: u64, column: u64) -> u64 {
    let diagonal = row + column - 1;
    let index = diagonal * (diagonal - 1) / 2 + column;
    FIRST_CODE * mod_pow(MULTIPLIER, index - 1, MODULUS) % MODULUS
}

fn mod_pow(mut base: u64, mut exp: u64, modulus: u64) -> u64 {
    let mut result = 1;
    base %= modulus;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result * base % modulus;
        }
        base = base * base % modulus;
        exp >>= 1;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::RunOptions;

    #[test]
    fn test_code_grid_corner() {
        assert_eq!(code_at(1, 1), 20151125);
        assert_eq!(code_at(2, 1), 31916031);
        assert_eq!(code_at(1, 2), 18749137);
        assert_eq!(code_at(6, 6), 27995004);
    }

    #[test]
    fn test_number_after() {
        let text = "Enter the code at row 3010, column 3019.";
        assert_eq!(number_after(text, "row ").unwrap(), 3010);
        assert_eq!(number_after(text, "column ").unwrap(), 3019);
        assert!(number_after(text, "page ").is_err());
    }

    #[test]
    fn test_zero_row_or_column_rejected() {
        let options = RunOptions::default();
        for text in ["Enter the code at row 0, column 3.", "Enter the code at row 2, column 0."] {
            let input = text.to_string();
            let ctx = Context::new(2015, 25, &input, &options, None);
            let result = Day25::default().post_init(&ctx);
            assert!(matches!(result, Err(SolveError::Failed(_))), "{text}");
        }

        let input = "Enter the code at row 2, column 1.".to_string();
        let ctx = Context::new(2015, 25, &input, &options, None);
        let mut day = Day25::default();
        day.post_init(&ctx).unwrap();
        assert_eq!(code_at(day.row, day.column), 31916031);
    }
}
