//! Property-based tests for the step pipeline and the default solution shape

use aoc_solver::{
    Answer, Context, RunOptions, Solution, SolveError, Step, StepGate, StepResult, TestData,
};
use proptest::prelude::*;
use std::cell::Cell;

fn options(run_slow: bool, test_data: bool) -> RunOptions {
    RunOptions {
        run_slow,
        debugging: false,
        use_test_data: if test_data {
            TestData::Standard
        } else {
            TestData::Off
        },
    }
}

#[derive(Default)]
struct PartOneOnly;

impl Solution for PartOneOnly {
    type Input = String;

    fn part_1(&mut self, ctx: &Context<'_, Self::Input>) -> StepResult {
        Ok(Some(ctx.input().len().into()))
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// **Property 1: Slow steps run only when allowed**
    /// *For any* flags, a slow step's body runs iff `run_slow` is set or the
    /// run uses test data; otherwise the step yields no answer.
    #[test]
    fn prop_slow_gate(run_slow in any::<bool>(), test_data in any::<bool>(), value in any::<i64>()) {
        let options = options(run_slow, test_data);
        let gate = StepGate { year: 2020, day: 3, options: &options, profiler: None };
        let ran = Cell::new(false);

        let result = Step::new(gate, "part_1")
            .slow()
            .run(|| {
                ran.set(true);
                Ok(Some(value.into()))
            })
            .unwrap();

        let should_run = run_slow || test_data;
        prop_assert_eq!(ran.get(), should_run);
        prop_assert_eq!(result, should_run.then(|| Answer::Int(value as i128)));
    }

    /// **Property 2: Expected answers are enforced on real data only**
    /// *For any* pair of differing values, the step fails with
    /// `AnswerMismatch` on real data and passes the value through on test data.
    #[test]
    fn prop_expected_answer(actual in any::<i64>(), expected in any::<i64>(), test_data in any::<bool>()) {
        prop_assume!(actual != expected);
        let options = options(false, test_data);
        let gate = StepGate { year: 2020, day: 3, options: &options, profiler: None };

        let result = Step::new(gate, "part_2")
            .expect(expected)
            .run(|| Ok(Some(actual.into())));

        if test_data {
            prop_assert_eq!(result.unwrap(), Some(Answer::Int(actual as i128)));
        } else {
            match result {
                Err(SolveError::AnswerMismatch { step, actual: a, expected: e, .. }) => {
                    prop_assert_eq!(step, "part_2");
                    prop_assert_eq!(a, Answer::Int(actual as i128));
                    prop_assert_eq!(e, Answer::Int(expected as i128));
                }
                other => prop_assert!(false, "expected AnswerMismatch, got {:?}", other),
            }
        }
    }

    /// **Property 3: Matching answers always pass**
    #[test]
    fn prop_matching_answer_passes(value in any::<i64>(), test_data in any::<bool>()) {
        let options = options(false, test_data);
        let gate = StepGate { year: 2020, day: 3, options: &options, profiler: None };
        let result = Step::new(gate, "part_1").expect(value).run(|| Ok(Some(value.into())));
        prop_assert_eq!(result.unwrap(), Some(Answer::Int(value as i128)));
    }

    /// **Property 4: Part 2 is optional only on day 25**
    /// *For any* day, the default `solve` of a part-1-only solution succeeds
    /// with an absent part 2 on day 25 and fails with `NotImplemented` otherwise.
    #[test]
    fn prop_default_part_2(day in 1u8..=25, text in "[a-z]{1,20}") {
        let options = RunOptions::default();
        let ctx = Context::new(2019, day, &text, &options, None);
        let result = PartOneOnly.solve(&ctx);

        if day == 25 {
            prop_assert_eq!(
                result.unwrap(),
                Some(Answer::pair(Some(text.len().into()), None))
            );
        } else {
            prop_assert!(
                matches!(result, Err(SolveError::NotImplemented { part: 2 })),
                "expected NotImplemented for part 2 on day {}, got {:?}",
                day,
                result
            );
        }
    }
}
