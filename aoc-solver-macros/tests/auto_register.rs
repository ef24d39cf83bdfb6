use aoc_solver::{
    Answer, AutoRegisterSolution, Context, RunOptions, Solution, SolutionRegistryBuilder,
    SolutionsLayout, StepResult, TestData,
};
use std::fs;
use tempfile::TempDir;

#[derive(Default, AutoRegisterSolution)]
struct Doubler;

impl Solution for Doubler {
    const YEAR: Option<u16> = Some(2031);
    const DAY: Option<u8> = Some(4);
    type Input = i128;

    fn part_1(&mut self, ctx: &Context<'_, Self::Input>) -> StepResult {
        ctx.step("part_1").run(|| Ok(Some((*ctx.input() * 2).into())))
    }

    fn part_2(&mut self, ctx: &Context<'_, Self::Input>) -> StepResult {
        ctx.step("part_2").run(|| Ok(Some((*ctx.input() * 4).into())))
    }
}

#[derive(Default, AutoRegisterSolution)]
enum Lines {
    #[default]
    Empty,
}

impl Solution for Lines {
    const YEAR: Option<u16> = Some(2031);
    const DAY: Option<u8> = Some(5);
    type Input = Vec<String>;

    fn solve(&mut self, ctx: &Context<'_, Self::Input>) -> StepResult {
        let Lines::Empty = self;
        Ok(Some((ctx.input().len(), "done").into()))
    }
}

#[test]
fn test_derived_solutions_are_collected() {
    let registry = SolutionRegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();

    assert_eq!(registry.len(), 2);
    assert!(registry.contains(2031, 4));
    assert!(registry.contains(2031, 5));
}

#[test]
fn test_plugin_filter_excludes_everything() {
    let registry = SolutionRegistryBuilder::new()
        .register_solution_plugins(|_| false)
        .unwrap()
        .build();

    assert!(registry.is_empty());
}

#[test]
fn test_derived_solution_runs_from_registry() {
    let temp = TempDir::new().unwrap();
    let layout = SolutionsLayout::new(temp.path());
    fs::create_dir_all(layout.day_dir(2031, 4)).unwrap();
    fs::write(layout.input_path(2031, 4, &TestData::Off), "21\n").unwrap();

    let registry = SolutionRegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();
    let mut solution = registry
        .create(2031, 4, &layout, RunOptions::default())
        .unwrap();

    let mut out = Vec::new();
    let answers = solution.run_and_print(&mut out, None).unwrap();
    assert_eq!(answers.part_1, Some(Answer::Int(42)));
    assert_eq!(answers.part_2, Some(Answer::Int(84)));
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "= Solutions for 2031 Day 4\n\n== Part 1\n=== 42\n\n== Part 2\n=== 84\n\n"
    );
}

#[test]
fn test_registering_twice_is_a_duplicate() {
    let result = SolutionRegistryBuilder::new()
        .register::<Doubler>()
        .unwrap()
        .register_all_plugins();

    assert!(matches!(
        result,
        Err(aoc_solver::RegistrationError::Duplicate(2031, 4))
    ));
}
