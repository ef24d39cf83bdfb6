//! Property-based tests for input loading

use aoc_solver::{load_input, Input, InputError, InputKind};
use proptest::prelude::*;
use std::fs;
use tempfile::TempDir;

const ALL_KINDS: [InputKind; 4] = [
    InputKind::Text,
    InputKind::Integer,
    InputKind::StrSplit,
    InputKind::IntSplit,
];

fn write_input(contents: &str) -> (TempDir, std::path::PathBuf) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("input.txt");
    fs::write(&path, contents).unwrap();
    (temp, path)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// **Property 1: Newline-only files are empty**
    /// *For any* file consisting only of newlines, every input kind fails
    /// with `InputError::Empty`.
    #[test]
    fn prop_newline_only_is_empty(newlines in 0usize..16) {
        let (_temp, path) = write_input(&"\n".repeat(newlines));
        for kind in ALL_KINDS {
            let result = load_input(&path, kind, "\n");
            prop_assert!(matches!(result, Err(InputError::Empty { .. })), "{kind}: {result:?}");
        }
    }

    /// **Property 2: Surrounding blank lines are ignored**
    /// *For any* list of integers, padding the file with blank lines on
    /// either side yields the same INTSPLIT and STRSPLIT values.
    #[test]
    fn prop_split_ignores_surrounding_blank_lines(
        values in prop::collection::vec(any::<i128>(), 1..20),
        leading in 0usize..4,
        trailing in 0usize..4,
    ) {
        let body = values.iter().map(i128::to_string).collect::<Vec<_>>().join("\n");
        let padded = format!("{}{}{}", "\n".repeat(leading), body, "\n".repeat(trailing));
        let (_temp, path) = write_input(&padded);

        let ints = load_input(&path, InputKind::IntSplit, "\n").unwrap();
        prop_assert_eq!(ints, Input::IntSplit(values.clone()));

        let strings = load_input(&path, InputKind::StrSplit, "\n").unwrap();
        let expected: Vec<String> = values.iter().map(i128::to_string).collect();
        prop_assert_eq!(strings, Input::StrSplit(expected));
    }

    /// **Property 3: Integer input tolerates a trailing newline**
    #[test]
    fn prop_integer_with_trailing_newline(value in any::<i128>()) {
        let (_temp, path) = write_input(&format!("{value}\n"));
        prop_assert_eq!(
            load_input(&path, InputKind::Integer, "\n").unwrap(),
            Input::Integer(value)
        );
    }

    /// **Property 4: Custom separators split blocks**
    /// *For any* list of lowercase words, joining with a blank line and
    /// loading with the `"\n\n"` separator recovers the words.
    #[test]
    fn prop_blank_line_separator(words in prop::collection::vec("[a-z]{1,8}", 1..10)) {
        let (_temp, path) = write_input(&format!("{}\n", words.join("\n\n")));
        prop_assert_eq!(
            load_input(&path, InputKind::StrSplit, "\n\n").unwrap(),
            Input::StrSplit(words)
        );
    }
}

#[test]
fn test_missing_file_is_not_found() {
    let temp = TempDir::new().unwrap();
    let result = load_input(&temp.path().join("input.txt"), InputKind::Text, "\n");
    assert!(matches!(result, Err(InputError::NotFound { .. })));
}
