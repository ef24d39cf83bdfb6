//! Locating, reading and parsing puzzle input files

use crate::error::InputError;
use crate::layout::display_path;
use std::fmt;
use std::fs;
use std::path::Path;

/// Shape a solution wants its input in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKind {
    /// One solid block of text
    Text,
    /// A single integer
    Integer,
    /// Strings split by the separator
    StrSplit,
    /// Integers split by the separator
    IntSplit,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            InputKind::Text => "TEXT",
            InputKind::Integer => "INTEGER",
            InputKind::StrSplit => "STRSPLIT",
            InputKind::IntSplit => "INTSPLIT",
        })
    }
}

/// Parsed puzzle input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Text(String),
    Integer(i128),
    StrSplit(Vec<String>),
    IntSplit(Vec<i128>),
}

impl Input {
    pub fn kind(&self) -> InputKind {
        match self {
            Input::Text(_) => InputKind::Text,
            Input::Integer(_) => InputKind::Integer,
            Input::StrSplit(_) => InputKind::StrSplit,
            Input::IntSplit(_) => InputKind::IntSplit,
        }
    }
}

/// Read the file at `path` and parse it as `kind`
///
/// Leading and trailing `\n` are stripped before the empty check and the
/// conversion.
pub fn load_input(path: &Path, kind: InputKind, separator: &str) -> Result<Input, InputError> {
    if !path.exists() {
        return Err(InputError::NotFound {
            path: display_path(path),
        });
    }

    let raw = fs::read_to_string(path).map_err(|source| InputError::Read {
        path: display_path(path),
        source,
    })?;

    let data = raw.trim_matches('\n');
    if data.is_empty() {
        return Err(InputError::Empty {
            path: display_path(path),
        });
    }

    parse_input(data, kind, separator)
}

/// Convert already-stripped input text into `kind`
pub fn parse_input(data: &str, kind: InputKind, separator: &str) -> Result<Input, InputError> {
    match kind {
        InputKind::Text => Ok(Input::Text(data.to_string())),
        InputKind::Integer => parse_int(data).map(Input::Integer),
        InputKind::StrSplit => Ok(Input::StrSplit(
            data.split(separator).map(str::to_string).collect(),
        )),
        InputKind::IntSplit => data
            .split(separator)
            .map(parse_int)
            .collect::<Result<Vec<_>, _>>()
            .map(Input::IntSplit),
    }
}

fn parse_int(value: &str) -> Result<i128, InputError> {
    value
        .trim()
        .parse()
        .map_err(|source| InputError::InvalidInteger {
            value: value.to_string(),
            source,
        })
}

/// Types a solution can take its input as
///
/// The implementing type fixes the [`InputKind`] the loader parses with.
pub trait FromInput: Sized {
    const KIND: InputKind;

    fn from_input(input: Input) -> Result<Self, InputError>;
}

macro_rules! impl_from_input {
    ($ty:ty, $kind:ident) => {
        impl FromInput for $ty {
            const KIND: InputKind = InputKind::$kind;

            fn from_input(input: Input) -> Result<Self, InputError> {
                match input {
                    Input::$kind(value) => Ok(value),
                    other => Err(InputError::KindMismatch {
                        declared: Self::KIND,
                        loaded: other.kind(),
                    }),
                }
            }
        }
    };
}

impl_from_input!(String, Text);
impl_from_input!(i128, Integer);
impl_from_input!(Vec<String>, StrSplit);
impl_from_input!(Vec<i128>, IntSplit);
