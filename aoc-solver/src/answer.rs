//! Answer values produced by solving steps

use std::fmt;

/// A value produced by a solving step
///
/// Integers of every primitive width up to 64 bits convert into `Int`,
/// strings into `Text`, and 2-tuples into a two-element `Seq` (the shape a
/// combined step returns).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Answer {
    Int(i128),
    Text(String),
    Seq(Vec<Option<Answer>>),
}

impl Answer {
    /// Pair two per-part results into the combined shape
    pub fn pair(part_1: Option<Answer>, part_2: Option<Answer>) -> Self {
        Self::Seq(vec![part_1, part_2])
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Int(n) => write!(f, "{n}"),
            Answer::Text(s) => f.write_str(s),
            Answer::Seq(items) => {
                f.write_str("(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    match item {
                        Some(answer) => write!(f, "{answer}")?,
                        None => f.write_str("_")?,
                    }
                }
                f.write_str(")")
            }
        }
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Answer {
                fn from(value: $ty) -> Self {
                    Answer::Int(value as i128)
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);

impl From<String> for Answer {
    fn from(value: String) -> Self {
        Answer::Text(value)
    }
}

impl From<&str> for Answer {
    fn from(value: &str) -> Self {
        Answer::Text(value.to_string())
    }
}

impl<A: Into<Answer>, B: Into<Answer>> From<(A, B)> for Answer {
    fn from((a, b): (A, B)) -> Self {
        Answer::pair(Some(a.into()), Some(b.into()))
    }
}
