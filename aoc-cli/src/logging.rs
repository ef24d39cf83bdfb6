//! Diagnostic logging to stderr
//!
//! Puzzle output goes to stdout; everything logged here goes to stderr so the
//! two never interleave in a redirected report.

use tracing::warn;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// `EnvFilter` directives, e.g. `debug` or `aoc_solver=debug`
pub const LEVEL_ENV: &str = "AOC_LOG_LEVEL";
/// One of `full`, `compact`, `pretty`
pub const FORMAT_ENV: &str = "AOC_LOG_FORMAT";

const DEFAULT_LEVEL: &str = "info";

/// Output style of the fmt layer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    Full,
    #[default]
    Compact,
    Pretty,
}

impl LogFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "full" => Some(Self::Full),
            "compact" => Some(Self::Compact),
            "pretty" => Some(Self::Pretty),
            _ => None,
        }
    }
}

/// Initialize the tracing subscriber.
///
/// Reads `AOC_LOG_LEVEL` (default `info`) and `AOC_LOG_FORMAT` (default
/// `compact`).
///
/// # Example
/// ```bash
/// AOC_LOG_LEVEL=debug AOC_LOG_FORMAT=pretty aoc run -t
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_env(LEVEL_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));
    let requested = std::env::var(FORMAT_ENV).ok();
    let format = requested
        .as_deref()
        .and_then(LogFormat::parse)
        .unwrap_or_default();

    let layer = fmt::layer().with_writer(std::io::stderr).with_target(false);
    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Full => registry.with(layer).init(),
        LogFormat::Compact => registry.with(layer.compact()).init(),
        LogFormat::Pretty => registry.with(layer.pretty()).init(),
    }

    if let Some(value) = requested
        && LogFormat::parse(&value).is_none()
    {
        warn!("unknown {FORMAT_ENV} value {value:?}, using compact");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format() {
        assert_eq!(LogFormat::parse("full"), Some(LogFormat::Full));
        assert_eq!(LogFormat::parse(" Pretty "), Some(LogFormat::Pretty));
        assert_eq!(LogFormat::parse("COMPACT"), Some(LogFormat::Compact));
        assert_eq!(LogFormat::parse("json"), None);
        assert_eq!(LogFormat::default(), LogFormat::Compact);
    }
}
