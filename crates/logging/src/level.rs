//! crates/logging/src/level.rs
//! Severity levels shared by the root configuration, loggers, and records.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Severity attached to a [`Record`](crate::Record) and used as a threshold.
///
/// Levels are totally ordered from [`Level::Trace`] (least important) to
/// [`Level::Critical`]. A record is processed when its level is greater than or
/// equal to the effective threshold of the logger that produced it.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Level {
    /// Fine-grained tracing output.
    Trace,
    /// Diagnostic output intended for developers.
    Debug,
    /// Routine informational output.
    Info,
    /// Something unexpected that does not stop the program.
    #[default]
    Warning,
    /// An operation failed.
    Error,
    /// The program may be unable to continue.
    Critical,
}

impl Level {
    /// All levels in ascending order of importance.
    pub const ALL: [Self; 6] = [
        Self::Trace,
        Self::Debug,
        Self::Info,
        Self::Warning,
        Self::Error,
        Self::Critical,
    ];

    /// Returns the uppercase label used when rendering records.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging::Level;
    ///
    /// assert_eq!(Level::Warning.as_str(), "WARNING");
    /// assert_eq!(Level::Debug.as_str(), "DEBUG");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`Level`] from text fails.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unrecognised logging level: {input:?}")]
pub struct ParseLevelError {
    input: String,
}

impl ParseLevelError {
    /// Returns the text that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    /// Parses a level name case-insensitively. `warn` and `fatal` are accepted
    /// as aliases for [`Level::Warning`] and [`Level::Critical`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            "critical" | "fatal" => Ok(Self::Critical),
            _ => Err(ParseLevelError {
                input: s.to_owned(),
            }),
        }
    }
}

#[cfg(feature = "tracing")]
impl From<tracing::Level> for Level {
    fn from(level: tracing::Level) -> Self {
        match level {
            tracing::Level::TRACE => Self::Trace,
            tracing::Level::DEBUG => Self::Debug,
            tracing::Level::INFO => Self::Info,
            tracing::Level::WARN => Self::Warning,
            tracing::Level::ERROR => Self::Error,
        }
    }
}
