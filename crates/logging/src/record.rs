//! crates/logging/src/record.rs
//! Records dispatched from loggers to handlers.

use std::fmt;

use crate::Level;

/// A single event produced by a [`Logger`](crate::Logger) and handed to every
/// registered [`Handler`](crate::Handler).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Record {
    logger: String,
    level: Level,
    message: String,
}

impl Record {
    /// Creates a record for `logger` at `level`.
    #[must_use]
    pub fn new(logger: impl Into<String>, level: Level, message: impl Into<String>) -> Self {
        Self {
            logger: logger.into(),
            level,
            message: message.into(),
        }
    }

    /// Name of the logger that produced the record.
    #[must_use]
    pub fn logger(&self) -> &str {
        &self.logger
    }

    /// Severity of the record.
    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    /// Message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Record {
    /// Renders `LEVEL:logger:message`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.level, self.logger, self.message)
    }
}
