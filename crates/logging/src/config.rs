//! crates/logging/src/config.rs
//! Options accepted by [`basic_config`](crate::basic_config).

use crate::{Level, LineMode};

/// One-shot root configuration applied by [`basic_config`](crate::basic_config).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BasicConfig {
    /// Root level to install.
    pub level: Level,
    /// Newline policy of the installed standard-error handler.
    pub line_mode: LineMode,
}

impl BasicConfig {
    /// Creates the default configuration: [`Level::Warning`], newline-terminated.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the root level to install.
    pub const fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Sets the newline policy of the installed handler.
    pub const fn line_mode(mut self, line_mode: LineMode) -> Self {
        self.line_mode = line_mode;
        self
    }
}
