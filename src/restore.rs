//! Scoped save/restore of the root logging configuration.
//!
//! [`LoggingRestore`] captures the root handlers and level when it is created
//! and reinstates exactly those values when it is dropped, whatever the scope
//! did in between. Restoration runs on every exit path: normal completion,
//! early `return`, `?` propagation, and panics unwinding through the guard.
//!
//! The guard operates on the single process-wide configuration. Two guards
//! active on different threads at the same time can restore over each other;
//! hold [`logging::exclusive`] across the scope when that matters.

use logging::{HandlerRef, Level};
use tracing::trace;

/// Options applied when a [`LoggingRestore`] scope is entered.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RestoreOptions {
    /// Deregister every handler present at entry for the duration of the
    /// scope. The level is left unchanged.
    pub clear_handlers: bool,
}

impl RestoreOptions {
    /// Creates the default options: handlers stay registered on entry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            clear_handlers: false,
        }
    }

    /// Sets whether handlers present at entry are removed for the scope.
    pub const fn clear_handlers(mut self, clear: bool) -> Self {
        self.clear_handlers = clear;
        self
    }
}

/// Root handlers and level captured at one point in time.
///
/// A snapshot cannot be modified after it is taken. Handlers are held by
/// identity, so a handler the scope removes is still restored.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LoggingSnapshot {
    handlers: Vec<HandlerRef>,
    level: Level,
}

impl LoggingSnapshot {
    /// Captures the current root handlers (in registration order) and level.
    #[must_use]
    pub fn capture() -> Self {
        Self {
            handlers: logging::handlers(),
            level: logging::level(),
        }
    }

    /// Handlers registered at capture time, in registration order.
    #[must_use]
    pub fn handlers(&self) -> &[HandlerRef] {
        &self.handlers
    }

    /// Root level at capture time.
    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    /// Reports whether the live root configuration equals this snapshot.
    #[must_use]
    pub fn matches_current(&self) -> bool {
        *self == Self::capture()
    }

    /// Makes the live root configuration equal to this snapshot.
    ///
    /// Every currently registered handler is removed, the captured handlers are
    /// registered again in their original order, and the captured level is
    /// set.
    pub fn restore(&self) {
        let dropped = logging::clear_handlers();
        for handler in &self.handlers {
            logging::add_handler(handler.clone());
        }
        logging::set_level(self.level);
        trace!(
            removed = dropped.len(),
            restored = self.handlers.len(),
            level = %self.level,
            "restored logging state"
        );
    }
}

/// RAII guard that restores the root logging configuration when dropped.
///
/// # Examples
///
/// Lower the level inside a scope and observe it restored afterwards:
///
/// ```
/// use logging::Level;
/// use logging_helpers::{LoggingRestore, RestoreOptions};
///
/// let _lock = logging::exclusive();
/// logging::set_level(Level::Debug);
/// {
///     let _restore = LoggingRestore::enter(RestoreOptions::new());
///     logging::set_level(Level::Info);
///     assert_eq!(logging::level(), Level::Info);
/// }
/// assert_eq!(logging::level(), Level::Debug);
/// # logging::set_level(Level::Warning);
/// ```
#[must_use = "dropping the guard immediately restores the captured logging state"]
#[derive(Debug)]
pub struct LoggingRestore {
    snapshot: LoggingSnapshot,
    options: RestoreOptions,
}

impl LoggingRestore {
    /// Captures the root configuration and applies `options`.
    pub fn enter(options: RestoreOptions) -> Self {
        let snapshot = LoggingSnapshot::capture();
        if options.clear_handlers {
            for handler in snapshot.handlers() {
                logging::remove_handler(handler);
            }
        }
        trace!(
            handlers = snapshot.handlers.len(),
            level = %snapshot.level,
            clear_handlers = options.clear_handlers,
            "captured logging state"
        );
        Self { snapshot, options }
    }

    /// The state that will be restored when the guard is dropped.
    #[must_use]
    pub const fn snapshot(&self) -> &LoggingSnapshot {
        &self.snapshot
    }

    /// The options the scope was entered with.
    #[must_use]
    pub const fn options(&self) -> RestoreOptions {
        self.options
    }
}

impl Drop for LoggingRestore {
    fn drop(&mut self) {
        self.snapshot.restore();
    }
}

/// Runs `scope` inside a [`LoggingRestore`] guard and returns its output.
///
/// The output, including an `Err` value, is passed through unchanged; a panic
/// in `scope` keeps unwinding after the configuration has been restored.
///
/// ```
/// use logging::{HandlerRef, MemoryHandler};
/// use logging_helpers::{RestoreOptions, with_logging_restored};
///
/// let _lock = logging::exclusive();
/// let before = logging::handlers();
/// let outcome: Result<(), &str> = with_logging_restored(RestoreOptions::new(), || {
///     logging::add_handler(HandlerRef::new(MemoryHandler::new()));
///     Err("scope failed")
/// });
/// assert_eq!(outcome, Err("scope failed"));
/// assert_eq!(logging::handlers(), before);
/// ```
pub fn with_logging_restored<F, R>(options: RestoreOptions, scope: F) -> R
where
    F: FnOnce() -> R,
{
    let _restore = LoggingRestore::enter(options);
    scope()
}

#[cfg(test)]
mod tests {
    use super::*;
    use logging::MemoryHandler;

    fn memory() -> HandlerRef {
        HandlerRef::new(MemoryHandler::new())
    }

    #[test]
    fn options_builder_sets_clear_handlers() {
        assert!(!RestoreOptions::new().clear_handlers);
        assert!(RestoreOptions::new().clear_handlers(true).clear_handlers);
        assert_eq!(RestoreOptions::default(), RestoreOptions::new());
    }

    #[test]
    fn snapshot_restore_reinstates_order_and_level() {
        let _lock = logging::exclusive();
        let outer = LoggingSnapshot::capture();

        let a = memory();
        let b = memory();
        logging::add_handler(a.clone());
        logging::add_handler(b.clone());
        logging::set_level(Level::Error);
        let snapshot = LoggingSnapshot::capture();

        logging::remove_handler(&a);
        logging::add_handler(memory());
        logging::add_handler(a.clone());
        logging::set_level(Level::Trace);
        assert!(!snapshot.matches_current());

        snapshot.restore();
        assert!(snapshot.matches_current());
        assert_eq!(snapshot.level(), Level::Error);
        assert!(snapshot.handlers().ends_with(&[a, b]));

        outer.restore();
    }

    #[test]
    fn guard_exposes_snapshot_and_options() {
        let _lock = logging::exclusive();
        let before = LoggingSnapshot::capture();
        let guard = LoggingRestore::enter(RestoreOptions::new().clear_handlers(true));

        assert_eq!(guard.snapshot(), &before);
        assert!(guard.options().clear_handlers);
        drop(guard);

        assert!(before.matches_current());
    }
}
