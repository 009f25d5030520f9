//! crates/logging/src/root.rs
//! Process-wide root configuration: the ordered handler list and the
//! effective level.
//!
//! Every function in this module takes the root lock only for the duration of
//! a single read or write. Sequences of calls are not atomic; hold
//! [`exclusive`](crate::exclusive) across the sequence when other threads may
//! reconfigure the root at the same time.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::config::BasicConfig;
use crate::handlers::StreamHandler;
use crate::{HandlerRef, Level, Record};

/// Name reported by the root logger.
pub const ROOT_LOGGER_NAME: &str = "root";

struct RootConfig {
    handlers: Vec<HandlerRef>,
    level: Level,
}

impl RootConfig {
    const fn new() -> Self {
        Self {
            handlers: Vec::new(),
            level: Level::Warning,
        }
    }
}

static ROOT: RwLock<RootConfig> = RwLock::new(RootConfig::new());

fn read() -> RwLockReadGuard<'static, RootConfig> {
    ROOT.read().unwrap_or_else(PoisonError::into_inner)
}

fn write() -> RwLockWriteGuard<'static, RootConfig> {
    ROOT.write().unwrap_or_else(PoisonError::into_inner)
}

/// Returns the registered handlers in registration order.
#[must_use]
pub fn handlers() -> Vec<HandlerRef> {
    read().handlers.clone()
}

/// Reports whether at least one handler is registered.
#[must_use]
pub fn has_handlers() -> bool {
    !read().handlers.is_empty()
}

/// Appends `handler` unless the same handler is already registered.
///
/// Returns `true` when the handler was added.
pub fn add_handler(handler: HandlerRef) -> bool {
    let mut root = write();
    if root.handlers.contains(&handler) {
        return false;
    }
    root.handlers.push(handler);
    true
}

/// Removes `handler` if it is registered.
///
/// Returns `true` when a handler was removed.
pub fn remove_handler(handler: &HandlerRef) -> bool {
    let mut root = write();
    match root.handlers.iter().position(|h| h == handler) {
        Some(index) => {
            root.handlers.remove(index);
            true
        }
        None => false,
    }
}

/// Removes every registered handler and returns them in registration order.
pub fn clear_handlers() -> Vec<HandlerRef> {
    std::mem::take(&mut write().handlers)
}

/// Returns the root's effective level.
#[must_use]
pub fn level() -> Level {
    read().level
}

/// Sets the root's effective level.
pub fn set_level(level: Level) {
    write().level = level;
}

/// Reports whether records at `level` pass the root threshold.
#[must_use]
pub fn is_enabled_for(level: Level) -> bool {
    level >= self::level()
}

/// Hands `record` to every registered handler.
///
/// The handler list is copied before any handler runs, so handlers may log or
/// reconfigure the root without deadlocking. Level filtering is the caller's
/// responsibility; see [`Logger::log`](crate::Logger::log).
pub fn dispatch(record: &Record) {
    for handler in handlers() {
        handler.handle(record);
    }
}

/// Installs a standard-error [`StreamHandler`] and sets the level, unless
/// handlers are already registered.
///
/// Returns `true` when the configuration was applied.
///
/// # Examples
///
/// ```
/// use logging::{BasicConfig, Level};
///
/// let _lock = logging::exclusive();
/// let applied = logging::basic_config(BasicConfig::new().level(Level::Debug));
/// if applied {
///     assert_eq!(logging::level(), Level::Debug);
/// }
/// ```
pub fn basic_config(config: BasicConfig) -> bool {
    let mut root = write();
    if !root.handlers.is_empty() {
        return false;
    }
    let stderr = StreamHandler::stderr();
    stderr.set_line_mode(config.line_mode);
    root.handlers.push(HandlerRef::new(stderr));
    root.level = config.level;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MemoryHandler, exclusive};
    use std::sync::Arc;

    struct Reset;

    impl Drop for Reset {
        fn drop(&mut self) {
            clear_handlers();
            set_level(Level::Warning);
        }
    }

    #[test]
    fn add_handler_ignores_duplicates() {
        let _lock = exclusive();
        let _reset = Reset;
        clear_handlers();

        let handler = HandlerRef::new(MemoryHandler::new());
        assert!(add_handler(handler.clone()));
        assert!(!add_handler(handler.clone()));
        assert_eq!(handlers(), vec![handler]);
    }

    #[test]
    fn remove_handler_reports_absence() {
        let _lock = exclusive();
        let _reset = Reset;
        clear_handlers();

        let handler = HandlerRef::new(MemoryHandler::new());
        assert!(!remove_handler(&handler));
        add_handler(handler.clone());
        assert!(remove_handler(&handler));
        assert!(!has_handlers());
    }

    #[test]
    fn clear_handlers_returns_previous_in_order() {
        let _lock = exclusive();
        let _reset = Reset;
        clear_handlers();

        let a = HandlerRef::new(MemoryHandler::new());
        let b = HandlerRef::new(MemoryHandler::new());
        add_handler(a.clone());
        add_handler(b.clone());

        assert_eq!(clear_handlers(), vec![a, b]);
        assert!(handlers().is_empty());
    }

    #[test]
    fn set_level_controls_threshold() {
        let _lock = exclusive();
        let _reset = Reset;

        set_level(Level::Error);
        assert_eq!(level(), Level::Error);
        assert!(is_enabled_for(Level::Critical));
        assert!(!is_enabled_for(Level::Warning));
    }

    #[test]
    fn dispatch_reaches_every_handler() {
        let _lock = exclusive();
        let _reset = Reset;
        clear_handlers();

        let first = Arc::new(MemoryHandler::new());
        let second = Arc::new(MemoryHandler::new());
        add_handler(HandlerRef::from(Arc::clone(&first)));
        add_handler(HandlerRef::from(Arc::clone(&second)));

        dispatch(&Record::new("root", Level::Info, "fan out"));

        assert_eq!(first.messages(), ["fan out"]);
        assert_eq!(second.messages(), ["fan out"]);
    }

    #[test]
    fn basic_config_is_skipped_when_handlers_exist() {
        let _lock = exclusive();
        let _reset = Reset;
        clear_handlers();

        let existing = HandlerRef::new(MemoryHandler::new());
        add_handler(existing.clone());

        assert!(!basic_config(BasicConfig::new().level(Level::Trace)));
        assert_eq!(handlers(), vec![existing]);
        assert_eq!(level(), Level::Warning);
    }

    #[test]
    fn basic_config_installs_stream_handler() {
        let _lock = exclusive();
        let _reset = Reset;
        clear_handlers();

        assert!(basic_config(BasicConfig::new().level(Level::Info)));
        assert_eq!(handlers().len(), 1);
        assert_eq!(level(), Level::Info);
    }

    #[test]
    fn basic_config_handler_writes_to_stderr() {
        let _lock = exclusive();
        let _reset = Reset;
        clear_handlers();

        assert!(basic_config(
            BasicConfig::new().line_mode(crate::LineMode::WithoutNewline)
        ));
        let installed = handlers();
        assert_eq!(installed.len(), 1);
        assert!(
            installed[0].describe().contains("Stderr"),
            "unexpected handler {}",
            installed[0].describe()
        );
    }
}
