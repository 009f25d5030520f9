//! crates/logging/src/registry.rs
//! Name-keyed logger registry.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError, RwLock};

use crate::root::{self, ROOT_LOGGER_NAME};
use crate::{Level, Record};

/// A named logger obtained from [`get_logger`].
///
/// Loggers do not own handlers: records that pass the logger's effective level
/// are dispatched to the root handlers. A logger without its own level inherits
/// from the nearest registered dotted ancestor (`"app.net"` for
/// `"app.net.http"`), and finally from the root.
pub struct Logger {
    name: String,
    level: RwLock<Option<Level>>,
    is_root: bool,
}

impl Logger {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            level: RwLock::new(None),
            is_root: false,
        }
    }

    fn root() -> Self {
        Self {
            name: ROOT_LOGGER_NAME.to_owned(),
            level: RwLock::new(None),
            is_root: true,
        }
    }

    /// The logger's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reports whether this is the root logger.
    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.is_root
    }

    /// The level set directly on this logger, if any. The root logger always
    /// reports the root level.
    #[must_use]
    pub fn level(&self) -> Option<Level> {
        if self.is_root {
            return Some(root::level());
        }
        *self.level.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Sets or clears this logger's own level.
    ///
    /// On the root logger, `Some(level)` updates the root level and `None` is
    /// ignored.
    pub fn set_level(&self, level: Option<Level>) {
        if self.is_root {
            if let Some(level) = level {
                root::set_level(level);
            }
            return;
        }
        *self.level.write().unwrap_or_else(PoisonError::into_inner) = level;
    }

    /// The threshold that applies to this logger after inheritance.
    #[must_use]
    pub fn effective_level(&self) -> Level {
        if let Some(level) = self.level() {
            return level;
        }
        let registry = lock_registry();
        parents(&self.name)
            .filter_map(|parent| registry.get(parent))
            .find_map(|logger| logger.level())
            .unwrap_or_else(root::level)
    }

    /// Reports whether a record at `level` would be dispatched.
    #[must_use]
    pub fn is_enabled_for(&self, level: Level) -> bool {
        level >= self.effective_level()
    }

    /// Dispatches `message` to the root handlers when `level` passes the
    /// effective level.
    pub fn log(&self, level: Level, message: impl Into<String>) {
        if self.is_enabled_for(level) {
            root::dispatch(&Record::new(self.name.as_str(), level, message));
        }
    }

    /// Logs at [`Level::Trace`].
    pub fn trace(&self, message: impl Into<String>) {
        self.log(Level::Trace, message);
    }

    /// Logs at [`Level::Debug`].
    pub fn debug(&self, message: impl Into<String>) {
        self.log(Level::Debug, message);
    }

    /// Logs at [`Level::Info`].
    pub fn info(&self, message: impl Into<String>) {
        self.log(Level::Info, message);
    }

    /// Logs at [`Level::Warning`].
    pub fn warning(&self, message: impl Into<String>) {
        self.log(Level::Warning, message);
    }

    /// Logs at [`Level::Error`].
    pub fn error(&self, message: impl Into<String>) {
        self.log(Level::Error, message);
    }

    /// Logs at [`Level::Critical`].
    pub fn critical(&self, message: impl Into<String>) {
        self.log(Level::Critical, message);
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("level", &self.level())
            .finish()
    }
}

/// Dotted ancestors of `name`, nearest first.
fn parents(name: &str) -> impl Iterator<Item = &str> {
    name.rmatch_indices('.').map(move |(index, _)| &name[..index])
}

fn registry() -> &'static Mutex<HashMap<String, Arc<Logger>>> {
    static REGISTRY: OnceLock<Mutex<HashMap<String, Arc<Logger>>>> = OnceLock::new();
    REGISTRY.get_or_init(|| Mutex::new(HashMap::new()))
}

fn lock_registry() -> MutexGuard<'static, HashMap<String, Arc<Logger>>> {
    registry().lock().unwrap_or_else(PoisonError::into_inner)
}

/// Returns the root logger.
#[must_use]
pub fn root_logger() -> Arc<Logger> {
    static ROOT_LOGGER: OnceLock<Arc<Logger>> = OnceLock::new();
    Arc::clone(ROOT_LOGGER.get_or_init(|| Arc::new(Logger::root())))
}

/// Returns the logger registered under `name`, creating it on first use.
///
/// Repeated lookups of the same name return the same logger. The empty name
/// and `"root"` both yield the [root logger](root_logger).
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// let first = logging::get_logger("app.net");
/// let second = logging::get_logger("app.net");
/// assert!(Arc::ptr_eq(&first, &second));
/// assert_eq!(first.name(), "app.net");
///
/// assert!(logging::get_logger("").is_root());
/// ```
#[must_use]
pub fn get_logger(name: &str) -> Arc<Logger> {
    if name.is_empty() || name == ROOT_LOGGER_NAME {
        return root_logger();
    }
    let mut registry = lock_registry();
    if let Some(logger) = registry.get(name) {
        return Arc::clone(logger);
    }
    let logger = Arc::new(Logger::new(name));
    registry.insert(name.to_owned(), Arc::clone(&logger));
    logger
}
