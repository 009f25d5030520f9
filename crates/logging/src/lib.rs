#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` is the process-wide logging facility used across the workspace.
//! It keeps a single root configuration (an ordered list of [`Handler`]s and an
//! effective [`Level`]) and a name-keyed registry of [`Logger`]s. Loggers route
//! records that pass their effective level to the root handlers.
//!
//! # Design
//!
//! - The root configuration lives in a `static` [`RwLock`](std::sync::RwLock)
//!   and is manipulated through free functions ([`handlers`], [`add_handler`],
//!   [`remove_handler`], [`set_level`], ...). Each call is individually
//!   synchronised; multi-step sequences are not.
//! - Handlers are shared through [`HandlerRef`], which compares by identity so
//!   that a handler removed from the root can later be re-added.
//! - [`get_logger`] creates loggers on first use and returns the same
//!   [`Arc<Logger>`](std::sync::Arc) on later lookups.
//! - With the `tracing` feature, [`RootLayer`] routes `tracing` events into the
//!   same handlers.
//!
//! # Invariants
//!
//! - The handler list never contains the same handler twice.
//! - Handlers run after the root lock is released.
//! - Lock poisoning is ignored: a panic in one caller never prevents later
//!   callers from reading or restoring the configuration.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use logging::{HandlerRef, Level, MemoryHandler};
//!
//! let _lock = logging::exclusive();
//! let memory = Arc::new(MemoryHandler::new());
//! let handle = HandlerRef::from(Arc::clone(&memory));
//! logging::add_handler(handle.clone());
//! logging::set_level(Level::Info);
//!
//! let logger = logging::get_logger("app.net");
//! logger.debug("filtered out");
//! logger.info("connected");
//!
//! assert_eq!(memory.messages(), ["connected"]);
//! logging::remove_handler(&handle);
//! logging::set_level(Level::Warning);
//! ```

mod config;
mod handler;
mod handlers;
mod level;
mod line_mode;
mod record;
mod registry;
mod root;
mod session;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use config::BasicConfig;
pub use handler::{Handler, HandlerRef};
pub use handlers::{MemoryHandler, StreamHandler};
pub use level::{Level, ParseLevelError};
pub use line_mode::LineMode;
pub use record::Record;
pub use registry::{Logger, get_logger, root_logger};
pub use root::{
    ROOT_LOGGER_NAME, add_handler, basic_config, clear_handlers, dispatch, handlers,
    has_handlers, is_enabled_for, level, remove_handler, set_level,
};
pub use session::{ExclusiveRoot, exclusive};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{RootLayer, init_tracing, init_tracing_with_filter};
