#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging_helpers` adds two conveniences on top of the [`logging`] facility:
//!
//! - [`LoggingRestore`] captures the root handlers and level, lets a scope
//!   change them freely, and puts the captured values back on every exit path
//!   including panics.
//! - [`caller_name`], [`CallerResolver`] and [`caller_logger`] derive a dotted
//!   `module.Type.function` identifier from the call stack and look up the
//!   logger registered under it.
//!
//! # Design
//!
//! Restoration is a `Drop` guard over a [`LoggingSnapshot`]; the snapshot holds
//! handlers by identity so handlers removed in the scope come back. Caller
//! resolution walks the stack with the `backtrace` crate and decomposes the
//! demangled symbol of the selected frame.
//!
//! # Invariants
//!
//! - After a [`LoggingRestore`] is dropped the root handler list and level equal
//!   the values captured when it was created.
//! - The caller functions never fail: an undeterminable frame yields the empty
//!   identifier, which [`caller_logger`] maps to the root logger.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use logging::{HandlerRef, Level, MemoryHandler};
//! use logging_helpers::{RestoreOptions, caller_logger, with_logging_restored};
//!
//! #[inline(never)]
//! fn quiet_step() {
//!     caller_logger(0).warning("only seen by the scoped handler");
//! }
//!
//! let _lock = logging::exclusive();
//! let before = logging::handlers();
//! let memory = Arc::new(MemoryHandler::new());
//!
//! with_logging_restored(RestoreOptions::new().clear_handlers(true), || {
//!     logging::add_handler(HandlerRef::from(Arc::clone(&memory)));
//!     logging::set_level(Level::Debug);
//!     quiet_step();
//! });
//!
//! assert_eq!(memory.messages(), ["only seen by the scoped handler"]);
//! assert_eq!(logging::handlers(), before);
//! ```

mod caller;
mod logger;
mod restore;

pub use caller::{CallerIdentity, CallerResolver, ModuleSource, caller_name};
pub use logger::caller_logger;
pub use restore::{LoggingRestore, LoggingSnapshot, RestoreOptions, with_logging_restored};

pub use logging;
