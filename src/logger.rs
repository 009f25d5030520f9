//! Loggers named after the calling function.

use std::hint::black_box;
use std::sync::Arc;

use logging::Logger;

use crate::caller::caller_name;

/// Returns the registered logger named after the function `skip` frames above
/// the caller, creating it on first use.
///
/// `skip` follows [`caller_name`]: `0` names the function calling
/// `caller_logger`. When no identifier can be derived the root logger is
/// returned.
///
/// ```
/// use logging_helpers::caller_logger;
///
/// #[inline(never)]
/// fn sync_files() {
///     let log = caller_logger(0);
///     assert!(log.name().ends_with("sync_files"));
///     log.info("starting");
/// }
///
/// sync_files();
/// ```
#[inline(never)]
#[must_use]
pub fn caller_logger(skip: usize) -> Arc<Logger> {
    let name = black_box(caller_name(skip.saturating_add(1)));
    logging::get_logger(&name)
}
