//! crates/logging/src/session.rs
//! Process-wide lock serialising users of the root configuration.

use std::sync::{Mutex, MutexGuard, PoisonError};

static EXCLUSIVE: Mutex<()> = Mutex::new(());

/// Guard granting exclusive use of the root configuration among cooperating
/// callers.
///
/// The root configuration is a single process-wide value. Nothing in this
/// crate takes this lock on its own; code that performs a multi-step
/// reconfiguration (for example a save/modify/restore scope) while other
/// threads may do the same acquires it with [`exclusive`] and holds the guard
/// until the sequence is complete. Test suites use it to keep tests that touch
/// the root from interleaving.
#[must_use = "the lock is released as soon as the guard is dropped"]
pub struct ExclusiveRoot {
    _guard: MutexGuard<'static, ()>,
}

impl std::fmt::Debug for ExclusiveRoot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ExclusiveRoot")
    }
}

/// Blocks until exclusive use of the root configuration is granted.
///
/// A panic while the lock was held does not poison later acquisitions.
pub fn exclusive() -> ExclusiveRoot {
    ExclusiveRoot {
        _guard: EXCLUSIVE.lock().unwrap_or_else(PoisonError::into_inner),
    }
}
