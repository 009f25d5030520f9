//! crates/logging/src/handler.rs
//! Handler trait and the shared, identity-compared handle stored by the root.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use crate::Record;

/// A sink that receives every [`Record`] dispatched through the root
/// configuration.
///
/// Handlers are invoked after the root lock has been released, so an
/// implementation may itself log or inspect the root configuration.
pub trait Handler: Send + Sync {
    /// Processes one record.
    fn handle(&self, record: &Record);

    /// Short human-readable description used by [`HandlerRef`]'s `Debug`
    /// output.
    fn describe(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Shared handle to a registered [`Handler`].
///
/// Two handles are equal when they point at the same allocation; the root
/// configuration tracks handlers by identity rather than by value, so the same
/// handler can be removed and later re-added.
///
/// # Examples
///
/// ```
/// use logging::{HandlerRef, MemoryHandler};
///
/// let first = HandlerRef::new(MemoryHandler::new());
/// let alias = first.clone();
/// let other = HandlerRef::new(MemoryHandler::new());
///
/// assert_eq!(first, alias);
/// assert_ne!(first, other);
/// ```
#[derive(Clone)]
pub struct HandlerRef(Arc<dyn Handler>);

impl HandlerRef {
    /// Wraps a handler into a new shared handle.
    #[must_use]
    pub fn new<H>(handler: H) -> Self
    where
        H: Handler + 'static,
    {
        Self(Arc::new(handler))
    }

    /// Reports whether both handles refer to the same handler.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<H> From<Arc<H>> for HandlerRef
where
    H: Handler + 'static,
{
    fn from(handler: Arc<H>) -> Self {
        Self(handler)
    }
}

impl Deref for HandlerRef {
    type Target = dyn Handler;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

impl PartialEq for HandlerRef {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for HandlerRef {}

impl fmt::Debug for HandlerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("HandlerRef")
            .field(&self.0.describe())
            .field(&Arc::as_ptr(&self.0).cast::<()>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Level, MemoryHandler};

    #[test]
    fn clones_compare_equal() {
        let handler = HandlerRef::new(MemoryHandler::new());
        assert_eq!(handler, handler.clone());
    }

    #[test]
    fn distinct_handlers_compare_unequal_even_when_identical_in_value() {
        let a = HandlerRef::new(MemoryHandler::new());
        let b = HandlerRef::new(MemoryHandler::new());
        assert_ne!(a, b);
    }

    #[test]
    fn from_arc_preserves_identity_with_caller_handle() {
        let memory = Arc::new(MemoryHandler::new());
        let handle = HandlerRef::from(Arc::clone(&memory));
        handle.handle(&Record::new("root", Level::Error, "boom"));
        assert_eq!(memory.records().len(), 1);
    }

    #[test]
    fn debug_output_names_handler_type() {
        let handler = HandlerRef::new(MemoryHandler::new());
        assert!(format!("{handler:?}").contains("MemoryHandler"));
    }
}
