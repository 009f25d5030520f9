//! crates/logging/src/handlers/memory.rs
//! Handler that retains records for later inspection.

use std::sync::{Mutex, MutexGuard};

use crate::{Handler, Record};

/// Handler that keeps every record it receives in memory.
///
/// Useful for tests and for callers that want to inspect diagnostics emitted by
/// a block of code before deciding whether to surface them.
///
/// # Examples
///
/// ```
/// use logging::{Handler, Level, MemoryHandler, Record};
///
/// let handler = MemoryHandler::new();
/// handler.handle(&Record::new("root", Level::Info, "first"));
/// handler.handle(&Record::new("root", Level::Info, "second"));
///
/// let drained = handler.drain();
/// assert_eq!(drained.len(), 2);
/// assert!(handler.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct MemoryHandler {
    records: Mutex<Vec<Record>>,
}

impl MemoryHandler {
    /// Creates an empty handler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Record>> {
        self.records
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
    }

    /// Returns a copy of the records collected so far.
    #[must_use]
    pub fn records(&self) -> Vec<Record> {
        self.lock().clone()
    }

    /// Returns the messages collected so far, in arrival order.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.lock()
            .iter()
            .map(|record| record.message().to_owned())
            .collect()
    }

    /// Removes and returns all collected records.
    pub fn drain(&self) -> Vec<Record> {
        self.lock().drain(..).collect()
    }

    /// Number of collected records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Reports whether no records have been collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl Handler for MemoryHandler {
    fn handle(&self, record: &Record) {
        self.lock().push(record.clone());
    }

    fn describe(&self) -> &str {
        "MemoryHandler"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Level;

    #[test]
    fn records_preserve_arrival_order() {
        let handler = MemoryHandler::new();
        handler.handle(&Record::new("a", Level::Info, "first"));
        handler.handle(&Record::new("b", Level::Error, "second"));
        handler.handle(&Record::new("c", Level::Debug, "third"));

        assert_eq!(handler.messages(), ["first", "second", "third"]);
    }

    #[test]
    fn drain_clears_buffer() {
        let handler = MemoryHandler::new();
        handler.handle(&Record::new("a", Level::Info, "only"));

        assert_eq!(handler.drain().len(), 1);
        assert!(handler.drain().is_empty());
        assert_eq!(handler.len(), 0);
    }
}
