//! In-memory handler

use crate::core::{Entry, EntryRecord, Handler, Result};
use parking_lot::Mutex;
use std::sync::Arc;

/// Keeps a record of every entry it receives.
///
/// Clones share the same buffer, so a caller can hand one clone to an
/// instance and inspect the records through another.
#[derive(Debug, Clone, Default)]
pub struct MemoryHandler {
    records: Arc<Mutex<Vec<EntryRecord>>>,
}

impl MemoryHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the records received so far, in dispatch order
    pub fn records(&self) -> Vec<EntryRecord> {
        self.records.lock().clone()
    }

    /// Remove and return all records
    pub fn take(&self) -> Vec<EntryRecord> {
        std::mem::take(&mut *self.records.lock())
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl Handler for MemoryHandler {
    fn log(&self, entry: &Entry<'_>) -> Result<()> {
        self.records.lock().push(entry.to_record());
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Instance, Severity};

    #[test]
    fn test_clones_share_records() {
        let handler = MemoryHandler::new();
        let logger = Instance::with_handler(handler.clone());

        logger.context("a").info("one");
        logger.context("b").warn("two");

        assert_eq!(handler.len(), 2);
        let records = handler.take();
        assert_eq!(records[0].context, "a");
        assert_eq!(records[1].severity, Some(Severity::Warn));
        assert!(handler.is_empty());
    }

    #[test]
    fn test_clear() {
        let handler = MemoryHandler::new();
        let logger = Instance::with_handler(handler.clone());
        logger.context("a").info("one");

        handler.clear();
        assert!(handler.records().is_empty());
    }
}
