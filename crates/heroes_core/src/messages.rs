//! Notification log shared by the data-access layer and its callers.
//!
//! # Responsibility
//! - Keep an ordered list of short, user-facing status lines.
//! - Expose append, clear and snapshot reads to every holder of a handle.
//!
//! # Invariants
//! - Entries are only ever appended or cleared all at once.
//! - `entries()` returns lines in insertion order.
//! - Clones of a `MessageLog` observe the same underlying list.

use parking_lot::Mutex;
use std::sync::Arc;

/// Cloneable handle over one process-wide message list.
///
/// Construct once at startup and pass clones to every consumer.
#[derive(Debug, Clone, Default)]
pub struct MessageLog {
    entries: Arc<Mutex<Vec<String>>>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one line at the end of the log.
    pub fn append(&self, text: impl Into<String>) {
        self.entries.lock().push(text.into());
    }

    /// Removes every line.
    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    /// Returns a snapshot of the current lines.
    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}
