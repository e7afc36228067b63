//! # Undo/Redo History
//!
//! Snapshot-based history over (document content, global styles).
//!
//! ## Design
//!
//! - Each committed mutation pushes a full serialized snapshot
//! - The cursor points at the entry matching the current state
//! - Undo/redo move the cursor and hand back the entry to restore
//! - Pushing while the cursor is behind the end prunes the redo branch
//! - At capacity the oldest entry is evicted
//!
//! ## Example
//!
//! ```rust,ignore
//! let mut history = History::new();
//! history.snapshot(document.instances(), styles.global())?;
//!
//! if let Some(entry) = history.undo() {
//!     let snapshot = entry.restore()?;
//!     // apply snapshot.instances / snapshot.global_styles
//! }
//! ```

use crate::{ComponentInstance, EditorError};
use landkit_common::GlobalStyles;
use serde::{Deserialize, Serialize};

/// Default maximum number of retained entries
pub const DEFAULT_CAPACITY: usize = 50;

/// Decoded contents of a history entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub instances: Vec<ComponentInstance>,

    #[serde(default)]
    pub global_styles: GlobalStyles,
}

/// One serialized state of the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    payload: String,
}

impl HistoryEntry {
    /// Serialize the given state
    pub fn capture(
        instances: &[ComponentInstance],
        global_styles: &GlobalStyles,
    ) -> Result<Self, EditorError> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct SnapshotRef<'a> {
            instances: &'a [ComponentInstance],
            global_styles: &'a GlobalStyles,
        }

        let payload = serde_json::to_string(&SnapshotRef {
            instances,
            global_styles,
        })?;
        Ok(Self { payload })
    }

    /// Decode the entry back into a snapshot
    pub fn restore(&self) -> Result<Snapshot, EditorError> {
        Ok(serde_json::from_str(&self.payload)?)
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }
}

/// Linear history with a cursor
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<HistoryEntry>,

    /// Index of the entry matching the current state
    cursor: usize,

    /// Maximum number of entries (0 = unlimited)
    capacity: usize,
}

impl History {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            cursor: 0,
            capacity,
        }
    }

    /// Record the current state
    pub fn snapshot(
        &mut self,
        instances: &[ComponentInstance],
        global_styles: &GlobalStyles,
    ) -> Result<(), EditorError> {
        let entry = HistoryEntry::capture(instances, global_styles)?;
        self.push(entry);
        Ok(())
    }

    pub fn push(&mut self, entry: HistoryEntry) {
        // Drop the redo branch
        if !self.entries.is_empty() {
            self.entries.truncate(self.cursor + 1);
        }

        self.entries.push(entry);

        if self.capacity > 0 && self.entries.len() > self.capacity {
            self.entries.remove(0);
        }

        self.cursor = self.entries.len() - 1;
        tracing::trace!(cursor = self.cursor, len = self.entries.len(), "history push");
    }

    /// Step back; returns the entry to restore
    pub fn undo(&mut self) -> Option<&HistoryEntry> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        self.entries.get(self.cursor)
    }

    /// Step forward; returns the entry to restore
    pub fn redo(&mut self) -> Option<&HistoryEntry> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        self.entries.get(self.cursor)
    }

    pub fn can_undo(&self) -> bool {
        !self.entries.is_empty() && self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Entry matching the current state
    pub fn current(&self) -> Option<&HistoryEntry> {
        self.entries.get(self.cursor)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = 0;
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
