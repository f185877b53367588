//! Undo/redo history of parameter snapshots
//!
//! A bounded list of snapshots plus a cursor. Pushing after an undo drops
//! the redo branch; pushing past capacity evicts the oldest snapshot.

use std::collections::VecDeque;
use tracing::{debug, trace};

use crate::constants::history::{DEFAULT_CAPACITY, MIN_CAPACITY};
use crate::parameters::GlassParameters;

#[derive(Debug, Clone)]
pub struct HistoryStack {
    entries: VecDeque<GlassParameters>,
    /// Index of the current snapshot; `None` iff `entries` is empty
    cursor: Option<usize>,
    capacity: usize,
}

impl Default for HistoryStack {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl HistoryStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capacity below the minimum is raised to it
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(MIN_CAPACITY);
        Self {
            entries: VecDeque::with_capacity(capacity),
            cursor: None,
            capacity,
        }
    }

    pub fn push(&mut self, snapshot: GlassParameters) {
        if let Some(cursor) = self.cursor {
            let discarded = self.entries.len() - (cursor + 1);
            if discarded > 0 {
                debug!(discarded, "dropping redo branch");
                self.entries.truncate(cursor + 1);
            }
        }

        self.entries.push_back(snapshot);
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
            trace!(capacity = self.capacity, "evicted oldest history entry");
        }
        self.cursor = Some(self.entries.len() - 1);
    }

    /// Step back one snapshot. `None` when there is nothing to undo.
    pub fn undo(&mut self) -> Option<GlassParameters> {
        if !self.can_undo() {
            return None;
        }
        let cursor = self.cursor? - 1;
        self.cursor = Some(cursor);
        self.entries.get(cursor).cloned()
    }

    /// Step forward one snapshot. `None` when there is nothing to redo.
    pub fn redo(&mut self) -> Option<GlassParameters> {
        if !self.can_redo() {
            return None;
        }
        let cursor = self.cursor? + 1;
        self.cursor = Some(cursor);
        self.entries.get(cursor).cloned()
    }

    pub fn can_undo(&self) -> bool {
        matches!(self.cursor, Some(c) if c > 0)
    }

    pub fn can_redo(&self) -> bool {
        matches!(self.cursor, Some(c) if c + 1 < self.entries.len())
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = None;
    }

    /// Snapshot under the cursor
    pub fn current(&self) -> Option<&GlassParameters> {
        self.cursor.and_then(|c| self.entries.get(c))
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn entries(&self) -> impl Iterator<Item = &GlassParameters> {
        self.entries.iter()
    }
}
