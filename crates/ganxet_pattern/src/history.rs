//! Undo/redo history over ring snapshots
//!
//! A flat list of deep snapshots plus a cursor. New entries are appended at
//! the cursor (any "future" entries are cut first), and recording is gated
//! on structural inequality with the entry under the cursor, so idempotent
//! mutations collapse to one entry.
//!
//! Retention: the list is bounded to 100 entries. On overflow the oldest
//! entries after the first are dropped, keeping entry 0 as an anchor plus
//! the 98 most recent, and the cursor moves to the new last entry.

use tracing::{debug, trace};

use crate::ring::{rings_equal, snapshot_rings, Ring};

const MAX_ENTRIES: usize = 100;
const RETAIN_RECENT: usize = 98;

#[derive(Clone, Debug)]
pub struct History {
    entries: Vec<Vec<Ring>>,
    index: usize,
}

impl History {
    /// Start a history with `initial` as entry 0.
    pub fn new(initial: &[Ring]) -> Self {
        Self {
            entries: vec![snapshot_rings(initial)],
            index: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// The anchor snapshot (entry 0).
    pub fn first(&self) -> &[Ring] {
        &self.entries[0]
    }

    /// The snapshot under the cursor.
    pub fn current(&self) -> &[Ring] {
        &self.entries[self.index]
    }

    /// Record `rings` if they differ structurally from the current entry.
    /// Returns whether an entry was added.
    pub fn record(&mut self, rings: &[Ring]) -> bool {
        if rings_equal(rings, &self.entries[self.index]) {
            trace!("history: unchanged, not recording");
            return false;
        }

        // Cut redo entries before appending.
        self.entries.truncate(self.index + 1);
        self.entries.push(snapshot_rings(rings));

        if self.entries.len() > MAX_ENTRIES {
            let cut = self.entries.len() - RETAIN_RECENT;
            debug!(dropped = cut - 1, "history: retention drop");
            self.entries.drain(1..cut);
        }
        self.index = self.entries.len() - 1;
        trace!(len = self.entries.len(), index = self.index, "history: recorded");
        true
    }

    /// Step the cursor back, returning a snapshot to restore. `None` when
    /// already at the oldest entry.
    pub fn undo(&mut self) -> Option<Vec<Ring>> {
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        debug!(index = self.index, "history: undo");
        Some(snapshot_rings(&self.entries[self.index]))
    }

    /// Step the cursor forward, returning a snapshot to restore. `None`
    /// when already at the newest entry.
    pub fn redo(&mut self) -> Option<Vec<Ring>> {
        if self.index + 1 >= self.entries.len() {
            return None;
        }
        self.index += 1;
        debug!(index = self.index, "history: redo");
        Some(snapshot_rings(&self.entries[self.index]))
    }
}
