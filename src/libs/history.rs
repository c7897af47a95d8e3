//! Bounded undo history.
//!
//! Before each mutation the engine records the full encoded task list as a
//! snapshot. Undo pops the most recent snapshot and makes it the current
//! list again. There is no redo and undoing is never itself recorded.
//!
//! The depth defaults to one, which gives single-step undo: only the most
//! recent change can be reverted. A depth of zero disables undo.

use serde::{Deserialize, Serialize};

pub const DEFAULT_HISTORY_DEPTH: usize = 1;

/// One snapshot is the complete encoded list, in order.
pub type Snapshot = Vec<String>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    depth: usize,
    snapshots: Vec<Snapshot>,
}

impl Default for History {
    fn default() -> Self {
        History::new(DEFAULT_HISTORY_DEPTH)
    }
}

impl History {
    pub fn new(depth: usize) -> Self {
        History {
            depth,
            snapshots: Vec::new(),
        }
    }

    /// Changes the depth, dropping the oldest snapshots if it shrank.
    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self.trim();
        self
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn push(&mut self, snapshot: Snapshot) {
        self.snapshots.push(snapshot);
        self.trim();
    }

    pub fn pop(&mut self) -> Option<Snapshot> {
        self.snapshots.pop()
    }

    fn trim(&mut self) {
        if self.snapshots.len() > self.depth {
            let excess = self.snapshots.len() - self.depth;
            self.snapshots.drain(..excess);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap(line: &str) -> Snapshot {
        vec![line.to_string()]
    }

    #[test]
    fn keeps_only_most_recent_snapshots() {
        let mut history = History::new(2);
        history.push(snap("a"));
        history.push(snap("b"));
        history.push(snap("c"));

        assert_eq!(history.len(), 2);
        assert_eq!(history.pop(), Some(snap("c")));
        assert_eq!(history.pop(), Some(snap("b")));
        assert_eq!(history.pop(), None);
    }

    #[test]
    fn zero_depth_records_nothing() {
        let mut history = History::new(0);
        history.push(snap("a"));
        assert!(history.is_empty());
    }

    #[test]
    fn shrinking_depth_drops_oldest() {
        let mut history = History::new(3);
        history.push(snap("a"));
        history.push(snap("b"));
        let mut history = history.with_depth(1);
        assert_eq!(history.pop(), Some(snap("b")));
    }
}
