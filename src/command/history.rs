use crate::element::Element;

/// Linear undo/redo over full snapshots of the element collection.
///
/// Holds a sequence of snapshots and a cursor into it. A commit after an
/// undo drops everything past the cursor, so the redo branch is gone.
#[derive(Debug, Clone)]
pub struct History {
    snapshots: Vec<Vec<Element>>,
    cursor: usize,
    limit: Option<usize>,
}

impl History {
    /// Creates a history holding one snapshot of the starting collection
    pub fn new(initial: &[Element]) -> Self {
        Self::with_limit(initial, None)
    }

    /// Like [`History::new`], keeping at most `limit` snapshots
    pub fn with_limit(initial: &[Element], limit: Option<usize>) -> Self {
        Self {
            snapshots: vec![initial.to_vec()],
            cursor: 0,
            limit: limit.map(|limit| limit.max(1)),
        }
    }

    /// Record `current` as a new checkpoint after the cursor
    pub fn commit(&mut self, current: &[Element]) {
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(current.to_vec());
        self.cursor = self.snapshots.len() - 1;

        if let Some(limit) = self.limit {
            let excess = self.snapshots.len().saturating_sub(limit);
            if excess > 0 {
                self.snapshots.drain(..excess);
                self.cursor -= excess;
                log::debug!("History limit {} reached, evicted {} snapshot(s)", limit, excess);
            }
        }
    }

    /// Step back one checkpoint, returning the snapshot to restore
    pub fn undo(&mut self) -> Option<&[Element]> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(&self.snapshots[self.cursor])
    }

    /// Step forward one checkpoint, returning the snapshot to restore
    pub fn redo(&mut self) -> Option<&[Element]> {
        if self.cursor + 1 >= self.snapshots.len() {
            return None;
        }
        self.cursor += 1;
        Some(&self.snapshots[self.cursor])
    }

    /// Returns true if there are checkpoints before the cursor
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Returns true if there are checkpoints after the cursor
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// The snapshot at the cursor
    pub fn current(&self) -> &[Element] {
        &self.snapshots[self.cursor]
    }

    /// Drop all checkpoints and start over from `initial`
    pub fn reset(&mut self, initial: &[Element]) {
        self.snapshots = vec![initial.to_vec()];
        self.cursor = 0;
    }
}
