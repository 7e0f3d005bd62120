//! Undo History
//!
//! Append-only stack of snapshots. The top is always the current state.

#[derive(Debug, Clone)]
pub struct UndoHistory<T> {
    snapshots: Vec<T>,
}

impl<T> Default for UndoHistory<T> {
    fn default() -> Self {
        Self { snapshots: Vec::new() }
    }
}

impl<T> UndoHistory<T> {
    pub fn push(&mut self, snapshot: T) {
        self.snapshots.push(snapshot);
    }

    /// Drop the current snapshot and return the previous one.
    /// Needs at least two entries; otherwise nothing changes.
    pub fn undo(&mut self) -> Option<&T> {
        if self.snapshots.len() < 2 {
            return None;
        }
        self.snapshots.pop();
        self.snapshots.last()
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }

    #[cfg(test)]
    pub fn current(&self) -> Option<&T> {
        self.snapshots.last()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undo_returns_previous() {
        let mut history = UndoHistory::default();
        history.push(1);
        history.push(2);
        history.push(3);

        assert_eq!(history.undo(), Some(&2));
        assert_eq!(history.undo(), Some(&1));
        assert_eq!(history.current(), Some(&1));
    }

    #[test]
    fn test_undo_underflow_keeps_last() {
        let mut history = UndoHistory::default();
        assert_eq!(history.undo(), None);

        history.push("only");
        assert_eq!(history.undo(), None);
        assert_eq!(history.len(), 1);
        assert_eq!(history.current(), Some(&"only"));
    }

    #[test]
    fn test_clear() {
        let mut history = UndoHistory::default();
        history.push(1);
        history.push(2);
        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.undo(), None);
    }
}
