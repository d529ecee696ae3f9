//! Selection model for batch bookmark operations.
//!
//! Tracks the "currently checked" subset of the collection. The invariant
//! that every selected id exists in the collection is enforced at the
//! controller layer, which guards `toggle` by membership, prunes on single
//! deletes, and resets the selection on every reload.

use std::collections::HashSet;

/// Set of bookmark ids marked for batch operations.
#[derive(Debug, Clone, Default)]
pub struct SelectionModel {
    selected: HashSet<String>,
}

impl SelectionModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips membership of `id`.
    pub fn toggle(&mut self, id: &str) {
        if !self.selected.remove(id) {
            self.selected.insert(id.to_string());
        }
    }

    /// Select-all toggle over a snapshot of the current collection ids.
    ///
    /// If the selection already covers the whole collection, clears it;
    /// otherwise the selection becomes exactly `current_ids`. The snapshot
    /// is not sticky: a collection that grows afterwards does not expand
    /// the selection.
    pub fn toggle_all(&mut self, current_ids: &[String]) {
        if self.selected.len() == current_ids.len() {
            self.selected.clear();
        } else {
            self.selected = current_ids.iter().cloned().collect();
        }
    }

    /// Drops any selected id that is not in `current_ids`.
    pub fn prune_to(&mut self, current_ids: &[String]) {
        let keep: HashSet<&str> = current_ids.iter().map(String::as_str).collect();
        self.selected.retain(|id| keep.contains(id.as_str()));
    }

    /// Removes one id. Returns whether it was selected.
    pub fn remove(&mut self, id: &str) -> bool {
        self.selected.remove(id)
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn contains(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Snapshot of the selected ids, sorted for deterministic iteration.
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.selected.iter().cloned().collect();
        ids.sort();
        ids
    }
}
