use std::collections::{BTreeSet, HashSet};

/// Ids marked for a bulk action.
///
/// The selection survives page changes but is pruned against the
/// visible (filtered) id set on every view recompute, so a record the
/// active filter hides can never be bulk-affected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: BTreeSet<String>,
}

impl Selection {
    pub fn toggle(&mut self, id: &str) {
        if !self.ids.remove(id) {
            self.ids.insert(id.to_string());
        }
    }

    /// Header-checkbox contract: set every given id to `checked`.
    /// Ids outside `ids` keep their current state.
    pub fn set_all(&mut self, ids: &[String], checked: bool) {
        for id in ids {
            if checked {
                self.ids.insert(id.clone());
            } else {
                self.ids.remove(id);
            }
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Drop every selected id not in `visible`.
    pub fn prune(&mut self, visible: &HashSet<&str>) {
        self.ids.retain(|id| visible.contains(id.as_str()));
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(|s| s.as_str())
    }
}
