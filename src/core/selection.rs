//! Row selection tracking

use std::collections::HashSet;

use crate::data::{MemberId, MemberStore};

/// Set of selected member ids.
///
/// Select-all is page scoped: `toggle_all` only ever adds or removes the ids it
/// is handed, so selections made on other pages survive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionTracker {
    selected: HashSet<MemberId>,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select or deselect a single row
    pub fn toggle(&mut self, id: &MemberId, selected: bool) {
        if selected {
            self.selected.insert(id.clone());
        } else {
            self.selected.remove(id);
        }
    }

    /// Select or deselect every id on the current page
    pub fn toggle_all<'a, I>(&mut self, page_ids: I, selected: bool)
    where
        I: IntoIterator<Item = &'a MemberId>,
    {
        for id in page_ids {
            self.toggle(id, selected);
        }
    }

    pub fn is_selected(&self, id: &MemberId) -> bool {
        self.selected.contains(id)
    }

    pub fn count(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Drop ids that were just deleted
    pub fn purge<'a, I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = &'a MemberId>,
    {
        for id in ids {
            self.selected.remove(id);
        }
    }

    /// Drop ids that no longer exist in `store`
    pub fn retain_existing(&mut self, store: &MemberStore) {
        self.selected.retain(|id| store.contains(id));
    }

    /// True when `page_ids` is non-empty and every one of them is selected.
    /// Drives the header checkbox.
    pub fn all_selected<'a, I>(&self, page_ids: I) -> bool
    where
        I: IntoIterator<Item = &'a MemberId>,
    {
        let mut any = false;
        for id in page_ids {
            if !self.selected.contains(id) {
                return false;
            }
            any = true;
        }
        any
    }

    /// The live selection set, for bulk deletes
    pub fn as_set(&self) -> &HashSet<MemberId> {
        &self.selected
    }

    /// Selected ids in sorted order
    pub fn ids(&self) -> Vec<MemberId> {
        let mut ids: Vec<MemberId> = self.selected.iter().cloned().collect();
        ids.sort();
        ids
    }
}
