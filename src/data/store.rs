//! In-memory member store

use std::collections::HashSet;

use super::models::{Member, MemberId, MemberPatch};
use crate::core::TableError;

/// Owns the full member set.
///
/// Members keep the order the source delivered them in; deletions never
/// reorder survivors.
#[derive(Debug, Clone, Default)]
pub struct MemberStore {
    members: Vec<Member>,
}

impl MemberStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entire member set
    pub fn load(&mut self, members: Vec<Member>) {
        self.members = members;
    }

    /// All members in store order
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn get(&self, id: &MemberId) -> Option<&Member> {
        self.members.iter().find(|m| &m.id == id)
    }

    pub fn contains(&self, id: &MemberId) -> bool {
        self.get(id).is_some()
    }

    pub fn ids(&self) -> impl Iterator<Item = &MemberId> {
        self.members.iter().map(|m| &m.id)
    }

    /// Remove every member whose id is in `ids`.
    ///
    /// Ids that are not present are ignored. Returns the ids that were removed,
    /// in store order.
    pub fn delete_many(&mut self, ids: &HashSet<MemberId>) -> Vec<MemberId> {
        if ids.is_empty() {
            return Vec::new();
        }

        let mut removed = Vec::new();
        self.members.retain(|m| {
            if ids.contains(&m.id) {
                removed.push(m.id.clone());
                false
            } else {
                true
            }
        });
        removed
    }

    /// Remove a single member
    pub fn delete_one(&mut self, id: &MemberId) -> Vec<MemberId> {
        self.delete_many(&HashSet::from([id.clone()]))
    }

    /// Replace only the fields present in `patch` on the matching member
    pub fn update_fields(&mut self, id: &MemberId, patch: MemberPatch) -> Result<(), TableError> {
        let member = self
            .members
            .iter_mut()
            .find(|m| &m.id == id)
            .ok_or_else(|| TableError::NotFound(id.clone()))?;
        member.apply(patch);
        Ok(())
    }
}
