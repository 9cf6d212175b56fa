//! Inline row editing

use crate::data::{Member, MemberField, MemberId, MemberPatch};

/// Draft values for the three editable fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberDraft {
    pub name: String,
    pub email: String,
    pub role: String,
}

impl MemberDraft {
    fn from_member(member: &Member) -> Self {
        Self {
            name: member.name.clone(),
            email: member.email.clone(),
            role: member.role.clone(),
        }
    }

    pub fn get(&self, field: MemberField) -> &str {
        match field {
            MemberField::Name => &self.name,
            MemberField::Email => &self.email,
            MemberField::Role => &self.role,
        }
    }

    fn get_mut(&mut self, field: MemberField) -> &mut String {
        match field {
            MemberField::Name => &mut self.name,
            MemberField::Email => &mut self.email,
            MemberField::Role => &mut self.role,
        }
    }
}

/// One in-progress edit of a single member.
///
/// Holds its own copy of the member's fields taken at `begin`; the store is
/// only written on commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    target: MemberId,
    original: MemberDraft,
    draft: MemberDraft,
}

impl EditSession {
    /// Open a session seeded from the member's current values
    pub fn begin(member: &Member) -> Self {
        let original = MemberDraft::from_member(member);
        Self {
            target: member.id.clone(),
            draft: original.clone(),
            original,
        }
    }

    pub fn target(&self) -> &MemberId {
        &self.target
    }

    pub fn draft(&self) -> &MemberDraft {
        &self.draft
    }

    pub fn set_field(&mut self, field: MemberField, value: impl Into<String>) {
        *self.draft.get_mut(field) = value.into();
    }

    /// Append a character to a draft field
    pub fn push_char(&mut self, field: MemberField, c: char) {
        self.draft.get_mut(field).push(c);
    }

    /// Remove the last character of a draft field
    pub fn pop_char(&mut self, field: MemberField) {
        self.draft.get_mut(field).pop();
    }

    pub fn is_dirty(&self) -> bool {
        self.draft != self.original
    }

    /// Patch holding only the fields that differ from the values at `begin`
    pub fn into_patch(self) -> MemberPatch {
        MemberField::ALL
            .into_iter()
            .filter(|&field| self.draft.get(field) != self.original.get(field))
            .fold(MemberPatch::default(), |patch, field| {
                patch.with(field, self.draft.get(field))
            })
    }
}
