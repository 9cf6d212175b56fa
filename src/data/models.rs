//! Data models for member records

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Stable identifier assigned to a member by the data source.
///
/// Sources send ids either as JSON strings or integers; both land in the same
/// textual form so `7` and `"7"` refer to the same member.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct MemberId(String);

impl MemberId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MemberId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for MemberId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<u64> for MemberId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for MemberId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Signed(i64),
            Unsigned(u64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => MemberId(text),
            RawId::Signed(n) => MemberId(n.to_string()),
            RawId::Unsigned(n) => MemberId(n.to_string()),
        })
    }
}

/// The editable columns of a member row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberField {
    Name,
    Email,
    Role,
}

impl MemberField {
    /// All fields in column order
    pub const ALL: [MemberField; 3] = [MemberField::Name, MemberField::Email, MemberField::Role];

    /// Column header label
    pub fn label(self) -> &'static str {
        match self {
            MemberField::Name => "Name",
            MemberField::Email => "Email",
            MemberField::Role => "Role",
        }
    }

    /// Cycle to the next field, wrapping after Role
    pub fn next(self) -> Self {
        match self {
            MemberField::Name => MemberField::Email,
            MemberField::Email => MemberField::Role,
            MemberField::Role => MemberField::Name,
        }
    }
}

/// A member record as delivered by the source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl Member {
    pub fn new(
        id: impl Into<MemberId>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role: role.into(),
        }
    }

    /// Read a single editable field
    pub fn field(&self, field: MemberField) -> &str {
        match field {
            MemberField::Name => &self.name,
            MemberField::Email => &self.email,
            MemberField::Role => &self.role,
        }
    }

    /// Overwrite the fields present in `patch`, leaving the rest untouched
    pub fn apply(&mut self, patch: MemberPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(role) = patch.role {
            self.role = role;
        }
    }
}

/// Partial update of a member's editable fields. `None` leaves a field as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
}

impl MemberPatch {
    /// Set one field on the patch
    pub fn with(mut self, field: MemberField, value: impl Into<String>) -> Self {
        let value = Some(value.into());
        match field {
            MemberField::Name => self.name = value,
            MemberField::Email => self.email = value,
            MemberField::Role => self.role = value,
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.role.is_none()
    }
}
