//! Member data layer
//!
//! Record types, the in-memory store that owns them, and the one-shot source
//! loader that fills it.

mod models;
mod source;
mod store;

pub use models::{Member, MemberField, MemberId, MemberPatch};
pub use source::{parse_members, MemberSource, SourceError, DEFAULT_SOURCE_URL};
pub use store::MemberStore;
