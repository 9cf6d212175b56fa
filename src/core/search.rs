//! Query matching over the member set

use crate::data::Member;

/// Case-insensitive substring match against name, email or role.
/// `query` must already be lowercased.
fn matches_lowered(member: &Member, query: &str) -> bool {
    query.is_empty()
        || member.name.to_lowercase().contains(query)
        || member.email.to_lowercase().contains(query)
        || member.role.to_lowercase().contains(query)
}

/// Whether a single member matches `query`
pub fn matches(member: &Member, query: &str) -> bool {
    matches_lowered(member, &query.to_lowercase())
}

/// Members matching `query`, in store order. An empty query matches everyone.
pub fn filter<'a>(members: &'a [Member], query: &str) -> Vec<&'a Member> {
    let query = query.to_lowercase();
    members
        .iter()
        .filter(|m| matches_lowered(m, &query))
        .collect()
}
