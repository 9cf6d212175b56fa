//! Errors raised by table commands.
//!
//! None of these are fatal. The view boundary logs them and carries on, and
//! the command that produced one has left the table unchanged.

use crate::data::MemberId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// The referenced member is no longer in the store.
    #[error("Member not found: {0}")]
    NotFound(MemberId),

    /// An edit is already open; a second one was rejected.
    #[error("Already editing member {active}, cannot edit {requested}")]
    InvalidState {
        active: MemberId,
        requested: MemberId,
    },

    /// An edit command arrived while nothing was being edited.
    #[error("No edit in progress")]
    NoActiveEdit,
}
