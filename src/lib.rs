pub mod config;
pub mod core;
pub mod data;
pub mod ui;
pub mod util;

pub use config::Config;
pub use crate::core::{
    AdminTable, EditSession, MemberDraft, Paginator, RowView, SelectionTracker, TableError,
    TableView, PAGE_SIZE,
};
pub use data::{Member, MemberField, MemberId, MemberPatch, MemberSource, MemberStore, SourceError};
pub use ui::App;
