//! Table state engine.
//!
//! Everything the admin table knows lives here, independent of how it is drawn:
//! - query matching over the member set
//! - fixed-size paging
//! - page-scoped multi-selection
//! - single-row inline editing
//!
//! [`AdminTable`] owns all of it and is the only thing the UI talks to.

mod edit;
mod error;
mod paginator;
pub mod search;
mod selection;
mod table;
mod view;

pub use edit::{EditSession, MemberDraft};
pub use error::TableError;
pub use paginator::{Paginator, PAGE_SIZE};
pub use selection::SelectionTracker;
pub use table::AdminTable;
pub use view::{RowView, TableView};
