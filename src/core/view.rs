//! Read-only snapshot handed to the view layer

use super::edit::MemberDraft;
use crate::data::Member;

/// One rendered row of the current page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub member: Member,
    pub selected: bool,
    pub editing: bool,
    /// Draft values while this row is being edited
    pub draft: Option<MemberDraft>,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub rows: Vec<RowView>,
    pub query: String,
    pub header_checked: bool,
    pub selected_count: usize,
    /// Members matching the query across all pages
    pub filtered_count: usize,
    /// Members in the store regardless of query
    pub total_count: usize,
    pub current_page: usize,
    pub total_pages: usize,
    pub can_prev: bool,
    pub can_next: bool,
    pub page_numbers: Vec<usize>,
}

impl TableView {
    /// "N of M row(s) selected", M being the filtered total
    pub fn selection_summary(&self) -> String {
        format!(
            "{} of {} row(s) selected",
            self.selected_count, self.filtered_count
        )
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
