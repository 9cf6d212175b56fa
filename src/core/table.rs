//! The admin table: member store plus every piece of view state derived from it.

use std::collections::HashSet;

use super::edit::EditSession;
use super::error::TableError;
use super::paginator::Paginator;
use super::search;
use super::selection::SelectionTracker;
use super::view::{RowView, TableView};
use crate::data::{Member, MemberField, MemberId, MemberStore};

/// Coordinates search, paging, selection and inline editing over one member set.
///
/// Every command re-establishes the table invariants before it returns:
/// - deleted ids are never left in the selection
/// - the current page is always within `[1, max(total_pages, 1)]`
/// - at most one edit is open, and never for a member that is gone
///
/// Derived state (filtered rows, page slice, header checkbox) is recomputed on
/// each read rather than cached.
#[derive(Debug, Clone, Default)]
pub struct AdminTable {
    store: MemberStore,
    query: String,
    pager: Paginator,
    selection: SelectionTracker,
    edit: Option<EditSession>,
}

impl AdminTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_members(members: Vec<Member>) -> Self {
        let mut table = Self::new();
        table.load(members);
        table
    }

    /// Replace the member set, dropping selection and edit state that no
    /// longer refers to a member
    pub fn load(&mut self, members: Vec<Member>) {
        self.store.load(members);
        self.selection.retain_existing(&self.store);
        if let Some(session) = &self.edit {
            if !self.store.contains(session.target()) {
                tracing::debug!(member = %session.target(), "Edit target missing after load");
                self.edit = None;
            }
        }
        self.clamp_page();
        tracing::debug!(count = self.store.len(), "Member table loaded");
    }

    // ============ Read side ============

    pub fn store(&self) -> &MemberStore {
        &self.store
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Members matching the current query, in store order
    pub fn filtered(&self) -> Vec<&Member> {
        search::filter(self.store.members(), &self.query)
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered().len()
    }

    pub fn total_pages(&self) -> usize {
        self.pager.total_pages(self.filtered_count())
    }

    pub fn current_page(&self) -> usize {
        self.pager.current_page()
    }

    /// Members on the current page
    pub fn page(&self) -> Vec<&Member> {
        let filtered = self.filtered();
        let (page, _) = self.pager.paginate(&filtered);
        page.to_vec()
    }

    pub fn page_ids(&self) -> Vec<MemberId> {
        self.page().into_iter().map(|m| m.id.clone()).collect()
    }

    /// Header checkbox state: every row on a non-empty page is selected
    pub fn header_checked(&self) -> bool {
        self.selection.all_selected(&self.page_ids())
    }

    pub fn selection(&self) -> &SelectionTracker {
        &self.selection
    }

    pub fn selected_count(&self) -> usize {
        self.selection.count()
    }

    pub fn is_selected(&self, id: &MemberId) -> bool {
        self.selection.is_selected(id)
    }

    pub fn edit_session(&self) -> Option<&EditSession> {
        self.edit.as_ref()
    }

    pub fn is_editing(&self, id: &MemberId) -> bool {
        self.edit.as_ref().is_some_and(|s| s.target() == id)
    }

    /// Snapshot of everything the view renders
    pub fn view(&self) -> TableView {
        let filtered = self.filtered();
        let count = filtered.len();
        let (page, total_pages) = self.pager.paginate(&filtered);

        let rows: Vec<RowView> = page
            .iter()
            .map(|member| {
                let draft = self
                    .edit
                    .as_ref()
                    .filter(|s| s.target() == &member.id)
                    .map(|s| s.draft().clone());
                RowView {
                    member: (*member).clone(),
                    selected: self.selection.is_selected(&member.id),
                    editing: draft.is_some(),
                    draft,
                }
            })
            .collect();

        TableView {
            header_checked: self.selection.all_selected(rows.iter().map(|r| &r.member.id)),
            rows,
            query: self.query.clone(),
            selected_count: self.selection.count(),
            filtered_count: count,
            total_count: self.store.len(),
            current_page: self.pager.current_page(),
            total_pages,
            can_prev: self.pager.can_prev(),
            can_next: self.pager.can_next(count),
            page_numbers: self.pager.page_numbers(count).collect(),
        }
    }

    // ============ Search & paging ============

    /// Set the query and go back to the first page
    pub fn search(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.pager.first();
    }

    pub fn go_to(&mut self, page: usize) {
        let count = self.filtered_count();
        self.pager.go_to(page, count);
    }

    pub fn next_page(&mut self) {
        let count = self.filtered_count();
        self.pager.next(count);
    }

    pub fn prev_page(&mut self) {
        self.pager.prev();
    }

    pub fn first_page(&mut self) {
        self.pager.first();
    }

    pub fn last_page(&mut self) {
        let count = self.filtered_count();
        self.pager.last(count);
    }

    fn clamp_page(&mut self) {
        let count = self.filtered_count();
        self.pager.clamp(count);
    }

    // ============ Selection ============

    /// Select or deselect one row. Ids not in the store are ignored.
    pub fn toggle_row(&mut self, id: &MemberId, selected: bool) {
        if !self.store.contains(id) {
            tracing::debug!(member = %id, "Ignoring selection of unknown member");
            return;
        }
        self.selection.toggle(id, selected);
    }

    /// Select or deselect every row on the current page
    pub fn toggle_page(&mut self, selected: bool) {
        let ids = self.page_ids();
        self.selection.toggle_all(&ids, selected);
    }

    /// Header checkbox click: select the page unless it is already fully selected
    pub fn toggle_header(&mut self) {
        let checked = self.header_checked();
        self.toggle_page(!checked);
    }

    // ============ Deletion ============

    /// Delete every selected member and clear the selection.
    /// Returns how many members were removed.
    pub fn delete_selected(&mut self) -> usize {
        let removed = self.store.delete_many(self.selection.as_set());
        self.selection.clear();
        self.after_delete(&removed);
        tracing::info!(count = removed.len(), "Deleted selected members");
        removed.len()
    }

    /// Delete the given members, purging them from the selection
    pub fn delete_many(&mut self, ids: &HashSet<MemberId>) -> usize {
        let removed = self.store.delete_many(ids);
        self.selection.purge(&removed);
        self.after_delete(&removed);
        removed.len()
    }

    /// Delete a single row. Returns false if it was already gone.
    pub fn delete_row(&mut self, id: &MemberId) -> bool {
        let removed = self.store.delete_one(id);
        self.selection.purge(&removed);
        self.after_delete(&removed);
        !removed.is_empty()
    }

    fn after_delete(&mut self, removed: &[MemberId]) {
        if let Some(session) = &self.edit {
            if removed.contains(session.target()) {
                tracing::debug!(member = %session.target(), "Closing edit for deleted member");
                self.edit = None;
            }
        }
        self.clamp_page();
    }

    // ============ Editing ============

    /// Open an edit on `id`. Rejected while another edit is open.
    pub fn begin_edit(&mut self, id: &MemberId) -> Result<(), TableError> {
        if let Some(active) = &self.edit {
            return Err(TableError::InvalidState {
                active: active.target().clone(),
                requested: id.clone(),
            });
        }

        let member = self
            .store
            .get(id)
            .ok_or_else(|| TableError::NotFound(id.clone()))?;
        self.edit = Some(EditSession::begin(member));
        Ok(())
    }

    /// Change one draft field. The store is untouched until commit.
    pub fn set_field(
        &mut self,
        field: MemberField,
        value: impl Into<String>,
    ) -> Result<(), TableError> {
        let session = self.edit.as_mut().ok_or(TableError::NoActiveEdit)?;
        session.set_field(field, value);
        Ok(())
    }

    /// Type one character into a draft field
    pub fn push_char(&mut self, field: MemberField, c: char) -> Result<(), TableError> {
        let session = self.edit.as_mut().ok_or(TableError::NoActiveEdit)?;
        session.push_char(field, c);
        Ok(())
    }

    /// Erase the last character of a draft field
    pub fn pop_char(&mut self, field: MemberField) -> Result<(), TableError> {
        let session = self.edit.as_mut().ok_or(TableError::NoActiveEdit)?;
        session.pop_char(field);
        Ok(())
    }

    /// Write the draft into the store and close the edit.
    ///
    /// If the member has disappeared in the meantime the edit is closed
    /// without touching the store and `NotFound` is returned.
    pub fn commit_edit(&mut self) -> Result<(), TableError> {
        let session = self.edit.take().ok_or(TableError::NoActiveEdit)?;
        let target = session.target().clone();
        if !self.store.contains(&target) {
            return Err(TableError::NotFound(target));
        }

        if !session.is_dirty() {
            tracing::debug!(member = %target, "Edit closed without changes");
            return Ok(());
        }

        self.store.update_fields(&target, session.into_patch())?;
        tracing::info!(member = %target, "Member updated");
        // An edit can move the row out of the current query
        self.clamp_page();
        Ok(())
    }

    /// Drop the draft and close the edit
    pub fn cancel_edit(&mut self) -> Result<(), TableError> {
        self.edit.take().ok_or(TableError::NoActiveEdit)?;
        Ok(())
    }
}
