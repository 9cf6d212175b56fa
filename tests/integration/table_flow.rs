//! Integration tests for the member table engine
//!
//! Drives AdminTable through search, paging, selection, deletion and inline
//! editing the way the UI does, and checks the invariants that must hold
//! after every command.

use std::collections::HashSet;

use super::common::members::{ann_and_bob, id, numbered_members};
use roster::{AdminTable, MemberField, MemberId, TableError, PAGE_SIZE};

/// Query "admin" matches Ann through her role only
#[test]
fn test_search_admin_scenario() {
    let mut table = AdminTable::with_members(ann_and_bob());
    table.search("admin");

    let filtered = table.filtered();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, id(1));
    assert_eq!(table.total_pages(), 1);
}

/// 25 members give three pages; the last one holds 21 to 25
#[test]
fn test_last_page_scenario() {
    let mut table = AdminTable::with_members(numbered_members(25));
    assert_eq!(PAGE_SIZE, 10);
    assert_eq!(table.total_pages(), 3);

    table.last_page();
    assert_eq!(table.current_page(), 3);
    assert_eq!(table.page_ids(), (21..=25).map(id).collect::<Vec<_>>());
}

/// Selecting page 1 then deleting three of those members
#[test]
fn test_select_page_then_delete_three() {
    let mut table = AdminTable::with_members(numbered_members(25));
    table.toggle_page(true);
    assert_eq!(table.selected_count(), 10);

    let doomed: HashSet<MemberId> = [2, 5, 9].into_iter().map(id).collect();
    table.delete_many(&doomed);

    assert_eq!(table.selected_count(), 7);
    for gone in &doomed {
        assert!(!table.is_selected(gone));
    }

    let survivors: Vec<MemberId> = table.store().ids().cloned().collect();
    let expected: Vec<MemberId> = (1..=25)
        .filter(|n| ![2, 5, 9].contains(n))
        .map(id)
        .collect();
    assert_eq!(survivors.len(), 22);
    assert_eq!(survivors, expected);
}

/// Bulk delete removes exactly the selection, across pages
#[test]
fn test_delete_selected_across_pages() {
    let mut table = AdminTable::with_members(numbered_members(25));
    table.toggle_row(&id(3), true);
    table.next_page();
    table.toggle_page(true);
    assert_eq!(table.selected_count(), 11);

    let removed = table.delete_selected();

    assert_eq!(removed, 11);
    assert_eq!(table.selected_count(), 0);
    assert_eq!(table.store().len(), 14);
    assert!(table.store().get(&id(3)).is_none());
    assert!(table.store().get(&id(15)).is_none());
    // page 2 was the current page and there are now only 2 pages
    assert_eq!(table.current_page(), 2);
}

/// Deleting the whole last page pulls the current page back
#[test]
fn test_emptying_last_page_clamps_current_page() {
    let mut table = AdminTable::with_members(numbered_members(25));
    table.last_page();
    table.toggle_header();
    table.delete_selected();

    assert_eq!(table.total_pages(), 2);
    assert_eq!(table.current_page(), 2);
    assert_eq!(table.page_ids().len(), PAGE_SIZE);
}

/// Selections on other pages survive deselecting the current page
#[test]
fn test_page_scoped_deselect() {
    let mut table = AdminTable::with_members(numbered_members(25));
    table.toggle_page(true);
    table.next_page();
    table.toggle_row(&id(12), true);
    table.first_page();

    table.toggle_page(false);

    assert_eq!(table.selection().ids(), vec![id(12)]);
}

/// Selection count counts selected members, summary uses the filtered total
#[test]
fn test_selection_summary_uses_filtered_total() {
    let mut table = AdminTable::with_members(numbered_members(25));
    table.toggle_row(&id(1), true);
    table.search("admin");

    let view = table.view();
    assert_eq!(view.filtered_count, 5);
    assert_eq!(view.total_count, 25);
    assert_eq!(view.selection_summary(), "1 of 5 row(s) selected");
}

/// Changing the query always lands on page 1
#[test]
fn test_query_change_resets_page() {
    let mut table = AdminTable::with_members(numbered_members(25));
    table.go_to(3);
    table.search("member");
    assert_eq!(table.current_page(), 1);

    table.go_to(2);
    table.search("");
    assert_eq!(table.current_page(), 1);
}

/// Cancel leaves the member exactly as it was
#[test]
fn test_edit_cancel_leaves_member_untouched() {
    let mut table = AdminTable::with_members(ann_and_bob());
    let before = table.store().get(&id(1)).cloned().unwrap();

    table.begin_edit(&id(1)).unwrap();
    table.set_field(MemberField::Name, "Changed").unwrap();
    table.set_field(MemberField::Email, "changed@x.com").unwrap();
    assert_eq!(table.store().get(&id(1)), Some(&before));

    table.cancel_edit().unwrap();

    assert_eq!(table.store().get(&id(1)), Some(&before));
    assert!(table.edit_session().is_none());
}

/// Commit changes only the edited field
#[test]
fn test_edit_commit_changes_only_name() {
    let mut table = AdminTable::with_members(ann_and_bob());
    let before = table.store().get(&id(2)).cloned().unwrap();

    table.begin_edit(&id(2)).unwrap();
    table.set_field(MemberField::Name, "X").unwrap();
    table.commit_edit().unwrap();

    let after = table.store().get(&id(2)).unwrap();
    assert_eq!(after.name, "X");
    assert_eq!(after.email, before.email);
    assert_eq!(after.role, before.role);
    assert_eq!(after.id, before.id);
    assert!(table.edit_session().is_none());
}

/// A second edit is refused and the first draft survives
#[test]
fn test_begin_while_editing_is_rejected() {
    let mut table = AdminTable::with_members(ann_and_bob());
    table.begin_edit(&id(1)).unwrap();
    table.set_field(MemberField::Role, "Owner").unwrap();

    assert!(matches!(
        table.begin_edit(&id(2)),
        Err(TableError::InvalidState { .. })
    ));
    assert!(matches!(
        table.begin_edit(&id(1)),
        Err(TableError::InvalidState { .. })
    ));

    table.commit_edit().unwrap();
    assert_eq!(table.store().get(&id(1)).unwrap().role, "Owner");
    assert_eq!(table.store().get(&id(2)).unwrap().role, "User");
}

/// Deleting the row being edited closes the edit; nothing is written later
#[test]
fn test_row_delete_of_edit_target() {
    let mut table = AdminTable::with_members(ann_and_bob());
    table.begin_edit(&id(1)).unwrap();
    table.set_field(MemberField::Name, "Ghost").unwrap();

    assert!(table.delete_row(&id(1)));

    assert!(table.edit_session().is_none());
    assert_eq!(table.commit_edit(), Err(TableError::NoActiveEdit));
    assert_eq!(table.store().len(), 1);

    // now a fresh edit may start
    table.begin_edit(&id(2)).unwrap();
}

/// Deleting an unknown row is a no-op
#[test]
fn test_delete_missing_row_is_noop() {
    let mut table = AdminTable::with_members(ann_and_bob());
    table.toggle_row(&id(1), true);

    assert!(!table.delete_row(&id(99)));
    assert_eq!(table.store().len(), 2);
    assert_eq!(table.selected_count(), 1);
}

/// Selecting an id that is not loaded changes nothing
#[test]
fn test_toggle_unknown_row_is_ignored() {
    let mut table = AdminTable::with_members(ann_and_bob());
    table.toggle_row(&id(1), true);

    for missing in [97, 98, 99] {
        table.toggle_row(&id(missing), true);
    }

    assert_eq!(table.selected_count(), 1);
    assert!(!table.is_selected(&id(99)));
    let view = table.view();
    assert!(view.selected_count <= view.filtered_count);
    assert_eq!(view.selection_summary(), "1 of 2 row(s) selected");
}

/// Empty initial set: everything still answers sensibly
#[test]
fn test_empty_table() {
    let mut table = AdminTable::new();
    table.next_page();
    table.last_page();
    table.toggle_header();

    let view = table.view();
    assert!(view.rows.is_empty());
    assert_eq!(view.current_page, 1);
    assert_eq!(view.total_pages, 0);
    assert!(!view.header_checked);
    assert!(!view.can_prev);
    assert!(!view.can_next);
    assert_eq!(table.delete_selected(), 0);
    assert!(matches!(
        table.begin_edit(&id(1)),
        Err(TableError::NotFound(_))
    ));
}
