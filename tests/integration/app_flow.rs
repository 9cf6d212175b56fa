//! Integration tests for the terminal front end
//!
//! Feeds actions into App the way the key handler does and renders frames
//! through a TestBackend.

use super::common::members::{ann_and_bob, id, numbered_members};
use super::common::terminal::{assert_screen_contains, render_app};
use roster::ui::{Action, InputMode};
use roster::{App, Config, MemberField};

fn app_with(members: Vec<roster::Member>) -> App {
    let mut app = App::new(Config::default());
    app.load_members(members);
    app
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.apply(Action::InsertChar(c));
    }
}

#[test]
fn test_search_typing_filters_rows() {
    let mut app = app_with(ann_and_bob());
    app.apply(Action::FocusSearch);
    assert_eq!(app.input_mode(), InputMode::Search);

    type_text(&mut app, "adm");
    assert_eq!(app.table().query(), "adm");
    assert_eq!(app.table().filtered_count(), 1);

    app.apply(Action::Backspace);
    assert_eq!(app.table().query(), "ad");

    app.apply(Action::ClearSearch);
    assert_eq!(app.table().query(), "");
    assert_eq!(app.input_mode(), InputMode::Normal);
}

#[test]
fn test_cursor_toggle_and_delete_row() {
    let mut app = app_with(numbered_members(3));
    app.apply(Action::SelectDown);
    app.apply(Action::ToggleRow);
    assert!(app.table().is_selected(&id(2)));

    app.apply(Action::DeleteRow);
    assert!(app.table().store().get(&id(2)).is_none());
    assert_eq!(app.table().selected_count(), 0);

    // cursor stays on a valid row after the table shrank
    app.apply(Action::SelectDown);
    app.apply(Action::SelectDown);
    assert_eq!(app.cursor(), 1);
}

#[test]
fn test_inline_edit_through_actions() {
    let mut app = app_with(ann_and_bob());
    app.apply(Action::BeginEdit);
    assert_eq!(app.input_mode(), InputMode::Edit);
    assert_eq!(app.edit_field(), MemberField::Name);

    app.apply(Action::Backspace);
    app.apply(Action::Backspace);
    app.apply(Action::Backspace);
    type_text(&mut app, "Anna");
    app.apply(Action::NextField);
    app.apply(Action::NextField);
    type_text(&mut app, "s");

    // the store is untouched until commit
    assert_eq!(app.table().store().get(&id(1)).unwrap().name, "Ann");

    app.apply(Action::CommitEdit);
    assert_eq!(app.input_mode(), InputMode::Normal);
    let member = app.table().store().get(&id(1)).unwrap();
    assert_eq!(member.name, "Anna");
    assert_eq!(member.email, "a@x.com");
    assert_eq!(member.role, "Admins");
}

#[test]
fn test_cancel_edit_through_actions() {
    let mut app = app_with(ann_and_bob());
    app.apply(Action::SelectDown);
    app.apply(Action::BeginEdit);
    type_text(&mut app, "by");
    app.apply(Action::CancelEdit);

    assert_eq!(app.input_mode(), InputMode::Normal);
    assert_eq!(app.table().store().get(&id(2)).unwrap().name, "Bob");
}

#[test]
fn test_page_navigation_resets_cursor() {
    let mut app = app_with(numbered_members(25));
    app.apply(Action::SelectDown);
    app.apply(Action::SelectDown);
    app.apply(Action::LastPage);

    assert_eq!(app.table().current_page(), 3);
    assert_eq!(app.cursor(), 0);

    app.apply(Action::NextPage);
    assert_eq!(app.table().current_page(), 3);

    app.apply(Action::FirstPage);
    app.apply(Action::PrevPage);
    assert_eq!(app.table().current_page(), 1);
}

#[test]
fn test_numbered_page_jump() {
    let mut app = app_with(numbered_members(25));
    app.apply(Action::SelectDown);
    app.apply(Action::GoToPage(2));

    assert_eq!(app.table().current_page(), 2);
    assert_eq!(app.cursor(), 0);
    assert_eq!(app.table().page_ids()[0], id(11));

    // past the end lands on the last page
    app.apply(Action::GoToPage(9));
    assert_eq!(app.table().current_page(), 3);
}

#[test]
fn test_bulk_delete_reports_count() {
    let mut app = app_with(numbered_members(12));
    app.apply(Action::TogglePage);
    app.apply(Action::DeleteSelected);

    assert_eq!(app.table().store().len(), 2);
    assert_eq!(app.status(), Some("Deleted 10 member(s)"));
}

#[test]
fn test_quit() {
    let mut app = app_with(Vec::new());
    assert!(!app.should_quit());
    app.apply(Action::Quit);
    assert!(app.should_quit());
}

#[test]
fn test_render_shows_rows_and_summary() {
    let mut app = app_with(ann_and_bob());
    app.apply(Action::ToggleRow);

    let screen = render_app(&app, 100, 16);
    assert_screen_contains(&screen, "Search:");
    assert_screen_contains(&screen, "Name");
    assert_screen_contains(&screen, "Ann");
    assert_screen_contains(&screen, "b@x.com");
    assert_screen_contains(&screen, "[x]");
    assert_screen_contains(&screen, "1 of 2 row(s) selected");
    assert_screen_contains(&screen, "[1]");
}

#[test]
fn test_render_edit_row_shows_draft() {
    let mut app = app_with(ann_and_bob());
    app.apply(Action::BeginEdit);
    type_text(&mut app, "ie");

    let screen = render_app(&app, 100, 16);
    assert_screen_contains(&screen, "Annie");
}

#[test]
fn test_render_empty_table() {
    let app = app_with(Vec::new());
    let screen = render_app(&app, 100, 12);
    assert_screen_contains(&screen, "No members");
    assert_screen_contains(&screen, "0 of 0 row(s) selected");
}
