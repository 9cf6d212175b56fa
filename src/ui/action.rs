//! Actions that can be triggered by keys
//!
//! Each action maps onto one command of the member table, or onto a piece of
//! view-only state such as the row cursor or the focused input.

/// All mappable UI actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Quit the application
    Quit,

    // ========== Row Cursor ==========
    /// Move the cursor to the previous row on the page
    SelectUp,
    /// Move the cursor to the next row on the page
    SelectDown,

    // ========== Selection ==========
    /// Toggle the checkbox of the row under the cursor
    ToggleRow,
    /// Header checkbox: select or deselect every row on the page
    TogglePage,

    // ========== Deletion ==========
    /// Delete every selected member
    DeleteSelected,
    /// Delete the member under the cursor
    DeleteRow,

    // ========== Inline Edit ==========
    /// Start editing the row under the cursor
    BeginEdit,
    /// Save the draft into the table
    CommitEdit,
    /// Discard the draft
    CancelEdit,
    /// Move focus to the next editable field
    NextField,

    // ========== Pagination ==========
    FirstPage,
    PrevPage,
    NextPage,
    LastPage,
    /// Jump to a numbered page from the page strip
    GoToPage(usize),

    // ========== Search ==========
    /// Focus the search input
    FocusSearch,
    /// Leave the search input, keeping the query
    ExitSearch,
    /// Clear the query and leave the search input
    ClearSearch,

    // ========== Text Input ==========
    /// Type a character into the focused input
    InsertChar(char),
    /// Delete the last character of the focused input
    Backspace,
}
