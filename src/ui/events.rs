use crate::data::Member;

/// Application-level events delivered to the UI loop
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// The one-shot member fetch finished
    MembersLoaded(Vec<Member>),

    /// The member fetch failed; the table stays empty
    LoadFailed(String),
}

/// Which input currently receives keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Navigating the table
    #[default]
    Normal,
    /// Typing into the search box
    Search,
    /// Typing into the draft of the row being edited
    Edit,
}
