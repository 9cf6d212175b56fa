//! Key to action mapping for each input mode

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::action::Action;
use super::events::InputMode;

/// Resolve a key press into an action for the given input mode
pub fn action_for_key(mode: InputMode, key: &KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        };
    }

    match mode {
        InputMode::Normal => normal_action(key.code),
        InputMode::Search => match key.code {
            KeyCode::Enter => Some(Action::ExitSearch),
            KeyCode::Esc => Some(Action::ClearSearch),
            KeyCode::Backspace => Some(Action::Backspace),
            KeyCode::Char(c) => Some(Action::InsertChar(c)),
            _ => None,
        },
        InputMode::Edit => match key.code {
            KeyCode::Enter => Some(Action::CommitEdit),
            KeyCode::Esc => Some(Action::CancelEdit),
            KeyCode::Tab => Some(Action::NextField),
            KeyCode::Backspace => Some(Action::Backspace),
            KeyCode::Char(c) => Some(Action::InsertChar(c)),
            _ => None,
        },
    }
}

fn normal_action(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::SelectUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::SelectDown),
        KeyCode::Char(' ') => Some(Action::ToggleRow),
        KeyCode::Char('a') => Some(Action::TogglePage),
        KeyCode::Char('D') => Some(Action::DeleteSelected),
        KeyCode::Char('x') | KeyCode::Delete => Some(Action::DeleteRow),
        KeyCode::Char('e') | KeyCode::Enter => Some(Action::BeginEdit),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::PrevPage),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::NextPage),
        KeyCode::Home | KeyCode::Char('g') => Some(Action::FirstPage),
        KeyCode::End | KeyCode::Char('G') => Some(Action::LastPage),
        KeyCode::Char('/') => Some(Action::FocusSearch),
        KeyCode::Esc => Some(Action::ClearSearch),
        KeyCode::Char(c @ '1'..='9') => c.to_digit(10).map(|n| Action::GoToPage(n as usize)),
        _ => None,
    }
}

/// Footer hints for the given input mode
pub fn hints_for_mode(mode: InputMode) -> &'static [(&'static str, &'static str)] {
    match mode {
        InputMode::Normal => &[
            ("/", "search"),
            ("space", "select"),
            ("a", "select page"),
            ("D", "delete selected"),
            ("x", "delete"),
            ("e", "edit"),
            ("←/→", "page"),
            ("1-9", "go to page"),
            ("q", "quit"),
        ],
        InputMode::Search => &[("enter", "done"), ("esc", "clear")],
        InputMode::Edit => &[("tab", "next field"), ("enter", "save"), ("esc", "cancel")],
    }
}
