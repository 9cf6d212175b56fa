use ratatui::style::Color;

mod key_hints;
mod member_table;

pub use key_hints::{render_key_hints, KeyHintBarStyle};
pub use member_table::MemberTable;

// Palette
pub const ACCENT_PRIMARY: Color = Color::Cyan;
pub const ACCENT_WARNING: Color = Color::Yellow;
pub const ACCENT_ERROR: Color = Color::Red;
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_MUTED: Color = Color::Gray;
pub const TEXT_FAINT: Color = Color::DarkGray;
pub const SELECTED_BG: Color = Color::Rgb(60, 60, 60);
pub const CURSOR_BG: Color = Color::Rgb(30, 50, 70);
