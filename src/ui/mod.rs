pub mod action;
pub mod app;
pub mod components;
pub mod events;
pub mod keys;
pub mod terminal_guard;

pub use action::Action;
pub use app::App;
pub use events::{AppEvent, InputMode};
pub use keys::action_for_key;
