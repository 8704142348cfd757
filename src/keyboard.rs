//! Keyboard actions and global keymap
//!
//! Screen-local editing (search boxes, the login form, chat input) is
//! handled by the app before this map is consulted, so plain letters are
//! free to act as shortcuts everywhere else.

use crossterm::event::{KeyCode, KeyEvent};

/// Chrome-level keyboard actions available once signed in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardAction {
    /// Return to market selection, clearing selections
    GoHome,
    ShowHistory,
    ShowAbout,
    ToggleTheme,
    ToggleChat,
    Logout,
    Quit,
    /// Screen-specific back navigation
    Back,
}

/// Resolve a chrome-level action for a key press, if any
pub fn global_action(key: KeyEvent) -> Option<KeyboardAction> {
    match key.code {
        KeyCode::Char('1') => Some(KeyboardAction::GoHome),
        KeyCode::Char('2') => Some(KeyboardAction::ShowHistory),
        KeyCode::Char('3') => Some(KeyboardAction::ShowAbout),
        KeyCode::Char('t') => Some(KeyboardAction::ToggleTheme),
        KeyCode::Char('c') => Some(KeyboardAction::ToggleChat),
        KeyCode::Char('l') => Some(KeyboardAction::Logout),
        KeyCode::Char('q') => Some(KeyboardAction::Quit),
        KeyCode::Esc | KeyCode::Backspace => Some(KeyboardAction::Back),
        _ => None,
    }
}

/// Footer hint line for the current chrome bindings
pub fn hint_line() -> &'static str {
    "1 home  2 history  3 about  t theme  c chat  l logout  q quit  Esc back"
}
