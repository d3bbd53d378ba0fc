//! Abstract input key event, independent of terminal library.
//!
//! This module defines the `InputKey` enum which abstracts keyboard input
//! from the underlying terminal library (crossterm). Key chords, the capture
//! controller and the workspace only ever see `InputKey`, so they can be
//! driven from tests or another front end without crossterm.

use std::fmt;

/// Abstract input key event, independent of terminal library.
/// Converted from crossterm::event::KeyEvent at the TUI boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKey {
    // Character keys
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+a, Ctrl+c, etc.)
    CharCtrl(char),
    /// Character with Alt/Meta modifier
    CharAlt(char),

    // Navigation
    /// Up arrow key
    Up,
    /// Down arrow key
    Down,
    /// Left arrow key
    Left,
    /// Right arrow key
    Right,
    /// Home key
    Home,
    /// End key
    End,
    /// Page Up key
    PageUp,
    /// Page Down key
    PageDown,

    // Action keys
    /// Enter/Return key
    Enter,
    /// Escape key
    Esc,
    /// Tab key
    Tab,
    /// Shift+Tab (BackTab)
    BackTab,
    /// Backspace key
    Backspace,
    /// Delete key
    Delete,

    // Function keys
    /// Function key (F1-F12)
    F(u8),
}

/// Human-readable key name, as shown in help banners ("Ctrl+C", "Enter").
impl fmt::Display for InputKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputKey::Char(' ') => write!(f, "Space"),
            InputKey::Char(c) => write!(f, "{}", c),
            InputKey::CharCtrl(c) => write!(f, "Ctrl+{}", c.to_ascii_uppercase()),
            InputKey::CharAlt(c) => write!(f, "Alt+{}", c.to_ascii_uppercase()),
            InputKey::Up => write!(f, "Up"),
            InputKey::Down => write!(f, "Down"),
            InputKey::Left => write!(f, "Left"),
            InputKey::Right => write!(f, "Right"),
            InputKey::Home => write!(f, "Home"),
            InputKey::End => write!(f, "End"),
            InputKey::PageUp => write!(f, "PageUp"),
            InputKey::PageDown => write!(f, "PageDown"),
            InputKey::Enter => write!(f, "Enter"),
            InputKey::Esc => write!(f, "Esc"),
            InputKey::Tab => write!(f, "Tab"),
            InputKey::BackTab => write!(f, "Shift+Tab"),
            InputKey::Backspace => write!(f, "Backspace"),
            InputKey::Delete => write!(f, "Delete"),
            InputKey::F(n) => write!(f, "F{}", n),
        }
    }
}
