//! quill-tui - Terminal UI for Quill
//!
//! Renders the workspace windows, the capture help banner, the status bar
//! and the replace-confirmation dialog with ratatui, and feeds crossterm key
//! events into quill-app's update loop.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
