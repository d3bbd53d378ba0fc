//! Custom widget components

mod buffer_view;
mod confirm_dialog;
pub mod modal_overlay;
mod status_bar;

pub use buffer_view::BufferView;
pub use confirm_dialog::{ConfirmDialog, ConfirmDialogState};
pub use status_bar::StatusBar;
