//! Confirm dialog state.
//!
//! Data model for yes/no confirmation dialogs. The rendering widget
//! lives in quill-tui's widgets/confirm_dialog.rs.

use crate::message::Message;

#[derive(Debug, Clone)]
pub struct ConfirmDialogState {
    pub title: String,
    pub message: String,
    pub options: Vec<(String, Message)>,
}

impl ConfirmDialogState {
    /// Create a generic confirmation dialog
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        options: Vec<(&str, Message)>,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            options: options
                .into_iter()
                .map(|(label, msg)| (label.to_string(), msg))
                .collect(),
        }
    }

    /// Ask whether an existing capture buffer should be thrown away
    pub fn replace_capture(surface_name: &str) -> Self {
        Self::new(
            "Replace capture?",
            format!("{} is still open.", surface_name),
            vec![
                ("Replace", Message::ConfirmReplace),
                ("Keep", Message::DeclineReplace),
            ],
        )
    }
}
