//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;

/// Where captured text goes on save
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureTarget {
    /// Insert at the cursor that was active when the capture opened
    Point,
    /// Append to the *notes* buffer (delivered through a save callback)
    Notes,
}

/// Buffer edits and cursor motion in the focused window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditCommand {
    InsertChar(char),
    Newline,
    Backspace,
    DeleteForward,
    Left,
    Right,
    Up,
    Down,
    LineStart,
    LineEnd,
}

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Exit the application
    Quit,

    /// C-g: abandon a partial chord
    KeyboardQuit,

    /// A multi-key sequence that matches no binding
    UndefinedKey { keys: Vec<InputKey> },

    // ─────────────────────────────────────────────────────────
    // Capture Messages
    // ─────────────────────────────────────────────────────────
    /// Open a capture buffer (asks first if one already exists)
    OpenCapture {
        target: CaptureTarget,
        initial_text: Option<String>,
    },
    /// Replace the existing capture buffer (confirm dialog "yes")
    ConfirmReplace,
    /// Keep the existing capture buffer (confirm dialog "no")
    DeclineReplace,
    /// Deliver the capture text and close
    SaveCapture,
    /// Discard the capture text and close
    CancelCapture,
    /// Text handed over by a note capture's save callback
    NoteCaptured { text: String },

    // ─────────────────────────────────────────────────────────
    // Editing Messages
    // ─────────────────────────────────────────────────────────
    /// Edit the focused buffer
    Edit(EditCommand),
    /// Cycle focus to the next window
    OtherWindow,
    /// Write the focused buffer to its file
    WriteFile,
}
