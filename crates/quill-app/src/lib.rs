//! quill-app - Capture controller, workspace and application state for Quill
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management, the capture session controller and the [`CaptureHost`] seam it
//! drives, an in-memory workspace that implements that seam, key chords and
//! configuration loading.

pub mod capture;
pub mod config;
pub mod confirm_dialog;
pub mod handler;
pub mod host;
pub mod input_key;
pub mod keymap;
pub mod message;
pub mod process;
pub mod signals;
pub mod state;
pub mod workspace;

// Re-export primary types
pub use capture::{CaptureController, OpenOutcome, SaveCallback};
pub use handler::UpdateResult;
pub use host::CaptureHost;
pub use input_key::InputKey;
pub use message::Message;
pub use state::AppState;
pub use workspace::Workspace;
