//! Configuration types for Quill
//!
//! Defines:
//! - `Settings` - Global application settings (`config.toml`)
//! - `KeySettings`, `CaptureSettings`, `UiSettings` - its sections

use serde::{Deserialize, Serialize};

use crate::capture::DEFAULT_SURFACE_NAME;
use crate::keymap::{DEFAULT_CANCEL_CHORD, DEFAULT_SAVE_CHORD};

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub keys: KeySettings,

    #[serde(default)]
    pub capture: CaptureSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Key chords, in Emacs notation ("C-c C-c", "C-x o", "<f2>")
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct KeySettings {
    /// Finish the capture buffer and deliver its text
    #[serde(default = "default_save")]
    pub save: String,

    /// Abort the capture buffer, discarding its text
    #[serde(default = "default_cancel")]
    pub cancel: String,

    /// Open a capture buffer that inserts at point
    #[serde(default = "default_open")]
    pub open: String,

    /// Open a capture buffer that appends to *notes*
    #[serde(default = "default_open_note")]
    pub open_note: String,

    #[serde(default = "default_other_window")]
    pub other_window: String,

    #[serde(default = "default_write_file")]
    pub write_file: String,

    #[serde(default = "default_quit")]
    pub quit: String,
}

impl Default for KeySettings {
    fn default() -> Self {
        Self {
            save: default_save(),
            cancel: default_cancel(),
            open: default_open(),
            open_note: default_open_note(),
            other_window: default_other_window(),
            write_file: default_write_file(),
            quit: default_quit(),
        }
    }
}

fn default_save() -> String {
    DEFAULT_SAVE_CHORD.to_string()
}

fn default_cancel() -> String {
    DEFAULT_CANCEL_CHORD.to_string()
}

fn default_open() -> String {
    "C-x c".to_string()
}

fn default_open_note() -> String {
    "C-x n".to_string()
}

fn default_other_window() -> String {
    "C-x o".to_string()
}

fn default_write_file() -> String {
    "C-x C-s".to_string()
}

fn default_quit() -> String {
    "C-x C-c".to_string()
}

/// Capture buffer settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CaptureSettings {
    /// Name of the capture buffer
    #[serde(default = "default_surface_name")]
    pub surface_name: String,
}

impl Default for CaptureSettings {
    fn default() -> Self {
        Self {
            surface_name: default_surface_name(),
        }
    }
}

fn default_surface_name() -> String {
    DEFAULT_SURFACE_NAME.to_string()
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Render buffer header lines (the capture help banner)
    #[serde(default = "default_true")]
    pub show_help: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self { show_help: true }
    }
}

fn default_true() -> bool {
    true
}
