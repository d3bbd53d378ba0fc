//! Application error types with rich context

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid key chord {chord:?}: {reason}")]
    KeyChord { chord: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // Capture/Host Errors
    // ─────────────────────────────────────────────────────────────
    #[error("No capture buffer is open")]
    NoActiveCapture,

    #[error("Buffer not found: {name}")]
    BufferNotFound { name: String },

    #[error("Stored location is no longer valid: {reason}")]
    InvalidLocation { reason: String },

    #[error("Host error: {message}")]
    Host { message: String },

    // ─────────────────────────────────────────────────────────────
    // Document Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Buffer {name} is not visiting a file")]
    NoFile { name: String },

    #[error("Failed to write {path}: {reason}")]
    Write { path: PathBuf, reason: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn key_chord(chord: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::KeyChord {
            chord: chord.into(),
            reason: reason.into(),
        }
    }

    pub fn buffer_not_found(name: impl Into<String>) -> Self {
        Self::BufferNotFound { name: name.into() }
    }

    pub fn invalid_location(reason: impl Into<String>) -> Self {
        Self::InvalidLocation {
            reason: reason.into(),
        }
    }

    pub fn host(message: impl Into<String>) -> Self {
        Self::Host {
            message: message.into(),
        }
    }

    pub fn no_file(name: impl Into<String>) -> Self {
        Self::NoFile { name: name.into() }
    }

    pub fn write(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Write {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Check if this is a recoverable error
    ///
    /// Recoverable errors are reported in the status line and the
    /// event loop keeps running.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::NoActiveCapture
                | Error::BufferNotFound { .. }
                | Error::InvalidLocation { .. }
                | Error::Host { .. }
                | Error::KeyChord { .. }
                | Error::NoFile { .. }
                | Error::Write { .. }
        )
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions (for use with color-eyre)
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}
