//! Application state (Model in TEA pattern)

use chrono::{DateTime, Local};
use tokio::sync::mpsc;

use crate::capture::{CaptureController, OpenOutcome, SaveCallback, DEFAULT_SURFACE_NAME};
use crate::config::Settings;
use crate::confirm_dialog::ConfirmDialogState;
use crate::host::CaptureHost;
use crate::keymap::{ChordMatcher, Command, KeyChord, Keymap};
use crate::message::{CaptureTarget, Message};
use crate::workspace::Workspace;
use quill_core::prelude::*;

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Editing the focused buffer
    #[default]
    Normal,

    /// Confirmation dialog (replace an open capture buffer)
    ConfirmDialog,
}

/// Severity of a status line message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// One line of feedback shown at the bottom of the screen
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
    pub at: DateTime<Local>,
}

/// A capture request waiting on the replace-confirmation dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenRequest {
    pub target: CaptureTarget,
    pub initial_text: Option<String>,
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,
    pub ui_mode: UiMode,
    pub settings: Settings,

    pub workspace: Workspace,
    pub capture: CaptureController<Workspace>,
    pub keymap: Keymap,
    pub chord: ChordMatcher,

    pub confirm_dialog_state: Option<ConfirmDialogState>,
    pub pending_open: Option<OpenRequest>,
    pub status: Option<StatusMessage>,

    /// Loop-bound channel; save callbacks post their text through it
    msg_tx: mpsc::Sender<Message>,
}

impl AppState {
    pub fn new(workspace: Workspace, settings: Settings, msg_tx: mpsc::Sender<Message>) -> Self {
        let mut warnings = Vec::new();

        let keymap = match Keymap::from_settings(&settings.keys) {
            Ok(keymap) => keymap,
            Err(e) => {
                warn!("Invalid key binding in config, using defaults: {}", e);
                warnings.push(format!("{} (using default keys)", e));
                Keymap::default()
            }
        };

        let surface_name = settings.capture.surface_name.trim();
        let surface_name = if surface_name.is_empty() {
            warn!("Empty capture surface name in config, using {}", DEFAULT_SURFACE_NAME);
            warnings.push(format!("Empty capture name, using {}", DEFAULT_SURFACE_NAME));
            DEFAULT_SURFACE_NAME
        } else if workspace.buffer_by_name(surface_name).is_some() {
            warn!(
                "Capture surface name {} collides with an open buffer, using {}",
                surface_name, DEFAULT_SURFACE_NAME
            );
            warnings.push(format!(
                "{} is already a buffer, capturing in {}",
                surface_name, DEFAULT_SURFACE_NAME
            ));
            DEFAULT_SURFACE_NAME
        } else {
            surface_name
        };

        let capture = CaptureController::new(keymap.capture.clone(), surface_name);

        let mut state = Self {
            phase: AppPhase::Running,
            ui_mode: UiMode::Normal,
            settings,
            workspace,
            capture,
            keymap,
            chord: ChordMatcher::new(),
            confirm_dialog_state: None,
            pending_open: None,
            status: None,
            msg_tx,
        };

        if warnings.is_empty() {
            let hint = state
                .keymap
                .chord_for(Command::OpenCapture)
                .map(|chord| format!("{} opens a capture buffer", chord));
            if let Some(hint) = hint {
                state.set_status(StatusLevel::Info, hint);
            }
        } else {
            state.set_status(StatusLevel::Warning, warnings.join("; "));
        }

        state
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn set_status(&mut self, level: StatusLevel, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            level,
            at: Local::now(),
        });
    }

    /// Bindings in effect for the focused buffer. Buffer-scoped capture
    /// chords take precedence over global ones.
    pub fn active_bindings(&self) -> Vec<(KeyChord, Command)> {
        self.workspace
            .focused_buffer()
            .bindings
            .iter()
            .map(|(chord, action)| (chord.clone(), Command::Capture(*action)))
            .chain(self.keymap.global().iter().cloned())
            .collect()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Capture flow
    // ─────────────────────────────────────────────────────────────────────────

    /// Open a capture buffer, or ask first if one is already open.
    pub fn request_capture(&mut self, request: OpenRequest) {
        if self.workspace.surface_exists(self.capture.surface_name()) {
            debug!("Capture buffer exists, asking before replacing");
            self.confirm_dialog_state =
                Some(ConfirmDialogState::replace_capture(self.capture.surface_name()));
            self.pending_open = Some(request);
            self.ui_mode = UiMode::ConfirmDialog;
            return;
        }

        self.open_capture(request);
    }

    /// Answer the replace dialog and run the pending open.
    ///
    /// The answer is queued on the workspace so the controller's own guard
    /// makes the final decision.
    pub fn answer_replace(&mut self, replace: bool) {
        self.ui_mode = UiMode::Normal;
        self.confirm_dialog_state = None;

        let Some(request) = self.pending_open.take() else {
            warn!("Replace answered with no pending capture request");
            return;
        };

        self.workspace.reply_to_prompt(replace);
        self.open_capture(request);
    }

    fn open_capture(&mut self, request: OpenRequest) {
        let callback = match request.target {
            CaptureTarget::Point => None,
            CaptureTarget::Notes => Some(self.note_callback()),
        };

        let result = self.capture.open(
            &mut self.workspace,
            request.initial_text.as_deref(),
            callback,
        );

        match result {
            Ok(OpenOutcome::Opened) => {
                let keymap = self.capture.keymap();
                let text = format!("{} to finish, {} to abort", keymap.save, keymap.cancel);
                self.set_status(StatusLevel::Info, text);
            }
            Ok(OpenOutcome::Declined) => {
                self.set_status(StatusLevel::Info, "Kept existing capture buffer");
            }
            Err(e) => {
                error!("Failed to open capture buffer: {}", e);
                self.set_status(StatusLevel::Error, e.to_string());
            }
        }
    }

    /// Save callback that forwards the text to the event loop
    fn note_callback(&self) -> SaveCallback {
        let tx = self.msg_tx.clone();
        Box::new(move |text| {
            if let Err(e) = tx.try_send(Message::NoteCaptured { text }) {
                error!("Failed to deliver note capture: {}", e);
            }
        })
    }

    pub fn save_capture(&mut self) {
        match self.capture.save(&mut self.workspace) {
            Ok(count) => self.set_status(StatusLevel::Info, format!("Captured {} chars", count)),
            Err(e) => self.report(e),
        }
    }

    pub fn cancel_capture(&mut self) {
        match self.capture.cancel(&mut self.workspace) {
            Ok(()) => self.set_status(StatusLevel::Info, "Capture cancelled"),
            Err(e) => self.report(e),
        }
    }

    /// Show an error in the status line
    pub fn report(&mut self, error: Error) {
        if error.is_recoverable() {
            warn!("{}", error);
            self.set_status(StatusLevel::Warning, error.to_string());
        } else {
            error!("{}", error);
            self.set_status(StatusLevel::Error, error.to_string());
        }
    }
}
