//! Main update function - handles state transitions (TEA pattern)

use crate::keymap::describe_keys;
use crate::message::Message;
use crate::state::{AppPhase, AppState, OpenRequest, StatusLevel};
use crate::workspace::NOTES_BUFFER;
use quill_core::prelude::*;

use super::{edit::handle_edit, keys::handle_key, UpdateResult};

/// Process a message and update state
/// Returns an optional follow-up message
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            if state.capture.is_open() {
                warn!("Quitting with an open capture buffer, its text is lost");
            }
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => UpdateResult::none(),

        Message::KeyboardQuit => {
            state.chord.reset();
            state.set_status(StatusLevel::Info, "Quit");
            UpdateResult::none()
        }

        Message::UndefinedKey { keys } => {
            let text = format!("{} is undefined", describe_keys(&keys));
            debug!("{}", text);
            state.set_status(StatusLevel::Warning, text);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Capture Messages
        // ─────────────────────────────────────────────────────────
        Message::OpenCapture {
            target,
            initial_text,
        } => {
            state.request_capture(OpenRequest {
                target,
                initial_text,
            });
            UpdateResult::none()
        }

        Message::ConfirmReplace => {
            state.answer_replace(true);
            UpdateResult::none()
        }

        Message::DeclineReplace => {
            state.answer_replace(false);
            UpdateResult::none()
        }

        Message::SaveCapture => {
            state.save_capture();
            UpdateResult::none()
        }

        Message::CancelCapture => {
            state.cancel_capture();
            UpdateResult::none()
        }

        Message::NoteCaptured { text } => {
            match state.workspace.append_to(NOTES_BUFFER, &text) {
                Ok(count) => {
                    state.set_status(
                        StatusLevel::Info,
                        format!("Added {} chars to {}", count, NOTES_BUFFER),
                    );
                }
                Err(e) => state.report(e),
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Editing Messages
        // ─────────────────────────────────────────────────────────
        Message::Edit(command) => handle_edit(state, command),

        Message::OtherWindow => {
            state.workspace.other_window();
            UpdateResult::none()
        }

        Message::WriteFile => {
            match state.workspace.write_focused() {
                Ok(path) => {
                    state.set_status(StatusLevel::Info, format!("Wrote {}", path.display()));
                }
                Err(e) => state.report(e),
            }
            UpdateResult::none()
        }
    }
}
