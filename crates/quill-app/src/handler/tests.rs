//! Tests for handler module

use super::*;
use crate::config::{KeySettings, Settings};
use crate::input_key::InputKey;
use crate::message::{CaptureTarget, Message};
use crate::state::{AppPhase, AppState, StatusLevel, UiMode};
use crate::workspace::{Workspace, NOTES_BUFFER, SCRATCH_BUFFER};
use crate::capture::DEFAULT_SURFACE_NAME;
use tokio::sync::mpsc;

fn test_state() -> (AppState, mpsc::Receiver<Message>) {
    let (tx, rx) = mpsc::channel(16);
    (AppState::new(Workspace::new(), Settings::default(), tx), rx)
}

/// Run a message and its follow-ups through update
fn dispatch(state: &mut AppState, message: Message) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        msg = update(state, m).message;
    }
}

fn press(state: &mut AppState, keys: &[InputKey]) {
    for key in keys {
        dispatch(state, Message::Key(*key));
    }
}

fn type_text(state: &mut AppState, text: &str) {
    for c in text.chars() {
        dispatch(state, Message::Key(InputKey::Char(c)));
    }
}

fn ctrl(c: char) -> InputKey {
    InputKey::CharCtrl(c)
}

fn open_capture(state: &mut AppState) {
    press(state, &[ctrl('x'), InputKey::Char('c')]);
}

fn buffer_text(state: &AppState, name: &str) -> String {
    state
        .workspace
        .buffer_by_name(name)
        .map(|b| b.text().to_string())
        .unwrap_or_default()
}

#[test]
fn test_quit_message_sets_quitting_phase() {
    let (mut state, _rx) = test_state();
    assert_ne!(state.phase, AppPhase::Quitting);

    update(&mut state, Message::Quit);

    assert_eq!(state.phase, AppPhase::Quitting);
    assert!(state.should_quit());
}

#[test]
fn test_quit_chord() {
    let (mut state, _rx) = test_state();
    press(&mut state, &[ctrl('x'), ctrl('c')]);
    assert!(state.should_quit());
}

#[test]
fn test_plain_keys_edit_focused_buffer() {
    let (mut state, _rx) = test_state();

    type_text(&mut state, "ab");
    press(&mut state, &[InputKey::Enter, InputKey::Char('c'), InputKey::Left]);
    press(&mut state, &[InputKey::Backspace]);

    assert_eq!(buffer_text(&state, SCRATCH_BUFFER), "abc");
    assert!(state.workspace.focused_buffer().modified);
}

#[test]
fn test_capture_save_inserts_at_origin() {
    let (mut state, _rx) = test_state();
    type_text(&mut state, "ac");
    press(&mut state, &[InputKey::Left]);

    open_capture(&mut state);
    assert!(state.capture.is_open());
    assert_eq!(state.workspace.focused_buffer().name(), DEFAULT_SURFACE_NAME);

    type_text(&mut state, "b");
    press(&mut state, &[ctrl('c'), ctrl('c')]);

    assert!(!state.capture.is_open());
    assert_eq!(buffer_text(&state, SCRATCH_BUFFER), "abc");
    assert!(state.workspace.buffer_by_name(DEFAULT_SURFACE_NAME).is_none());
    assert_eq!(state.workspace.layout().windows().len(), 1);
    assert_eq!(state.workspace.focused_buffer().name(), SCRATCH_BUFFER);
    assert_eq!(state.status.as_ref().unwrap().text, "Captured 1 chars");
}

#[test]
fn test_origin_follows_edits_made_while_capture_is_open() {
    let (mut state, _rx) = test_state();
    type_text(&mut state, "Dear ,");
    press(&mut state, &[InputKey::Left]);

    open_capture(&mut state);
    type_text(&mut state, "Ada");

    // Back to the document: prepend a greeting before the origin
    press(&mut state, &[ctrl('x'), InputKey::Char('o')]);
    assert_eq!(state.workspace.focused_buffer().name(), SCRATCH_BUFFER);
    press(&mut state, &[InputKey::Home]);
    type_text(&mut state, "Hi ");

    press(&mut state, &[ctrl('x'), InputKey::Char('o')]);
    assert_eq!(state.workspace.focused_buffer().name(), DEFAULT_SURFACE_NAME);
    press(&mut state, &[ctrl('c'), ctrl('c')]);

    assert_eq!(buffer_text(&state, SCRATCH_BUFFER), "Hi Dear Ada,");
}

#[test]
fn test_capture_cancel_discards_text() {
    let (mut state, _rx) = test_state();
    type_text(&mut state, "keep");

    open_capture(&mut state);
    type_text(&mut state, "thrown away");
    press(&mut state, &[ctrl('c'), ctrl('k')]);

    assert!(!state.capture.is_open());
    assert_eq!(buffer_text(&state, SCRATCH_BUFFER), "keep");
    assert_eq!(state.workspace.focused_buffer().name(), SCRATCH_BUFFER);
}

#[test]
fn test_note_capture_goes_through_callback() {
    let (mut state, mut rx) = test_state();

    press(&mut state, &[ctrl('x'), InputKey::Char('n')]);
    type_text(&mut state, "remember milk");
    press(&mut state, &[ctrl('c'), ctrl('c')]);

    // Nothing inserted at the origin
    assert_eq!(buffer_text(&state, SCRATCH_BUFFER), "");

    let msg = rx.try_recv().unwrap();
    assert!(matches!(&msg, Message::NoteCaptured { text } if text == "remember milk"));
    dispatch(&mut state, msg);

    assert_eq!(buffer_text(&state, NOTES_BUFFER), "remember milk");
}

#[test]
fn test_open_while_open_shows_confirm_dialog() {
    let (mut state, _rx) = test_state();
    open_capture(&mut state);
    type_text(&mut state, "draft");

    // Focus the origin window, then ask again
    press(&mut state, &[ctrl('x'), InputKey::Char('o')]);
    open_capture(&mut state);

    assert_eq!(state.ui_mode, UiMode::ConfirmDialog);
    assert!(state.confirm_dialog_state.is_some());
}

#[test]
fn test_decline_replace_keeps_draft() {
    let (mut state, _rx) = test_state();
    open_capture(&mut state);
    type_text(&mut state, "draft");
    open_capture(&mut state);

    press(&mut state, &[InputKey::Char('n')]);

    assert_eq!(state.ui_mode, UiMode::Normal);
    assert!(state.capture.is_open());
    assert_eq!(buffer_text(&state, DEFAULT_SURFACE_NAME), "draft");
    assert_eq!(
        state.status.as_ref().unwrap().text,
        "Kept existing capture buffer"
    );
}

#[test]
fn test_confirm_replace_starts_fresh() {
    let (mut state, _rx) = test_state();
    open_capture(&mut state);
    type_text(&mut state, "draft");
    open_capture(&mut state);

    press(&mut state, &[InputKey::Char('y')]);

    assert_eq!(state.ui_mode, UiMode::Normal);
    assert!(state.capture.is_open());
    assert_eq!(buffer_text(&state, DEFAULT_SURFACE_NAME), "");
}

#[test]
fn test_open_capture_with_initial_text() {
    let (mut state, _rx) = test_state();

    dispatch(
        &mut state,
        Message::OpenCapture {
            target: CaptureTarget::Point,
            initial_text: Some("seed".to_string()),
        },
    );

    assert_eq!(buffer_text(&state, DEFAULT_SURFACE_NAME), "seed");
    let surface = state.workspace.focused_buffer();
    assert_eq!(surface.cursor(), 4);
    assert!(surface.header.as_ref().unwrap().contains("Ctrl+C Ctrl+C"));
}

#[test]
fn test_save_chord_is_unbound_outside_capture() {
    let (mut state, _rx) = test_state();

    press(&mut state, &[ctrl('c')]);

    let status = state.status.as_ref().unwrap();
    assert_eq!(status.level, StatusLevel::Warning);
    assert_eq!(status.text, "Ctrl+C is undefined");
    assert!(!state.chord.is_pending());
}

#[test]
fn test_undefined_sequence_reports_all_keys() {
    let (mut state, _rx) = test_state();

    press(&mut state, &[ctrl('x'), InputKey::Char('z')]);

    assert_eq!(state.status.as_ref().unwrap().text, "Ctrl+X z is undefined");
    assert_eq!(buffer_text(&state, SCRATCH_BUFFER), "");
}

#[test]
fn test_keyboard_quit_drops_partial_chord() {
    let (mut state, _rx) = test_state();
    open_capture(&mut state);

    press(&mut state, &[ctrl('c')]);
    assert!(state.chord.is_pending());

    press(&mut state, &[ctrl('g')]);
    assert!(!state.chord.is_pending());

    // The next C-c starts a new chord instead of completing the old one
    press(&mut state, &[ctrl('c')]);
    assert!(state.capture.is_open());
}

#[test]
fn test_rebound_save_chord() {
    let (tx, _rx) = mpsc::channel(16);
    let settings = Settings {
        keys: KeySettings {
            save: "<f2>".to_string(),
            ..KeySettings::default()
        },
        ..Settings::default()
    };
    let mut state = AppState::new(Workspace::new(), settings, tx);

    open_capture(&mut state);
    type_text(&mut state, "x");
    press(&mut state, &[ctrl('c'), ctrl('c')]);
    assert!(state.capture.is_open());

    press(&mut state, &[InputKey::F(2)]);
    assert!(!state.capture.is_open());
    assert_eq!(buffer_text(&state, SCRATCH_BUFFER), "x");
}

#[test]
fn test_save_without_capture_reports_warning() {
    let (mut state, _rx) = test_state();

    dispatch(&mut state, Message::SaveCapture);

    assert_eq!(state.status.as_ref().unwrap().level, StatusLevel::Warning);
}

#[test]
fn test_write_scratch_reports_no_file() {
    let (mut state, _rx) = test_state();

    press(&mut state, &[ctrl('x'), ctrl('s')]);

    let status = state.status.as_ref().unwrap();
    assert_eq!(status.level, StatusLevel::Warning);
    assert!(status.text.contains(SCRATCH_BUFFER));
}

#[test]
fn test_confirm_dialog_keys() {
    let (mut state, _rx) = test_state();
    state.ui_mode = UiMode::ConfirmDialog;

    assert!(matches!(
        handle_key(&mut state, InputKey::Char('y')),
        Some(Message::ConfirmReplace)
    ));
    assert!(matches!(
        handle_key(&mut state, InputKey::Enter),
        Some(Message::ConfirmReplace)
    ));
    assert!(matches!(
        handle_key(&mut state, InputKey::Esc),
        Some(Message::DeclineReplace)
    ));
    assert!(matches!(
        handle_key(&mut state, ctrl('g')),
        Some(Message::DeclineReplace)
    ));
    assert!(handle_key(&mut state, InputKey::Char('x')).is_none());
}
