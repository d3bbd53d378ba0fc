//! Full-screen rendering tests

use super::view;
use crate::test_utils::{create_test_state, TestTerminal};
use quill_app::input_key::InputKey;
use quill_app::process::process_message;
use quill_app::state::AppState;
use quill_app::Message;

fn press(state: &mut AppState, keys: &[InputKey]) {
    for key in keys {
        process_message(state, Message::Key(*key));
    }
}

fn open_capture(state: &mut AppState) {
    press(state, &[InputKey::CharCtrl('x'), InputKey::Char('c')]);
}

#[test]
fn test_initial_screen_shows_scratch_and_hint() {
    let state = create_test_state();
    let mut term = TestTerminal::new();

    term.draw_with(|frame| view(frame, &state));

    assert!(term.line_contains(0, "*scratch*"));
    assert!(term.buffer_contains("Ctrl+X c opens a capture buffer"));
}

#[test]
fn test_capture_splits_screen_with_banner() {
    let mut state = create_test_state();
    press(&mut state, &[InputKey::Char('h'), InputKey::Char('i')]);
    open_capture(&mut state);
    let mut term = TestTerminal::new();

    term.draw_with(|frame| view(frame, &state));

    assert!(term.line_contains(0, "*scratch*"));
    assert!(term.line_contains(1, "hi"));
    assert!(term.buffer_contains("*quill-capture*"));
    assert!(term.buffer_contains(
        "Capture buffer. Finish with Ctrl+C Ctrl+C, abort with Ctrl+C Ctrl+K."
    ));
}

#[test]
fn test_banner_hidden_when_help_disabled() {
    let mut state = create_test_state();
    state.settings.ui.show_help = false;
    open_capture(&mut state);
    let mut term = TestTerminal::new();

    term.draw_with(|frame| view(frame, &state));

    assert!(term.buffer_contains("*quill-capture*"));
    assert!(!term.buffer_contains("Capture buffer. Finish with"));
}

#[test]
fn test_screen_returns_to_single_window_after_save() {
    let mut state = create_test_state();
    open_capture(&mut state);
    press(&mut state, &[InputKey::Char('x')]);
    press(&mut state, &[InputKey::CharCtrl('c'), InputKey::CharCtrl('c')]);
    let mut term = TestTerminal::new();

    term.draw_with(|frame| view(frame, &state));

    assert!(!term.buffer_contains("*quill-capture*"));
    assert!(term.line_contains(1, "x"));
    assert!(term.buffer_contains("Captured 1 chars"));
}

#[test]
fn test_confirm_dialog_overlay() {
    let mut state = create_test_state();
    open_capture(&mut state);
    open_capture(&mut state);
    let mut term = TestTerminal::new();

    term.draw_with(|frame| view(frame, &state));

    assert!(term.buffer_contains("Replace capture?"));
    assert!(term.buffer_contains("[y] Replace"));
}

#[test]
fn test_view_renders_in_compact_terminal() {
    let mut state = create_test_state();
    open_capture(&mut state);
    let mut term = TestTerminal::compact();

    term.draw_with(|frame| view(frame, &state));

    assert!(term.buffer_contains("Capture"));
}
