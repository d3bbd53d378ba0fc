//! Key event handlers for different UI modes

use crate::input_key::InputKey;
use crate::keymap::{CaptureAction, ChordMatch, Command};
use crate::message::{CaptureTarget, EditCommand, Message};
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode
///
/// Takes `&mut` because multi-key chords accumulate in `state.chord`.
pub fn handle_key(state: &mut AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::ConfirmDialog => handle_key_confirm_dialog(key),
        UiMode::Normal => handle_key_normal(state, key),
    }
}

/// Handle key events in the replace-capture dialog
fn handle_key_confirm_dialog(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('y' | 'Y') | InputKey::Enter => Some(Message::ConfirmReplace),
        InputKey::Char('n' | 'N') | InputKey::Esc | InputKey::CharCtrl('g') => {
            Some(Message::DeclineReplace)
        }
        _ => None,
    }
}

/// Handle key events while editing
fn handle_key_normal(state: &mut AppState, key: InputKey) -> Option<Message> {
    // C-g always aborts, even halfway through a chord
    if key == InputKey::CharCtrl('g') {
        return Some(Message::KeyboardQuit);
    }

    let bindings = state.active_bindings();
    match state.chord.feed(key, &bindings) {
        ChordMatch::Matched(command) => Some(command_message(command)),
        ChordMatch::Pending => None,
        ChordMatch::Unbound(keys) => match keys.as_slice() {
            [single] => match edit_for_key(*single) {
                Some(edit) => Some(Message::Edit(edit)),
                None => Some(Message::UndefinedKey { keys }),
            },
            _ => Some(Message::UndefinedKey { keys }),
        },
    }
}

fn command_message(command: Command) -> Message {
    match command {
        Command::Capture(CaptureAction::Save) => Message::SaveCapture,
        Command::Capture(CaptureAction::Cancel) => Message::CancelCapture,
        Command::OpenCapture => Message::OpenCapture {
            target: CaptureTarget::Point,
            initial_text: None,
        },
        Command::OpenNoteCapture => Message::OpenCapture {
            target: CaptureTarget::Notes,
            initial_text: None,
        },
        Command::OtherWindow => Message::OtherWindow,
        Command::WriteFile => Message::WriteFile,
        Command::Quit => Message::Quit,
    }
}

/// Map an unbound single key to an edit
fn edit_for_key(key: InputKey) -> Option<EditCommand> {
    match key {
        InputKey::Char(c) => Some(EditCommand::InsertChar(c)),
        InputKey::Enter => Some(EditCommand::Newline),
        InputKey::Backspace => Some(EditCommand::Backspace),
        InputKey::Delete | InputKey::CharCtrl('d') => Some(EditCommand::DeleteForward),
        InputKey::Left | InputKey::CharCtrl('b') => Some(EditCommand::Left),
        InputKey::Right | InputKey::CharCtrl('f') => Some(EditCommand::Right),
        InputKey::Up | InputKey::CharCtrl('p') => Some(EditCommand::Up),
        InputKey::Down | InputKey::CharCtrl('n') => Some(EditCommand::Down),
        InputKey::Home | InputKey::CharCtrl('a') => Some(EditCommand::LineStart),
        InputKey::End | InputKey::CharCtrl('e') => Some(EditCommand::LineEnd),
        _ => None,
    }
}
