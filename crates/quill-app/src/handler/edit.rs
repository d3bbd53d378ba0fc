//! Editing handlers for the focused buffer

use crate::message::EditCommand;
use crate::state::AppState;

use super::UpdateResult;

/// Apply one edit or motion to the focused buffer
pub fn handle_edit(state: &mut AppState, command: EditCommand) -> UpdateResult {
    let buffer = state.workspace.focused_buffer_mut();

    match command {
        EditCommand::InsertChar(c) => buffer.insert_char(c),
        EditCommand::Newline => buffer.newline(),
        EditCommand::Backspace => buffer.backspace(),
        EditCommand::DeleteForward => buffer.delete_forward(),
        EditCommand::Left => buffer.move_left(),
        EditCommand::Right => buffer.move_right(),
        EditCommand::Up => buffer.move_up(),
        EditCommand::Down => buffer.move_down(),
        EditCommand::LineStart => buffer.move_line_start(),
        EditCommand::LineEnd => buffer.move_line_end(),
    }

    UpdateResult::none()
}
