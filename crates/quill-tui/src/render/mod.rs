//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use quill_app::state::{AppState, UiMode};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use super::{layout, widgets};
use crate::theme::palette;

/// Render the complete UI (View function in TEA)
///
/// Pure rendering: state is only read. The terminal cursor is placed in
/// the focused window unless a dialog is open.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let workspace = &state.workspace;
    let windows = workspace.layout().windows();
    let areas = layout::create(area, windows.len());
    let focused_index = workspace.layout().focused_index();

    for (index, (window, rect)) in windows.iter().zip(&areas.windows).enumerate() {
        let Some(buffer) = workspace.buffer(window.buffer) else {
            continue;
        };

        let focused = index == focused_index;
        let view = widgets::BufferView::new(buffer)
            .focused(focused)
            .show_banner(state.settings.ui.show_help);

        if focused && state.ui_mode == UiMode::Normal {
            if let Some(position) = view.cursor_position(*rect) {
                frame.set_cursor_position(position);
            }
        }

        frame.render_widget(view, *rect);
    }

    frame.render_widget(widgets::StatusBar::new(state), areas.status);

    if state.ui_mode == UiMode::ConfirmDialog {
        if let Some(dialog_state) = &state.confirm_dialog_state {
            frame.render_widget(widgets::ConfirmDialog::new(dialog_state), area);
        }
    }
}
