//! Status bar widget
//!
//! Shows a partially typed chord, the latest status message, whether a
//! capture is open and the cursor position.

use quill_app::keymap::describe_keys;
use quill_app::state::AppState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::theme::styles;

pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Keys of an unfinished chord, Emacs echo-area style
    fn pending_chord(&self) -> Option<Span<'static>> {
        let pending = self.state.chord.pending();
        if pending.is_empty() {
            return None;
        }
        Some(Span::styled(
            format!("{}-", describe_keys(pending)),
            styles::accent_bold(),
        ))
    }

    fn status_message(&self) -> Option<Vec<Span<'a>>> {
        let status = self.state.status.as_ref()?;
        Some(vec![
            Span::styled(status.at.format("%H:%M:%S ").to_string(), styles::text_muted()),
            Span::styled(status.text.as_str(), styles::status_level(status.level)),
        ])
    }

    fn capture_indicator(&self) -> Option<Span<'static>> {
        self.state
            .capture
            .is_open()
            .then(|| Span::styled("● capture", styles::accent_bold()))
    }

    fn cursor_position(&self) -> Span<'static> {
        let (line, column) = self.state.workspace.focused_buffer().cursor_line_col();
        Span::styled(
            format!("L{}:C{}", line + 1, column + 1),
            styles::text_secondary(),
        )
    }

    fn build_segments(&self) -> Vec<Span<'a>> {
        let separator = Span::styled(" │ ", styles::text_muted());
        let mut segments = vec![Span::raw(" "), self.cursor_position()];

        if let Some(indicator) = self.capture_indicator() {
            segments.push(separator.clone());
            segments.push(indicator);
        }

        // A pending chord replaces the message until it resolves
        if let Some(chord) = self.pending_chord() {
            segments.push(separator);
            segments.push(chord);
        } else if let Some(message) = self.status_message() {
            segments.push(separator);
            segments.extend(message);
        }

        segments
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(styles::border_inactive());

        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(Line::from(self.build_segments())).render(inner, buf);
    }
}
