//! Confirmation dialog widget (replace the open capture buffer?)

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use super::modal_overlay::{centered_rect, dim_background, render_shadow};
use crate::theme::{palette, styles};

// Re-export state from app layer
pub use quill_app::confirm_dialog::ConfirmDialogState;

/// Key hint shown next to each option, in option order
const OPTION_KEYS: [(&str, ratatui::style::Color); 2] =
    [("y", palette::STATUS_GREEN), ("n", palette::STATUS_RED)];

/// Confirmation dialog widget
pub struct ConfirmDialog<'a> {
    state: &'a ConfirmDialogState,
}

impl<'a> ConfirmDialog<'a> {
    pub fn new(state: &'a ConfirmDialogState) -> Self {
        Self { state }
    }

    fn buttons(&self) -> Line<'a> {
        let mut spans = Vec::new();
        for ((label, _), (key, color)) in self.state.options.iter().zip(OPTION_KEYS) {
            if !spans.is_empty() {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled("[", styles::text_muted()));
            spans.push(Span::styled(
                key,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(format!("] {}", label), styles::text_secondary()));
        }
        Line::from(spans)
    }
}

impl Widget for ConfirmDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        dim_background(buf, area);

        let modal_area = centered_rect(50, 7, area);
        Clear.render(modal_area, buf);
        render_shadow(buf, modal_area);

        let title = format!(" {} ", self.state.title);
        let block = styles::modal_block(&title).title_alignment(Alignment::Center);
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let chunks = Layout::vertical([
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Message
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Buttons
            Constraint::Min(0),
        ])
        .split(inner);

        Paragraph::new(self.state.message.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(palette::STATUS_YELLOW))
            .render(chunks[1], buf);

        Paragraph::new(self.buttons())
            .alignment(Alignment::Center)
            .render(chunks[3], buf);
    }
}
