//! Window widget: one text buffer inside a bordered block
//!
//! The block title carries the buffer name (with `*` when modified). The
//! capture help banner, when the buffer has one, is pinned to the first
//! inner row and never scrolls.

use quill_app::workspace::TextBuffer;
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::theme::styles;

pub struct BufferView<'a> {
    buffer: &'a TextBuffer,
    focused: bool,
    show_banner: bool,
}

impl<'a> BufferView<'a> {
    pub fn new(buffer: &'a TextBuffer) -> Self {
        Self {
            buffer,
            focused: false,
            show_banner: true,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn show_banner(mut self, show: bool) -> Self {
        self.show_banner = show;
        self
    }

    fn banner(&self) -> Option<&'a str> {
        if self.show_banner {
            self.buffer.header.as_deref()
        } else {
            None
        }
    }

    fn title(&self) -> Line<'a> {
        let name_style = if self.focused {
            styles::accent_bold()
        } else {
            styles::text_secondary()
        };

        let mut spans = vec![Span::raw(" "), Span::styled(self.buffer.name(), name_style)];
        if self.buffer.modified {
            spans.push(Span::styled(" *", styles::text_muted()));
        }
        spans.push(Span::raw(" "));
        Line::from(spans)
    }

    /// Inner area left for text once the border and banner are taken
    fn text_area(&self, area: Rect) -> Rect {
        let inner = styles::glass_block(self.focused).inner(area);
        if self.banner().is_some() && inner.height > 0 {
            Rect {
                y: inner.y + 1,
                height: inner.height - 1,
                ..inner
            }
        } else {
            inner
        }
    }

    /// First text line shown so the cursor line stays visible
    fn scroll_offset(&self, height: u16) -> usize {
        let (line, _) = self.buffer.cursor_line_col();
        line.saturating_sub(usize::from(height.saturating_sub(1)))
    }

    /// Display column of the cursor within its line
    fn cursor_column(&self) -> usize {
        let (line, column) = self.buffer.cursor_line_col();
        let current = self.buffer.text().split('\n').nth(line).unwrap_or_default();
        let prefix: String = current.chars().take(column).collect();
        prefix.width()
    }

    /// First display column shown so the cursor column stays visible
    fn horizontal_offset(&self, width: u16) -> usize {
        self.cursor_column()
            .saturating_sub(usize::from(width.saturating_sub(1)))
    }

    /// Screen position of the text cursor when rendered into `area`
    pub fn cursor_position(&self, area: Rect) -> Option<Position> {
        let text_area = self.text_area(area);
        if text_area.width == 0 || text_area.height == 0 {
            return None;
        }

        let (line, _) = self.buffer.cursor_line_col();
        let row = line - self.scroll_offset(text_area.height);
        let col = self.cursor_column() - self.horizontal_offset(text_area.width);

        Some(Position::new(
            text_area.x + col as u16,
            text_area.y + row as u16,
        ))
    }
}

impl Widget for BufferView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused).title(self.title());
        let inner = block.inner(area);
        block.render(area, buf);

        if let Some(banner) = self.banner() {
            if inner.height > 0 {
                let row = Rect { height: 1, ..inner };
                Paragraph::new(banner)
                    .style(styles::banner())
                    .render(row, buf);
            }
        }

        let text_area = self.text_area(area);
        let offset = self.scroll_offset(text_area.height);
        let h_offset = u16::try_from(self.horizontal_offset(text_area.width)).unwrap_or(u16::MAX);
        let lines: Vec<Line> = self
            .buffer
            .text()
            .split('\n')
            .skip(offset)
            .take(usize::from(text_area.height))
            .map(|l| Line::styled(l, styles::text_primary()))
            .collect();

        Paragraph::new(lines)
            .scroll((0, h_offset))
            .render(text_area, buf);
    }
}
