//! Editable text buffer

use std::cell::Cell;
use std::path::PathBuf;
use std::rc::{Rc, Weak};

use crate::keymap::{CaptureAction, KeyChord};

/// Stable identifier of a buffer for the lifetime of a workspace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BufferId(pub(crate) u32);

/// Position in a buffer that moves with edits made before it.
///
/// Text inserted exactly at the mark goes after it. Dropping every clone
/// releases the mark.
#[derive(Debug, Clone)]
pub struct Mark(Rc<Cell<usize>>);

impl Mark {
    pub fn offset(&self) -> usize {
        self.0.get()
    }
}

/// A named piece of text with a cursor.
///
/// The cursor is a byte offset that always sits on a char boundary.
#[derive(Debug, Clone)]
pub struct TextBuffer {
    id: BufferId,
    name: String,
    text: String,
    cursor: usize,
    /// Static line rendered above the text (capture help banner)
    pub header: Option<String>,
    /// File this buffer was loaded from, if any
    pub path: Option<PathBuf>,
    /// Unsaved edits since load or last write
    pub modified: bool,
    /// Chords active only while this buffer is focused
    pub bindings: Vec<(KeyChord, CaptureAction)>,
    /// Set for capture buffers created through the host interface
    pub(crate) is_surface: bool,
    marks: Vec<Weak<Cell<usize>>>,
}

impl TextBuffer {
    pub(crate) fn new(id: BufferId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            text: String::new(),
            cursor: 0,
            header: None,
            path: None,
            modified: false,
            bindings: Vec::new(),
            is_surface: false,
            marks: Vec::new(),
        }
    }

    pub fn id(&self) -> BufferId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Place a mark at `offset`, snapped to a char boundary
    pub fn mark(&mut self, offset: usize) -> Mark {
        let cell = Rc::new(Cell::new(self.snap(offset)));
        self.marks.push(Rc::downgrade(&cell));
        Mark(cell)
    }

    /// Replace all content; the cursor ends up after the new text.
    pub fn set_text(&mut self, text: &str) {
        self.adjust_marks(0, self.text.len(), text.len());
        self.text = text.to_string();
        self.cursor = self.text.len();
        self.modified = true;
    }

    /// Move the cursor, clamped to the text and snapped back to a char
    /// boundary.
    pub fn set_cursor(&mut self, offset: usize) {
        self.cursor = self.snap(offset);
    }

    pub fn insert_str(&mut self, s: &str) {
        self.adjust_marks(self.cursor, 0, s.len());
        self.text.insert_str(self.cursor, s);
        self.cursor += s.len();
        self.modified = true;
    }

    pub fn insert_char(&mut self, c: char) {
        self.adjust_marks(self.cursor, 0, c.len_utf8());
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
        self.modified = true;
    }

    pub fn newline(&mut self) {
        self.insert_char('\n');
    }

    /// Delete the char before the cursor
    pub fn backspace(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.adjust_marks(prev, self.cursor - prev, 0);
            self.text.replace_range(prev..self.cursor, "");
            self.cursor = prev;
            self.modified = true;
        }
    }

    /// Delete the char under the cursor
    pub fn delete_forward(&mut self) {
        if let Some(next) = self.next_boundary() {
            self.adjust_marks(self.cursor, next - self.cursor, 0);
            self.text.replace_range(self.cursor..next, "");
            self.modified = true;
        }
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = self.next_boundary() {
            self.cursor = next;
        }
    }

    pub fn move_line_start(&mut self) {
        self.cursor = self.line_start(self.cursor);
    }

    pub fn move_line_end(&mut self) {
        self.cursor = self.line_end(self.cursor);
    }

    pub fn move_up(&mut self) {
        let start = self.line_start(self.cursor);
        if start == 0 {
            return;
        }
        let column = self.text[start..self.cursor].chars().count();
        let prev_start = self.line_start(start - 1);
        self.cursor = self.offset_in_line(prev_start, column);
    }

    pub fn move_down(&mut self) {
        let end = self.line_end(self.cursor);
        if end == self.text.len() {
            return;
        }
        let column = self.text[self.line_start(self.cursor)..self.cursor]
            .chars()
            .count();
        self.cursor = self.offset_in_line(end + 1, column);
    }

    /// Zero-based (line, char column) of the cursor
    pub fn cursor_line_col(&self) -> (usize, usize) {
        let before = &self.text[..self.cursor];
        let line = before.matches('\n').count();
        let column = before[self.line_start(self.cursor)..].chars().count();
        (line, column)
    }

    /// Shift marks for an edit that replaces `removed` bytes at `start` with
    /// `inserted` bytes. Marks inside the removed range collapse to `start`.
    fn adjust_marks(&mut self, start: usize, removed: usize, inserted: usize) {
        let end = start + removed;
        self.marks.retain(|weak| {
            let Some(cell) = weak.upgrade() else {
                return false;
            };
            let offset = cell.get();
            if offset > end {
                cell.set(offset - removed + inserted);
            } else if offset > start {
                cell.set(start);
            }
            true
        });
    }

    fn snap(&self, offset: usize) -> usize {
        let mut offset = offset.min(self.text.len());
        while !self.text.is_char_boundary(offset) {
            offset -= 1;
        }
        offset
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.text[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
    }

    fn next_boundary(&self) -> Option<usize> {
        self.text[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
    }

    fn line_start(&self, offset: usize) -> usize {
        self.text[..offset].rfind('\n').map_or(0, |i| i + 1)
    }

    fn line_end(&self, offset: usize) -> usize {
        self.text[offset..]
            .find('\n')
            .map_or(self.text.len(), |i| offset + i)
    }

    /// Byte offset of `column` chars into the line starting at `start`,
    /// clamped to the line end
    fn offset_in_line(&self, start: usize, column: usize) -> usize {
        let end = self.line_end(start);
        self.text[start..end]
            .char_indices()
            .nth(column)
            .map_or(end, |(i, _)| start + i)
    }
}
