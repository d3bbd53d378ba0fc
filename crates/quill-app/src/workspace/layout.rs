//! Window arrangement
//!
//! Windows are stacked top to bottom; each shows one buffer. The layout is a
//! plain value so it can be snapshotted and restored wholesale.

use super::buffer::BufferId;

/// A view onto one buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub buffer: BufferId,
}

/// Ordered windows plus the focused one. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowLayout {
    windows: Vec<Window>,
    focused: usize,
}

impl WindowLayout {
    /// One window showing `buffer`
    pub fn single(buffer: BufferId) -> Self {
        Self {
            windows: vec![Window { buffer }],
            focused: 0,
        }
    }

    pub fn windows(&self) -> &[Window] {
        &self.windows
    }

    pub fn focused_index(&self) -> usize {
        self.focused
    }

    pub fn focused_buffer(&self) -> BufferId {
        self.windows[self.focused].buffer
    }

    /// Open a new window below the focused one and focus it
    pub fn split_below(&mut self, buffer: BufferId) {
        let at = self.focused + 1;
        self.windows.insert(at, Window { buffer });
        self.focused = at;
    }

    /// Cycle focus to the next window
    pub fn focus_next(&mut self) {
        self.focused = (self.focused + 1) % self.windows.len();
    }

    /// Focus the first window showing `buffer`. Returns false if none does.
    pub fn focus_buffer(&mut self, buffer: BufferId) -> bool {
        match self.windows.iter().position(|w| w.buffer == buffer) {
            Some(index) => {
                self.focused = index;
                true
            }
            None => false,
        }
    }

    /// Switch the focused window to another buffer
    pub fn show_in_focused(&mut self, buffer: BufferId) {
        self.windows[self.focused].buffer = buffer;
    }

    /// Drop windows whose buffer fails `keep`, falling back to a single
    /// window on `fallback` if nothing is left.
    pub fn retain_buffers(&mut self, keep: impl Fn(BufferId) -> bool, fallback: BufferId) {
        let focused_buffer = self.focused_buffer();
        let focused_kept = keep(focused_buffer);
        let before_focus = self.windows[..self.focused]
            .iter()
            .filter(|w| keep(w.buffer))
            .count();

        self.windows.retain(|w| keep(w.buffer));

        if self.windows.is_empty() {
            *self = Self::single(fallback);
            return;
        }

        self.focused = if focused_kept {
            before_focus
        } else {
            before_focus.min(self.windows.len() - 1)
        };
    }
}
