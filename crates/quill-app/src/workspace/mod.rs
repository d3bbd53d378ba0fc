//! In-memory text workspace: buffers, windows and the capture host
//!
//! This is the editor the terminal UI drives. It implements
//! [`CaptureHost`] so the capture controller can borrow its buffers and
//! windows.

mod buffer;
mod layout;

pub use buffer::{BufferId, Mark, TextBuffer};
pub use layout::{Window, WindowLayout};

use std::path::{Path, PathBuf};

use crate::host::CaptureHost;
use crate::keymap::{CaptureAction, KeyChord};
use quill_core::prelude::*;

/// Buffer shown when no file is given
pub const SCRATCH_BUFFER: &str = "*scratch*";

/// Target of note captures
pub const NOTES_BUFFER: &str = "*notes*";

/// Insertion point in a specific buffer.
///
/// Survives focus and layout changes and moves with edits made to its
/// buffer. Becomes invalid once its buffer is killed.
#[derive(Debug, Clone)]
pub struct Marker {
    pub buffer: BufferId,
    pub mark: Mark,
}

/// Buffers plus the windows showing them
#[derive(Debug)]
pub struct Workspace {
    buffers: Vec<TextBuffer>,
    layout: WindowLayout,
    next_id: u32,
    /// Answer for the next yes/no prompt, queued by the confirm dialog
    prompt_reply: Option<bool>,
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}

impl Workspace {
    /// Workspace with a `*scratch*` buffer and an empty `*notes*` buffer
    pub fn new() -> Self {
        let scratch = TextBuffer::new(BufferId(0), SCRATCH_BUFFER);
        let mut workspace = Self {
            layout: WindowLayout::single(scratch.id()),
            buffers: vec![scratch],
            next_id: 1,
            prompt_reply: None,
        };
        workspace.find_or_create(NOTES_BUFFER);
        workspace
    }

    /// Workspace whose first buffer visits `path`. A missing file gives an
    /// empty buffer that will be created on write.
    pub fn with_file(path: &Path) -> Result<Self> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("{} does not exist yet, starting empty", path.display());
                String::new()
            }
            Err(e) => return Err(e.into()),
        };

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let mut document = TextBuffer::new(BufferId(0), name);
        document.set_text(&text);
        document.set_cursor(0);
        document.modified = false;
        document.path = Some(path.to_path_buf());

        let mut workspace = Self {
            layout: WindowLayout::single(document.id()),
            buffers: vec![document],
            next_id: 1,
            prompt_reply: None,
        };
        workspace.find_or_create(NOTES_BUFFER);
        info!("Loaded {} ({} bytes)", path.display(), text.len());
        Ok(workspace)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Buffers
    // ─────────────────────────────────────────────────────────────────────────

    pub fn buffers(&self) -> &[TextBuffer] {
        &self.buffers
    }

    pub fn buffer(&self, id: BufferId) -> Option<&TextBuffer> {
        self.buffers.iter().find(|b| b.id() == id)
    }

    pub fn buffer_mut(&mut self, id: BufferId) -> Option<&mut TextBuffer> {
        self.buffers.iter_mut().find(|b| b.id() == id)
    }

    pub fn buffer_by_name(&self, name: &str) -> Option<&TextBuffer> {
        self.buffers.iter().find(|b| b.name() == name)
    }

    fn buffer_by_name_mut(&mut self, name: &str) -> Result<&mut TextBuffer> {
        self.buffers
            .iter_mut()
            .find(|b| b.name() == name)
            .ok_or_else(|| Error::buffer_not_found(name))
    }

    fn surface(&self, name: &str) -> Option<&TextBuffer> {
        self.buffer_by_name(name).filter(|b| b.is_surface)
    }

    fn surface_mut(&mut self, name: &str) -> Result<&mut TextBuffer> {
        let buffer = self.buffer_by_name_mut(name)?;
        if !buffer.is_surface {
            return Err(Error::host(format!("{} is not a capture buffer", name)));
        }
        Ok(buffer)
    }

    /// Id of the named buffer, creating an empty one if needed
    pub fn find_or_create(&mut self, name: &str) -> BufferId {
        if let Some(buffer) = self.buffer_by_name(name) {
            return buffer.id();
        }

        let id = BufferId(self.next_id);
        self.next_id += 1;
        self.buffers.push(TextBuffer::new(id, name));
        debug!("Created buffer {}", name);
        id
    }

    /// Remove a buffer and every window showing it.
    ///
    /// The first buffer is never killed so the layout always has something to
    /// show.
    pub fn kill_buffer(&mut self, name: &str) -> bool {
        let Some(index) = self.buffers.iter().position(|b| b.name() == name) else {
            return false;
        };
        if index == 0 {
            warn!("Refusing to kill primary buffer {}", name);
            return false;
        }

        let id = self.buffers.remove(index).id();
        let fallback = self.buffers[0].id();
        self.layout.retain_buffers(|b| b != id, fallback);
        debug!("Killed buffer {}", name);
        true
    }

    /// Append a paragraph to a buffer, separated from existing text by a
    /// newline. Returns the number of chars appended.
    pub fn append_to(&mut self, name: &str, text: &str) -> Result<usize> {
        let buffer = self.buffer_by_name_mut(name)?;
        let needs_break = !buffer.text().is_empty() && !buffer.text().ends_with('\n');
        buffer.set_cursor(buffer.text().len());
        if needs_break {
            buffer.newline();
        }
        buffer.insert_str(text);
        Ok(text.chars().count())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Windows
    // ─────────────────────────────────────────────────────────────────────────

    pub fn layout(&self) -> &WindowLayout {
        &self.layout
    }

    pub fn focused_buffer(&self) -> &TextBuffer {
        let id = self.layout.focused_buffer();
        self.buffer(id)
            .unwrap_or(&self.buffers[0])
    }

    pub fn focused_buffer_mut(&mut self) -> &mut TextBuffer {
        let id = self.layout.focused_buffer();
        let index = self
            .buffers
            .iter()
            .position(|b| b.id() == id)
            .unwrap_or(0);
        &mut self.buffers[index]
    }

    pub fn other_window(&mut self) {
        self.layout.focus_next();
    }

    /// Queue the answer for the next [`CaptureHost::confirm`] call
    pub fn reply_to_prompt(&mut self, answer: bool) {
        self.prompt_reply = Some(answer);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Files
    // ─────────────────────────────────────────────────────────────────────────

    /// Write the focused buffer to the file it visits
    pub fn write_focused(&mut self) -> Result<PathBuf> {
        let buffer = self.focused_buffer_mut();
        let path = buffer
            .path
            .clone()
            .ok_or_else(|| Error::no_file(buffer.name()))?;

        std::fs::write(&path, buffer.text()).map_err(|e| Error::write(&path, e.to_string()))?;
        buffer.modified = false;
        info!("Wrote {}", path.display());
        Ok(path)
    }
}

impl CaptureHost for Workspace {
    type Location = Marker;
    type Layout = WindowLayout;

    fn surface_exists(&self, name: &str) -> bool {
        self.surface(name).is_some()
    }

    fn confirm(&mut self, question: &str) -> bool {
        let answer = self.prompt_reply.take().unwrap_or(false);
        debug!("Prompt {:?} answered {}", question, answer);
        answer
    }

    fn current_location(&mut self) -> Marker {
        let buffer = self.focused_buffer_mut();
        let cursor = buffer.cursor();
        Marker {
            buffer: buffer.id(),
            mark: buffer.mark(cursor),
        }
    }

    fn save_layout(&self) -> WindowLayout {
        self.layout.clone()
    }

    fn restore_layout(&mut self, layout: WindowLayout) -> Result<()> {
        self.layout = layout;
        let live: Vec<BufferId> = self.buffers.iter().map(|b| b.id()).collect();
        let fallback = self.buffers[0].id();
        self.layout.retain_buffers(|id| live.contains(&id), fallback);
        Ok(())
    }

    fn present_surface(&mut self, name: &str) -> Result<()> {
        if self.buffer_by_name(name).is_some_and(|b| !b.is_surface) {
            return Err(Error::host(format!(
                "{} is an existing buffer, not a capture buffer",
                name
            )));
        }

        let origin = self.layout.focused_buffer();
        let surface = self.find_or_create(name);
        if let Some(buffer) = self.buffer_mut(surface) {
            buffer.is_surface = true;
        }
        self.layout = WindowLayout::single(origin);
        self.layout.split_below(surface);
        Ok(())
    }

    fn set_surface_text(&mut self, name: &str, text: &str) -> Result<()> {
        let buffer = self.surface_mut(name)?;
        buffer.set_text(text);
        buffer.modified = false;
        Ok(())
    }

    fn surface_text(&self, name: &str) -> Result<String> {
        self.surface(name)
            .map(|b| b.text().to_string())
            .ok_or_else(|| Error::buffer_not_found(name))
    }

    fn destroy_surface(&mut self, name: &str) {
        if self.surface(name).is_some() {
            self.kill_buffer(name);
        }
    }

    fn focus_location(&mut self, location: &Marker) -> Result<()> {
        if self.buffer(location.buffer).is_none() {
            return Err(Error::invalid_location(format!(
                "buffer {:?} was killed",
                location.buffer
            )));
        }

        if !self.layout.focus_buffer(location.buffer) {
            self.layout.show_in_focused(location.buffer);
        }
        self.focused_buffer_mut().set_cursor(location.mark.offset());
        Ok(())
    }

    fn insert_at_point(&mut self, text: &str) -> Result<()> {
        self.focused_buffer_mut().insert_str(text);
        Ok(())
    }

    fn set_header(&mut self, name: &str, banner: &str) -> Result<()> {
        self.surface_mut(name)?.header = Some(banner.to_string());
        Ok(())
    }

    fn bind_actions(&mut self, name: &str, bindings: &[(KeyChord, CaptureAction)]) -> Result<()> {
        self.surface_mut(name)?.bindings = bindings.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::CaptureController;
    use tempfile::tempdir;

    #[test]
    fn test_new_workspace_has_scratch_and_notes() {
        let ws = Workspace::new();
        assert_eq!(ws.focused_buffer().name(), SCRATCH_BUFFER);
        assert!(ws.buffer_by_name(NOTES_BUFFER).is_some());
        assert_eq!(ws.layout().windows().len(), 1);
    }

    #[test]
    fn test_with_file_loads_text() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("draft.md");
        std::fs::write(&path, "# Title\n").unwrap();

        let ws = Workspace::with_file(&path).unwrap();

        let doc = ws.focused_buffer();
        assert_eq!(doc.name(), "draft.md");
        assert_eq!(doc.text(), "# Title\n");
        assert_eq!(doc.cursor(), 0);
        assert!(!doc.modified);
    }

    #[test]
    fn test_with_missing_file_starts_empty() {
        let temp = tempdir().unwrap();
        let ws = Workspace::with_file(&temp.path().join("new.txt")).unwrap();
        assert_eq!(ws.focused_buffer().text(), "");
    }

    #[test]
    fn test_write_focused_round_trips() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("out.txt");
        let mut ws = Workspace::with_file(&path).unwrap();
        ws.focused_buffer_mut().insert_str("written");

        let written = ws.write_focused().unwrap();

        assert_eq!(written, path);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "written");
        assert!(!ws.focused_buffer().modified);
    }

    #[test]
    fn test_write_scratch_is_error() {
        let mut ws = Workspace::new();
        assert!(matches!(ws.write_focused(), Err(Error::NoFile { .. })));
    }

    #[test]
    fn test_kill_buffer_removes_windows() {
        let mut ws = Workspace::new();
        ws.present_surface("*tmp*").unwrap();
        assert_eq!(ws.layout().windows().len(), 2);

        assert!(ws.kill_buffer("*tmp*"));

        assert_eq!(ws.layout().windows().len(), 1);
        assert_eq!(ws.focused_buffer().name(), SCRATCH_BUFFER);
    }

    #[test]
    fn test_primary_buffer_cannot_be_killed() {
        let mut ws = Workspace::new();
        assert!(!ws.kill_buffer(SCRATCH_BUFFER));
        assert!(!ws.kill_buffer("missing"));
    }

    #[test]
    fn test_append_to_separates_paragraphs() {
        let mut ws = Workspace::new();
        ws.append_to(NOTES_BUFFER, "one").unwrap();
        ws.append_to(NOTES_BUFFER, "two").unwrap();
        assert_eq!(ws.buffer_by_name(NOTES_BUFFER).unwrap().text(), "one\ntwo");
    }

    #[test]
    fn test_confirm_consumes_queued_reply() {
        let mut ws = Workspace::new();
        assert!(!ws.confirm("replace?"));
        ws.reply_to_prompt(true);
        assert!(ws.confirm("replace?"));
        assert!(!ws.confirm("replace?"));
    }

    #[test]
    fn test_present_surface_collapses_then_splits() {
        let mut ws = Workspace::new();
        let notes = ws.buffer_by_name(NOTES_BUFFER).unwrap().id();
        let scratch = ws.focused_buffer().id();
        ws.layout.split_below(notes);
        ws.layout.split_below(scratch);

        ws.present_surface("*cap*").unwrap();

        let windows = ws.layout().windows();
        assert_eq!(windows.len(), 2);
        assert_eq!(windows[0].buffer, scratch);
        assert_eq!(ws.focused_buffer().name(), "*cap*");
    }

    #[test]
    fn test_focus_location_reveals_hidden_buffer() {
        let mut ws = Workspace::new();
        let notes = ws.buffer_by_name(NOTES_BUFFER).unwrap().id();
        ws.append_to(NOTES_BUFFER, "abc").unwrap();
        let mark = ws.buffer_mut(notes).unwrap().mark(1);

        ws.focus_location(&Marker {
            buffer: notes,
            mark,
        })
        .unwrap();

        assert_eq!(ws.focused_buffer().name(), NOTES_BUFFER);
        assert_eq!(ws.focused_buffer().cursor(), 1);
    }

    #[test]
    fn test_focus_location_on_killed_buffer_fails() {
        let mut ws = Workspace::new();
        let id = ws.find_or_create("*gone*");
        let mark = ws.buffer_mut(id).unwrap().mark(0);
        ws.kill_buffer("*gone*");

        let result = ws.focus_location(&Marker { buffer: id, mark });

        assert!(matches!(result, Err(Error::InvalidLocation { .. })));
    }

    #[test]
    fn test_restore_layout_drops_dead_windows() {
        let mut ws = Workspace::new();
        ws.present_surface("*cap*").unwrap();
        let snapshot = ws.save_layout();
        ws.kill_buffer("*cap*");

        ws.restore_layout(snapshot).unwrap();

        assert_eq!(ws.layout().windows().len(), 1);
        assert_eq!(ws.focused_buffer().name(), SCRATCH_BUFFER);
    }

    #[test]
    fn test_marker_follows_edits_before_it() {
        let mut ws = Workspace::new();
        ws.focused_buffer_mut().insert_str("Dear ,");
        ws.focused_buffer_mut().set_cursor(5);
        let marker = ws.current_location();

        ws.focused_buffer_mut().set_cursor(0);
        ws.focused_buffer_mut().insert_str("Hi ");
        ws.focus_location(&marker).unwrap();
        ws.insert_at_point("Ada").unwrap();

        assert_eq!(ws.focused_buffer().text(), "Hi Dear Ada,");
    }

    #[test]
    fn test_existing_buffer_is_not_a_surface() {
        let mut ws = Workspace::new();
        ws.focused_buffer_mut().insert_str("important draft");

        assert!(!ws.surface_exists(SCRATCH_BUFFER));
        assert!(matches!(
            ws.present_surface(SCRATCH_BUFFER),
            Err(Error::Host { .. })
        ));
        assert!(ws.set_surface_text(NOTES_BUFFER, "").is_err());
        ws.destroy_surface(NOTES_BUFFER);

        assert_eq!(ws.focused_buffer().text(), "important draft");
        assert!(ws.buffer_by_name(NOTES_BUFFER).is_some());
        assert_eq!(ws.layout().windows().len(), 1);
    }

    #[test]
    fn test_capture_restores_three_window_layout() {
        let mut ws = Workspace::new();
        let scratch = ws.focused_buffer().id();
        let notes = ws.buffer_by_name(NOTES_BUFFER).unwrap().id();
        let other = ws.find_or_create("*other*");
        ws.layout.split_below(notes);
        ws.layout.split_below(other);
        ws.layout.focus_buffer(notes);
        let snapshot = ws.layout().clone();
        assert_eq!(snapshot.windows().len(), 3);
        assert_eq!(snapshot.focused_index(), 1);

        let mut capture: CaptureController<Workspace> = CaptureController::default();
        capture.open(&mut ws, Some("entry"), None).unwrap();
        assert_eq!(ws.layout().windows().len(), 2);
        assert_eq!(ws.layout().windows()[0].buffer, notes);

        capture.save(&mut ws).unwrap();

        assert_eq!(ws.layout(), &snapshot);
        assert_eq!(ws.focused_buffer().id(), notes);
        assert_eq!(ws.buffer(notes).unwrap().text(), "entry");
        assert!(ws.buffer(scratch).unwrap().text().is_empty());
    }
}
