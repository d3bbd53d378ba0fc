//! Host collaborator interface for the capture controller
//!
//! The controller never touches buffers or windows directly. Everything it
//! needs from the surrounding editor goes through [`CaptureHost`], which the
//! [`Workspace`](crate::workspace::Workspace) implements for the terminal UI
//! and tests implement with fakes.

use crate::keymap::{CaptureAction, KeyChord};
use quill_core::Result;

/// Buffer, window and prompt operations the capture controller relies on.
///
/// `Location` and `Layout` are opaque to the controller: it only stores them
/// at open time and hands them back on close.
#[cfg_attr(test, mockall::automock(type Location = usize; type Layout = String;))]
pub trait CaptureHost {
    /// Insertion point reference, resolvable after the focused window changes
    /// and kept in place across edits to its buffer
    type Location;

    /// Snapshot of the window arrangement
    type Layout;

    /// Whether a surface with this name currently exists
    fn surface_exists(&self, name: &str) -> bool;

    /// Ask the user a yes/no question
    fn confirm(&mut self, question: &str) -> bool;

    /// Record the insertion point of the focused window
    fn current_location(&mut self) -> Self::Location;

    fn save_layout(&self) -> Self::Layout;

    fn restore_layout(&mut self, layout: Self::Layout) -> Result<()>;

    /// Collapse to a single window, then show the named surface (created if
    /// missing) in a new window and focus it
    fn present_surface(&mut self, name: &str) -> Result<()>;

    /// Replace the whole surface content
    fn set_surface_text(&mut self, name: &str, text: &str) -> Result<()>;

    fn surface_text(&self, name: &str) -> Result<String>;

    /// Remove the surface and any window showing it. Missing surfaces are
    /// ignored.
    fn destroy_surface(&mut self, name: &str);

    /// Focus the window owning `location` and move its insertion point there
    fn focus_location(&mut self, location: &Self::Location) -> Result<()>;

    /// Insert at the focused window's insertion point
    fn insert_at_point(&mut self, text: &str) -> Result<()>;

    /// Static banner in the surface's header line
    fn set_header(&mut self, name: &str, banner: &str) -> Result<()>;

    /// Chord bindings active only while the surface has focus
    fn bind_actions(&mut self, name: &str, bindings: &[(KeyChord, CaptureAction)]) -> Result<()>;
}
