//! Screen layout for the TUI
//!
//! Windows are stacked vertically and share the height evenly; a two-row
//! status bar sits at the bottom.

use ratatui::layout::{Constraint, Layout, Rect};

/// Status bar height (top border + one line)
pub const STATUS_HEIGHT: u16 = 2;

/// Screen areas for the main layout
#[derive(Debug, Clone)]
pub struct ScreenAreas {
    /// One rect per window, top to bottom
    pub windows: Vec<Rect>,

    /// Status bar with the echo area
    pub status: Rect,
}

/// Split the screen for `window_count` stacked windows
pub fn create(area: Rect, window_count: usize) -> ScreenAreas {
    let [main, status] =
        Layout::vertical([Constraint::Min(3), Constraint::Length(STATUS_HEIGHT)]).areas(area);

    let count = window_count.max(1) as u32;
    let windows = Layout::vertical((0..count).map(|_| Constraint::Ratio(1, count)))
        .split(main)
        .to_vec();

    ScreenAreas { windows, status }
}
