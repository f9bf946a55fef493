//! UI rendering helpers for TUI
//!
//! Common layout utilities and the seek track drawing.

use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

/// Create a centered layout with the given constraints.
///
/// Returns the center area that can be used for content.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical_layout[1])[1]
}

/// Build the characters of a seek track.
///
/// # Arguments
/// * `width` - Width of the track in cells
/// * `percent` - Progress in percent, clamped to 0..=100
///
/// # Returns
/// A tuple of (chars, filled) where the first `filled` cells are played and
/// the playhead sits right after them (unless the track is full).
pub fn build_track_chars(width: usize, percent: f64) -> (Vec<char>, usize) {
    let fraction = if percent.is_finite() {
        (percent / 100.0).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let filled = (width as f64 * fraction) as usize;

    let mut track = vec!['─'; width];
    for cell in track.iter_mut().take(filled) {
        *cell = '━';
    }
    if filled < width {
        track[filled] = '●';
    }
    (track, filled)
}

/// Whether `(column, row)` lies inside `area`.
pub fn hit(area: Rect, column: u16, row: u16) -> bool {
    area.contains(Position::new(column, row))
}
