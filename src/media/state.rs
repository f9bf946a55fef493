//! Player display state
//!
//! Contains the `DisplayBinding` each session owns (toggle glyph, progress
//! fill, time readout) together with the small shared types used across the
//! media modules.

use std::fmt;

use serde::Serialize;

use super::format::format_time_readout;

/// Position of a player inside its registry.
///
/// Ids are handed out in registration order and stay valid for the lifetime
/// of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct SessionId(pub usize);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Glyph shown on a player's toggle button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Glyph {
    /// Shown while paused; clicking starts playback
    #[default]
    Play,
    /// Shown while playing; clicking pauses
    Pause,
}

impl Glyph {
    /// Icon class applied to the toggle element.
    pub fn icon_class(&self) -> &'static str {
        match self {
            Glyph::Play => "fas fa-play",
            Glyph::Pause => "fas fa-pause",
        }
    }

    /// Single-character symbol for terminal rendering.
    pub fn symbol(&self) -> &'static str {
        match self {
            Glyph::Play => "▶",
            Glyph::Pause => "⏸",
        }
    }
}

/// The visible controls bound to one player.
///
/// The session is the only writer; renderers read it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayBinding {
    /// Toggle button glyph
    pub glyph: Glyph,
    /// Progress fill, always within [0, 100]
    pub progress_percent: f64,
    /// `"<current> / <duration>"` readout
    pub time_text: String,
    /// Rendered width of the seek track, used to translate click offsets
    pub track_width: f64,
}

impl DisplayBinding {
    /// Width of a freshly laid out seek track.
    pub const DEFAULT_TRACK_WIDTH: f64 = 300.0;

    pub fn new() -> Self {
        Self {
            glyph: Glyph::Play,
            progress_percent: 0.0,
            time_text: format_time_readout(0.0, f64::NAN),
            track_width: Self::DEFAULT_TRACK_WIDTH,
        }
    }

    /// Progress fill as a CSS width value, e.g. `"42.5%"`.
    pub fn progress_width(&self) -> String {
        format!("{}%", self.progress_percent)
    }
}

impl Default for DisplayBinding {
    fn default() -> Self {
        Self::new()
    }
}
