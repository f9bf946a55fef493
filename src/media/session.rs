//! A single player: one media handle bound to its controls.
//!
//! The session keeps its own belief of whether it is playing, updated
//! optimistically on every toggle and corrected when the media ends or
//! refuses to start. Exclusive playback across sessions is the registry's
//! job; see [`super::registry::PlayerRegistry::play`].

use std::fmt;

use tracing::{debug, warn};

use super::error::MediaError;
use super::format::format_time_readout;
use super::handle::{MediaEvent, MediaHandle};
use super::state::{DisplayBinding, Glyph, SessionId};

pub struct PlaybackSession {
    id: SessionId,
    title: String,
    handle: Box<dyn MediaHandle>,
    is_playing: bool,
    display: DisplayBinding,
}

impl fmt::Debug for PlaybackSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlaybackSession")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("is_playing", &self.is_playing)
            .field("display", &self.display)
            .finish_non_exhaustive()
    }
}

impl PlaybackSession {
    pub fn new(id: SessionId, title: impl Into<String>, handle: Box<dyn MediaHandle>) -> Self {
        let mut session = Self {
            id,
            title: title.into(),
            handle,
            is_playing: false,
            display: DisplayBinding::new(),
        };
        session.refresh_time_text();
        session
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Whether this session believes it is playing.
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn display(&self) -> &DisplayBinding {
        &self.display
    }

    pub fn handle(&self) -> &dyn MediaHandle {
        self.handle.as_ref()
    }

    /// Record the rendered width of the seek track.
    pub fn set_track_width(&mut self, width: f64) {
        self.display.track_width = width;
    }

    /// Start this session's handle without looking at other sessions.
    ///
    /// On refusal the session falls back to the paused state so the glyph
    /// never claims playback that is not happening.
    pub(crate) fn start(&mut self) -> Result<(), MediaError> {
        self.set_playing(true);
        if let Err(err) = self.handle.play() {
            warn!(session = %self.id, title = %self.title, "media refused to start: {err}");
            self.set_playing(false);
            return Err(err);
        }
        debug!(session = %self.id, "playing");
        Ok(())
    }

    /// Pause playback. Idempotent.
    pub fn pause(&mut self) {
        self.handle.pause();
        self.set_playing(false);
        debug!(session = %self.id, "paused");
    }

    /// Stop this session if it believes it is playing or its handle
    /// reports playing.
    ///
    /// Returns true if the session was stopped.
    pub(crate) fn stop_if_playing(&mut self) -> bool {
        if !self.is_playing && self.handle.is_paused() {
            return false;
        }
        self.pause();
        true
    }

    /// Seek to a fraction of the total duration.
    ///
    /// The fraction is clamped to [0, 1]. With unknown duration nothing
    /// happens and false is returned.
    pub fn seek(&mut self, fraction: f64) -> bool {
        let Some(duration) = self.handle.known_duration() else {
            debug!(session = %self.id, "seek ignored, duration unknown");
            return false;
        };
        let fraction = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };
        self.handle.set_position(fraction * duration);
        true
    }

    /// Seek to the point of a click `offset_x` units into the seek track.
    pub fn seek_to_offset(&mut self, offset_x: f64) -> bool {
        let width = self.display.track_width;
        if width.is_nan() || width <= 0.0 {
            return false;
        }
        self.seek(offset_x / width)
    }

    /// React to a notification from the handle.
    pub fn handle_event(&mut self, event: MediaEvent) {
        match event {
            MediaEvent::PositionChanged => self.on_position_changed(),
            MediaEvent::MetadataReady => self.on_metadata_ready(),
            MediaEvent::Ended => self.on_ended(),
        }
    }

    /// Recompute the progress fill and time readout from the handle.
    pub fn on_position_changed(&mut self) {
        self.display.progress_percent = match self.handle.known_duration() {
            Some(duration) => (self.handle.position() / duration * 100.0).clamp(0.0, 100.0),
            None => 0.0,
        };
        self.refresh_time_text();
    }

    pub fn on_metadata_ready(&mut self) {
        self.refresh_time_text();
    }

    /// Return to the initial visual state after playback finished.
    pub fn on_ended(&mut self) {
        self.set_playing(false);
        self.display.progress_percent = 0.0;
        self.handle.set_position(0.0);
        self.refresh_time_text();
        debug!(session = %self.id, "ended");
    }

    /// Forward elapsed page time to the handle.
    pub(crate) fn advance(&mut self, seconds: f64) {
        self.handle.advance(seconds);
    }

    fn set_playing(&mut self, playing: bool) {
        self.is_playing = playing;
        self.display.glyph = if playing { Glyph::Pause } else { Glyph::Play };
    }

    fn refresh_time_text(&mut self) {
        self.display.time_text = format_time_readout(self.handle.position(), self.handle.duration());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::simulated::SimulatedMedia;

    fn session(media: SimulatedMedia) -> PlaybackSession {
        PlaybackSession::new(SessionId(0), "Mix", Box::new(media))
    }

    #[test]
    fn new_session_is_paused_with_readout() {
        let session = session(SimulatedMedia::new(90.0));

        assert!(!session.is_playing());
        assert_eq!(session.display().glyph, Glyph::Play);
        assert_eq!(session.display().time_text, "0:00 / 1:30");
    }

    #[test]
    fn start_and_pause_flip_glyph() {
        let mut session = session(SimulatedMedia::new(90.0));

        session.start().unwrap();
        assert!(session.is_playing());
        assert_eq!(session.display().glyph, Glyph::Pause);
        assert!(!session.handle().is_paused());

        session.pause();
        assert!(!session.is_playing());
        assert_eq!(session.display().glyph, Glyph::Play);
        assert!(session.handle().is_paused());
    }

    #[test]
    fn pause_is_idempotent() {
        let mut session = session(SimulatedMedia::new(90.0));
        session.pause();
        session.pause();
        assert!(!session.is_playing());
        assert_eq!(session.display().glyph, Glyph::Play);
    }

    #[test]
    fn refused_start_reverts_to_paused() {
        let mut session = session(SimulatedMedia::new(90.0).refusing(MediaError::NotReady));

        assert_eq!(session.start(), Err(MediaError::NotReady));
        assert!(!session.is_playing());
        assert_eq!(session.display().glyph, Glyph::Play);
    }

    #[test]
    fn seek_clamps_fraction() {
        let mut session = session(SimulatedMedia::new(100.0));

        assert!(session.seek(-0.5));
        assert_eq!(session.handle().position(), 0.0);

        assert!(session.seek(1.5));
        assert_eq!(session.handle().position(), 100.0);

        assert!(session.seek(0.25));
        assert_eq!(session.handle().position(), 25.0);
    }

    #[test]
    fn seek_with_unknown_duration_is_noop() {
        let mut session = session(SimulatedMedia::new(100.0).with_metadata_delay(1.0));

        assert!(!session.seek(0.5));
        assert_eq!(session.handle().position(), 0.0);
    }

    #[test]
    fn seek_nan_fraction_goes_to_start() {
        let mut session = session(SimulatedMedia::new(100.0));
        session.seek(0.5);
        assert!(session.seek(f64::NAN));
        assert_eq!(session.handle().position(), 0.0);
    }

    #[test]
    fn seek_to_offset_uses_track_width() {
        let mut session = session(SimulatedMedia::new(60.0));
        session.set_track_width(200.0);

        assert!(session.seek_to_offset(50.0));
        assert_eq!(session.handle().position(), 15.0);

        session.set_track_width(0.0);
        assert!(!session.seek_to_offset(50.0));
    }

    #[test]
    fn position_change_updates_progress_and_readout() {
        let mut session = session(SimulatedMedia::new(200.0));
        session.seek(0.5);
        session.on_position_changed();

        assert_eq!(session.display().progress_percent, 50.0);
        assert_eq!(session.display().progress_width(), "50%");
        assert_eq!(session.display().time_text, "1:40 / 3:20");
    }

    #[test]
    fn position_change_with_unknown_duration_shows_zero() {
        let mut session = session(SimulatedMedia::new(200.0).with_metadata_delay(1.0));
        session.on_position_changed();

        assert_eq!(session.display().progress_percent, 0.0);
        assert_eq!(session.display().time_text, "0:00 / 0:00");
    }

    #[test]
    fn ended_resets_everything() {
        let mut session = session(SimulatedMedia::new(10.0));
        session.start().unwrap();
        session.seek(0.8);
        session.on_position_changed();

        session.on_ended();

        assert!(!session.is_playing());
        assert_eq!(session.display().glyph, Glyph::Play);
        assert_eq!(session.display().progress_percent, 0.0);
        assert_eq!(session.handle().position(), 0.0);
    }
}
