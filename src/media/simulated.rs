//! In-memory media handle.
//!
//! `SimulatedMedia` stands in for a real decoder: it keeps a position and a
//! paused flag, loads its metadata after a configurable delay and advances
//! only when told to. The terminal previewer drives one per configured track,
//! and tests use it to script exact playback sequences.

use tracing::debug;

use super::error::MediaError;
use super::handle::{MediaEvent, MediaEvents, MediaHandle};

/// A media handle whose clock is advanced explicitly.
#[derive(Debug)]
pub struct SimulatedMedia {
    /// Length of the clip once metadata is loaded
    length: f64,
    /// Seconds of loading before metadata becomes available
    metadata_delay: f64,
    /// Loading time accumulated so far
    loaded_for: f64,
    /// Whether metadata has been loaded
    loaded: bool,
    position: f64,
    paused: bool,
    /// Error returned from every `play` call, if set
    refusal: Option<MediaError>,
    events: Option<MediaEvents>,
}

impl SimulatedMedia {
    /// Create a clip with the given length and metadata already loaded.
    pub fn new(length: f64) -> Self {
        Self {
            length: length.max(0.0),
            metadata_delay: 0.0,
            loaded_for: 0.0,
            loaded: true,
            position: 0.0,
            paused: true,
            refusal: None,
            events: None,
        }
    }

    /// Delay metadata loading by `seconds` of simulated time.
    ///
    /// Until then `duration()` reports NaN.
    pub fn with_metadata_delay(mut self, seconds: f64) -> Self {
        if seconds > 0.0 {
            self.metadata_delay = seconds;
            self.loaded = false;
        }
        self
    }

    /// Make every `play` call fail with `error`.
    pub fn refusing(mut self, error: MediaError) -> Self {
        self.refusal = Some(error);
        self
    }

    /// Advance the simulated clock by `dt` seconds.
    ///
    /// Loads metadata once the delay has passed, moves the position while
    /// playing and stops at the end of the clip.
    pub fn step(&mut self, dt: f64) {
        if dt <= 0.0 || !dt.is_finite() {
            return;
        }

        let mut remaining = dt;
        if !self.loaded {
            self.loaded_for += dt;
            if self.loaded_for < self.metadata_delay {
                return;
            }
            self.loaded = true;
            remaining = self.loaded_for - self.metadata_delay;
            self.emit(MediaEvent::MetadataReady);
        }

        if self.paused || remaining <= 0.0 {
            return;
        }

        self.position += remaining;
        if self.position >= self.length {
            self.position = self.length;
            self.paused = true;
            self.emit(MediaEvent::PositionChanged);
            self.emit(MediaEvent::Ended);
        } else {
            self.emit(MediaEvent::PositionChanged);
        }
    }

    fn emit(&self, event: MediaEvent) {
        if let Some(events) = &self.events {
            events.emit(event);
        }
    }
}

impl MediaHandle for SimulatedMedia {
    fn position(&self) -> f64 {
        self.position
    }

    fn set_position(&mut self, seconds: f64) {
        let upper = if self.loaded { self.length } else { 0.0 };
        self.position = seconds.clamp(0.0, upper);
        self.emit(MediaEvent::PositionChanged);
    }

    fn duration(&self) -> f64 {
        if self.loaded {
            self.length
        } else {
            f64::NAN
        }
    }

    fn play(&mut self) -> Result<(), MediaError> {
        if let Some(err) = &self.refusal {
            return Err(err.clone());
        }
        if self.loaded && self.position >= self.length {
            // Restart a finished clip from the top
            self.position = 0.0;
        }
        self.paused = false;
        debug!(position = self.position, "simulated media started");
        Ok(())
    }

    fn pause(&mut self) {
        self.paused = true;
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn attach(&mut self, events: MediaEvents) {
        self.events = Some(events);
    }

    fn advance(&mut self, seconds: f64) {
        self.step(seconds);
    }
}
