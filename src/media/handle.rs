//! MediaHandle trait and notification plumbing.

use std::sync::mpsc::Sender;

use super::error::MediaError;
use super::state::SessionId;

/// Notifications a media handle publishes about itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaEvent {
    /// Current position moved (periodic while playing, or after a seek)
    PositionChanged,
    /// Duration became known
    MetadataReady,
    /// Playback reached the end of the resource
    Ended,
}

/// Sending half of a registry's notification queue, bound to one session.
///
/// Handles receive one of these when they are registered and use it to
/// publish their notifications.
#[derive(Debug, Clone)]
pub struct MediaEvents {
    id: SessionId,
    tx: Sender<(SessionId, MediaEvent)>,
}

impl MediaEvents {
    pub(crate) fn new(id: SessionId, tx: Sender<(SessionId, MediaEvent)>) -> Self {
        Self { id, tx }
    }

    /// Session this sender publishes for.
    pub fn session(&self) -> SessionId {
        self.id
    }

    /// Queue a notification for the owning registry.
    ///
    /// Returns false when the registry has been dropped.
    pub fn emit(&self, event: MediaEvent) -> bool {
        self.tx.send((self.id, event)).is_ok()
    }
}

/// A decodable audio or video resource.
///
/// Each implementation wraps one playable element and exposes the
/// primitives the player needs. Implementations never touch other handles.
pub trait MediaHandle: Send {
    /// Current playback position in seconds.
    fn position(&self) -> f64;

    /// Move the playback position.
    fn set_position(&mut self, seconds: f64);

    /// Total duration in seconds, or NaN while metadata is not loaded yet.
    fn duration(&self) -> f64;

    /// Ask the resource to start playing.
    ///
    /// A handle may refuse, e.g. when the resource is not ready.
    fn play(&mut self) -> Result<(), MediaError>;

    /// Stop playing. Calling this on a paused handle has no effect.
    fn pause(&mut self);

    /// Whether the handle is currently paused.
    fn is_paused(&self) -> bool;

    /// Receive the sender for this handle's notifications.
    ///
    /// Called once when the handle is registered. Handles that never publish
    /// notifications can ignore it.
    fn attach(&mut self, _events: MediaEvents) {}

    /// Let `seconds` of page time pass.
    ///
    /// Handles backed by a real decoder keep their own clock and ignore
    /// this; simulated handles use it to load and play.
    fn advance(&mut self, _seconds: f64) {}

    /// Duration if it is a usable, positive number.
    fn known_duration(&self) -> Option<f64> {
        let duration = self.duration();
        (duration.is_finite() && duration > 0.0).then_some(duration)
    }
}
