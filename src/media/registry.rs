//! Page-level owner of every player.
//!
//! Sessions live in registration order. The registry enforces that at most
//! one of them is playing: `play` stops every other session that believes it
//! is playing or whose handle reports playing before it starts its own. It
//! also owns the queue media handles publish their notifications on.

use std::sync::mpsc::{self, Receiver, Sender};

use tracing::{debug, warn};

use super::error::PlaybackError;
use super::handle::{MediaEvent, MediaEvents, MediaHandle};
use super::session::PlaybackSession;
use super::state::SessionId;

#[derive(Debug)]
pub struct PlayerRegistry {
    sessions: Vec<PlaybackSession>,
    event_tx: Sender<(SessionId, MediaEvent)>,
    event_rx: Receiver<(SessionId, MediaEvent)>,
}

impl PlayerRegistry {
    pub fn new() -> Self {
        let (event_tx, event_rx) = mpsc::channel();
        Self {
            sessions: Vec::new(),
            event_tx,
            event_rx,
        }
    }

    /// Bind a media handle to a new player.
    ///
    /// The handle is attached to the registry's notification queue before
    /// the session is created.
    pub fn register(&mut self, title: impl Into<String>, mut handle: Box<dyn MediaHandle>) -> SessionId {
        let id = SessionId(self.sessions.len());
        handle.attach(MediaEvents::new(id, self.event_tx.clone()));
        self.sessions.push(PlaybackSession::new(id, title, handle));
        debug!(session = %id, "player registered");
        id
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn sessions(&self) -> &[PlaybackSession] {
        &self.sessions
    }

    pub fn get(&self, id: SessionId) -> Option<&PlaybackSession> {
        self.sessions.get(id.0)
    }

    fn get_mut(&mut self, id: SessionId) -> Result<&mut PlaybackSession, PlaybackError> {
        self.sessions
            .get_mut(id.0)
            .ok_or(PlaybackError::UnknownSession(id))
    }

    /// The first session that believes it is playing, if any.
    pub fn playing(&self) -> Option<SessionId> {
        self.sessions.iter().find(|s| s.is_playing()).map(|s| s.id())
    }

    /// Play if paused, pause if playing.
    pub fn toggle(&mut self, id: SessionId) -> Result<(), PlaybackError> {
        if self.get_mut(id)?.is_playing() {
            self.pause(id)
        } else {
            self.play(id)
        }
    }

    /// Start `id` after stopping every other playing session.
    ///
    /// If the handle refuses to start, `id` is left paused and the error is
    /// returned. Sessions stopped by the scan stay stopped.
    pub fn play(&mut self, id: SessionId) -> Result<(), PlaybackError> {
        self.get_mut(id)?;

        for other in self.sessions.iter_mut().filter(|s| s.id() != id) {
            if other.stop_if_playing() {
                debug!(session = %other.id(), by = %id, "stopped for exclusive playback");
            }
        }

        self.get_mut(id)?
            .start()
            .map_err(|source| PlaybackError::StartRefused { id, source })
    }

    pub fn pause(&mut self, id: SessionId) -> Result<(), PlaybackError> {
        self.get_mut(id)?.pause();
        Ok(())
    }

    /// Pause every session.
    pub fn pause_all(&mut self) {
        for session in &mut self.sessions {
            session.pause();
        }
    }

    /// Seek `id` to a fraction of its duration.
    ///
    /// Returns false when the duration is not known yet.
    pub fn seek(&mut self, id: SessionId, fraction: f64) -> Result<bool, PlaybackError> {
        Ok(self.get_mut(id)?.seek(fraction))
    }

    /// Seek `id` to the point clicked `offset_x` units into its seek track.
    pub fn seek_to_offset(&mut self, id: SessionId, offset_x: f64) -> Result<bool, PlaybackError> {
        Ok(self.get_mut(id)?.seek_to_offset(offset_x))
    }

    pub fn set_track_width(&mut self, id: SessionId, width: f64) -> Result<(), PlaybackError> {
        self.get_mut(id)?.set_track_width(width);
        Ok(())
    }

    /// Deliver one notification to `id`.
    pub fn dispatch(&mut self, id: SessionId, event: MediaEvent) -> Result<(), PlaybackError> {
        self.get_mut(id)?.handle_event(event);
        Ok(())
    }

    /// Deliver every queued notification in arrival order.
    ///
    /// Notifications raised while dispatching are delivered in the same call.
    /// Returns the number of notifications delivered.
    pub fn pump(&mut self) -> usize {
        let mut delivered = 0;
        while let Ok((id, event)) = self.event_rx.try_recv() {
            match self.dispatch(id, event) {
                Ok(()) => delivered += 1,
                Err(err) => warn!("dropping media notification {event:?}: {err}"),
            }
        }
        delivered
    }

    /// Let `seconds` of page time pass for every handle, then deliver the
    /// notifications that produced.
    pub fn advance(&mut self, seconds: f64) -> usize {
        for session in &mut self.sessions {
            session.advance(seconds);
        }
        self.pump()
    }
}

impl Default for PlayerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
