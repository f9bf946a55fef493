//! Media playback errors.

use super::state::SessionId;

/// Errors reported by a media handle.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MediaError {
    #[error("Media is not ready to play yet")]
    NotReady,

    #[error("Media source unavailable: {0}")]
    Unavailable(String),
}

/// Errors that can occur while controlling a player.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlaybackError {
    #[error("No player registered with id {0}")]
    UnknownSession(SessionId),

    #[error("Player {id} refused to start: {source}")]
    StartRefused {
        id: SessionId,
        #[source]
        source: MediaError,
    },
}
