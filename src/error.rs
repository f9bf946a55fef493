//! Errors surfaced by page event handling.

use crate::media::PlaybackError;
use crate::widgets::FormError;

/// Errors that can occur while handling a page event.
///
/// None of these are fatal: the page stays consistent and keeps handling
/// later events.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error(transparent)]
    Playback(#[from] PlaybackError),

    #[error(transparent)]
    Form(#[from] FormError),

    #[error("No {kind} at index {index}")]
    NoSuchItem { kind: &'static str, index: usize },
}
