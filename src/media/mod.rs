//! Audio preview players
//!
//! Every playable element on the page gets a [`PlaybackSession`]: one media
//! handle, one play/pause toggle, one seek track and one time readout. All
//! sessions are owned by a [`PlayerRegistry`], which guarantees that starting
//! one player stops whichever other player was running.
//!
//! # Architecture
//!
//! - `handle`: the `MediaHandle` trait players drive, plus notifications
//! - `simulated`: an in-memory handle with an explicit clock
//! - `session`: per-player state machine (Paused / Playing) and display
//! - `registry`: exclusive playback and notification delivery
//! - `format`: `M:SS` time formatting
//! - `state`: display binding and shared types
//!
//! # Usage
//!
//! ```
//! use stagelight::media::{PlayerRegistry, SimulatedMedia};
//!
//! let mut players = PlayerRegistry::new();
//! let intro = players.register("Intro", Box::new(SimulatedMedia::new(90.0)));
//! let outro = players.register("Outro", Box::new(SimulatedMedia::new(60.0)));
//!
//! players.play(intro).unwrap();
//! players.play(outro).unwrap();
//! assert_eq!(players.playing(), Some(outro));
//! ```

mod error;
mod format;
mod handle;
mod registry;
mod session;
mod simulated;
pub mod state;

pub use error::{MediaError, PlaybackError};
pub use format::{format_duration, format_time_readout};
pub use handle::{MediaEvent, MediaEvents, MediaHandle};
pub use registry::PlayerRegistry;
pub use session::PlaybackSession;
pub use simulated::SimulatedMedia;
pub use state::{DisplayBinding, Glyph, SessionId};
