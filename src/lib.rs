//! stagelight - interactive widgets for a DJ / events promo page
//!
//! The page is a set of explicitly owned state machines:
//!
//! - [`media`]: audio previews with exclusive playback
//! - [`widgets`]: contact form, newsletter, carousels, calendar, lightbox,
//!   counters and navigation chrome
//! - [`page`]: owns one of each and routes [`page::PageEvent`]s
//!
//! The `stagelight` binary drives a [`page::Page`] from a terminal previewer.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod media;
pub mod page;
pub mod tui;
pub mod widgets;

pub use config::Config;
pub use error::PageError;
pub use page::{Page, PageEvent, PageKey};
