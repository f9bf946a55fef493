//! TUI (Text User Interface) module
//!
//! Terminal preview of the page using ratatui/crossterm. Input is mapped to
//! page events, the page is drawn after every event or clock tick, and mouse
//! clicks are resolved against the areas of the last draw.

pub mod app;
pub mod input;
pub mod preview;
pub mod theme;
pub mod ui;
pub mod view;

pub use app::App;
pub use preview::{run, PreviewApp};
pub use theme::{current_theme, Theme};
