//! Full-screen photo viewer for the gallery.

use serde::{Deserialize, Serialize};

/// An image that can be shown in the lightbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub src: String,
    #[serde(default)]
    pub alt: String,
}

/// Where a click inside the open lightbox landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayTarget {
    /// The dimmed background around the image
    Background,
    /// The image or its frame
    Content,
}

/// The single lightbox overlay of the page.
#[derive(Debug, Default)]
pub struct Lightbox {
    shown: Option<GalleryImage>,
}

impl Lightbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.shown.is_some()
    }

    /// Image currently displayed.
    pub fn image(&self) -> Option<&GalleryImage> {
        self.shown.as_ref()
    }

    pub fn open(&mut self, image: GalleryImage) {
        tracing::debug!(src = %image.src, "lightbox opened");
        self.shown = Some(image);
    }

    /// The close control was clicked.
    pub fn close_clicked(&mut self) {
        self.shown = None;
    }

    /// A click landed on the overlay; only background clicks close it.
    pub fn overlay_clicked(&mut self, target: OverlayTarget) {
        if target == OverlayTarget::Background {
            self.shown = None;
        }
    }

    /// Escape closes the lightbox. Returns whether it was open.
    pub fn escape(&mut self) -> bool {
        self.shown.take().is_some()
    }
}
