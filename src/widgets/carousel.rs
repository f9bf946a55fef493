//! Rotating slides: the video slideshow and the testimonial slider.
//!
//! Both share the same index arithmetic and auto-advance timer; they differ
//! only in their interval and in whether hover and arrow keys apply.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Behaviour switches for a carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Auto-advance interval in milliseconds; 0 disables auto-advance
    pub interval_ms: u64,
    /// Pause the timer while the pointer is over the carousel
    pub pause_on_hover: bool,
    /// Left/right arrow keys move the carousel
    pub keyboard_nav: bool,
}

impl CarouselConfig {
    /// Video slideshow: 5s, pauses on hover, arrow keys.
    pub fn slideshow() -> Self {
        Self {
            interval_ms: 5000,
            pause_on_hover: true,
            keyboard_nav: true,
        }
    }

    /// Testimonials: 6s, always running.
    pub fn testimonials() -> Self {
        Self {
            interval_ms: 6000,
            pause_on_hover: false,
            keyboard_nav: false,
        }
    }

    pub fn interval(&self) -> Option<Duration> {
        (self.interval_ms > 0).then(|| Duration::from_millis(self.interval_ms))
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self::slideshow()
    }
}

/// Arrow keys a carousel reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowKey {
    Left,
    Right,
}

#[derive(Debug, Clone)]
pub struct Carousel {
    len: usize,
    index: usize,
    config: CarouselConfig,
    /// When the next automatic advance is due; None while paused
    next_due: Option<Instant>,
    hovered: bool,
}

impl Carousel {
    /// Create a carousel over `len` slides with its timer started at `now`.
    pub fn new(len: usize, config: CarouselConfig, now: Instant) -> Self {
        let next_due = config.interval().map(|i| now + i);
        Self {
            len,
            index: 0,
            config,
            next_due,
            hovered: false,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_active(&self, i: usize) -> bool {
        !self.is_empty() && i == self.index
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Horizontal offset of the slide strip, in percent of one slide.
    pub fn offset_percent(&self) -> usize {
        self.index * 100
    }

    pub fn next(&mut self) {
        if self.is_empty() {
            return;
        }
        self.index = (self.index + 1) % self.len;
    }

    pub fn prev(&mut self) {
        if self.is_empty() {
            return;
        }
        self.index = (self.index + self.len - 1) % self.len;
    }

    /// Show slide `i`. Out-of-range indices are ignored.
    pub fn jump(&mut self, i: usize) {
        if i < self.len {
            self.index = i;
        }
    }

    /// Handle an arrow key. Returns false if keyboard navigation is off.
    pub fn key(&mut self, key: ArrowKey) -> bool {
        if !self.config.keyboard_nav {
            return false;
        }
        match key {
            ArrowKey::Left => self.prev(),
            ArrowKey::Right => self.next(),
        }
        true
    }

    pub fn hover_enter(&mut self) {
        self.hovered = true;
        if self.config.pause_on_hover {
            self.next_due = None;
            debug!("carousel paused on hover");
        }
    }

    pub fn hover_leave(&mut self, now: Instant) {
        self.hovered = false;
        if self.config.pause_on_hover {
            self.next_due = self.config.interval().map(|i| now + i);
        }
    }

    /// Advance once for every interval that has elapsed by `now`.
    pub fn tick(&mut self, now: Instant) {
        let Some(interval) = self.config.interval() else {
            return;
        };
        while let Some(due) = self.next_due {
            if now < due {
                break;
            }
            self.next();
            self.next_due = Some(due + interval);
        }
    }
}
