//! Navigation and page chrome: navbar backdrop, mobile menu, section
//! reveal, anchor links, chat popup and booking links.

use std::collections::HashSet;

/// Scroll offset beyond which the navbar turns opaque.
pub const NAVBAR_OPAQUE_AFTER: f64 = 100.0;

/// Navbar backdrop alpha while near the top of the page.
pub const NAVBAR_TRANSLUCENT_ALPHA: f64 = 0.8;

/// Visible fraction at which a section fades in.
pub const REVEAL_THRESHOLD: f64 = 0.1;

#[derive(Debug, Clone, Default)]
pub struct NavBar {
    scroll_y: f64,
}

impl NavBar {
    pub fn on_scroll(&mut self, y: f64) {
        self.scroll_y = y;
    }

    /// Alpha of the black navbar background.
    pub fn background_alpha(&self) -> f64 {
        if self.scroll_y > NAVBAR_OPAQUE_AFTER {
            1.0
        } else {
            NAVBAR_TRANSLUCENT_ALPHA
        }
    }

    pub fn background_color(&self) -> String {
        format!("rgba(0, 0, 0, {})", self.background_alpha())
    }
}

/// Collapsible menu shown on narrow screens.
#[derive(Debug, Clone, Default)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Hamburger button clicked.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// A link inside the menu was followed.
    pub fn link_clicked(&mut self) {
        self.open = false;
    }
}

/// Sections that fade in the first time they scroll into view.
#[derive(Debug, Clone, Default)]
pub struct SectionReveal {
    sections: Vec<String>,
    revealed: HashSet<String>,
}

impl SectionReveal {
    pub fn new(sections: impl IntoIterator<Item = String>) -> Self {
        Self {
            sections: sections.into_iter().collect(),
            revealed: HashSet::new(),
        }
    }

    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    /// Report a section's visible fraction. Unknown ids are ignored.
    pub fn observe(&mut self, id: &str, intersection_ratio: f64) {
        if intersection_ratio >= REVEAL_THRESHOLD && self.sections.iter().any(|s| s == id) {
            self.revealed.insert(id.to_string());
        }
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.contains(id)
    }

    /// Resolve an in-page link such as `#booking` to the section it scrolls
    /// to. Links to unknown ids and non-anchor links resolve to nothing.
    pub fn anchor_target(&self, href: &str) -> Option<&str> {
        let id = href.strip_prefix('#')?;
        self.sections.iter().find(|s| *s == id).map(String::as_str)
    }
}

/// The floating chat popup.
#[derive(Debug, Clone, Default)]
pub struct ChatPopup {
    active: bool,
}

impl ChatPopup {
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn toggle(&mut self) {
        self.active = !self.active;
    }
}

/// Encode `text` the way `encodeURIComponent` does.
///
/// ASCII letters, digits and `-_.!~*'()` pass through; every other UTF-8
/// byte becomes `%XX` with uppercase hex.
pub fn encode_uri_component(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 3);
    for byte in text.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

/// Build the WhatsApp deep link a service card's booking button opens.
pub fn booking_url(phone: &str, artist: &str, service: &str) -> String {
    let message = format!("Hi {artist}, I'm interested in booking your {service} service.");
    format!("https://wa.me/{phone}?text={}", encode_uri_component(&message))
}
