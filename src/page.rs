//! The page: one explicitly owned instance of every widget.
//!
//! `Page` is built once from the configuration and then fed [`PageEvent`]s
//! (gestures and clock ticks). Events are routed to exactly one widget. A
//! failing event is logged and returned, but never leaves another widget in
//! a half-updated state.

use std::time::Instant;

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::PageError;
use crate::media::{PlayerRegistry, SessionId, SimulatedMedia};
use crate::widgets::{
    booking_url, ArrowKey, Calendar, Carousel, ChatPopup, ContactForm, CounterAnimation, Field,
    GalleryImage, Lightbox, MobileMenu, NavBar, Newsletter, OverlayTarget, SectionReveal, Stat,
};

/// Keys the page reacts to globally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKey {
    Left,
    Right,
    Escape,
}

/// A user gesture or clock tick.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    // Audio players
    TogglePlayer(usize),
    PausePlayer(usize),
    /// Click `offset_x` units into a player's seek track
    SeekPlayer { player: usize, offset_x: f64 },
    /// Seek track laid out with a new width
    ResizeTrack { player: usize, width: f64 },

    // Contact form
    FormInput { field: Field, value: String },
    FormSubmit,
    DismissBanner,

    // Newsletter
    NewsletterInput(String),
    NewsletterSubmit,

    // Video slideshow
    SlideshowPrev,
    SlideshowNext,
    SlideshowJump(usize),
    SlideshowHover(bool),

    // Testimonials
    TestimonialPrev,
    TestimonialNext,

    // Calendar
    CalendarPrev,
    CalendarNext,

    // Gallery
    OpenImage(usize),
    LightboxClose,
    LightboxOverlay(OverlayTarget),

    // Navigation and chrome
    Scroll(f64),
    SectionVisible { id: String, ratio: f64 },
    StatVisible { index: usize, ratio: f64 },
    HamburgerClicked,
    /// Follow a menu link such as `#booking`
    MenuLinkClicked(String),
    ChatToggle,

    Key(PageKey),
    /// Let the clock run up to the event's timestamp
    Tick,
}

/// Animated statistic with its label.
#[derive(Debug, Clone)]
pub struct StatCounter {
    pub label: String,
    pub counter: CounterAnimation,
}

#[derive(Debug)]
pub struct Page {
    pub players: PlayerRegistry,
    pub contact: ContactForm,
    pub newsletter: Newsletter,
    pub slideshow: Carousel,
    pub testimonials: Carousel,
    pub calendar: Calendar,
    pub lightbox: Lightbox,
    pub nav: NavBar,
    pub menu: MobileMenu,
    pub sections: SectionReveal,
    pub chat: ChatPopup,
    pub stats: Vec<StatCounter>,
    slide_titles: Vec<String>,
    testimonial_quotes: Vec<String>,
    gallery: Vec<GalleryImage>,
    services: Vec<String>,
    artist: String,
    phone: String,
    scroll_target: Option<String>,
    last_tick: Instant,
}

impl Page {
    /// Build every widget from `config`. `today` positions the calendar and
    /// `now` starts the page clock.
    pub fn new(config: &Config, today: NaiveDate, now: Instant) -> Self {
        let mut players = PlayerRegistry::new();
        for track in &config.players {
            let media = SimulatedMedia::new(track.duration_secs)
                .with_metadata_delay(track.metadata_delay_ms as f64 / 1000.0);
            players.register(track.title.clone(), Box::new(media));
        }

        let stats = config
            .stats
            .iter()
            .map(|Stat { label, target }| StatCounter {
                label: label.clone(),
                counter: CounterAnimation::new(*target),
            })
            .collect();

        debug!(
            players = players.len(),
            slides = config.slideshow.slides.len(),
            "page set up"
        );

        Self {
            players,
            contact: ContactForm::new(),
            newsletter: Newsletter::new(),
            slideshow: Carousel::new(
                config.slideshow.slides.len(),
                config.slideshow.timing.clone(),
                now,
            ),
            testimonials: Carousel::new(
                config.testimonials.slides.len(),
                config.testimonials.timing.clone(),
                now,
            ),
            calendar: Calendar::new(today, config.calendar.clone()),
            lightbox: Lightbox::new(),
            nav: NavBar::default(),
            menu: MobileMenu::default(),
            sections: SectionReveal::new(config.sections.iter().cloned()),
            chat: ChatPopup::default(),
            stats,
            slide_titles: config.slideshow.slides.clone(),
            testimonial_quotes: config.testimonials.slides.clone(),
            gallery: config.gallery.clone(),
            services: config.services.clone(),
            artist: config.site.artist.clone(),
            phone: config.site.phone.clone(),
            scroll_target: None,
            last_tick: now,
        }
    }

    pub fn slide_titles(&self) -> &[String] {
        &self.slide_titles
    }

    pub fn testimonial_quotes(&self) -> &[String] {
        &self.testimonial_quotes
    }

    pub fn gallery(&self) -> &[GalleryImage] {
        &self.gallery
    }

    pub fn services(&self) -> &[String] {
        &self.services
    }

    /// WhatsApp link behind the booking button of service `index`.
    pub fn booking_link(&self, index: usize) -> Result<String, PageError> {
        let service = self.services.get(index).ok_or(PageError::NoSuchItem {
            kind: "service",
            index,
        })?;
        Ok(booking_url(&self.phone, &self.artist, service))
    }

    /// Section the last followed link asked to scroll to, if any.
    pub fn take_scroll_target(&mut self) -> Option<String> {
        self.scroll_target.take()
    }

    /// Route one event. Errors are logged before being returned.
    pub fn handle(&mut self, event: PageEvent, now: Instant) -> Result<(), PageError> {
        let result = self.route(event, now);
        if let Err(err) = &result {
            warn!("page event failed: {err}");
        }
        result
    }

    fn route(&mut self, event: PageEvent, now: Instant) -> Result<(), PageError> {
        match event {
            PageEvent::TogglePlayer(i) => self.players.toggle(SessionId(i))?,
            PageEvent::PausePlayer(i) => self.players.pause(SessionId(i))?,
            PageEvent::SeekPlayer { player, offset_x } => {
                self.players.seek_to_offset(SessionId(player), offset_x)?;
                self.players.pump();
            }
            PageEvent::ResizeTrack { player, width } => {
                self.players.set_track_width(SessionId(player), width)?
            }

            PageEvent::FormInput { field, value } => self.contact.set(field, value),
            PageEvent::FormSubmit => self.contact.submit(now)?,
            PageEvent::DismissBanner => self.contact.dismiss_banner(),

            PageEvent::NewsletterInput(email) => self.newsletter.email = email,
            PageEvent::NewsletterSubmit => {
                self.newsletter.subscribe();
            }

            PageEvent::SlideshowPrev => self.slideshow.prev(),
            PageEvent::SlideshowNext => self.slideshow.next(),
            PageEvent::SlideshowJump(i) => self.slideshow.jump(i),
            PageEvent::SlideshowHover(true) => self.slideshow.hover_enter(),
            PageEvent::SlideshowHover(false) => self.slideshow.hover_leave(now),

            PageEvent::TestimonialPrev => self.testimonials.prev(),
            PageEvent::TestimonialNext => self.testimonials.next(),

            PageEvent::CalendarPrev => self.calendar.prev_month(),
            PageEvent::CalendarNext => self.calendar.next_month(),

            PageEvent::OpenImage(index) => {
                let image = self.gallery.get(index).cloned().ok_or(PageError::NoSuchItem {
                    kind: "gallery image",
                    index,
                })?;
                self.lightbox.open(image);
            }
            PageEvent::LightboxClose => self.lightbox.close_clicked(),
            PageEvent::LightboxOverlay(target) => self.lightbox.overlay_clicked(target),

            PageEvent::Scroll(y) => self.nav.on_scroll(y),
            PageEvent::SectionVisible { id, ratio } => self.sections.observe(&id, ratio),
            PageEvent::StatVisible { index, ratio } => {
                let stat = self.stats.get_mut(index).ok_or(PageError::NoSuchItem {
                    kind: "stat",
                    index,
                })?;
                stat.counter.observe(ratio, now);
            }
            PageEvent::HamburgerClicked => self.menu.toggle(),
            PageEvent::MenuLinkClicked(href) => {
                self.menu.link_clicked();
                match self.sections.anchor_target(&href) {
                    Some(id) => self.scroll_target = Some(id.to_string()),
                    None => debug!(%href, "link does not point at a section"),
                }
            }
            PageEvent::ChatToggle => self.chat.toggle(),

            PageEvent::Key(key) => self.key(key),
            PageEvent::Tick => self.tick(now),
        }
        Ok(())
    }

    fn key(&mut self, key: PageKey) {
        match key {
            PageKey::Left => {
                self.slideshow.key(ArrowKey::Left);
            }
            PageKey::Right => {
                self.slideshow.key(ArrowKey::Right);
            }
            PageKey::Escape => {
                self.lightbox.escape();
            }
        }
    }

    /// Run every timer up to `now`.
    fn tick(&mut self, now: Instant) {
        let elapsed = now.saturating_duration_since(self.last_tick);
        self.last_tick = now;

        self.players.advance(elapsed.as_secs_f64());
        self.contact.tick(now);
        self.slideshow.tick(now);
        self.testimonials.tick(now);
        for stat in &mut self.stats {
            stat.counter.tick(now);
        }
    }
}
