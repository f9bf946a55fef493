//! Page widgets besides the audio players.
//!
//! Each widget is a plain state machine: gestures and clock ticks go in,
//! display state comes out. None of them know about each other; the
//! [`crate::page::Page`] owns one instance of each and routes events.

pub mod calendar;
pub mod carousel;
pub mod contact_form;
pub mod counter;
pub mod lightbox;
pub mod nav;
pub mod newsletter;

pub use calendar::{
    Availability, Calendar, CalendarGrid, DayCell, DayStatus, MonthCursor,
    DAY_HEADERS,
};
pub use carousel::{ArrowKey, Carousel, CarouselConfig};
pub use contact_form::{Banner, BannerKind, ContactFields, ContactForm, Field, FormError};
pub use counter::{CounterAnimation, Stat};
pub use lightbox::{GalleryImage, Lightbox, OverlayTarget};
pub use nav::{booking_url, encode_uri_component, ChatPopup, MobileMenu, NavBar, SectionReveal};
pub use newsletter::Newsletter;
