//! Page-level flows: events routed through `Page::handle`

use std::time::{Duration, Instant};

use chrono::NaiveDate;
use stagelight::config::TrackConfig;
use stagelight::widgets::{BannerKind, Field, FormError, OverlayTarget};
use stagelight::{Config, Page, PageError, PageEvent, PageKey};

fn page_with(config: &Config) -> (Page, Instant) {
    let now = Instant::now();
    let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
    (Page::new(config, today, now), now)
}

fn two_tracks() -> Config {
    let track = |title: &str, secs: f64| TrackConfig {
        title: title.to_string(),
        src: String::new(),
        duration_secs: secs,
        metadata_delay_ms: 0,
    };
    Config {
        players: vec![track("Opening", 120.0), track("Closing", 60.0)],
        ..Config::default()
    }
}

#[test]
fn switching_players_pauses_the_first() {
    let (mut page, now) = page_with(&two_tracks());

    page.handle(PageEvent::TogglePlayer(0), now).unwrap();
    page.handle(PageEvent::Tick, now + Duration::from_secs(30)).unwrap();
    page.handle(PageEvent::TogglePlayer(1), now + Duration::from_secs(30))
        .unwrap();
    page.handle(PageEvent::Tick, now + Duration::from_secs(40)).unwrap();

    let sessions = page.players.sessions();
    assert!(!sessions[0].is_playing());
    assert_eq!(sessions[0].display().time_text, "0:30 / 2:00");
    assert!(sessions[1].is_playing());
    assert_eq!(sessions[1].display().time_text, "0:10 / 1:00");
}

#[test]
fn click_seek_uses_track_width() {
    let (mut page, now) = page_with(&two_tracks());

    page.handle(PageEvent::ResizeTrack { player: 0, width: 200.0 }, now)
        .unwrap();
    page.handle(PageEvent::SeekPlayer { player: 0, offset_x: 50.0 }, now)
        .unwrap();

    let display = page.players.sessions()[0].display();
    assert_eq!(display.progress_percent, 25.0);
    assert_eq!(display.progress_width(), "25%");
    assert_eq!(display.time_text, "0:30 / 2:00");
}

#[test]
fn click_past_track_end_clamps() {
    let (mut page, now) = page_with(&two_tracks());

    page.handle(PageEvent::SeekPlayer { player: 1, offset_x: 900.0 }, now)
        .unwrap();

    assert_eq!(page.players.sessions()[1].display().progress_percent, 100.0);
}

#[test]
fn track_plays_to_the_end_and_resets() {
    let (mut page, now) = page_with(&two_tracks());

    page.handle(PageEvent::TogglePlayer(1), now).unwrap();
    page.handle(PageEvent::Tick, now + Duration::from_secs(61)).unwrap();

    let session = &page.players.sessions()[1];
    assert!(!session.is_playing());
    assert_eq!(session.display().progress_percent, 0.0);
    assert_eq!(session.display().time_text, "0:00 / 1:00");
}

#[test]
fn contact_form_full_cycle() {
    let (mut page, now) = page_with(&Config::default());

    for (field, value) in [
        (Field::Name, "Amina"),
        (Field::Email, "not-an-email"),
        (Field::Subject, "Booking"),
        (Field::Message, "Hello"),
    ] {
        page.handle(
            PageEvent::FormInput {
                field,
                value: value.to_string(),
            },
            now,
        )
        .unwrap();
    }

    let err = page.handle(PageEvent::FormSubmit, now).unwrap_err();
    assert!(matches!(err, PageError::Form(FormError::InvalidEmail)));
    assert_eq!(err.to_string(), "Please enter a valid email address.");

    page.handle(
        PageEvent::FormInput {
            field: Field::Email,
            value: "amina@example.com".to_string(),
        },
        now,
    )
    .unwrap();
    page.handle(PageEvent::FormSubmit, now).unwrap();
    assert!(page.contact.is_submitting());

    let done = now + Duration::from_secs(2);
    page.handle(PageEvent::Tick, done).unwrap();
    let banner = page.contact.banner().unwrap();
    assert_eq!(banner.kind, BannerKind::Success);
    assert_eq!(page.contact.fields.get(Field::Name), "");

    page.handle(PageEvent::Tick, done + Duration::from_secs(5))
        .unwrap();
    assert!(page.contact.banner().is_none());
}

#[test]
fn lightbox_closes_on_background_only() {
    let (mut page, now) = page_with(&Config::default());

    page.handle(PageEvent::OpenImage(2), now).unwrap();
    page.handle(PageEvent::LightboxOverlay(OverlayTarget::Content), now)
        .unwrap();
    assert!(page.lightbox.is_open());

    page.handle(PageEvent::LightboxOverlay(OverlayTarget::Background), now)
        .unwrap();
    assert!(!page.lightbox.is_open());
}

#[test]
fn testimonials_ignore_arrow_keys() {
    let (mut page, now) = page_with(&Config::default());

    page.handle(PageEvent::Key(PageKey::Right), now).unwrap();
    page.handle(PageEvent::Key(PageKey::Right), now).unwrap();

    assert_eq!(page.slideshow.index(), 2);
    assert_eq!(page.testimonials.index(), 0);
}

#[test]
fn hovering_slideshow_delays_rotation() {
    let (mut page, now) = page_with(&Config::default());

    page.handle(PageEvent::SlideshowHover(true), now).unwrap();
    page.handle(PageEvent::Tick, now + Duration::from_secs(20))
        .unwrap();
    assert_eq!(page.slideshow.index(), 0);

    let left = now + Duration::from_secs(20);
    page.handle(PageEvent::SlideshowHover(false), left).unwrap();
    page.handle(PageEvent::Tick, left + Duration::from_secs(5))
        .unwrap();
    assert_eq!(page.slideshow.index(), 1);
}

#[test]
fn navigation_chrome() {
    let (mut page, now) = page_with(&Config::default());

    page.handle(PageEvent::Scroll(150.0), now).unwrap();
    assert_eq!(page.nav.background_color(), "rgba(0, 0, 0, 1)");

    page.handle(PageEvent::HamburgerClicked, now).unwrap();
    assert!(page.menu.is_open());
    page.handle(PageEvent::MenuLinkClicked("#gallery".to_string()), now)
        .unwrap();
    assert!(!page.menu.is_open());
    assert_eq!(page.take_scroll_target().as_deref(), Some("gallery"));

    page.handle(
        PageEvent::SectionVisible {
            id: "gallery".to_string(),
            ratio: 0.2,
        },
        now,
    )
    .unwrap();
    assert!(page.sections.is_revealed("gallery"));
    assert_eq!(page.sections.anchor_target("#booking"), Some("booking"));
}

#[test]
fn missing_stat_is_reported() {
    let (mut page, now) = page_with(&Config::default());

    let err = page
        .handle(PageEvent::StatVisible { index: 7, ratio: 1.0 }, now)
        .unwrap_err();
    assert_eq!(err.to_string(), "No stat at index 7");
}

#[test]
fn newsletter_signup() {
    let (mut page, now) = page_with(&Config::default());

    page.handle(PageEvent::NewsletterSubmit, now).unwrap();
    assert_eq!(page.newsletter.notice(), None);

    page.handle(PageEvent::NewsletterInput("fan@example.com".into()), now)
        .unwrap();
    page.handle(PageEvent::NewsletterSubmit, now).unwrap();
    assert_eq!(page.newsletter.notice(), Some("Thank you for subscribing!"));
    assert!(page.newsletter.email.is_empty());
}
