//! Interactive terminal preview of the page.
//!
//! Wraps a [`Page`] with the state only the terminal needs: player focus,
//! the status line, the simulated scroll position and the mouse areas of the
//! last draw.

use std::time::{Duration, Instant};

use anyhow::Result;
use chrono::NaiveDate;
use crossterm::event::{Event, KeyEventKind};
use ratatui::Frame;
use tracing::{debug, warn};

use crate::config::Config;
use crate::page::{Page, PageEvent};
use crate::tui::app::App;
use crate::tui::input::{map_key, map_mouse, Action, HitAreas};
use crate::tui::theme::Theme;
use crate::tui::view::{self, StatusMessage, ViewState};
use crate::widgets::Field;

/// Simulated height of one page section, in pixels.
pub const SECTION_HEIGHT: f64 = 600.0;
/// Simulated browser viewport height, in pixels.
pub const VIEWPORT_HEIGHT: f64 = 800.0;
/// Shortest redraw interval accepted from the config.
const MIN_TICK: Duration = Duration::from_millis(10);

/// Section holding the animated statistics.
const STATS_SECTION: &str = "about";

/// Example address used by the subscribe key.
const EXAMPLE_EMAIL: &str = "fan@example.com";

pub struct PreviewApp {
    page: Page,
    theme: Theme,
    tick: Duration,
    focused: usize,
    status: Option<StatusMessage>,
    areas: HitAreas,
    scroll_y: f64,
    hovering: bool,
    next_image: usize,
    quit: bool,
}

impl PreviewApp {
    pub fn new(config: &Config, today: NaiveDate, now: Instant) -> Self {
        let theme = Theme::named(&config.preview.theme).unwrap_or_else(|| {
            warn!("unknown theme '{}', using default", config.preview.theme);
            Theme::default()
        });
        let mut app = Self {
            page: Page::new(config, today, now),
            theme,
            tick: Duration::from_millis(config.preview.tick_ms).max(MIN_TICK),
            focused: 0,
            status: None,
            areas: HitAreas::default(),
            scroll_y: 0.0,
            hovering: false,
            next_image: 0,
            quit: false,
        };
        app.reveal_visible(now);
        app
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn focused(&self) -> usize {
        self.focused
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    /// Mouse areas of the last draw.
    pub fn areas(&self) -> &HitAreas {
        &self.areas
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn draw(&mut self, frame: &mut Frame) {
        let state = ViewState {
            focused: self.focused,
            status: self.status.as_ref(),
            theme: &self.theme,
        };
        self.areas = view::render(frame, &self.page, state);
    }

    /// Tell the players about track widths that changed in the last draw.
    pub fn sync_track_widths(&mut self, now: Instant) {
        let changed: Vec<(usize, f64)> = self
            .areas
            .tracks
            .iter()
            .enumerate()
            .filter_map(|(player, area)| {
                let width = f64::from(area.width);
                let session = self.page.players.sessions().get(player)?;
                (session.display().track_width != width).then_some((player, width))
            })
            .collect();
        for (player, width) in changed {
            self.send(PageEvent::ResizeTrack { player, width }, now);
        }
    }

    pub fn handle_input(&mut self, event: Event, now: Instant) {
        let action = match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                map_key(key, self.focused, self.page.lightbox.is_open())
            }
            Event::Mouse(mouse) => map_mouse(mouse, &self.areas),
            _ => None,
        };
        if let Some(action) = action {
            self.apply(action, now);
        }
    }

    pub fn apply(&mut self, action: Action, now: Instant) {
        match action {
            Action::Quit => self.quit = true,
            Action::FocusNext => self.move_focus(1),
            Action::FocusPrev => self.move_focus(-1),
            Action::OpenNextImage => {
                let count = self.page.gallery().len();
                if count == 0 {
                    self.set_status("The gallery is empty", true);
                    return;
                }
                let index = self.next_image % count;
                self.next_image = index + 1;
                self.send(PageEvent::OpenImage(index), now);
            }
            Action::FillForm => {
                let example = [
                    (Field::Name, "Amina Otieno"),
                    (Field::Email, "amina@example.com"),
                    (Field::Subject, "Wedding in December"),
                    (Field::Message, "Are you free on the 19th?"),
                ];
                for (field, value) in example {
                    let value = value.to_string();
                    self.send(PageEvent::FormInput { field, value }, now);
                }
            }
            Action::Subscribe => {
                self.send(PageEvent::NewsletterInput(EXAMPLE_EMAIL.to_string()), now);
                self.send(PageEvent::NewsletterSubmit, now);
                if let Some(notice) = self.page.newsletter.take_notice() {
                    self.set_status(notice, false);
                }
            }
            Action::Scroll(delta) => self.scroll_to(self.scroll_y + delta, now),
            Action::NextSection => {
                let sections = self.page.sections.sections();
                if sections.is_empty() {
                    return;
                }
                let current = (self.scroll_y / SECTION_HEIGHT).floor() as usize;
                let href = format!("#{}", sections[(current + 1) % sections.len()]);
                self.send(PageEvent::MenuLinkClicked(href), now);
                if let Some(id) = self.page.take_scroll_target() {
                    let index = self.page.sections.sections().iter().position(|s| *s == id);
                    if let Some(index) = index {
                        self.scroll_to(index as f64 * SECTION_HEIGHT, now);
                    }
                }
            }
            Action::Hover(over) => {
                if over != self.hovering {
                    self.hovering = over;
                    self.send(PageEvent::SlideshowHover(over), now);
                }
            }
            Action::Page(event) => self.send(event, now),
        }
    }

    /// Let the page clock run to `now`.
    pub fn tick(&mut self, now: Instant) {
        self.send(PageEvent::Tick, now);
    }

    /// Stop whatever is playing before leaving.
    pub fn shutdown(&mut self) {
        self.page.players.pause_all();
    }

    fn send(&mut self, event: PageEvent, now: Instant) {
        if let Err(err) = self.page.handle(event, now) {
            self.set_status(&err.to_string(), true);
        }
    }

    fn set_status(&mut self, text: &str, is_error: bool) {
        self.status = Some(StatusMessage {
            text: text.to_string(),
            is_error,
        });
    }

    fn move_focus(&mut self, step: isize) {
        let count = self.page.players.len();
        if count == 0 {
            return;
        }
        self.focused = (self.focused as isize + step).rem_euclid(count as isize) as usize;
    }

    fn scroll_to(&mut self, y: f64, now: Instant) {
        self.scroll_y = y.max(0.0);
        self.send(PageEvent::Scroll(self.scroll_y), now);
        self.reveal_visible(now);
    }

    /// Report how much of each section the simulated viewport shows.
    fn reveal_visible(&mut self, now: Instant) {
        let top = self.scroll_y;
        let bottom = top + VIEWPORT_HEIGHT;
        let ratios: Vec<(String, f64)> = self
            .page
            .sections
            .sections()
            .iter()
            .enumerate()
            .map(|(i, id)| {
                let start = i as f64 * SECTION_HEIGHT;
                let end = start + SECTION_HEIGHT;
                let visible = (end.min(bottom) - start.max(top)).max(0.0);
                (id.clone(), visible / SECTION_HEIGHT)
            })
            .collect();

        for (id, ratio) in ratios {
            if id == STATS_SECTION {
                for index in 0..self.page.stats.len() {
                    self.send(PageEvent::StatVisible { index, ratio }, now);
                }
            }
            self.send(PageEvent::SectionVisible { id, ratio }, now);
        }
    }
}

/// Run the previewer until the user quits.
#[cfg(not(tarpaulin_include))]
pub fn run(config: &Config, today: NaiveDate) -> Result<()> {
    let mut app = App::new()?;
    let start = Instant::now();
    let mut preview = PreviewApp::new(config, today, start);
    let tick = preview.tick_interval();
    let mut last_tick = start;
    debug!(?tick, "preview started");

    while !preview.should_quit() {
        app.draw(|frame| preview.draw(frame))?;
        preview.sync_track_widths(Instant::now());

        let timeout = tick.saturating_sub(last_tick.elapsed());
        if let Some(event) = app.next_event(timeout)? {
            preview.handle_input(event, Instant::now());
        }
        if last_tick.elapsed() >= tick {
            let now = Instant::now();
            preview.tick(now);
            last_tick = now;
        }
    }

    preview.shutdown();
    debug!("preview closed");
    Ok(())
}
