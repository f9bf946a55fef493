//! Drawing the page.
//!
//! Rendering only reads the [`Page`]; it returns the screen areas that react
//! to the mouse so input can be mapped against exactly what was drawn.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::media::PlaybackSession;
use crate::page::Page;
use crate::tui::app::status_footer::{render_footer, render_status_line};
use crate::tui::input::HitAreas;
use crate::tui::theme::Theme;
use crate::tui::ui::{build_track_chars, centered_rect};
use crate::widgets::{BannerKind, DayStatus, Field, DAY_HEADERS};

/// Width of the title column in the players panel.
const TITLE_WIDTH: u16 = 24;
/// Width reserved for the "M:SS / M:SS" readout.
const TIME_WIDTH: u16 = 14;

const FOOTER_KEYS: &[(&str, &str)] = &[
    ("q", "quit"),
    ("space", "play"),
    ("tab", "focus"),
    ("←/→", "slides"),
    ("[/]", "month"),
    ("g", "gallery"),
    ("f/s", "form"),
    ("c", "chat"),
];

/// A message for the status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

/// Everything the previewer shows besides the page itself.
#[derive(Debug, Clone, Copy)]
pub struct ViewState<'a> {
    pub focused: usize,
    pub status: Option<&'a StatusMessage>,
    pub theme: &'a Theme,
}

/// Draw the whole page and report its interactive areas.
pub fn render(frame: &mut Frame, page: &Page, view: ViewState<'_>) -> HitAreas {
    let theme = view.theme;
    let players_height = page.players.len() as u16 + 2;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),              // Header
            Constraint::Length(players_height), // Players
            Constraint::Length(9),              // Calendar and slides
            Constraint::Length(3),              // Stats
            Constraint::Min(6),                 // Contact form
            Constraint::Length(1),              // Status line
            Constraint::Length(1),              // Footer
        ])
        .split(frame.area());

    render_header(frame, chunks[0], page, theme);
    let (buttons, tracks) = render_players(frame, chunks[1], page, view.focused, theme);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(31), Constraint::Min(20)])
        .split(chunks[2]);
    render_calendar(frame, middle[0], page, theme);
    let slideshow = render_slides(frame, middle[1], page, theme);

    render_stats(frame, chunks[3], page, theme);
    render_form(frame, chunks[4], page, theme);

    if let Some(status) = view.status {
        let style = if status.is_error {
            theme.error_style()
        } else {
            theme.success_style()
        };
        render_status_line(frame, chunks[5], &status.text, style);
    }
    render_footer(frame, chunks[6], FOOTER_KEYS, theme);

    if page.chat.is_active() {
        let full = frame.area();
        render_chat(frame, full, page, theme);
    }
    let lightbox = render_lightbox(frame, page, theme);

    HitAreas {
        tracks,
        buttons,
        slideshow,
        lightbox,
    }
}

fn render_header(frame: &mut Frame, area: Rect, page: &Page, theme: &Theme) {
    let mut spans = vec![
        Span::styled("stagelight ", theme.accent_bold_style()),
        Span::styled(
            format!("nav {} ", page.nav.background_color()),
            theme.text_secondary_style(),
        ),
    ];
    if page.menu.is_open() {
        spans.push(Span::styled("[menu] ", theme.accent_style()));
    }
    for id in page.sections.sections() {
        let style = if page.sections.is_revealed(id) {
            theme.text_style()
        } else {
            theme.text_secondary_style()
        };
        spans.push(Span::styled(format!("#{id} "), style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Returns the button and seek track area of each player.
fn render_players(
    frame: &mut Frame,
    area: Rect,
    page: &Page,
    focused: usize,
    theme: &Theme,
) -> (Vec<Rect>, Vec<Rect>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Mixes ")
        .border_style(theme.text_secondary_style());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut buttons = Vec::with_capacity(page.players.len());
    let mut tracks = Vec::with_capacity(page.players.len());
    for (i, session) in page.players.sessions().iter().enumerate() {
        let row = inner.y + i as u16;
        if row >= inner.bottom() {
            break;
        }
        let button = Rect::new(inner.x, row, 3, 1);
        let track_x = inner.x + 4 + TITLE_WIDTH;
        let track_width = inner.width.saturating_sub(4 + TITLE_WIDTH + TIME_WIDTH + 1);
        let track = Rect::new(track_x, row, track_width, 1);

        let line = player_line(session, i == focused, track_width, theme);
        frame.render_widget(Paragraph::new(line), Rect::new(inner.x, row, inner.width, 1));
        buttons.push(button);
        tracks.push(track);
    }
    (buttons, tracks)
}

fn player_line(
    session: &PlaybackSession,
    focused: bool,
    track_width: u16,
    theme: &Theme,
) -> Line<'static> {
    let display = session.display();
    let title_style = if focused {
        theme.accent_bold_style()
    } else {
        theme.text_style()
    };
    let title: String = session.title().chars().take(TITLE_WIDTH as usize - 1).collect();

    let (track, filled) = build_track_chars(track_width as usize, display.progress_percent);
    let played: String = track[..filled].iter().collect();
    let rest: String = track[filled..].iter().collect();

    Line::from(vec![
        Span::styled(format!("[{}]", display.glyph.symbol()), theme.accent_style()),
        Span::raw(" "),
        Span::styled(
            format!("{:<width$}", title, width = TITLE_WIDTH as usize),
            title_style,
        ),
        Span::styled(played, theme.accent_style()),
        Span::styled(rest, theme.text_secondary_style()),
        Span::styled(format!(" {}", display.time_text), theme.text_style()),
    ])
}

fn render_calendar(frame: &mut Frame, area: Rect, page: &Page, theme: &Theme) {
    let grid = page.calendar.render();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", grid.title))
        .border_style(theme.text_secondary_style());

    let mut lines = vec![Line::styled(
        DAY_HEADERS.join(" "),
        theme.text_secondary_style(),
    )];
    for week in grid.weeks() {
        let mut spans = Vec::with_capacity(14);
        for (i, cell) in week.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            match cell {
                Some(cell) => {
                    let style = match cell.status {
                        DayStatus::Booked => theme.error_style(),
                        DayStatus::Pending => theme.pending_style(),
                        DayStatus::Available => theme.text_style(),
                    };
                    spans.push(Span::styled(
                        format!("{:>2}{}", cell.day, cell.status.mark()),
                        style,
                    ));
                }
                None => spans.push(Span::raw("   ")),
            }
        }
        lines.push(Line::from(spans));
    }
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Returns the slideshow area.
fn render_slides(frame: &mut Frame, area: Rect, page: &Page, theme: &Theme) -> Rect {
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(3)])
        .split(area);

    let slideshow = &page.slideshow;
    let title = page
        .slide_titles()
        .get(slideshow.index())
        .map(String::as_str)
        .unwrap_or("");
    let dots: String = (0..slideshow.len())
        .map(|i| if slideshow.is_active(i) { '●' } else { '○' })
        .collect();
    let paused = if slideshow.is_hovered() { " (paused)" } else { "" };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Videos{paused} "))
        .border_style(theme.text_secondary_style());
    let text = vec![
        Line::styled(title.to_string(), theme.text_style()),
        Line::styled(dots, theme.accent_style()),
    ];
    frame.render_widget(Paragraph::new(text).block(block), parts[0]);

    let quote = page
        .testimonial_quotes()
        .get(page.testimonials.index())
        .cloned()
        .unwrap_or_default();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Testimonials ")
        .border_style(theme.text_secondary_style());
    frame.render_widget(
        Paragraph::new(quote)
            .style(theme.text_style())
            .wrap(Wrap { trim: true })
            .block(block),
        parts[1],
    );

    parts[0]
}

fn render_stats(frame: &mut Frame, area: Rect, page: &Page, theme: &Theme) {
    let mut spans = Vec::new();
    for (i, stat) in page.stats.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  |  ", theme.text_secondary_style()));
        }
        spans.push(Span::styled(
            stat.counter.value().to_string(),
            theme.accent_bold_style(),
        ));
        spans.push(Span::styled(format!(" {}", stat.label), theme.text_style()));
    }
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.text_secondary_style());
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_form(frame: &mut Frame, area: Rect, page: &Page, theme: &Theme) {
    let form = &page.contact;
    let title = if form.is_submitting() {
        " Contact (sending...) "
    } else {
        " Contact "
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(theme.text_secondary_style());

    let mut lines: Vec<Line> = Field::ALL
        .iter()
        .map(|field| {
            Line::from(vec![
                Span::styled(format!("{:<9}", field.label()), theme.text_secondary_style()),
                Span::styled(form.fields.get(*field).to_string(), theme.text_style()),
            ])
        })
        .collect();
    if let Some(banner) = form.banner() {
        let style = match banner.kind {
            BannerKind::Success => theme.success_style(),
            BannerKind::Error => theme.error_style(),
        };
        lines.push(Line::styled(banner.text.clone(), style));
    }
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_chat(frame: &mut Frame, area: Rect, page: &Page, theme: &Theme) {
    let width = 34.min(area.width);
    let height = 4.min(area.height);
    let popup = Rect::new(
        area.right().saturating_sub(width),
        area.bottom().saturating_sub(height + 2),
        width,
        height,
    );
    let link = page.booking_link(0).unwrap_or_default();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Chat ")
        .border_style(theme.accent_style());
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(vec![
            Line::styled("Chat with us on WhatsApp", theme.text_style()),
            Line::styled(link, theme.text_secondary_style()),
        ])
        .block(block),
        popup,
    );
}

/// Returns the content area while the lightbox is open.
fn render_lightbox(frame: &mut Frame, page: &Page, theme: &Theme) -> Option<Rect> {
    let image = page.lightbox.image()?;
    let area = centered_rect(60, 40, frame.area());
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Gallery ")
        .border_style(theme.accent_style());
    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(vec![
            Line::styled(image.alt.clone(), theme.accent_bold_style()),
            Line::styled(image.src.clone(), theme.text_secondary_style()),
            Line::raw(""),
            Line::styled("esc or click outside to close", Style::default()),
        ])
        .wrap(Wrap { trim: true })
        .block(block),
        area,
    );
    Some(area)
}
