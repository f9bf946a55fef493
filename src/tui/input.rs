//! Keyboard and mouse mapping for the previewer.
//!
//! Terminal input is translated into [`Action`]s. Most of them are plain
//! [`PageEvent`]s; the rest change previewer-only state such as which player
//! has focus.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::page::{PageEvent, PageKey};
use crate::tui::ui::hit;
use crate::widgets::OverlayTarget;

/// Rows scrolled per mouse wheel notch.
pub const WHEEL_STEP: f64 = 40.0;

/// Rows scrolled per PageUp/PageDown.
pub const PAGE_STEP: f64 = 200.0;

/// What an input asks the previewer to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    FocusNext,
    FocusPrev,
    /// Open the gallery image after the last one shown
    OpenNextImage,
    /// Fill the contact form with an example enquiry
    FillForm,
    /// Enter an example address and subscribe
    Subscribe,
    /// Scroll the page by this many pixels
    Scroll(f64),
    /// Follow the menu link to the section below the current one
    NextSection,
    /// Pointer is (or is no longer) over the slideshow
    Hover(bool),
    Page(PageEvent),
}

/// Screen areas that react to the mouse, recorded on every draw.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitAreas {
    /// Seek track of each player
    pub tracks: Vec<Rect>,
    /// Play/pause button of each player
    pub buttons: Vec<Rect>,
    pub slideshow: Rect,
    /// Lightbox content while it is open
    pub lightbox: Option<Rect>,
}

/// Map a key press.
///
/// # Arguments
/// * `key` - The crossterm key event
/// * `focused` - Index of the focused player
/// * `lightbox_open` - Escape closes the lightbox instead of quitting
pub fn map_key(key: KeyEvent, focused: usize, lightbox_open: bool) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    let action = match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Esc if lightbox_open => Action::Page(PageEvent::Key(PageKey::Escape)),
        KeyCode::Esc => Action::Quit,

        KeyCode::Tab | KeyCode::Down | KeyCode::Char('j') => Action::FocusNext,
        KeyCode::BackTab | KeyCode::Up | KeyCode::Char('k') => Action::FocusPrev,
        KeyCode::Char(' ') | KeyCode::Enter => Action::Page(PageEvent::TogglePlayer(focused)),
        KeyCode::Char(c @ '1'..='9') => {
            Action::Page(PageEvent::TogglePlayer(c as usize - '1' as usize))
        }

        KeyCode::Left => Action::Page(PageEvent::Key(PageKey::Left)),
        KeyCode::Right => Action::Page(PageEvent::Key(PageKey::Right)),
        KeyCode::Char('t') => Action::Page(PageEvent::TestimonialNext),
        KeyCode::Char('T') => Action::Page(PageEvent::TestimonialPrev),
        KeyCode::Char('[') => Action::Page(PageEvent::CalendarPrev),
        KeyCode::Char(']') => Action::Page(PageEvent::CalendarNext),

        KeyCode::Char('g') => Action::OpenNextImage,
        KeyCode::Char('f') => Action::FillForm,
        KeyCode::Char('s') => Action::Page(PageEvent::FormSubmit),
        KeyCode::Char('x') => Action::Page(PageEvent::DismissBanner),
        KeyCode::Char('n') => Action::Subscribe,
        KeyCode::Char('c') => Action::Page(PageEvent::ChatToggle),
        KeyCode::Char('m') => Action::Page(PageEvent::HamburgerClicked),
        KeyCode::Char('l') => Action::NextSection,

        KeyCode::PageDown => Action::Scroll(PAGE_STEP),
        KeyCode::PageUp => Action::Scroll(-PAGE_STEP),
        _ => return None,
    };
    Some(action)
}

/// Map a mouse event against the areas of the last draw.
pub fn map_mouse(mouse: MouseEvent, areas: &HitAreas) -> Option<Action> {
    let (column, row) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(content) = areas.lightbox {
                let target = if hit(content, column, row) {
                    OverlayTarget::Content
                } else {
                    OverlayTarget::Background
                };
                return Some(Action::Page(PageEvent::LightboxOverlay(target)));
            }
            if let Some(player) = areas.buttons.iter().position(|a| hit(*a, column, row)) {
                return Some(Action::Page(PageEvent::TogglePlayer(player)));
            }
            areas
                .tracks
                .iter()
                .position(|a| hit(*a, column, row))
                .map(|player| {
                    let offset_x = f64::from(column - areas.tracks[player].x);
                    Action::Page(PageEvent::SeekPlayer { player, offset_x })
                })
        }
        MouseEventKind::Moved => Some(Action::Hover(hit(areas.slideshow, column, row))),
        MouseEventKind::ScrollDown => Some(Action::Scroll(WHEEL_STEP)),
        MouseEventKind::ScrollUp => Some(Action::Scroll(-WHEEL_STEP)),
        _ => None,
    }
}
