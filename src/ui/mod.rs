use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::app::{App, Focus};

pub mod card;
pub mod colors;
pub mod layout;
pub mod themes;
pub mod widgets;

pub use themes::Theme;

/// Rows taken by the navigation bar.
pub const NAV_HEIGHT: u16 = 3;
/// Rows taken by the search bar, directly under the navigation bar.
pub const SEARCH_HEIGHT: u16 = 3;
pub const FOOTER_HEIGHT: u16 = 1;

/// Sub-rect of `area` starting `x` columns in and `width` wide, clipped to
/// `area`. `None` when nothing of it is visible.
pub fn offset_rect(area: Rect, x: u16, width: u16) -> Option<Rect> {
    let r = Rect::new(area.x.saturating_add(x), area.y, width, area.height).intersection(area);
    (r.width > 0 && r.height > 0).then_some(r)
}

/// Draw one frame of the whole browser.
pub fn ui(f: &mut Frame, app: &App) {
    let colors = colors::current();
    f.render_widget(Block::default().style(colors.base_style), f.area());

    // nav (3), search (3), cards (min), footer (1)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(NAV_HEIGHT),
            Constraint::Length(SEARCH_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(f.area());

    widgets::nav_bar::render(f, chunks[0], &app.nav, app.visible_view());
    widgets::search_bar::render(f, chunks[1], &app.search, app.focus == Focus::Search);
    if let Some(container) = app.visible_container() {
        widgets::card_grid::render(f, chunks[2], container, &app.settings.layout);
    }
    widgets::footer::render(f, chunks[3], app);
}
