use ratatui::{layout::Rect, widgets::Paragraph, Frame};

use crate::app::{App, Focus, Source};
use crate::ui::colors::current as current_colors;

/// One-line status: visible view, card count, active search and key help.
pub fn status_line(app: &App) -> String {
    let view = app
        .visible_view()
        .map(|v| v.label())
        .unwrap_or("-");
    let (cards, search) = match app.visible_container() {
        Some(c) => {
            let search = match &c.source {
                Source::Search(term) => format!("  |  search: \"{}\"", term),
                Source::Full => String::new(),
            };
            (c.card_count(), search)
        }
        None => (0, String::new()),
    };
    let help = match app.focus {
        Focus::Search => "Enter:search  Esc:back",
        Focus::Cards => "Tab/←→:view  1-9:jump  /:search  ↑↓ PgUp/PgDn:scroll  d:details  q:quit",
    };
    format!(" {}: {} items{}  |  {}", view, cards, search, help)
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let colors = current_colors();
    f.render_widget(Paragraph::new(status_line(app)).style(colors.footer_style), area);
}
