use ratatui::layout::{Alignment, Rect};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::{NavBar, View};
use crate::ui::colors::current as current_colors;
use crate::ui::offset_rect;

/// Draw the navigation buttons at the offsets computed by `NavBar::build`.
/// The button of the visible view is highlighted.
pub fn render(f: &mut Frame, area: Rect, nav: &NavBar, active: Option<View>) {
    let colors = current_colors();
    for button in &nav.buttons {
        let Some(rect) = offset_rect(area, button.x, button.width) else { continue };
        let style = if Some(button.view) == active {
            colors.nav_active_style
        } else {
            colors.nav_style
        };
        // Too short for a border: show the bare label.
        let p = if rect.height >= 3 {
            Paragraph::new(button.label).block(Block::default().borders(Borders::ALL))
        } else {
            Paragraph::new(button.label)
        };
        f.render_widget(p.alignment(Alignment::Center).style(style), rect);
    }
}
