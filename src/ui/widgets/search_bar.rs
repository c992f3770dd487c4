use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::bars::{SearchBar, SEARCH_BUTTON_LABEL, SEARCH_HINT};
use crate::ui::colors::current as current_colors;
use crate::ui::offset_rect;

/// Tail of `text` that fits in `width` columns, so the end of a long query
/// stays visible while typing.
pub fn visible_tail(text: &str, width: usize) -> &str {
    let count = text.chars().count();
    if count <= width {
        return text;
    }
    let skip = count - width;
    match text.char_indices().nth(skip) {
        Some((i, _)) => &text[i..],
        None => "",
    }
}

/// Draw the search input and its button. When `focused` the terminal cursor
/// is placed after the typed text.
pub fn render(f: &mut Frame, area: Rect, bar: &SearchBar, focused: bool) {
    let colors = current_colors();

    if let Some(rect) = offset_rect(area, bar.lead, bar.input_width) {
        let inner_width = rect.width.saturating_sub(3) as usize;
        let shown = visible_tail(&bar.text, inner_width);
        let line = if bar.text.is_empty() && !focused {
            Line::from(Span::styled(SEARCH_HINT, colors.search_hint_style))
        } else {
            Line::from(shown)
        };
        let style = if focused {
            colors.search_focused_style
        } else {
            colors.search_style
        };
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL).style(style));
        f.render_widget(p, rect);

        if focused && rect.height >= 3 {
            let cursor_x = rect.x + 1 + Line::from(shown).width() as u16;
            f.set_cursor_position((cursor_x.min(rect.right().saturating_sub(2)), rect.y + 1));
        }
    }

    if let Some(rect) = offset_rect(area, bar.button_x(), bar.button_width) {
        let p = Paragraph::new(SEARCH_BUTTON_LABEL)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL))
            .style(colors.nav_style);
        f.render_widget(p, rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tail_keeps_end_of_long_text() {
        assert_eq!(visible_tail("spinning", 20), "spinning");
        assert_eq!(visible_tail("spinning", 4), "ning");
        assert_eq!(visible_tail("größer", 3), "ßer");
        assert_eq!(visible_tail("abc", 0), "");
    }
}
