use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{self, Borders, Paragraph};
use ratatui::Frame;

use crate::app::settings::LayoutSettings;
use crate::app::view::{Block, CardRow, Container};
use crate::ui::card::{Card, LineKind};
use crate::ui::colors::{current as current_colors, Colors};

/// Draw `container` from its scroll position down until `area` is full.
pub fn render(f: &mut Frame, area: Rect, container: &Container, layout: &LayoutSettings) {
    let colors = current_colors();
    let bottom = area.bottom();
    let mut y = area.y;
    for block in container.blocks.iter().skip(container.scroll) {
        if y >= bottom {
            break;
        }
        let h = block.height().min(bottom - y);
        let slot = Rect::new(area.x, y, area.width, h);
        match block {
            Block::Header(text) => {
                let p = Paragraph::new(text.as_str())
                    .alignment(Alignment::Center)
                    .style(colors.header_style);
                f.render_widget(p, slot);
            }
            Block::Message(text) => {
                let p = Paragraph::new(text.as_str())
                    .alignment(Alignment::Center)
                    .style(colors.message_style);
                f.render_widget(p, slot);
            }
            Block::Spacer(_) => {}
            Block::Row(row) => render_row(f, slot, row, layout, &colors),
        }
        y = y.saturating_add(block.height());
    }
}

fn render_row(f: &mut Frame, slot: Rect, row: &CardRow, layout: &LayoutSettings, colors: &Colors) {
    let mut x = slot
        .x
        .saturating_add(layout.window_padding / 2)
        .saturating_add(row.lead);
    for card in &row.cards {
        let rect = Rect::new(x, slot.y, layout.card_width, slot.height).intersection(slot);
        if rect.width > 0 && rect.height > 0 {
            render_card(f, rect, card, colors);
        }
        x = x
            .saturating_add(layout.card_width)
            .saturating_add(layout.card_spacing);
    }
}

fn render_card(f: &mut Frame, rect: Rect, card: &Card, colors: &Colors) {
    let lines: Vec<Line> = card
        .lines
        .iter()
        .map(|l| {
            let style = match l.kind {
                LineKind::Field => colors.card_style,
                LineKind::Section => colors.section_style,
                LineKind::Fallback => colors.fallback_style,
            };
            Line::from(Span::styled(l.text.as_str(), style))
        })
        .collect();
    let border = widgets::Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(format!(" {} ", card.title), colors.card_title_style))
        .style(colors.card_style);
    f.render_widget(Paragraph::new(lines).block(border), rect);
}
