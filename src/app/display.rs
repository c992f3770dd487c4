use super::settings::LayoutSettings;
use super::types::View;
use super::view::{Block, CardRow, Container};
use crate::data::{DataManager, Listing, Record, SearchScope};
use crate::ui::card::Card;
use crate::ui::layout::{calculate_layout, centered_offset, group_into_rows, row_width};

pub const NO_DATA_MESSAGE: &str = "No data available";

/// Header line for a category section.
pub fn category_header(category: &str) -> String {
    format!("=== {} ===", category)
}

/// Message shown when a search on `view` matched nothing.
pub fn no_results_message(view: View) -> String {
    format!("No {} found matching your search.", view.noun())
}

/// Borrowed inputs every display call needs.
#[derive(Debug, Clone, Copy)]
pub struct DisplayContext<'a> {
    pub data: &'a DataManager,
    pub viewport_width: u16,
}

/// Turns listings into container blocks: category headers, centered card
/// rows and spacers.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayManager {
    pub layout: LayoutSettings,
    pub scope: SearchScope,
    /// Whether the Additional Info section of each card is open.
    pub details_open: bool,
}

impl DisplayManager {
    pub fn new(layout: LayoutSettings, scope: SearchScope) -> Self {
        DisplayManager {
            layout,
            scope,
            details_open: false,
        }
    }

    /// Fill `container` with the full listing for `view`.
    pub fn display_view(&self, view: View, ctx: &DisplayContext, container: &mut Container) {
        let listing = ctx.data.listing(view.kind());
        if listing.is_empty() {
            container.push(Block::Message(NO_DATA_MESSAGE.to_string()));
            return;
        }
        self.display_listing(&listing, ctx.viewport_width, container);
    }

    /// Fill `container` with the hits for `term` in `view`, grouped the same
    /// way as the full listing.
    pub fn display_search_results(&self, view: View, term: &str, ctx: &DisplayContext, container: &mut Container) {
        let results = ctx.data.search(view.kind(), term, self.scope);
        let listing = ctx.data.process_search_results(results);
        tracing::debug!(term, hits = listing.len(), "search on {} view", view);
        if listing.is_empty() {
            container.push(Block::Message(no_results_message(view)));
            return;
        }
        self.display_listing(&listing, ctx.viewport_width, container);
    }

    fn display_listing(&self, listing: &Listing, viewport_width: u16, container: &mut Container) {
        match listing {
            Listing::Categorized(groups) => {
                for (category, records) in groups {
                    container.push(Block::Header(category_header(category)));
                    self.display_cards(records, viewport_width, container);
                    if self.layout.category_spacing > 0 {
                        container.push(Block::Spacer(self.layout.category_spacing));
                    }
                }
            }
            Listing::Flat(records) => self.display_cards(records, viewport_width, container),
        }
    }

    /// Lay `records` out in centered rows for the current viewport width.
    pub fn display_cards(&self, records: &[Record], viewport_width: u16, container: &mut Container) {
        if records.is_empty() {
            container.push(Block::Message(NO_DATA_MESSAGE.to_string()));
            return;
        }
        let grid = calculate_layout(viewport_width, &self.layout);
        let inner_width = self.layout.card_width.saturating_sub(2);
        for row in group_into_rows(records, grid.cards_per_row) {
            let cards: Vec<Card> = row
                .iter()
                .map(|r| Card::build(r, inner_width, self.details_open))
                .collect();
            let height = cards
                .iter()
                .map(|c| c.height(self.layout.card_height))
                .max()
                .unwrap_or(self.layout.card_height);
            let lead = centered_offset(grid.available_width, row_width(cards.len(), &self.layout));
            container.push(Block::Row(CardRow { lead, height, cards }));
        }
    }
}
