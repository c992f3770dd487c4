use indexmap::IndexMap;

use super::display::{DisplayContext, DisplayManager};
use super::types::View;
use crate::ui::card::Card;

/// One horizontal row of cards, already centered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardRow {
    /// Blank columns before the first card.
    pub lead: u16,
    /// Rows of terminal cells the tallest card needs.
    pub height: u16,
    pub cards: Vec<Card>,
}

/// A rendered element inside a view container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Header(String),
    Row(CardRow),
    Spacer(u16),
    Message(String),
}

impl Block {
    pub fn height(&self) -> u16 {
        match self {
            Block::Header(_) | Block::Message(_) => 1,
            Block::Spacer(h) => *h,
            Block::Row(row) => row.height,
        }
    }
}

/// What a container currently shows, so a reflow can rebuild the same thing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Source {
    #[default]
    Full,
    Search(String),
}

/// The content area of one view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Container {
    pub visible: bool,
    pub blocks: Vec<Block>,
    pub source: Source,
    /// Index of the first block drawn.
    pub scroll: usize,
}

impl Container {
    /// Drop every rendered block.
    pub fn clear(&mut self) {
        self.blocks.clear();
    }

    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    pub fn scroll_by(&mut self, delta: isize) {
        let max = self.blocks.len().saturating_sub(1);
        self.scroll = self.scroll.saturating_add_signed(delta).min(max);
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll = self.blocks.len().saturating_sub(1);
    }

    /// Number of cards across all rows.
    pub fn card_count(&self) -> usize {
        self.blocks
            .iter()
            .map(|b| match b {
                Block::Row(r) => r.cards.len(),
                _ => 0,
            })
            .sum()
    }
}

/// Owns one container per enabled view; exactly one is visible once the
/// first `switch_to` has run.
#[derive(Debug, Clone)]
pub struct ViewManager {
    containers: IndexMap<View, Container>,
}

impl ViewManager {
    pub fn new(views: &[View]) -> Self {
        ViewManager {
            containers: views.iter().map(|v| (*v, Container::default())).collect(),
        }
    }

    /// Enabled views in navigation order.
    pub fn views(&self) -> impl Iterator<Item = View> + '_ {
        self.containers.keys().copied()
    }

    pub fn container(&self, view: View) -> Option<&Container> {
        self.containers.get(&view)
    }

    pub fn container_mut(&mut self, view: View) -> Option<&mut Container> {
        self.containers.get_mut(&view)
    }

    pub fn visible_view(&self) -> Option<View> {
        self.containers
            .iter()
            .find(|(_, c)| c.visible)
            .map(|(v, _)| *v)
    }

    pub fn visible_container(&self) -> Option<&Container> {
        self.containers.values().find(|c| c.visible)
    }

    pub fn visible_container_mut(&mut self) -> Option<&mut Container> {
        self.containers.values_mut().find(|c| c.visible)
    }

    pub fn visible_count(&self) -> usize {
        self.containers.values().filter(|c| c.visible).count()
    }

    /// Show `target` and hide every other view, then rebuild the target's
    /// content from the full listing. The caller clears the search input.
    ///
    /// Returns `false` (and changes nothing) when `target` is not enabled.
    pub fn switch_to(&mut self, target: View, display: &DisplayManager, ctx: &DisplayContext) -> bool {
        if !self.containers.contains_key(&target) {
            tracing::warn!("no container for view {}, ignoring switch", target);
            return false;
        }
        for (view, container) in self.containers.iter_mut() {
            container.visible = *view == target;
        }
        if let Some(container) = self.containers.get_mut(&target) {
            container.clear();
            container.source = Source::Full;
            container.scroll = 0;
            display.display_view(target, ctx, container);
        }
        tracing::debug!("switched to {} view", target);
        true
    }

    /// The view after (or before, with `forward == false`) the visible one,
    /// wrapping around.
    pub fn neighbour(&self, forward: bool) -> Option<View> {
        let current = self.visible_view()?;
        let idx = self.containers.get_index_of(&current)?;
        let n = self.containers.len();
        let next = if forward { (idx + 1) % n } else { (idx + n - 1) % n };
        self.containers.get_index(next).map(|(v, _)| *v)
    }

    /// Rebuild the visible container from whatever it last showed. Used on
    /// resize and when card details are toggled.
    pub fn refresh_visible(&mut self, display: &DisplayManager, ctx: &DisplayContext) {
        let Some(view) = self.visible_view() else {
            tracing::warn!("refresh requested with no visible view");
            return;
        };
        if let Some(container) = self.containers.get_mut(&view) {
            container.clear();
            match container.source.clone() {
                Source::Full => display.display_view(view, ctx, container),
                Source::Search(term) => display.display_search_results(view, &term, ctx, container),
            }
            let max = container.blocks.len().saturating_sub(1);
            container.scroll = container.scroll.min(max);
        }
    }

    /// Replace the visible container's content with search hits for `term`.
    pub fn search_visible(&mut self, term: &str, display: &DisplayManager, ctx: &DisplayContext) {
        let Some(view) = self.visible_view() else {
            tracing::warn!("search requested with no visible view");
            return;
        };
        if let Some(container) = self.containers.get_mut(&view) {
            container.clear();
            container.scroll = 0;
            container.source = Source::Search(term.to_string());
            display.display_search_results(view, term, ctx, container);
        }
    }
}
