//! Navigation and search bars. Both are rebuilt from scratch whenever the
//! viewport width changes; their offsets are what the renderer and the mouse
//! hit-tests use.

use super::settings::LayoutSettings;
use super::types::View;
use crate::ui::layout::{centered_offset, span_width};

pub const SEARCH_HINT: &str = "Search here...";
pub const SEARCH_BUTTON_LABEL: &str = "Search";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavButton {
    pub view: View,
    pub label: &'static str,
    /// Column of the button's left edge.
    pub x: u16,
    pub width: u16,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavBar {
    pub lead: u16,
    pub buttons: Vec<NavButton>,
}

impl NavBar {
    /// Lay out one button per view, centered in `viewport_width`.
    pub fn build(views: &[View], viewport_width: u16, layout: &LayoutSettings) -> Self {
        let width = layout.nav_button_width;
        let spacing = layout.nav_button_spacing;
        let lead = centered_offset(viewport_width, span_width(views.len(), width, spacing));
        let mut x = lead;
        let buttons = views
            .iter()
            .map(|v| {
                let b = NavButton {
                    view: *v,
                    label: v.label(),
                    x,
                    width,
                };
                x = x.saturating_add(width).saturating_add(spacing);
                b
            })
            .collect();
        NavBar { lead, buttons }
    }

    /// View whose button covers column `x`.
    pub fn button_at(&self, x: u16) -> Option<View> {
        self.buttons
            .iter()
            .find(|b| x >= b.x && x < b.x.saturating_add(b.width))
            .map(|b| b.view)
    }

    /// The n-th button (zero based).
    pub fn nth(&self, n: usize) -> Option<View> {
        self.buttons.get(n).map(|b| b.view)
    }
}

/// Part of the search bar under a mouse click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchHit {
    Input,
    Button,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchBar {
    /// Current contents of the search input.
    pub text: String,
    pub lead: u16,
    pub input_width: u16,
    pub spacing: u16,
    pub button_width: u16,
}

impl SearchBar {
    /// Re-center for `viewport_width`, keeping the typed text.
    pub fn rebuild(&mut self, viewport_width: u16, layout: &LayoutSettings) {
        self.input_width = layout.search_input_width;
        self.spacing = layout.nav_button_spacing;
        self.button_width = layout.search_button_width;
        let total = self
            .input_width
            .saturating_add(self.spacing)
            .saturating_add(self.button_width);
        self.lead = centered_offset(viewport_width, total);
    }

    pub fn button_x(&self) -> u16 {
        self.lead.saturating_add(self.input_width).saturating_add(self.spacing)
    }

    pub fn hit(&self, x: u16) -> Option<SearchHit> {
        let input_end = self.lead.saturating_add(self.input_width);
        let button_end = self.button_x().saturating_add(self.button_width);
        if x >= self.lead && x < input_end {
            Some(SearchHit::Input)
        } else if x >= self.button_x() && x < button_end {
            Some(SearchHit::Button)
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn push_char(&mut self, c: char) {
        self.text.push(c);
    }

    pub fn pop_char(&mut self) {
        self.text.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> LayoutSettings {
        LayoutSettings {
            nav_button_width: 10,
            nav_button_spacing: 2,
            search_input_width: 20,
            search_button_width: 8,
            ..LayoutSettings::default()
        }
    }

    #[test]
    fn nav_buttons_are_centered_and_hit_tested() {
        // 3 * 10 + 2 * 2 = 34, (80 - 34) / 2 = 23
        let nav = NavBar::build(&[View::Fish, View::Lakes, View::Rods], 80, &layout());
        assert_eq!(nav.lead, 23);
        let xs: Vec<u16> = nav.buttons.iter().map(|b| b.x).collect();
        assert_eq!(xs, [23, 35, 47]);
        assert_eq!(nav.button_at(23), Some(View::Fish));
        assert_eq!(nav.button_at(33), None);
        assert_eq!(nav.button_at(56), Some(View::Rods));
        assert_eq!(nav.button_at(57), None);
        assert_eq!(nav.nth(1), Some(View::Lakes));
    }

    #[test]
    fn nav_lead_clamps_on_tiny_viewport() {
        let nav = NavBar::build(&View::ALL, 10, &layout());
        assert_eq!(nav.lead, 0);
    }

    #[test]
    fn search_bar_keeps_text_across_rebuilds() {
        let mut bar = SearchBar::default();
        bar.push_char('p');
        bar.push_char('x');
        bar.pop_char();
        bar.rebuild(80, &layout());
        // 20 + 2 + 8 = 30 -> (80 - 30) / 2
        assert_eq!(bar.lead, 25);
        assert_eq!(bar.text, "p");
        assert_eq!(bar.hit(25), Some(SearchHit::Input));
        assert_eq!(bar.hit(46), None);
        assert_eq!(bar.hit(47), Some(SearchHit::Button));
        bar.rebuild(200, &layout());
        assert_eq!(bar.text, "p");
        assert_eq!(bar.lead, 85);
    }
}
