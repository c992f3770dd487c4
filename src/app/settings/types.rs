use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::app::types::View;
use crate::data::{DataPaths, SearchScope};

/// Fixed sizes used by the card grid and the top bars, in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    pub card_width: u16,
    /// Minimum card height; expanded cards grow to fit their lines.
    pub card_height: u16,
    pub card_spacing: u16,
    /// Horizontal space reserved around the grid.
    pub window_padding: u16,
    /// Blank rows after each category section.
    pub category_spacing: u16,
    pub nav_button_width: u16,
    pub nav_button_spacing: u16,
    pub search_input_width: u16,
    pub search_button_width: u16,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        LayoutSettings {
            card_width: 30,
            card_height: 9,
            card_spacing: 2,
            window_padding: 4,
            category_spacing: 1,
            nav_button_width: 16,
            nav_button_spacing: 2,
            search_input_width: 40,
            search_button_width: 10,
        }
    }
}

/// User settings loaded from `settings.toml`. Every field is optional in the
/// file; anything missing keeps its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Raw fixtures (`fish.json`, `lakes.json`, per-type rods/reels).
    pub data_dir: PathBuf,
    /// Output of `tackleBox process`.
    pub processed_dir: PathBuf,
    pub default_view: View,
    /// Views offered in the navigation bar, in button order.
    pub views: Vec<View>,
    /// `dark`, `light` or a path to a theme TOML file.
    pub theme: String,
    pub search_scope: SearchScope,
    pub layout: LayoutSettings,
    /// Action name -> key names, replacing the default bindings for that
    /// action.
    pub keybinds: BTreeMap<String, Vec<String>>,
}

impl Default for Settings {
    fn default() -> Self {
        let paths = DataPaths::default();
        Settings {
            data_dir: paths.raw_dir,
            processed_dir: paths.processed_dir,
            default_view: View::Rods,
            views: View::ALL.to_vec(),
            theme: "dark".to_string(),
            search_scope: SearchScope::default(),
            layout: LayoutSettings::default(),
            keybinds: BTreeMap::new(),
        }
    }
}

impl Settings {
    pub fn data_paths(&self) -> DataPaths {
        DataPaths {
            raw_dir: self.data_dir.clone(),
            processed_dir: self.processed_dir.clone(),
        }
    }

    /// Repair values that would break the UI: an empty or duplicated view
    /// list, a default view that is not offered, zero-width cards.
    pub fn normalized(mut self) -> Self {
        let mut views = Vec::new();
        for v in self.views.drain(..) {
            if !views.contains(&v) {
                views.push(v);
            }
        }
        if views.is_empty() {
            views = View::ALL.to_vec();
        }
        if !views.contains(&self.default_view) {
            tracing::warn!(
                "default view {} is not enabled, falling back to {}",
                self.default_view,
                views[0]
            );
            self.default_view = views[0];
        }
        self.views = views;

        let defaults = LayoutSettings::default();
        if self.layout.card_width == 0 {
            self.layout.card_width = defaults.card_width;
        }
        if self.layout.card_height < 3 {
            self.layout.card_height = defaults.card_height;
        }
        if self.layout.nav_button_width == 0 {
            self.layout.nav_button_width = defaults.nav_button_width;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_repairs_view_list_and_default() {
        let s = Settings {
            views: vec![View::Reels, View::Reels, View::Fish],
            default_view: View::Lakes,
            ..Settings::default()
        }
        .normalized();
        assert_eq!(s.views, vec![View::Reels, View::Fish]);
        assert_eq!(s.default_view, View::Reels);

        let empty = Settings { views: vec![], ..Settings::default() }.normalized();
        assert_eq!(empty.views, View::ALL.to_vec());
    }

    #[test]
    fn normalized_rejects_zero_width_cards() {
        let mut s = Settings::default();
        s.layout.card_width = 0;
        s.layout.card_height = 0;
        let s = s.normalized();
        assert_eq!(s.layout.card_width, LayoutSettings::default().card_width);
        assert_eq!(s.layout.card_height, LayoutSettings::default().card_height);
    }
}
