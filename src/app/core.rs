use super::bars::{NavBar, SearchBar, SearchHit};
use super::display::{DisplayContext, DisplayManager};
use super::settings::{Keybinds, Settings};
use super::types::{Focus, View};
use super::view::{Container, ViewManager};
use crate::data::DataManager;
use crate::ui::{NAV_HEIGHT, SEARCH_HEIGHT};

/// Blocks moved by page up/down.
pub const PAGE_BLOCKS: isize = 5;

/// Application state: loaded data, the per-view containers and the two top
/// bars. Event handlers mutate it; the renderer only reads it.
pub struct App {
    pub settings: Settings,
    pub keys: Keybinds,
    pub data: DataManager,
    pub display: DisplayManager,
    pub views: ViewManager,
    pub nav: NavBar,
    pub search: SearchBar,
    pub focus: Focus,
    /// Terminal size as (width, height).
    pub viewport: (u16, u16),
}

impl App {
    /// Build the UI for `viewport` and show the default view.
    pub fn new(settings: Settings, data: DataManager, viewport: (u16, u16)) -> Self {
        let keys = Keybinds::with_overrides(&settings.keybinds);
        let display = DisplayManager::new(settings.layout, settings.search_scope);
        let views = ViewManager::new(&settings.views);
        let default_view = settings.default_view;
        let mut app = App {
            settings,
            keys,
            data,
            display,
            views,
            nav: NavBar::default(),
            search: SearchBar::default(),
            focus: Focus::Cards,
            viewport,
        };
        app.rebuild_bars();
        app.switch_to(default_view);
        app
    }

    pub fn visible_view(&self) -> Option<View> {
        self.views.visible_view()
    }

    pub fn visible_container(&self) -> Option<&Container> {
        self.views.visible_container()
    }

    /// Show `view`, rebuild its cards and clear the search input.
    pub fn switch_to(&mut self, view: View) {
        let ctx = DisplayContext {
            data: &self.data,
            viewport_width: self.viewport.0,
        };
        if self.views.switch_to(view, &self.display, &ctx) {
            self.search.clear();
        }
    }

    pub fn next_view(&mut self) {
        if let Some(v) = self.views.neighbour(true) {
            self.switch_to(v);
        }
    }

    pub fn prev_view(&mut self) {
        if let Some(v) = self.views.neighbour(false) {
            self.switch_to(v);
        }
    }

    /// Run the search input's text against the visible view.
    pub fn run_search(&mut self) {
        let ctx = DisplayContext {
            data: &self.data,
            viewport_width: self.viewport.0,
        };
        let term = self.search.text.to_lowercase();
        self.views.search_visible(&term, &self.display, &ctx);
    }

    /// Reflow everything for a new terminal size: both bars are rebuilt and
    /// the visible view is redisplayed with the new column count.
    pub fn on_resize(&mut self, width: u16, height: u16) {
        tracing::debug!(width, height, "viewport resized");
        self.viewport = (width, height);
        self.rebuild_bars();
        self.refresh_visible();
    }

    /// Open or close every card's Additional Info section.
    pub fn toggle_details(&mut self) {
        self.display.details_open = !self.display.details_open;
        self.refresh_visible();
    }

    pub fn scroll(&mut self, delta: isize) {
        if let Some(c) = self.views.visible_container_mut() {
            c.scroll_by(delta);
        }
    }

    pub fn scroll_to_top(&mut self) {
        if let Some(c) = self.views.visible_container_mut() {
            c.scroll_to_top();
        }
    }

    pub fn scroll_to_bottom(&mut self) {
        if let Some(c) = self.views.visible_container_mut() {
            c.scroll_to_bottom();
        }
    }

    /// Handle a left click at terminal cell (`x`, `y`).
    pub fn on_click(&mut self, x: u16, y: u16) {
        if y < NAV_HEIGHT {
            if let Some(v) = self.nav.button_at(x) {
                self.switch_to(v);
            }
        } else if y < NAV_HEIGHT + SEARCH_HEIGHT {
            match self.search.hit(x) {
                Some(SearchHit::Input) => self.focus = Focus::Search,
                Some(SearchHit::Button) => {
                    self.run_search();
                    self.focus = Focus::Cards;
                }
                None => {}
            }
        } else {
            self.focus = Focus::Cards;
        }
    }

    fn rebuild_bars(&mut self) {
        let views: Vec<View> = self.views.views().collect();
        self.nav = NavBar::build(&views, self.viewport.0, &self.settings.layout);
        self.search.rebuild(self.viewport.0, &self.settings.layout);
    }

    fn refresh_visible(&mut self) {
        let ctx = DisplayContext {
            data: &self.data,
            viewport_width: self.viewport.0,
        };
        self.views.refresh_visible(&self.display, &ctx);
    }
}
