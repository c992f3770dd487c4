use once_cell::sync::Lazy;
use ratatui::style::{Modifier, Style};
use std::sync::Mutex;

use crate::ui::Theme;

/// Concrete styles derived from the active theme.
#[derive(Clone, Debug, PartialEq)]
pub struct Colors {
	pub base_style: Style,
	pub nav_style: Style,
	pub nav_active_style: Style,
	pub search_style: Style,
	pub search_focused_style: Style,
	pub search_hint_style: Style,
	pub header_style: Style,
	pub card_style: Style,
	pub card_title_style: Style,
	pub section_style: Style,
	pub fallback_style: Style,
	pub message_style: Style,
	pub footer_style: Style,
}

impl Colors {
	pub fn from_theme(theme: &Theme) -> Self {
		let base = Style::default().fg(theme.fg).bg(theme.bg);
		Colors {
			base_style: base,
			nav_style: base,
			nav_active_style: Style::default().fg(theme.bg).bg(theme.accent).add_modifier(Modifier::BOLD),
			search_style: base,
			search_focused_style: base.fg(theme.accent),
			search_hint_style: base.fg(theme.muted),
			header_style: base.fg(theme.highlight).add_modifier(Modifier::BOLD),
			card_style: base,
			card_title_style: base.fg(theme.accent),
			section_style: base.fg(theme.highlight),
			fallback_style: base.fg(theme.muted).add_modifier(Modifier::ITALIC),
			message_style: base.fg(theme.muted),
			footer_style: base.fg(theme.muted),
		}
	}
}

static CURRENT: Lazy<Mutex<Colors>> = Lazy::new(|| Mutex::new(Colors::from_theme(&Theme::dark())));

/// Derive runtime styles from `theme` and make them current.
pub fn set_from_theme(theme: &Theme) {
	let colors = Colors::from_theme(theme);
	match CURRENT.lock() {
		Ok(mut g) => *g = colors,
		Err(poisoned) => *poisoned.into_inner() = colors,
	}
}

pub fn current() -> Colors {
	match CURRENT.lock() {
		Ok(g) => g.clone(),
		Err(poisoned) => poisoned.into_inner().clone(),
	}
}
