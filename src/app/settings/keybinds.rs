// Keybind predicates for the browser.
//
// Handlers ask `keys.is_quit(&code)` rather than matching raw `KeyCode`
// patterns, so bindings can be replaced from the `[keybinds]` table of
// settings.toml without touching the handlers.

use std::collections::{BTreeMap, HashMap};

use crate::input::KeyCode;

const DEFAULTS: &[(&str, &[&str])] = &[
	("quit", &["q"]),
	("next_view", &["Tab", "Right"]),
	("prev_view", &["BackTab", "Left"]),
	("focus_search", &["/", "s"]),
	("up", &["Up", "k"]),
	("down", &["Down", "j"]),
	("page_up", &["PageUp"]),
	("page_down", &["PageDown"]),
	("top", &["Home", "g"]),
	("bottom", &["End", "G"]),
	("toggle_details", &["d"]),
	("enter", &["Enter"]),
	("esc", &["Esc"]),
	("backspace", &["Backspace"]),
];

/// Parse a key name as written in settings (`"q"`, `"Tab"`, `"F5"`).
pub fn parse_key(name: &str) -> Option<KeyCode> {
	let mut chars = name.chars();
	if let (Some(c), None) = (chars.next(), chars.next()) {
		return Some(KeyCode::Char(c));
	}
	let code = match name.to_ascii_lowercase().as_str() {
		"tab" => KeyCode::Tab,
		"backtab" => KeyCode::BackTab,
		"enter" | "return" => KeyCode::Enter,
		"esc" | "escape" => KeyCode::Esc,
		"backspace" => KeyCode::Backspace,
		"up" => KeyCode::Up,
		"down" => KeyCode::Down,
		"left" => KeyCode::Left,
		"right" => KeyCode::Right,
		"pageup" => KeyCode::PageUp,
		"pagedown" => KeyCode::PageDown,
		"home" => KeyCode::Home,
		"end" => KeyCode::End,
		"space" => KeyCode::Char(' '),
		f if f.starts_with('f') => KeyCode::F(f[1..].parse().ok()?),
		_ => return None,
	};
	Some(code)
}

/// Action -> bound keys.
#[derive(Debug, Clone, PartialEq)]
pub struct Keybinds {
	map: HashMap<String, Vec<KeyCode>>,
}

impl Default for Keybinds {
	fn default() -> Self {
		let map = DEFAULTS
			.iter()
			.map(|(action, keys)| {
				(action.to_string(), keys.iter().filter_map(|k| parse_key(k)).collect())
			})
			.collect();
		Keybinds { map }
	}
}

impl Keybinds {
	/// Defaults with each overridden action's keys replaced. Unknown key names
	/// are logged and skipped.
	pub fn with_overrides(overrides: &BTreeMap<String, Vec<String>>) -> Self {
		let mut kb = Keybinds::default();
		for (action, names) in overrides {
			let codes: Vec<KeyCode> = names
				.iter()
				.filter_map(|n| {
					let parsed = parse_key(n);
					if parsed.is_none() {
						tracing::warn!("unknown key `{}` bound to `{}`", n, action);
					}
					parsed
				})
				.collect();
			kb.map.insert(action.clone(), codes);
		}
		kb
	}

	pub fn is_bound(&self, action: &str, code: &KeyCode) -> bool {
		self.map.get(action).is_some_and(|codes| codes.contains(code))
	}

	pub fn is_quit(&self, code: &KeyCode) -> bool {
		self.is_bound("quit", code)
	}

	pub fn is_next_view(&self, code: &KeyCode) -> bool {
		self.is_bound("next_view", code)
	}

	pub fn is_prev_view(&self, code: &KeyCode) -> bool {
		self.is_bound("prev_view", code)
	}

	pub fn is_focus_search(&self, code: &KeyCode) -> bool {
		self.is_bound("focus_search", code)
	}

	pub fn is_up(&self, code: &KeyCode) -> bool {
		self.is_bound("up", code)
	}

	pub fn is_down(&self, code: &KeyCode) -> bool {
		self.is_bound("down", code)
	}

	pub fn is_page_up(&self, code: &KeyCode) -> bool {
		self.is_bound("page_up", code)
	}

	pub fn is_page_down(&self, code: &KeyCode) -> bool {
		self.is_bound("page_down", code)
	}

	pub fn is_top(&self, code: &KeyCode) -> bool {
		self.is_bound("top", code)
	}

	pub fn is_bottom(&self, code: &KeyCode) -> bool {
		self.is_bound("bottom", code)
	}

	pub fn is_toggle_details(&self, code: &KeyCode) -> bool {
		self.is_bound("toggle_details", code)
	}

	pub fn is_enter(&self, code: &KeyCode) -> bool {
		self.is_bound("enter", code)
	}

	pub fn is_esc(&self, code: &KeyCode) -> bool {
		self.is_bound("esc", code)
	}

	pub fn is_backspace(&self, code: &KeyCode) -> bool {
		self.is_bound("backspace", code)
	}
}
