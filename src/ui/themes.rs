use ratatui::style::Color;
use serde::Deserialize;
use std::path::Path;

use crate::errors::SettingsError;

#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub accent: Color,
    /// Secondary text: hints, spacers, the footer.
    pub muted: Color,
    /// Category headers and the open details marker.
    pub highlight: Color,
}

#[derive(Deserialize)]
struct Pal {
    bg: String,
    fg: String,
    accent: String,
    muted: Option<String>,
    highlight: Option<String>,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb(11, 12, 13),
            fg: Color::Gray,
            accent: Color::Cyan,
            muted: Color::DarkGray,
            highlight: Color::Yellow,
        }
    }

    pub fn light() -> Self {
        Self {
            bg: Color::White,
            fg: Color::Black,
            accent: Color::Blue,
            muted: Color::Gray,
            highlight: Color::Magenta,
        }
    }

    /// Parse a theme file. Without a `palette` table the dark theme is used.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        let v: toml::Table = toml::from_str(s)?;
        let Some(p) = v.get("palette") else {
            return Ok(Self::dark());
        };
        let p: Pal = p.clone().try_into()?;
        let base = Self::dark();
        Ok(Self {
            bg: parse_hex(&p.bg),
            fg: parse_hex(&p.fg),
            accent: parse_hex(&p.accent),
            muted: p.muted.as_deref().map(parse_hex).unwrap_or(base.muted),
            highlight: p.highlight.as_deref().map(parse_hex).unwrap_or(base.highlight),
        })
    }

    /// Resolve the `theme` setting: a built-in name or a path to a TOML file.
    pub fn resolve(name: &str) -> Result<Self, SettingsError> {
        match name {
            "dark" => Ok(Self::dark()),
            "light" => Ok(Self::light()),
            path => {
                let text = std::fs::read_to_string(Path::new(path))?;
                Self::from_toml(&text).map_err(|e| SettingsError::Theme(e.to_string()))
            }
        }
    }
}

fn parse_hex(s: &str) -> Color {
    let s = s.trim_start_matches('#');
    if s.len() == 6 && s.is_ascii() {
        if let (Ok(r), Ok(g), Ok(b)) = (
            u8::from_str_radix(&s[0..2], 16),
            u8::from_str_radix(&s[2..4], 16),
            u8::from_str_radix(&s[4..6], 16),
        ) {
            return Color::Rgb(r, g, b);
        }
    }
    Color::Reset
}
