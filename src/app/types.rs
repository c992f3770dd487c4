use serde::{Deserialize, Serialize};
use std::fmt;

use crate::data::EquipmentKind;

/// One of the mutually exclusive sections of the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Fish,
    Lakes,
    Rods,
    Reels,
}

impl View {
    pub const ALL: [View; 4] = [View::Fish, View::Lakes, View::Rods, View::Reels];

    /// Kind of record listed in this view.
    pub fn kind(&self) -> EquipmentKind {
        match self {
            View::Fish => EquipmentKind::Fish,
            View::Lakes => EquipmentKind::Lake,
            View::Rods => EquipmentKind::Rod,
            View::Reels => EquipmentKind::Reel,
        }
    }

    /// Label shown on the navigation button.
    pub fn label(&self) -> &'static str {
        match self {
            View::Fish => "Fish",
            View::Lakes => "Lakes",
            View::Rods => "Rod Setup",
            View::Reels => "Reels",
        }
    }

    /// Plural noun used in "No ... found" messages.
    pub fn noun(&self) -> &'static str {
        match self {
            View::Fish => "fish",
            View::Lakes => "lakes",
            View::Rods => "rods",
            View::Reels => "reels",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.noun())
    }
}

impl std::str::FromStr for View {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fish" => Ok(View::Fish),
            "lakes" | "lake" => Ok(View::Lakes),
            "rods" | "rod" => Ok(View::Rods),
            "reels" | "reel" => Ok(View::Reels),
            other => Err(format!("unknown view `{}` (expected fish, lakes, rods or reels)", other)),
        }
    }
}

/// Which widget receives typed keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Keys drive navigation and scrolling.
    #[default]
    Cards,
    /// Keys edit the search input.
    Search,
}
