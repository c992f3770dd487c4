//! Rod and reel categories derived from a fixture's capability flags.

use serde_json::{Map, Value};

/// Label used when a fixture declares no capability at all.
pub const DEFAULT_CATEGORY: &str = "Other";

/// Reel capabilities, listed first in a category name.
pub const REEL_CAPABILITIES: [(&str, &str); 2] = [
    ("canUseCastingReel", "CastingReel"),
    ("canUseSpinningReel", "SpinningReel"),
];

/// Bait capabilities, listed after the reel ones.
pub const BAIT_CAPABILITIES: [(&str, &str); 2] =
    [("canUseBobber", "Bobber"), ("canUseLure", "Lure")];

/// Capability flags declared at the top of a per-type fixture file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub can_use_casting_reel: bool,
    pub can_use_spinning_reel: bool,
    pub can_use_bobber: bool,
    pub can_use_lure: bool,
}

impl Capabilities {
    /// Read the flags from a fixture's top-level object. Missing or
    /// non-boolean flags count as `false`.
    pub fn from_fixture(doc: &Value) -> Self {
        let empty = Map::new();
        let obj = doc.as_object().unwrap_or(&empty);
        let flag = |k: &str| obj.get(k).and_then(Value::as_bool).unwrap_or(false);
        Capabilities {
            can_use_casting_reel: flag("canUseCastingReel"),
            can_use_spinning_reel: flag("canUseSpinningReel"),
            can_use_bobber: flag("canUseBobber"),
            can_use_lure: flag("canUseLure"),
        }
    }

    fn is_set(&self, key: &str) -> bool {
        match key {
            "canUseCastingReel" => self.can_use_casting_reel,
            "canUseSpinningReel" => self.can_use_spinning_reel,
            "canUseBobber" => self.can_use_bobber,
            "canUseLure" => self.can_use_lure,
            _ => false,
        }
    }

    /// Derive the category label, e.g. `SpinningReel&Lure`.
    pub fn category_name(&self) -> String {
        let parts: Vec<&str> = REEL_CAPABILITIES
            .iter()
            .chain(BAIT_CAPABILITIES.iter())
            .filter(|(key, _)| self.is_set(key))
            .map(|(_, label)| *label)
            .collect();
        if parts.is_empty() {
            DEFAULT_CATEGORY.to_string()
        } else {
            parts.join("&")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn no_flags_falls_back_to_other() {
        assert_eq!(Capabilities::default().category_name(), "Other");
    }

    #[test]
    fn reels_come_before_baits() {
        let caps = Capabilities {
            can_use_casting_reel: true,
            can_use_spinning_reel: true,
            can_use_bobber: true,
            can_use_lure: true,
        };
        assert_eq!(
            caps.category_name(),
            "CastingReel&SpinningReel&Bobber&Lure"
        );
    }

    #[test]
    fn every_combination_is_deterministic() {
        for bits in 0u8..16 {
            let caps = Capabilities {
                can_use_casting_reel: bits & 1 != 0,
                can_use_spinning_reel: bits & 2 != 0,
                can_use_bobber: bits & 4 != 0,
                can_use_lure: bits & 8 != 0,
            };
            let name = caps.category_name();
            assert_eq!(name, caps.category_name());
            assert_eq!(bits == 0, name == DEFAULT_CATEGORY, "bits {bits}: {name}");
        }
    }

    #[test]
    fn flags_are_read_from_fixture_document() {
        let doc = json!({"canUseSpinningReel": true, "canUseLure": true, "canUseBobber": "yes", "gameRods": []});
        let caps = Capabilities::from_fixture(&doc);
        assert_eq!(caps.category_name(), "SpinningReel&Lure");
        assert_eq!(Capabilities::from_fixture(&json!([])), Capabilities::default());
    }
}
