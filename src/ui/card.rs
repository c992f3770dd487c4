//! Card content for a single record.
//!
//! Cards are built once per reflow with their lines already wrapped to the
//! card's inner width, so the renderer only has to place them.

use crate::data::{format_field_display_name, format_field_value, EquipmentKind, Record};

pub const ADDITIONAL_INFO: &str = "Additional Info";
pub const UNKNOWN_ITEM: &str = "Unknown item type";

/// How a card line should be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Field,
    /// The collapsible "Additional Info" header.
    Section,
    /// Shown for records whose shape was not recognized.
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardLine {
    pub kind: LineKind,
    pub text: String,
}

impl CardLine {
    fn new(kind: LineKind, text: impl Into<String>) -> Self {
        CardLine { kind, text: text.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub title: String,
    pub lines: Vec<CardLine>,
}

impl Card {
    /// Build the card for `record`. `inner_width` is the text width inside
    /// the border; `expanded` opens the Additional Info section.
    pub fn build(record: &Record, inner_width: u16, expanded: bool) -> Card {
        let width = (inner_width as usize).max(1);
        let mut lines = Vec::new();
        match record.kind {
            EquipmentKind::Rod | EquipmentKind::Reel => {
                push_fields(&mut lines, record, record.primary_fields().iter().copied(), width);
                let secondary = record.secondary_fields();
                if secondary.iter().any(|f| record.fields.contains_key(*f)) {
                    let marker = if expanded { "▾" } else { "▸" };
                    lines.push(CardLine::new(LineKind::Section, format!("{} {}", marker, ADDITIONAL_INFO)));
                    if expanded {
                        push_fields(&mut lines, record, secondary.iter().copied(), width);
                    }
                }
            }
            EquipmentKind::Fish | EquipmentKind::Lake => {
                push_fields(&mut lines, record, record.fields.keys().map(String::as_str), width);
            }
            EquipmentKind::Unknown => {
                lines.push(CardLine::new(LineKind::Fallback, UNKNOWN_ITEM));
            }
        }
        Card {
            title: title_for(record),
            lines,
        }
    }

    /// Rows needed to show every line plus the border, never below
    /// `min_height`.
    pub fn height(&self, min_height: u16) -> u16 {
        let needed = (self.lines.len() + 2).min(u16::MAX as usize) as u16;
        needed.max(min_height)
    }
}

fn title_for(record: &Record) -> String {
    match record.kind {
        EquipmentKind::Rod | EquipmentKind::Reel => format!("{} · {}", record.kind, record.subtype()),
        EquipmentKind::Unknown => "?".to_string(),
        kind => kind.to_string(),
    }
}

fn push_fields<'a>(
    lines: &mut Vec<CardLine>,
    record: &Record,
    fields: impl Iterator<Item = &'a str>,
    width: usize,
) {
    for field in fields {
        let Some(value) = record.get(field) else { continue };
        let text = format!(
            "{}: {}",
            format_field_display_name(record.kind, field),
            format_field_value(value)
        );
        for wrapped in textwrap::wrap(&text, width) {
            lines.push(CardLine::new(LineKind::Field, wrapped.into_owned()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(kind: EquipmentKind, v: serde_json::Value) -> Record {
        Record::new(kind, v.as_object().cloned().unwrap())
    }

    fn texts(card: &Card) -> Vec<&str> {
        card.lines.iter().map(|l| l.text.as_str()).collect()
    }

    #[test]
    fn rod_card_hides_secondary_fields_until_expanded() {
        let rod = record(
            EquipmentKind::Rod,
            json!({"name": "Striker", "price": "Free", "lineWeight": "2-5 kg", "type": "match", "brand": "Acme"}),
        );
        let collapsed = Card::build(&rod, 40, false);
        assert_eq!(
            texts(&collapsed),
            vec!["Name: Striker", "Price: Free", "Line Weight: 2-5 kg", "▸ Additional Info"]
        );
        assert_eq!(collapsed.title, "rod · match");

        let open = Card::build(&rod, 40, true);
        assert_eq!(
            &texts(&open)[3..],
            &["▾ Additional Info", "Type: match", "Brand: Acme"]
        );
    }

    #[test]
    fn section_omitted_without_secondary_fields() {
        let reel = record(EquipmentKind::Reel, json!({"name": "Spin 1000", "gearRatio": "5.2:1"}));
        let card = Card::build(&reel, 40, true);
        assert!(card.lines.iter().all(|l| l.kind == LineKind::Field));
        assert_eq!(texts(&card), vec!["Name: Spin 1000", "Gearratio: 5.2:1"]);
    }

    #[test]
    fn fish_card_shows_every_field_in_order() {
        let fish = record(EquipmentKind::Fish, json!({"name": "Pike", "baits": ["Spoon", "Jig"]}));
        let card = Card::build(&fish, 40, false);
        assert_eq!(texts(&card), vec!["Name: Pike", "Baits: Spoon, Jig"]);
        assert_eq!(card.title, "fish");
    }

    #[test]
    fn unknown_record_renders_fallback() {
        let odd = record(EquipmentKind::Unknown, json!({"what": 1}));
        let card = Card::build(&odd, 40, false);
        assert_eq!(card.lines, vec![CardLine::new(LineKind::Fallback, UNKNOWN_ITEM)]);
    }

    #[test]
    fn long_values_wrap_and_grow_height() {
        let lake = record(EquipmentKind::Lake, json!({"name": "Emerald Lake of the Northern Woods"}));
        let card = Card::build(&lake, 12, false);
        assert!(card.lines.len() > 1);
        assert!(card.lines.iter().all(|l| l.text.chars().count() <= 12));
        assert_eq!(card.height(3), card.lines.len() as u16 + 2);
        assert_eq!(card.height(20), 20);
    }
}
