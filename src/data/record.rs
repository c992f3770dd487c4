use serde_json::{Map, Value};
use std::fmt;

/// Equipment kind carried by every loaded record.
///
/// Decided once at load time so rendering never has to sniff field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EquipmentKind {
    Rod,
    Reel,
    Fish,
    Lake,
    /// The record did not have the shape its fixture promised.
    Unknown,
}

impl EquipmentKind {
    /// Prefix used by raw field names of this kind (`rodName`, `reelBrand`).
    pub fn field_prefix(&self) -> Option<&'static str> {
        match self {
            EquipmentKind::Rod => Some("rod"),
            EquipmentKind::Reel => Some("reel"),
            _ => None,
        }
    }

    /// Tag `fields` as `expected` if they carry that kind's marker field,
    /// otherwise as `Unknown`. Fish and lakes have no marker.
    pub fn detect(expected: EquipmentKind, fields: &Map<String, Value>) -> EquipmentKind {
        match expected {
            EquipmentKind::Rod | EquipmentKind::Reel if !fields.contains_key("type") => {
                EquipmentKind::Unknown
            }
            other => other,
        }
    }
}

impl fmt::Display for EquipmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EquipmentKind::Rod => "rod",
            EquipmentKind::Reel => "reel",
            EquipmentKind::Fish => "fish",
            EquipmentKind::Lake => "lake",
            EquipmentKind::Unknown => "unknown",
        };
        write!(f, "{}", s)
    }
}

pub const PRIMARY_ROD_FIELDS: &[&str] = &[
    "name",
    "price",
    "length",
    "action",
    "level",
    "lineWeight",
    "lureWeight",
];
pub const SECONDARY_ROD_FIELDS: &[&str] = &["type", "brand", "guides", "pieces", "power"];

pub const PRIMARY_REEL_FIELDS: &[&str] = &[
    "name",
    "price",
    "level",
    "gearRatio",
    "maxDrag",
    "lineCapacity",
];
pub const SECONDARY_REEL_FIELDS: &[&str] = &["type", "brand", "bearings"];

/// One equipment entry: its kind plus the ordered field map from the fixture.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub kind: EquipmentKind,
    pub fields: Map<String, Value>,
}

impl Record {
    pub fn new(kind: EquipmentKind, fields: Map<String, Value>) -> Self {
        Record { kind, fields }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// String value of `field`, if present and a string.
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(Value::as_str)
    }

    pub fn name(&self) -> Option<&str> {
        self.get_str("name")
    }

    /// Category label, `Unknown` when the record has none.
    pub fn category(&self) -> &str {
        self.get_str("category").unwrap_or("Unknown")
    }

    /// Rod/reel subtype, `Unknown` when the record has none.
    pub fn subtype(&self) -> &str {
        self.get_str("type").unwrap_or("Unknown")
    }

    /// Every key and displayed value on one line, used for free-text
    /// search. Values appear as the card shows them, without JSON escaping.
    pub fn stringified(&self) -> String {
        self.fields
            .iter()
            .map(|(k, v)| format!("{}: {}", k, format_field_value(v)))
            .collect::<Vec<_>>()
            .join(" | ")
    }

    /// Fields always shown on the card face. Empty for kinds that show
    /// everything.
    pub fn primary_fields(&self) -> &'static [&'static str] {
        match self.kind {
            EquipmentKind::Rod => PRIMARY_ROD_FIELDS,
            EquipmentKind::Reel => PRIMARY_REEL_FIELDS,
            _ => &[],
        }
    }

    /// Fields tucked into the collapsible "Additional Info" section.
    pub fn secondary_fields(&self) -> &'static [&'static str] {
        match self.kind {
            EquipmentKind::Rod => SECONDARY_ROD_FIELDS,
            EquipmentKind::Reel => SECONDARY_REEL_FIELDS,
            _ => &[],
        }
    }
}

/// Human label for a field name.
///
/// `lineWeight` and `lureWeight` have fixed labels; anything else has the
/// kind prefix stripped and is capitalized (`rodGuides` -> `Guides`).
pub fn format_field_display_name(kind: EquipmentKind, field: &str) -> String {
    match field {
        "lineWeight" => return "Line Weight".to_string(),
        "lureWeight" => return "Lure Weight".to_string(),
        _ => {}
    }
    let stripped = kind
        .field_prefix()
        .and_then(|p| field.strip_prefix(p))
        .filter(|rest| !rest.is_empty())
        .unwrap_or(field);
    capitalize(stripped)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Display text for a field value. Lists are comma-joined.
pub fn format_field_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(format_field_value)
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn display_name_overrides_and_prefix_stripping() {
        assert_eq!(format_field_display_name(EquipmentKind::Rod, "lineWeight"), "Line Weight");
        assert_eq!(format_field_display_name(EquipmentKind::Reel, "lureWeight"), "Lure Weight");
        assert_eq!(format_field_display_name(EquipmentKind::Rod, "rodGuides"), "Guides");
        assert_eq!(format_field_display_name(EquipmentKind::Reel, "reelGearRatio"), "Gearratio");
        assert_eq!(format_field_display_name(EquipmentKind::Fish, "habitat"), "Habitat");
        // a bare prefix is not stripped to nothing
        assert_eq!(format_field_display_name(EquipmentKind::Rod, "rod"), "Rod");
    }

    #[test]
    fn field_values_render_lists_and_numbers() {
        assert_eq!(format_field_value(&json!(["Pike", "Perch"])), "Pike, Perch");
        assert_eq!(format_field_value(&json!(2.5)), "2.5");
        assert_eq!(format_field_value(&json!(7)), "7");
        assert_eq!(format_field_value(&json!("Free")), "Free");
        assert_eq!(format_field_value(&Value::Null), "");
    }

    #[test]
    fn detect_marks_shapeless_rods_unknown() {
        let with_type = json!({"name": "A", "type": "match"});
        let without = json!({"name": "A"});
        assert_eq!(
            EquipmentKind::detect(EquipmentKind::Rod, with_type.as_object().unwrap()),
            EquipmentKind::Rod
        );
        assert_eq!(
            EquipmentKind::detect(EquipmentKind::Reel, without.as_object().unwrap()),
            EquipmentKind::Unknown
        );
        assert_eq!(
            EquipmentKind::detect(EquipmentKind::Fish, without.as_object().unwrap()),
            EquipmentKind::Fish
        );
    }
}
