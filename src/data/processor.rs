//! Normalization of raw per-type fixtures into the processed rod and reel
//! lists the browser loads.
//!
//! Each raw file (`casting.json`, `spinning_reels.json`, ...) is either a
//! bare array of records or an object holding the records under
//! `gameRods`/`gameReels` next to the capability flags shared by every
//! record in the file. The processor flattens all types into one array per
//! kind, adding `type`, `category` and display-ready `price`/weight strings.

use std::path::{Path, PathBuf};

use serde_json::{json, Map, Value};

use super::category::Capabilities;
use super::parser::{records_from, try_parse_json};
use super::DataPaths;
use crate::errors::DataError;

pub const ROD_TYPES: [&str; 4] = ["match", "casting", "telescopic", "spinning"];
pub const REEL_TYPES: [&str; 3] = ["spinning", "casting", "baitcasting"];

pub const PROCESSED_RODS_FILE: &str = "processed_rods.json";
pub const PROCESSED_REELS_FILE: &str = "processed_reels.json";

/// Counts reported after a processing run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessSummary {
    pub rods: usize,
    pub reels: usize,
    pub rods_path: PathBuf,
    pub reels_path: PathBuf,
}

pub struct DataProcessor {
    raw_dir: PathBuf,
    out_dir: PathBuf,
}

impl DataProcessor {
    pub fn new(paths: &DataPaths) -> Self {
        DataProcessor {
            raw_dir: paths.raw_dir.clone(),
            out_dir: paths.processed_dir.clone(),
        }
    }

    /// Process every rod and reel type and write both output files.
    ///
    /// `on_file` is called with each raw file name before it is read so a
    /// caller can drive a progress bar.
    pub fn process_all(&self, mut on_file: impl FnMut(&str)) -> Result<ProcessSummary, DataError> {
        let rods = self.process_rods(&mut on_file)?;
        let reels = self.process_reels(&mut on_file)?;

        std::fs::create_dir_all(&self.out_dir).map_err(|e| DataError::io(&self.out_dir, e))?;
        let rods_path = self.out_dir.join(PROCESSED_RODS_FILE);
        let reels_path = self.out_dir.join(PROCESSED_REELS_FILE);
        save_json(&rods_path, &rods)?;
        save_json(&reels_path, &reels)?;

        tracing::info!(
            rods = rods.len(),
            reels = reels.len(),
            "processed fixtures written to {}",
            self.out_dir.display()
        );
        Ok(ProcessSummary {
            rods: rods.len(),
            reels: reels.len(),
            rods_path,
            reels_path,
        })
    }

    /// Normalize every rod type, in `ROD_TYPES` order.
    pub fn process_rods(&self, on_file: &mut impl FnMut(&str)) -> Result<Vec<Map<String, Value>>, DataError> {
        let mut all = Vec::new();
        for rod_type in ROD_TYPES {
            let file = format!("{}.json", rod_type);
            on_file(&file);
            let Some(doc) = self.load_raw(&file)? else { continue };
            let caps = Capabilities::from_fixture(&doc);
            for raw in records_from(&doc, Some("gameRods")) {
                all.push(process_single_rod(&raw, rod_type, &caps));
            }
        }
        Ok(all)
    }

    /// Normalize every reel type, in `REEL_TYPES` order.
    pub fn process_reels(&self, on_file: &mut impl FnMut(&str)) -> Result<Vec<Map<String, Value>>, DataError> {
        let mut all = Vec::new();
        for reel_type in REEL_TYPES {
            let file = format!("{}_reels.json", reel_type);
            on_file(&file);
            let Some(doc) = self.load_raw(&file)? else { continue };
            let caps = Capabilities::from_fixture(&doc);
            for raw in records_from(&doc, Some("gameReels")) {
                all.push(process_single_reel(&raw, reel_type, &caps));
            }
        }
        Ok(all)
    }

    // A missing raw file just means no records of that type. A file that
    // exists but does not decode is an error.
    fn load_raw(&self, file: &str) -> Result<Option<Value>, DataError> {
        match try_parse_json(&self.raw_dir.join(file)) {
            Ok(v) => Ok(Some(v)),
            Err(e) if e.is_not_found() => {
                tracing::debug!("raw fixture {} not present, skipping", file);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}

fn field_or(raw: &Map<String, Value>, key: &str, default: &str) -> Value {
    raw.get(key).cloned().unwrap_or_else(|| json!(default))
}

// Render a scalar the way it appears in a label: strings bare, numbers in
// their JSON form.
fn scalar_text(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub fn process_single_rod(raw: &Map<String, Value>, rod_type: &str, caps: &Capabilities) -> Map<String, Value> {
    let length = raw.get("rodLength").map(scalar_text).unwrap_or_else(|| "0".into());

    let mut rod = Map::new();
    rod.insert("id".into(), field_or(raw, "id", ""));
    rod.insert("name".into(), field_or(raw, "rodName", "Unknown Rod"));
    rod.insert("brand".into(), field_or(raw, "rodBrand", "Unknown"));
    rod.insert("length".into(), json!(format!("{}m", length)));
    rod.insert("action".into(), field_or(raw, "rodAction", "Unknown"));
    rod.insert("power".into(), field_or(raw, "rodPower", "Unknown"));
    rod.insert("level".into(), field_or(raw, "rodLevel", "Unknown"));
    rod.insert("price".into(), json!(format_price(raw)));
    rod.insert("category".into(), json!(caps.category_name()));
    rod.insert("type".into(), json!(rod_type));
    rod.insert("guides".into(), field_or(raw, "rodGuides", "Unknown"));
    rod.insert("pieces".into(), field_or(raw, "rodPieces", "Unknown"));

    if let Some(w) = format_weight_range(raw, "rodLineWeightMinimum", "rodLineWeightMaximum", "kg") {
        rod.insert("lineWeight".into(), json!(w));
    }
    if let Some(w) = format_weight_range(raw, "rodLureWeightMinimum", "rodLureWeightMaximum", "g") {
        rod.insert("lureWeight".into(), json!(w));
    }
    rod
}

pub fn process_single_reel(raw: &Map<String, Value>, reel_type: &str, caps: &Capabilities) -> Map<String, Value> {
    let mut reel = Map::new();
    reel.insert("id".into(), field_or(raw, "id", ""));
    reel.insert("name".into(), field_or(raw, "reelName", "Unknown Reel"));
    reel.insert("brand".into(), field_or(raw, "reelBrand", "Unknown"));
    reel.insert("level".into(), field_or(raw, "reelLevel", "Unknown"));
    reel.insert("gearRatio".into(), field_or(raw, "reelGearRatio", "Unknown"));
    reel.insert("bearings".into(), field_or(raw, "reelBearings", "Unknown"));
    reel.insert("lineCapacity".into(), field_or(raw, "reelLineCapacity", "Unknown"));
    reel.insert("price".into(), json!(format_price(raw)));
    reel.insert("category".into(), json!(caps.category_name()));
    reel.insert("type".into(), json!(reel_type));
    if let Some(drag) = raw.get("reelMaxDrag") {
        reel.insert("maxDrag".into(), json!(format!("{} kg", scalar_text(drag))));
    }
    reel
}

/// `"{min}-{max} {unit}"` when both bounds are present, `None` otherwise.
pub fn format_weight_range(raw: &Map<String, Value>, min_field: &str, max_field: &str, unit: &str) -> Option<String> {
    let min = raw.get(min_field)?;
    let max = raw.get(max_field)?;
    Some(format!("{}-{} {}", scalar_text(min), scalar_text(max), unit))
}

/// Compose the price from the three in-game currencies, `Free` when none is
/// positive.
pub fn format_price(raw: &Map<String, Value>) -> String {
    let parts: Vec<String> = [
        ("baitcoinsCost", "BC"),
        ("clubTokensCost", "CT"),
        ("creditsCost", "CC"),
    ]
    .iter()
    .filter_map(|(key, unit)| {
        let v = raw.get(*key)?;
        (v.as_f64()? > 0.0).then(|| format!("{} {}", scalar_text(v), unit))
    })
    .collect();

    if parts.is_empty() {
        "Free".to_string()
    } else {
        parts.join(" + ")
    }
}

fn save_json(path: &Path, records: &[Map<String, Value>]) -> Result<(), DataError> {
    let text = serde_json::to_string_pretty(records)?;
    std::fs::write(path, text).map_err(|e| DataError::io(path, e))
}
