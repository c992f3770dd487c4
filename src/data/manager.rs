//! Loaded fixtures grouped for display, plus search over them.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

use super::parser::{deduplicate, parse_json, records_from};
use super::processor::{PROCESSED_REELS_FILE, PROCESSED_RODS_FILE};
use super::record::{EquipmentKind, Record};
use super::DataPaths;

pub const FISH_FILE: &str = "fish.json";
pub const LAKES_FILE: &str = "lakes.json";
/// Array field read when `fish.json` / `lakes.json` is an object rather
/// than a bare array.
pub const FISH_ARRAY_KEY: &str = "fish";
pub const LAKES_ARRAY_KEY: &str = "lakes";

/// Records grouped under a label, in first-seen order.
pub type Groups = IndexMap<String, Vec<Record>>;

/// Which part of a record a search term is matched against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchScope {
    /// Only the `name` field.
    Name,
    /// The whole record, keys and values.
    #[default]
    All,
}

/// Raw search hits, shaped like the data they came from.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchResults {
    /// Rods and reels: subtype -> matching records. Every subtype is present,
    /// possibly with an empty list.
    ByType(Groups),
    /// Fish and lakes have no grouping.
    Flat(Vec<Record>),
}

/// What a view renders: category sections or a plain list of cards.
#[derive(Debug, Clone, PartialEq)]
pub enum Listing {
    Categorized(Groups),
    Flat(Vec<Record>),
}

impl Listing {
    pub fn is_empty(&self) -> bool {
        match self {
            Listing::Categorized(groups) => groups.values().all(Vec::is_empty),
            Listing::Flat(records) => records.is_empty(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Listing::Categorized(groups) => groups.values().map(Vec::len).sum(),
            Listing::Flat(records) => records.len(),
        }
    }
}

/// Holds every loaded fixture for the session. Read-only after `load`.
#[derive(Debug, Clone, Default)]
pub struct DataManager {
    rods_by_type: Groups,
    rod_categories: Groups,
    reels_by_type: Groups,
    reel_categories: Groups,
    fish: Vec<Record>,
    lakes: Vec<Record>,
}

impl DataManager {
    /// Load all fixtures. A missing or broken file leaves only that
    /// collection empty.
    pub fn load(paths: &DataPaths) -> Self {
        let rods = load_records(&paths.processed_dir.join(PROCESSED_RODS_FILE), EquipmentKind::Rod, None, false);
        let reels = load_records(&paths.processed_dir.join(PROCESSED_REELS_FILE), EquipmentKind::Reel, None, false);
        let fish = load_records(&paths.raw_dir.join(FISH_FILE), EquipmentKind::Fish, Some(FISH_ARRAY_KEY), true);
        let lakes = load_records(&paths.raw_dir.join(LAKES_FILE), EquipmentKind::Lake, Some(LAKES_ARRAY_KEY), true);
        tracing::info!(
            rods = rods.len(),
            reels = reels.len(),
            fish = fish.len(),
            lakes = lakes.len(),
            "fixtures loaded"
        );
        Self::from_records(rods, reels, fish, lakes)
    }

    /// Build a manager from already-tagged records.
    pub fn from_records(rods: Vec<Record>, reels: Vec<Record>, fish: Vec<Record>, lakes: Vec<Record>) -> Self {
        let (rods_by_type, rod_categories) = index(&rods);
        let (reels_by_type, reel_categories) = index(&reels);
        DataManager {
            rods_by_type,
            rod_categories,
            reels_by_type,
            reel_categories,
            fish,
            lakes,
        }
    }

    pub fn rods_by_category(&self) -> &Groups {
        &self.rod_categories
    }

    pub fn reels_by_category(&self) -> &Groups {
        &self.reel_categories
    }

    pub fn fish(&self) -> &[Record] {
        &self.fish
    }

    pub fn lakes(&self) -> &[Record] {
        &self.lakes
    }

    /// Full, unfiltered listing for one kind.
    pub fn listing(&self, kind: EquipmentKind) -> Listing {
        match kind {
            EquipmentKind::Rod => Listing::Categorized(self.rod_categories.clone()),
            EquipmentKind::Reel => Listing::Categorized(self.reel_categories.clone()),
            EquipmentKind::Fish => Listing::Flat(self.fish.clone()),
            EquipmentKind::Lake => Listing::Flat(self.lakes.clone()),
            EquipmentKind::Unknown => Listing::Flat(Vec::new()),
        }
    }

    /// Case-insensitive substring search over one kind of record.
    pub fn search(&self, kind: EquipmentKind, term: &str, scope: SearchScope) -> SearchResults {
        let needle = term.to_lowercase();
        let matches = |r: &Record| record_matches(r, &needle, scope);
        let filter_groups = |groups: &Groups| -> Groups {
            groups
                .iter()
                .map(|(t, records)| (t.clone(), records.iter().filter(|r| matches(r)).cloned().collect()))
                .collect()
        };
        match kind {
            EquipmentKind::Rod => SearchResults::ByType(filter_groups(&self.rods_by_type)),
            EquipmentKind::Reel => SearchResults::ByType(filter_groups(&self.reels_by_type)),
            EquipmentKind::Fish => SearchResults::Flat(self.fish.iter().filter(|r| matches(r)).cloned().collect()),
            EquipmentKind::Lake => SearchResults::Flat(self.lakes.iter().filter(|r| matches(r)).cloned().collect()),
            EquipmentKind::Unknown => SearchResults::Flat(Vec::new()),
        }
    }

    /// Regroup search hits by category so they render through the same
    /// path as the full listing. Empty categories are dropped.
    pub fn process_search_results(&self, results: SearchResults) -> Listing {
        match results {
            SearchResults::Flat(records) => Listing::Flat(records),
            SearchResults::ByType(by_type) => {
                let mut grouped = Groups::new();
                for record in by_type.into_values().flatten() {
                    grouped.entry(record.category().to_string()).or_default().push(record);
                }
                Listing::Categorized(grouped)
            }
        }
    }
}

fn record_matches(record: &Record, needle: &str, scope: SearchScope) -> bool {
    match scope {
        SearchScope::Name => record
            .name()
            .map(|n| n.to_lowercase().contains(needle))
            .unwrap_or(false),
        SearchScope::All => record.stringified().to_lowercase().contains(needle),
    }
}

fn index(records: &[Record]) -> (Groups, Groups) {
    let mut by_type = Groups::new();
    let mut by_category = Groups::new();
    for r in records {
        by_type.entry(r.subtype().to_string()).or_default().push(r.clone());
        by_category.entry(r.category().to_string()).or_default().push(r.clone());
    }
    (by_type, by_category)
}

fn load_records(path: &Path, kind: EquipmentKind, array_key: Option<&str>, dedup: bool) -> Vec<Record> {
    if !path.exists() {
        tracing::warn!("fixture {} not found, using empty {} list", path.display(), kind);
        return Vec::new();
    }
    let doc: Value = parse_json(path);
    let mut raw = records_from(&doc, array_key);
    // An empty object is what a failed parse returns, already logged.
    if raw.is_empty() && doc.as_object().is_some_and(|o| !o.is_empty()) {
        tracing::warn!(
            "fixture {} is an object without a `{}` array, no {} records loaded",
            path.display(),
            array_key.unwrap_or("<none>"),
            kind
        );
    }
    if dedup {
        raw = deduplicate(raw);
    }
    raw.into_iter()
        .map(|fields| Record::new(EquipmentKind::detect(kind, &fields), fields))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rod(name: &str, t: &str, category: &str) -> Record {
        let v = json!({"name": name, "type": t, "category": category, "price": "Free"});
        Record::new(EquipmentKind::Rod, v.as_object().cloned().unwrap())
    }

    fn fish(name: &str) -> Record {
        let v = json!({"name": name, "habitat": ["River", "Lake"]});
        Record::new(EquipmentKind::Fish, v.as_object().cloned().unwrap())
    }

    fn manager() -> DataManager {
        DataManager::from_records(
            vec![
                rod("Float Master", "match", "Bobber"),
                rod("Spin Pro", "spinning", "SpinningReel&Lure"),
                rod("Float Lite", "telescopic", "Bobber"),
            ],
            vec![],
            vec![fish("Northern Pike"), fish("Perch")],
            vec![],
        )
    }

    #[test]
    fn categories_keep_first_seen_order() {
        let dm = manager();
        let keys: Vec<&String> = dm.rods_by_category().keys().collect();
        assert_eq!(keys, ["Bobber", "SpinningReel&Lure"]);
        assert_eq!(dm.rods_by_category()["Bobber"].len(), 2);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let dm = manager();
        let SearchResults::ByType(by_type) = dm.search(EquipmentKind::Rod, "FLOAT", SearchScope::All) else {
            panic!("rods search must be grouped by type");
        };
        assert_eq!(by_type["match"].len(), 1);
        assert_eq!(by_type["telescopic"].len(), 1);
        assert!(by_type["spinning"].is_empty());
    }

    #[test]
    fn search_whole_record_matches_keys_and_values() {
        let dm = manager();
        // "spinningreel" only appears in the category value.
        let hits = dm.process_search_results(dm.search(EquipmentKind::Rod, "spinningreel", SearchScope::All));
        assert_eq!(hits.len(), 1);
        let by_name = dm.process_search_results(dm.search(EquipmentKind::Rod, "spinningreel", SearchScope::Name));
        assert!(by_name.is_empty());
    }

    #[test]
    fn processed_results_regroup_by_category_and_drop_empty() {
        let dm = manager();
        let listing = dm.process_search_results(dm.search(EquipmentKind::Rod, "float", SearchScope::Name));
        match listing {
            Listing::Categorized(groups) => {
                assert_eq!(groups.len(), 1);
                assert_eq!(groups["Bobber"].len(), 2);
            }
            Listing::Flat(_) => panic!("rods must be categorized"),
        }
    }

    #[test]
    fn fish_search_is_flat_and_matches_list_fields() {
        let dm = manager();
        let listing = dm.process_search_results(dm.search(EquipmentKind::Fish, "river", SearchScope::All));
        assert_eq!(listing, Listing::Flat(vec![fish("Northern Pike"), fish("Perch")]));
        let pike = dm.process_search_results(dm.search(EquipmentKind::Fish, "pike", SearchScope::Name));
        assert_eq!(pike.len(), 1);
    }

    #[test]
    fn whole_record_search_matches_quotes_as_typed() {
        let v = json!({"name": "Bass Hammer 7\" Pro", "type": "casting", "category": "Lure"});
        let dm = DataManager::from_records(
            vec![Record::new(EquipmentKind::Rod, v.as_object().cloned().unwrap())],
            vec![],
            vec![],
            vec![],
        );
        let all = dm.process_search_results(dm.search(EquipmentKind::Rod, "7\" pro", SearchScope::All));
        let name = dm.process_search_results(dm.search(EquipmentKind::Rod, "7\" pro", SearchScope::Name));
        assert_eq!(all.len(), 1);
        assert_eq!(name.len(), 1);
    }

    #[test]
    fn object_shaped_fish_file_reads_named_array() {
        use assert_fs::prelude::*;
        let temp = assert_fs::TempDir::new().unwrap();
        temp.child(FISH_FILE)
            .write_str(r#"{"fish": [{"name": "Pike"}, {"name": "Pike"}, {"name": "Perch"}]}"#)
            .unwrap();
        temp.child(LAKES_FILE).write_str(r#"{"waters": [{"name": "Emerald"}]}"#).unwrap();
        let dm = DataManager::load(&DataPaths {
            raw_dir: temp.path().to_path_buf(),
            processed_dir: temp.path().to_path_buf(),
        });
        assert_eq!(dm.fish().len(), 2);
        // wrong array key: nothing loaded, only a warning
        assert!(dm.lakes().is_empty());
    }

    #[test]
    fn listing_for_empty_kind_is_empty() {
        let dm = manager();
        assert!(dm.listing(EquipmentKind::Reel).is_empty());
        assert!(dm.listing(EquipmentKind::Lake).is_empty());
        assert_eq!(dm.listing(EquipmentKind::Rod).len(), 3);
    }
}
