//! JSON fixture reading and record deduplication.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use serde_json::{Map, Value};

use crate::errors::DataError;

/// Read and decode the JSON document at `path`, propagating failures.
pub fn try_parse_json(path: &Path) -> Result<Value, DataError> {
    let text = std::fs::read_to_string(path).map_err(|e| DataError::io(path, e))?;
    serde_json::from_str(&text).map_err(|source| DataError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and decode the JSON document at `path`.
///
/// Fails soft: any I/O or decode error is logged and an empty object is
/// returned so a single broken fixture never takes down the whole load.
pub fn parse_json(path: &Path) -> Value {
    match try_parse_json(path) {
        Ok(v) => v,
        Err(e) => {
            tracing::error!("error parsing JSON file: {}", e);
            Value::Object(Map::new())
        }
    }
}

/// Remove records whose fields all match an earlier record, keeping the
/// first occurrence and the input order.
///
/// Key order does not matter at any depth: `{a, b}` and `{b, a}` with the
/// same values are the same record.
pub fn deduplicate(records: Vec<Map<String, Value>>) -> Vec<Map<String, Value>> {
    let mut seen = HashSet::new();
    let mut unique = Vec::with_capacity(records.len());
    for record in records {
        if seen.insert(canonical_key(&record)) {
            unique.push(record);
        }
    }
    unique
}

fn canonical_key(record: &Map<String, Value>) -> String {
    serde_json::to_string(&sorted_object(record)).unwrap_or_default()
}

// Rebuild objects with keys inserted in sorted order, recursing into nested
// objects and arrays.
fn sorted_object(obj: &Map<String, Value>) -> Value {
    let sorted: BTreeMap<&String, &Value> = obj.iter().collect();
    Value::Object(sorted.into_iter().map(|(k, v)| (k.clone(), sorted_value(v))).collect())
}

fn sorted_value(v: &Value) -> Value {
    match v {
        Value::Object(obj) => sorted_object(obj),
        Value::Array(items) => Value::Array(items.iter().map(sorted_value).collect()),
        other => other.clone(),
    }
}

/// Extract the list of record objects from a decoded document.
///
/// Accepts either a bare array or an object holding the array under
/// `array_key`. Non-object array elements are skipped.
pub fn records_from(value: &Value, array_key: Option<&str>) -> Vec<Map<String, Value>> {
    let list = match value {
        Value::Array(items) => Some(items),
        Value::Object(obj) => array_key.and_then(|k| obj.get(k)).and_then(Value::as_array),
        _ => None,
    };
    list.map(|items| {
        items
            .iter()
            .filter_map(|v| v.as_object().cloned())
            .collect()
    })
    .unwrap_or_default()
}
