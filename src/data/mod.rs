//! Fixture loading, normalization and querying.

pub mod category;
pub mod manager;
pub mod parser;
pub mod processor;
pub mod record;

pub use category::{Capabilities, DEFAULT_CATEGORY};
pub use manager::{DataManager, Groups, Listing, SearchResults, SearchScope};
pub use processor::{DataProcessor, ProcessSummary};
pub use record::{format_field_display_name, format_field_value, EquipmentKind, Record};

use std::path::PathBuf;

/// Where fixtures are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    /// Raw per-type fixtures plus `fish.json` and `lakes.json`.
    pub raw_dir: PathBuf,
    /// Output of the `process` step, read by the browser.
    pub processed_dir: PathBuf,
}

impl Default for DataPaths {
    fn default() -> Self {
        DataPaths {
            raw_dir: PathBuf::from("JsonFolder"),
            processed_dir: PathBuf::from("ProcessedData"),
        }
    }
}
