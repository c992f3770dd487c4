pub mod app;
pub mod data;
pub mod errors;
pub mod input;
#[path = "runner/mod.rs"]
pub mod runner;
#[path = "ui/mod.rs"]
pub mod ui;

pub use crate::app::{App, View};
pub use crate::data::{DataManager, DataPaths, EquipmentKind, Record};
