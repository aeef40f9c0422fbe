//! Wyrmplan Store - Stores and persistence for the build planner
//!
//! Provides the stateful layer over `wyrmplan-core` and `wyrmplan-data`:
//! - `ReferenceStore` - tables, monster records, lookup queries
//! - `WeaponSelection` - per-monster active loadout views
//! - `BuildCollection` - saved builds with JSON export/import
//! - `ConfigStore` - build filter and base path
//! - `Store` - embedded database of whole-value snapshots
//! - `Planner` - the construct-once context wiring it all together

mod builds;
mod config;
mod error;
mod loading;
mod models;
mod notify;
mod planner;
mod reference;
mod selection;
mod store;

pub use builds::{
    BuildCollection, BuildDialog, ConfirmGate, DialogMode, ImportOutcome, UploadDisposition,
    EXPORT_FILE_NAME,
};
pub use config::{ConfigStore, FilterBuild, BASE_PATH_ENV};
pub use error::{Error, Result};
pub use loading::{LoadGuard, LoadingFlag};
pub use models::ReferenceSnapshot;
pub use notify::{LogNotifier, Notifier};
pub use planner::Planner;
pub use reference::{ReferenceStore, DATA_VERSION};
pub use selection::WeaponSelection;
pub use store::Store;
