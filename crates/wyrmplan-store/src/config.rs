//! App configuration store
//!
//! Holds the build-list filter (persisted) and the public base path used by
//! the router history mode. The base path comes from the environment so dev
//! and release builds can point at different URL roots.

use serde::{Deserialize, Serialize};
use wyrmplan_core::{EffectType, WeaponId};

/// Environment variable overriding the public base path
pub const BASE_PATH_ENV: &str = "WYRMPLAN_BASE_PATH";

/// Default base path when the environment does not override it
const DEFAULT_BASE_PATH: &str = if cfg!(debug_assertions) {
    "/"
} else {
    "/wyrmplan/"
};

/// Filter applied to the build list view
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterBuild {
    /// Show only builds using these weapon classes
    pub weapons: Vec<WeaponId>,
    /// Show only builds carrying these effects
    pub effects: Vec<EffectType>,
    /// Whether the list is in edit mode
    pub edit_mode: bool,
    /// Whether skill levels are shown
    pub level_mode: bool,
}

/// Configuration store
#[derive(Debug, Clone)]
pub struct ConfigStore {
    /// Persisted build-list filter
    pub filter_build: FilterBuild,
    base_path: String,
}

impl ConfigStore {
    /// Create with defaults and the base path from the environment
    pub fn new() -> Self {
        let base_path =
            std::env::var(BASE_PATH_ENV).unwrap_or_else(|_| DEFAULT_BASE_PATH.to_string());
        Self {
            filter_build: FilterBuild::default(),
            base_path,
        }
    }

    /// The public URL root for the router history mode
    pub fn base_path(&self) -> &str {
        &self.base_path
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new()
    }
}
