//! Database models for persisted store snapshots.
//!
//! Each store persists a named subset of its fields as one single-row
//! snapshot, keyed by store name. Payload blobs are JSON bytes rather than a
//! binary codec: the snapshot is self-describing, which lets a newer schema
//! restore an older snapshot field-by-field (unknown fields ignored, missing
//! fields defaulted) instead of rejecting it wholesale.

use crate::config::FilterBuild;
use chrono::NaiveDate;
use indexmap::IndexMap;
use native_db::*;
use native_model::{native_model, Model};
use serde::{Deserialize, Serialize};
use wyrmplan_core::{BuildData, MonsterId, NormalizedMonster, SelectedWeapon};

/// The persisted fields of the reference-data store
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReferenceSnapshot {
    /// Data version the monster list was built against
    pub init_date: Option<NaiveDate>,
    /// Loaded and normalized monster records
    pub monsters: Vec<NormalizedMonster>,
    /// Active loadout view per monster
    pub selected: IndexMap<MonsterId, SelectedWeapon>,
}

/// Stored reference-data snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[native_model(id = 1, version = 1)]
#[native_db]
pub struct StoredReferenceState {
    /// Always "reference" - single row.
    #[primary_key]
    pub id: String,
    /// Data version tag.
    pub init_date: Option<NaiveDate>,
    /// Serialized monster records.
    pub monsters: Vec<u8>,
    /// Serialized weapon selections.
    pub selected: Vec<u8>,
}

impl StoredReferenceState {
    /// Row key of the single snapshot.
    pub const KEY: &'static str = "reference";

    /// Create from a snapshot.
    pub fn from_snapshot(snapshot: &ReferenceSnapshot) -> Self {
        Self {
            id: Self::KEY.to_string(),
            init_date: snapshot.init_date,
            monsters: serde_json::to_vec(&snapshot.monsters).unwrap_or_default(),
            selected: serde_json::to_vec(&snapshot.selected).unwrap_or_default(),
        }
    }

    /// Convert to a snapshot.
    pub fn to_snapshot(&self) -> ReferenceSnapshot {
        ReferenceSnapshot {
            init_date: self.init_date,
            monsters: serde_json::from_slice(&self.monsters).unwrap_or_default(),
            selected: serde_json::from_slice(&self.selected).unwrap_or_default(),
        }
    }
}

/// Stored build collection snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[native_model(id = 2, version = 1)]
#[native_db]
pub struct StoredBuildList {
    /// Always "builds" - single row.
    #[primary_key]
    pub id: String,
    /// Serialized build list.
    pub data: Vec<u8>,
}

impl StoredBuildList {
    /// Row key of the single snapshot.
    pub const KEY: &'static str = "builds";

    /// Create from a build list.
    pub fn from_builds(builds: &[BuildData]) -> Self {
        Self {
            id: Self::KEY.to_string(),
            data: serde_json::to_vec(builds).unwrap_or_default(),
        }
    }

    /// Convert to a build list.
    pub fn to_builds(&self) -> Vec<BuildData> {
        serde_json::from_slice(&self.data).unwrap_or_default()
    }
}

/// Stored config snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[native_model(id = 3, version = 1)]
#[native_db]
pub struct StoredConfig {
    /// Always "config" - single row.
    #[primary_key]
    pub id: String,
    /// Serialized build filter.
    pub filter_build: Vec<u8>,
}

impl StoredConfig {
    /// Row key of the single snapshot.
    pub const KEY: &'static str = "config";

    /// Create from a build filter.
    pub fn from_filter(filter: &FilterBuild) -> Self {
        Self {
            id: Self::KEY.to_string(),
            filter_build: serde_json::to_vec(filter).unwrap_or_default(),
        }
    }

    /// Convert to a build filter.
    pub fn to_filter(&self) -> FilterBuild {
        serde_json::from_slice(&self.filter_build).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wyrmplan_core::Monster;

    #[test]
    fn test_reference_snapshot_roundtrip() {
        let monster: Monster =
            serde_json::from_str(r#"{"id": "emberdrake", "name": "Emberdrake"}"#).unwrap();
        let mut snapshot = ReferenceSnapshot {
            init_date: NaiveDate::from_ymd_opt(2025, 11, 18),
            monsters: vec![NormalizedMonster::new(monster.clone())],
            selected: IndexMap::new(),
        };
        snapshot.selected.insert(
            MonsterId::new("emberdrake"),
            SelectedWeapon::from_default_variant(&monster),
        );

        let stored = StoredReferenceState::from_snapshot(&snapshot);
        let back = stored.to_snapshot();
        assert_eq!(back.init_date, snapshot.init_date);
        assert_eq!(back.monsters, snapshot.monsters);
        assert_eq!(back.selected, snapshot.selected);
    }

    #[test]
    fn test_corrupt_blob_restores_defaults() {
        let stored = StoredReferenceState {
            id: StoredReferenceState::KEY.to_string(),
            init_date: None,
            monsters: b"not json".to_vec(),
            selected: vec![],
        };
        let snapshot = stored.to_snapshot();
        assert!(snapshot.monsters.is_empty());
        assert!(snapshot.selected.is_empty());
    }

    #[test]
    fn test_build_list_roundtrip() {
        let builds = vec![BuildData {
            key: "b1".into(),
            name: "Raid set".into(),
            category: "endgame".into(),
            ..Default::default()
        }];
        let stored = StoredBuildList::from_builds(&builds);
        assert_eq!(stored.to_builds(), builds);
    }
}
