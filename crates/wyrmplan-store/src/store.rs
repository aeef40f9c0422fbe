//! Database store wrapper.

use crate::config::FilterBuild;
use crate::error::Result;
use crate::models::*;
use native_db::*;
use std::path::Path;
use std::sync::LazyLock;
use wyrmplan_core::BuildData;

// Static models for the database
static MODELS: LazyLock<Models> = LazyLock::new(|| {
    let mut models = Models::new();
    models.define::<StoredReferenceState>().unwrap();
    models.define::<StoredBuildList>().unwrap();
    models.define::<StoredConfig>().unwrap();
    models
});

/// Database store for persisted snapshots.
pub struct Store {
    db: Database<'static>,
}

impl Store {
    /// Open or create a database at the given path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let db = Builder::new().create(&MODELS, path.as_ref())?;
        Ok(Self { db })
    }

    /// Create an in-memory database.
    pub fn in_memory() -> Result<Self> {
        let db = Builder::new().create_in_memory(&MODELS)?;
        Ok(Self { db })
    }

    /// Save the reference-data snapshot.
    pub fn save_reference(&self, snapshot: &ReferenceSnapshot) -> Result<()> {
        let stored = StoredReferenceState::from_snapshot(snapshot);
        let rw = self.db.rw_transaction()?;
        rw.upsert(stored)?;
        rw.commit()?;
        Ok(())
    }

    /// Load the reference-data snapshot, if one was persisted.
    pub fn load_reference(&self) -> Result<Option<ReferenceSnapshot>> {
        let r = self.db.r_transaction()?;
        let stored: Option<StoredReferenceState> =
            r.get().primary(StoredReferenceState::KEY.to_string())?;
        Ok(stored.map(|s| s.to_snapshot()))
    }

    /// Save the build list.
    pub fn save_builds(&self, builds: &[BuildData]) -> Result<()> {
        let stored = StoredBuildList::from_builds(builds);
        let rw = self.db.rw_transaction()?;
        rw.upsert(stored)?;
        rw.commit()?;
        Ok(())
    }

    /// Load the build list; a missing row is an empty list.
    pub fn load_builds(&self) -> Result<Vec<BuildData>> {
        let r = self.db.r_transaction()?;
        let stored: Option<StoredBuildList> =
            r.get().primary(StoredBuildList::KEY.to_string())?;
        Ok(stored.map(|s| s.to_builds()).unwrap_or_default())
    }

    /// Save the build filter.
    pub fn save_filter(&self, filter: &FilterBuild) -> Result<()> {
        let stored = StoredConfig::from_filter(filter);
        let rw = self.db.rw_transaction()?;
        rw.upsert(stored)?;
        rw.commit()?;
        Ok(())
    }

    /// Load the build filter; a missing row is the default filter.
    pub fn load_filter(&self) -> Result<FilterBuild> {
        let r = self.db.r_transaction()?;
        let stored: Option<StoredConfig> = r.get().primary(StoredConfig::KEY.to_string())?;
        Ok(stored.map(|s| s.to_filter()).unwrap_or_default())
    }

    /// Clear all persisted snapshots.
    pub fn clear(&self) -> Result<()> {
        let rw = self.db.rw_transaction()?;
        if let Some(reference) =
            rw.get().primary::<StoredReferenceState>(StoredReferenceState::KEY.to_string())?
        {
            rw.remove(reference)?;
        }
        if let Some(builds) = rw.get().primary::<StoredBuildList>(StoredBuildList::KEY.to_string())? {
            rw.remove(builds)?;
        }
        if let Some(config) = rw.get().primary::<StoredConfig>(StoredConfig::KEY.to_string())? {
            rw.remove(config)?;
        }
        rw.commit()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_rows_restore_defaults() {
        let store = Store::in_memory().unwrap();
        assert!(store.load_reference().unwrap().is_none());
        assert!(store.load_builds().unwrap().is_empty());
        let filter = store.load_filter().unwrap();
        assert!(filter.weapons.is_empty());
        assert!(!filter.edit_mode);
    }

    #[test]
    fn test_snapshot_roundtrip() {
        let store = Store::in_memory().unwrap();

        let builds = vec![BuildData {
            key: "b1".into(),
            name: "Raid set".into(),
            category: "endgame".into(),
            ..Default::default()
        }];
        store.save_builds(&builds).unwrap();
        assert_eq!(store.load_builds().unwrap(), builds);

        let snapshot = ReferenceSnapshot::default();
        store.save_reference(&snapshot).unwrap();
        assert!(store.load_reference().unwrap().is_some());

        store.clear().unwrap();
        assert!(store.load_reference().unwrap().is_none());
        assert!(store.load_builds().unwrap().is_empty());
    }

    #[test]
    fn test_save_overwrites_whole_value() {
        let store = Store::in_memory().unwrap();
        let first = vec![BuildData {
            key: "b1".into(),
            name: "First".into(),
            category: "a".into(),
            ..Default::default()
        }];
        let second = vec![BuildData {
            key: "b2".into(),
            name: "Second".into(),
            category: "b".into(),
            ..Default::default()
        }];
        store.save_builds(&first).unwrap();
        store.save_builds(&second).unwrap();
        assert_eq!(store.load_builds().unwrap(), second);
    }
}
