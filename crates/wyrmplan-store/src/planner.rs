//! The planner context
//!
//! One `Planner` is constructed at process start and handed to the UI shell;
//! there is no ambient global state, so tests build isolated instances over
//! an in-memory database. The planner wires the stores to the database:
//! restore on open, explicit snapshot saves after mutations.

use crate::builds::{BuildCollection, ConfirmGate, ImportOutcome, UploadDisposition};
use crate::config::ConfigStore;
use crate::error::Result;
use crate::notify::{LogNotifier, Notifier};
use crate::reference::ReferenceStore;
use crate::selection::WeaponSelection;
use crate::store::Store;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, warn};
use wyrmplan_core::{MonsterId, WeaponId};

/// Owning context over the stores and their persistence
pub struct Planner {
    store: Store,
    notifier: Arc<dyn Notifier>,
    /// Reference tables and loaded monsters
    pub reference: ReferenceStore,
    /// Per-monster weapon selection
    pub selection: WeaponSelection,
    /// Saved builds and dialog state
    pub builds: BuildCollection,
    /// App configuration
    pub config: ConfigStore,
}

impl Planner {
    /// Open a planner over a database file, restoring persisted snapshots
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::with_store(Store::open(path)?, Arc::new(LogNotifier))
    }

    /// Open a planner over an in-memory database
    pub fn in_memory() -> Result<Self> {
        Self::with_store(Store::in_memory()?, Arc::new(LogNotifier))
    }

    /// Open a planner over an explicit database and notifier
    pub fn with_store(store: Store, notifier: Arc<dyn Notifier>) -> Result<Self> {
        let mut reference = ReferenceStore::bundled(Arc::clone(&notifier))?;
        let mut selection = WeaponSelection::new();
        let mut builds = BuildCollection::new();
        let mut config = ConfigStore::new();

        if let Some(snapshot) = store.load_reference()? {
            debug!(
                monsters = snapshot.monsters.len(),
                selections = snapshot.selected.len(),
                "restored reference snapshot"
            );
            reference.restore(snapshot.init_date, snapshot.monsters);
            selection.restore(snapshot.selected);
        }
        builds.restore(store.load_builds()?);
        config.filter_build = store.load_filter()?;

        Ok(Self {
            store,
            notifier,
            reference,
            selection,
            builds,
            config,
        })
    }

    /// Initialize reference data and selections, then persist them
    ///
    /// Safe to call on every app start: when the restored snapshot is still
    /// valid, neither store reloads anything.
    pub fn init(&mut self) {
        self.reference.init_monsters_data();
        self.selection.init_selected_weapons(self.reference.monsters());
        if let Err(err) = self.save_reference() {
            warn!(error = %err, "failed to persist reference snapshot");
        }
    }

    /// Toggle the checked weapon of a monster and persist the selection
    pub fn change_weapon_handler(&mut self, monster_id: &MonsterId, weapon_id: &WeaponId) {
        let Some(monster) = self.reference.monster(monster_id) else {
            warn!(monster = %monster_id, "unknown monster, ignoring weapon change");
            return;
        };
        self.selection.change_weapon(&monster.monster, weapon_id);
        if let Err(err) = self.save_reference() {
            warn!(error = %err, "failed to persist weapon selection");
        }
    }

    /// Write the build list as interchange JSON
    ///
    /// The UI shell offers the bytes as a file save named
    /// [`crate::EXPORT_FILE_NAME`].
    pub fn download_build_data_list<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.builds.write_export(writer)
    }

    /// Import builds from interchange text read off a user-selected file
    ///
    /// Failures are reported to the user and leave the list untouched. The
    /// return value always tells the upload widget to keep the raw file
    /// local.
    pub fn import_build_data_list(
        &mut self,
        text: &str,
        gate: &dyn ConfirmGate,
    ) -> UploadDisposition {
        match self.builds.import_builds(text, gate) {
            Ok(ImportOutcome::Applied(count)) => {
                debug!(count, "builds imported");
                if let Err(err) = self.save_builds() {
                    warn!(error = %err, "failed to persist imported builds");
                }
            }
            Ok(ImportOutcome::Cancelled) => {}
            Err(err) => {
                warn!(error = %err, "build import rejected");
                self.notifier.error("failed to import build data");
            }
        }
        UploadDisposition::Suppress
    }

    /// Persist the reference snapshot (monsters + selections)
    pub fn save_reference(&self) -> Result<()> {
        let mut snapshot = self.reference.snapshot();
        snapshot.selected = self.selection.selected().clone();
        self.store.save_reference(&snapshot)
    }

    /// Persist the build list
    pub fn save_builds(&self) -> Result<()> {
        self.store.save_builds(self.builds.build_data_list())
    }

    /// Persist the configuration
    pub fn save_config(&self) -> Result<()> {
        self.store.save_filter(&self.config.filter_build)
    }

    /// Persist every store's snapshot
    pub fn save_all(&self) -> Result<()> {
        self.save_reference()?;
        self.save_builds()?;
        self.save_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wyrmplan_core::{BuildData, VariantKey};

    struct Always(bool);

    impl ConfirmGate for Always {
        fn confirm_import(&self, _builds: &[BuildData]) -> bool {
            self.0
        }
    }

    #[test]
    fn test_init_populates_monsters_and_selections() {
        let mut planner = Planner::in_memory().unwrap();
        planner.init();
        assert_eq!(planner.reference.monsters().len(), 10);
        assert_eq!(planner.selection.len(), planner.reference.monsters().len());
    }

    #[test]
    fn test_change_weapon_handler_toggles() {
        let mut planner = Planner::in_memory().unwrap();
        planner.init();

        let id = MonsterId::new("emberdrake");
        let bow = WeaponId::new("bow");
        planner.change_weapon_handler(&id, &bow);
        assert_eq!(
            planner.selection.get(&id).unwrap().checked,
            VariantKey::from("bow")
        );
        planner.change_weapon_handler(&id, &bow);
        assert!(planner.selection.get(&id).unwrap().checked.is_default());

        // unknown monster is a no-op
        planner.change_weapon_handler(&MonsterId::new("missing"), &bow);
    }

    #[test]
    fn test_import_reports_suppress_on_every_path() {
        let mut planner = Planner::in_memory().unwrap();
        planner.init();

        let text = serde_json::to_string(&[BuildData {
            key: "b1".into(),
            name: "Imported".into(),
            category: "test".into(),
            ..Default::default()
        }])
        .unwrap();

        assert_eq!(
            planner.import_build_data_list(&text, &Always(true)),
            UploadDisposition::Suppress
        );
        assert_eq!(planner.builds.build_data_list().len(), 1);

        assert_eq!(
            planner.import_build_data_list("garbage", &Always(true)),
            UploadDisposition::Suppress
        );
        assert_eq!(planner.builds.build_data_list().len(), 1);
    }

    #[test]
    fn test_state_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("planner.db");

        let selected_checked;
        {
            let mut planner = Planner::open(&db_path).unwrap();
            planner.init();
            planner.change_weapon_handler(&MonsterId::new("riftfang"), &WeaponId::new("sword"));
            planner.builds.add_build(BuildData {
                key: "b1".into(),
                name: "Raid set".into(),
                category: "endgame".into(),
                ..Default::default()
            });
            planner.save_all().unwrap();
            selected_checked = planner
                .selection
                .get(&MonsterId::new("riftfang"))
                .unwrap()
                .checked
                .clone();
        }

        let mut planner = Planner::open(&db_path).unwrap();
        // restored snapshot is current: init must keep it as-is
        planner.init();
        assert_eq!(planner.reference.monsters().len(), 10);
        assert_eq!(
            planner
                .selection
                .get(&MonsterId::new("riftfang"))
                .unwrap()
                .checked,
            selected_checked
        );
        assert_eq!(planner.builds.build_data_list().len(), 1);
        assert_eq!(planner.builds.build_data_list()[0].name, "Raid set");
    }

    #[test]
    fn test_export_writes_interchange_json() {
        let mut planner = Planner::in_memory().unwrap();
        planner.builds.add_build(BuildData {
            key: "b1".into(),
            name: "Raid set".into(),
            category: "endgame".into(),
            ..Default::default()
        });
        let mut out = Vec::new();
        planner.download_build_data_list(&mut out).unwrap();
        let parsed: Vec<BuildData> = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed[0].key, "b1");
    }
}
