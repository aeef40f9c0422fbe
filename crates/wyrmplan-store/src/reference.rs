//! Reference data store
//!
//! Owns the bundled tables and the loaded monster records, and answers the
//! lookup queries the rest of the planner asks. Monster records load once
//! per data version: a restored snapshot is reused only when its version tag
//! matches `DATA_VERSION` *and* its record count matches the number of
//! discoverable sources, so shipping new data or a new monster file busts
//! the cache without any content hashing.

use crate::loading::LoadingFlag;
use crate::models::ReferenceSnapshot;
use crate::notify::Notifier;
use chrono::NaiveDate;
use std::sync::{Arc, LazyLock};
use tracing::{debug, error};
use wyrmplan_core::{MonsterId, NormalizedMonster, SkillId};
use wyrmplan_data::{
    dragon_order, load_monsters, normalize_monsters, MonsterRegistry, ReferenceTables, Result as DataResult,
};

/// Data version the bundled monster files were last changed at
///
/// Bumped by hand whenever shipped data changes; compared against the
/// persisted `init_date` to decide whether a restored monster list is stale.
pub static DATA_VERSION: LazyLock<NaiveDate> =
    LazyLock::new(|| NaiveDate::from_ymd_opt(2025, 11, 18).unwrap());

/// Store owning reference tables and loaded monster records
pub struct ReferenceStore {
    tables: ReferenceTables,
    registry: MonsterRegistry,
    order: Vec<MonsterId>,
    monsters: Vec<NormalizedMonster>,
    init_date: Option<NaiveDate>,
    loading: LoadingFlag,
    notifier: Arc<dyn Notifier>,
}

impl ReferenceStore {
    /// Create over explicit tables, registry, and load order
    pub fn new(
        tables: ReferenceTables,
        registry: MonsterRegistry,
        order: Vec<MonsterId>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            tables,
            registry,
            order,
            monsters: Vec::new(),
            init_date: None,
            loading: LoadingFlag::new(),
            notifier,
        }
    }

    /// Create over the bundled data
    pub fn bundled(notifier: Arc<dyn Notifier>) -> DataResult<Self> {
        Ok(Self::new(
            ReferenceTables::bundled()?,
            MonsterRegistry::bundled(),
            dragon_order()?,
            notifier,
        ))
    }

    /// The reference tables
    pub fn tables(&self) -> &ReferenceTables {
        &self.tables
    }

    /// The loaded monster records, in canonical order
    pub fn monsters(&self) -> &[NormalizedMonster] {
        &self.monsters
    }

    /// Look up a loaded monster record by ID
    pub fn monster(&self, id: &MonsterId) -> Option<&NormalizedMonster> {
        self.monsters.iter().find(|m| m.id() == id)
    }

    /// Data version of the current monster list, if initialized
    pub fn init_date(&self) -> Option<NaiveDate> {
        self.init_date
    }

    /// Handle observing whether a load batch is running
    pub fn loading(&self) -> LoadingFlag {
        self.loading.clone()
    }

    /// Restore persisted state into the store
    pub fn restore(&mut self, init_date: Option<NaiveDate>, monsters: Vec<NormalizedMonster>) {
        self.init_date = init_date;
        self.monsters = monsters;
    }

    /// The persisted subset of this store (selection is merged in by the planner)
    pub fn snapshot(&self) -> ReferenceSnapshot {
        ReferenceSnapshot {
            init_date: self.init_date,
            monsters: self.monsters.clone(),
            selected: Default::default(),
        }
    }

    /// Initialize the monster list, reloading only when the cache is stale
    ///
    /// Idempotent: when the persisted version tag matches `DATA_VERSION` and
    /// the record count matches the number of discoverable sources, no load
    /// runs at all. Errors never propagate: they are reported through the
    /// notifier, and the loading flag is cleared on every exit path.
    ///
    /// `&mut self` doubles as the single-flight guard the loading flag lacks:
    /// a second initialization cannot start while one is running.
    pub fn init_monsters_data(&mut self) {
        debug!("initializing monster data");
        let _guard = self.loading.start();
        if let Err(err) = self.reload_if_stale() {
            error!(error = %err, "monster data initialization failed");
            self.notifier.error("failed to initialize monster data");
        }
    }

    fn reload_if_stale(&mut self) -> crate::error::Result<()> {
        let data_version = *DATA_VERSION;
        let version_same = self.init_date == Some(data_version);
        let source_count = self.registry.len();
        debug!(
            init_date = ?self.init_date,
            data_version = %data_version,
            restored = self.monsters.len(),
            sources = source_count,
            "checking monster data cache"
        );
        if version_same && self.monsters.len() == source_count {
            debug!("monster data up to date, skipping load");
            return Ok(());
        }
        if source_count == 0 {
            // nothing discoverable: leave whatever we have
            return Ok(());
        }

        let loaded = load_monsters(&self.order, &self.registry);
        self.monsters = loaded.into_iter().map(NormalizedMonster::new).collect();
        normalize_monsters(&mut self.monsters, &self.tables.weapons);
        self.init_date = Some(data_version);
        debug!(count = self.monsters.len(), "monster data initialized");
        Ok(())
    }

    /// Display name of a monster; empty when the ID is not loaded
    pub fn get_monster_name(&self, id: &MonsterId) -> &str {
        self.monster(id).map(|m| m.name()).unwrap_or("")
    }

    /// Display name of a skill; empty when the ID is unknown
    pub fn get_skill_name(&self, id: &SkillId) -> &str {
        self.tables
            .skills
            .get(id)
            .map(|s| s.name.as_str())
            .unwrap_or("")
    }

    /// Per-level descriptions of a skill; empty when the ID is unknown
    pub fn get_skill_desc(&self, id: &SkillId) -> &[String] {
        self.tables
            .skills
            .get(id)
            .map(|s| s.desc.as_slice())
            .unwrap_or(&[])
    }

    /// Maximum level of a skill, derived from its descriptions; 0 when unknown
    pub fn get_skill_max_level(&self, id: &SkillId) -> u32 {
        self.tables.skills.get(id).map(|s| s.max_level()).unwrap_or(0)
    }

    /// Smelt recipe category a skill belongs to; empty when unclassified
    ///
    /// A skill appearing in several recipes belongs to the first one in
    /// table order.
    pub fn get_smelt_category(&self, id: &SkillId) -> &str {
        self.tables
            .smelt
            .iter()
            .find(|(_, smelt)| smelt.has_skill(id))
            .map(|(recipe, _)| recipe.as_str())
            .unwrap_or("")
    }
}

impl std::fmt::Debug for ReferenceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReferenceStore")
            .field("monsters", &self.monsters.len())
            .field("init_date", &self.init_date)
            .field("loading", &self.loading.is_loading())
            .finish()
    }
}
