//! Per-monster weapon selection
//!
//! One `SelectedWeapon` entry per loaded monster, seeded from the monster's
//! reserved default variant. Selecting a weapon toggles: picking the
//! already-checked weapon reverts to the default variant, picking another
//! switches to it, and any field the new variant leaves undefined falls back
//! to the default variant's value field by field.

use indexmap::IndexMap;
use tracing::{debug, warn};
use wyrmplan_core::{
    Monster, MonsterId, NormalizedMonster, SelectedWeapon, VariantKey, WeaponId,
};

/// Store of active loadout views, keyed by monster ID
#[derive(Debug, Clone, Default)]
pub struct WeaponSelection {
    selected: IndexMap<MonsterId, SelectedWeapon>,
}

impl WeaponSelection {
    /// Create an empty selection store
    pub fn new() -> Self {
        Self::default()
    }

    /// All selections, keyed by monster ID in monster order
    pub fn selected(&self) -> &IndexMap<MonsterId, SelectedWeapon> {
        &self.selected
    }

    /// The selection for one monster
    pub fn get(&self, id: &MonsterId) -> Option<&SelectedWeapon> {
        self.selected.get(id)
    }

    /// Number of selections
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Check if no selections exist
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Restore persisted selections
    pub fn restore(&mut self, selected: IndexMap<MonsterId, SelectedWeapon>) {
        self.selected = selected;
    }

    /// Build one entry per monster, seeded from its default variant
    ///
    /// No-op when the entry count already matches the monster count, so a
    /// restored selection survives re-initialization.
    pub fn init_selected_weapons(&mut self, monsters: &[NormalizedMonster]) {
        if self.selected.len() == monsters.len() {
            debug!("weapon selections already initialized, skipping");
            return;
        }
        self.selected = monsters
            .iter()
            .map(|m| {
                (
                    m.id().clone(),
                    SelectedWeapon::from_default_variant(&m.monster),
                )
            })
            .collect();
        debug!(count = self.selected.len(), "weapon selections initialized");
    }

    /// Toggle the checked weapon of one monster
    pub fn change_weapon(&mut self, monster: &Monster, weapon: &WeaponId) {
        let Some(entry) = self.selected.get_mut(&monster.id) else {
            warn!(monster = %monster.id, "no selection entry, ignoring weapon change");
            return;
        };
        let key = VariantKey::Weapon(weapon.clone());
        let default = monster.default_variant();

        if entry.checked == key {
            // picking the checked weapon again reverts to the default variant
            entry.checked = VariantKey::Default;
            entry.effect = default.and_then(|v| v.effect);
            entry.skills = default.and_then(|v| v.skills.clone()).unwrap_or_default();
            return;
        }

        let Some(variant) = monster.variant(&key) else {
            warn!(monster = %monster.id, weapon = %weapon, "unknown weapon variant, ignoring");
            return;
        };
        entry.checked = key;
        // fall back to the default variant field by field, not all-or-nothing
        entry.effect = variant.effect.or_else(|| default.and_then(|v| v.effect));
        entry.skills = variant
            .skills
            .clone()
            .or_else(|| default.and_then(|v| v.skills.clone()))
            .unwrap_or_default();
    }
}
