//! Post-load normalization of monster records
//!
//! Normalization attaches derived views without touching the source record.
//! Today that is one view: `sort_weapons`, the weapon-table rows whose ID
//! appears in the monster's variant map, in weapon-table order (not variant
//! map order).

use wyrmplan_core::{Monster, NormalizedMonster, Weapon, WeaponTable};

/// Compute the sorted weapon view for one monster
pub fn sort_weapons_for(monster: &Monster, weapons: &WeaponTable) -> Vec<Weapon> {
    weapons
        .iter()
        .filter(|weapon| monster.has_weapon(&weapon.id))
        .cloned()
        .collect()
}

/// Recompute derived views on every record
///
/// Idempotent: a second pass over already-normalized records produces the
/// same `sort_weapons` values.
pub fn normalize_monsters(monsters: &mut [NormalizedMonster], weapons: &WeaponTable) {
    for normalized in monsters.iter_mut() {
        normalized.sort_weapons = sort_weapons_for(&normalized.monster, weapons);
    }
}
