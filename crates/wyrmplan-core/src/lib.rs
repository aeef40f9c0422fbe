//! Wyrmplan Core - Domain model for the build planner
//!
//! This crate provides the pure, storage-agnostic pieces of the planner:
//! - String-typed identifiers for reference-data entities
//! - Reference-table rows (weapons, skills, smelt recipes, effects)
//! - Monster records, their weapon variants, and the selection view
//! - User-authored build records
//! - Skill-level aggregation across equipped items
//! - Snapshot-based change tracking for edit forms
//!
//! Loading, normalization, and persistence live in `wyrmplan-data` and
//! `wyrmplan-store`.

mod aggregate;
mod build;
mod catalog;
mod effect;
mod identity;
mod monster;
mod tracker;

pub use aggregate::{collect_build_skills, merge_skill_levels};
pub use build::{BuildArmorRow, BuildData, BuildWeaponRow, RarityData, RarityType};
pub use catalog::{Skill, SkillTable, Smelt, SmeltSkill, SmeltTable, Weapon, WeaponRarity, WeaponTable};
pub use effect::{Effect, EffectTable, EffectType};
pub use identity::{MonsterId, SkillId, SmeltId, VariantKey, WeaponId, DEFAULT_VARIANT};
pub use monster::{
    ArmorPart, Monster, MonsterArmor, MonsterSkill, MonsterWeapon, NormalizedMonster,
    SelectedWeapon,
};
pub use tracker::FormTracker;
