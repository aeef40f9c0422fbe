//! Reference-table entities: weapons, skills, and smelt recipes
//!
//! These are immutable rows of the bundled data tables. Tables whose
//! iteration order is semantic (skill descriptions per level, smelt
//! first-match classification) use `IndexMap` to preserve source order.

use crate::{MonsterId, SkillId, SmeltId, WeaponId};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A rarity tier of a weapon class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaponRarity {
    /// Tier identifier
    pub id: String,
    /// Display name
    pub name: String,
}

/// A weapon class from the bundled weapon table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    /// Weapon class identifier
    pub id: WeaponId,
    /// Display name
    pub name: String,
    /// Rarity tiers, if the class has style upgrades
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rarity: Option<Vec<WeaponRarity>>,
}

/// The bundled weapon table, in canonical display order
pub type WeaponTable = Vec<Weapon>;

/// A skill from the bundled skill table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    /// Display name
    pub name: String,
    /// Per-level description strings; index 0 describes level 1
    pub desc: Vec<String>,
    /// Optional free-form remarks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remark: Option<Vec<String>>,
}

impl Skill {
    /// Maximum level of this skill, derived from the description list
    ///
    /// Never stored in the table; one description string per level.
    pub fn max_level(&self) -> u32 {
        self.desc.len() as u32
    }
}

/// The bundled skill table, keyed by skill ID
pub type SkillTable = IndexMap<SkillId, Skill>;

/// A skill slot of a smelt recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmeltSkill {
    /// Skill granted by the recipe
    pub id: SkillId,
    /// Whether the skill rolls with a rarity bonus
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rarity: Option<bool>,
}

/// A smelt (crafting) recipe grouping skills into a category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Smelt {
    /// Display name
    pub name: String,
    /// Skills this recipe can produce
    pub skills: Vec<SmeltSkill>,
    /// Monsters whose materials feed the recipe, if restricted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monsters: Option<Vec<MonsterId>>,
}

impl Smelt {
    /// Check whether the recipe can produce the given skill
    pub fn has_skill(&self, id: &SkillId) -> bool {
        self.skills.iter().any(|s| &s.id == id)
    }
}

/// The bundled smelt table, keyed by recipe ID
///
/// Iteration order is the classification tie-break: a skill that appears in
/// several recipes belongs to the first one encountered.
pub type SmeltTable = IndexMap<SmeltId, Smelt>;
