//! Bundled reference tables
//!
//! The four read-only tables ship inside the crate and are parsed once at
//! store construction. Table iteration order is the order of the bundled
//! files; the skill and smelt tables keep it through `IndexMap`.

use crate::error::{Error, Result};
use wyrmplan_core::{EffectTable, SkillTable, SmeltTable, WeaponTable};

const WEAPONS_JSON: &str = include_str!("../data/weapons.json");
const SKILLS_JSON: &str = include_str!("../data/skills.json");
const SMELT_JSON: &str = include_str!("../data/smelt.json");
const EFFECTS_JSON: &str = include_str!("../data/effects.json");

/// The immutable reference tables of the planner
#[derive(Debug, Clone)]
pub struct ReferenceTables {
    /// Weapon classes, in canonical display order
    pub weapons: WeaponTable,
    /// Skills by ID
    pub skills: SkillTable,
    /// Smelt recipes by ID, in classification order
    pub smelt: SmeltTable,
    /// Effects, in canonical display order
    pub effects: EffectTable,
}

impl ReferenceTables {
    /// Parse the bundled tables
    pub fn bundled() -> Result<Self> {
        Ok(Self {
            weapons: parse_table("weapons", WEAPONS_JSON)?,
            skills: parse_table("skills", SKILLS_JSON)?,
            smelt: parse_table("smelt", SMELT_JSON)?,
            effects: parse_table("effects", EFFECTS_JSON)?,
        })
    }
}

fn parse_table<T: serde::de::DeserializeOwned>(table: &'static str, raw: &str) -> Result<T> {
    serde_json::from_str(raw).map_err(|source| Error::InvalidTable { table, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use wyrmplan_core::{EffectType, SkillId, SmeltId, WeaponId};

    #[test]
    fn test_bundled_tables_parse() {
        let tables = ReferenceTables::bundled().unwrap();
        assert!(!tables.weapons.is_empty());
        assert!(!tables.skills.is_empty());
        assert!(!tables.smelt.is_empty());
        assert_eq!(tables.effects.len(), EffectType::all().len());
    }

    #[test]
    fn test_skill_table_keeps_source_order() {
        let tables = ReferenceTables::bundled().unwrap();
        let first = tables.skills.keys().next().unwrap();
        assert_eq!(first, &SkillId::new("attack-boost"));
    }

    #[test]
    fn test_smelt_table_references_known_skills() {
        let tables = ReferenceTables::bundled().unwrap();
        for (id, smelt) in &tables.smelt {
            for slot in &smelt.skills {
                assert!(
                    tables.skills.contains_key(&slot.id),
                    "recipe {} references unknown skill {}",
                    id,
                    slot.id
                );
            }
        }
        assert!(tables.smelt.contains_key(&SmeltId::new("offense")));
    }

    #[test]
    fn test_weapon_table_order() {
        let tables = ReferenceTables::bundled().unwrap();
        assert_eq!(tables.weapons[0].id, WeaponId::new("sword"));
        let greatsword = tables
            .weapons
            .iter()
            .find(|w| w.id == WeaponId::new("greatsword"))
            .unwrap();
        assert_eq!(greatsword.rarity.as_ref().unwrap().len(), 3);
    }
}
