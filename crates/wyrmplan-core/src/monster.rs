//! Monster records and their equipment views

use crate::{EffectType, MonsterId, SkillId, VariantKey, Weapon};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The fixed five armor slots of a monster's armor set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArmorPart {
    Helm,
    Mail,
    Gloves,
    Belt,
    Greaves,
}

impl ArmorPart {
    /// All armor parts in canonical display order
    pub fn all() -> &'static [ArmorPart] {
        &[
            ArmorPart::Helm,
            ArmorPart::Mail,
            ArmorPart::Gloves,
            ArmorPart::Belt,
            ArmorPart::Greaves,
        ]
    }

    /// Get the wire-format identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            ArmorPart::Helm => "helm",
            ArmorPart::Mail => "mail",
            ArmorPart::Gloves => "gloves",
            ArmorPart::Belt => "belt",
            ArmorPart::Greaves => "greaves",
        }
    }
}

/// A skill contribution carried by a weapon variant or armor piece
///
/// The same skill ID can appear on several equipped pieces; contributions
/// are summed, never overwritten. A missing level counts as 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterSkill {
    /// Referenced skill
    pub id: SkillId,
    /// Contribution amount
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
}

impl MonsterSkill {
    /// Create a new skill contribution
    pub fn new(id: impl Into<SkillId>, level: u32) -> Self {
        Self {
            id: id.into(),
            level: Some(level),
        }
    }

    /// Contribution amount, missing level treated as 0
    pub fn level(&self) -> u32 {
        self.level.unwrap_or(0)
    }
}

/// One weapon variant of a monster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MonsterWeapon {
    /// Elemental/status effect, if the variant carries one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect: Option<EffectType>,
    /// Skills granted by the variant
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<MonsterSkill>>,
}

/// One armor piece of a monster's armor set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonsterArmor {
    /// Number of decoration slots
    pub slots: u32,
    /// Skills granted by the piece
    pub skills: Vec<MonsterSkill>,
}

/// A monster record as loaded from its bundled data file
///
/// Immutable once loaded; identity is `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monster {
    /// Monster identifier
    pub id: MonsterId,
    /// Display name
    pub name: String,
    /// Whether this is a riftborne variant
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub riftborne: Option<bool>,
    /// Weapon variants keyed by variant key; one key is the reserved default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weapon: Option<IndexMap<VariantKey, MonsterWeapon>>,
    /// Armor pieces keyed by armor part
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub armor: Option<IndexMap<ArmorPart, MonsterArmor>>,
}

impl Monster {
    /// Get a weapon variant by key
    pub fn variant(&self, key: &VariantKey) -> Option<&MonsterWeapon> {
        self.weapon.as_ref().and_then(|w| w.get(key))
    }

    /// Get the reserved default weapon variant
    pub fn default_variant(&self) -> Option<&MonsterWeapon> {
        self.variant(&VariantKey::Default)
    }

    /// Check whether the monster record carries the given weapon class
    pub fn has_weapon(&self, id: &crate::WeaponId) -> bool {
        self.weapon
            .as_ref()
            .is_some_and(|w| w.contains_key(&VariantKey::Weapon(id.clone())))
    }
}

/// A monster record plus derived views attached by normalization
///
/// `sort_weapons` is recomputed on every normalization pass and never
/// persisted independently of the source record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedMonster {
    /// The source record, untouched by normalization
    pub monster: Monster,
    /// Weapon-table rows carried by this monster, in weapon-table order
    #[serde(default)]
    pub sort_weapons: Vec<Weapon>,
}

impl NormalizedMonster {
    /// Wrap a freshly loaded record with no derived views yet
    pub fn new(monster: Monster) -> Self {
        Self {
            monster,
            sort_weapons: Vec::new(),
        }
    }

    /// Monster identifier
    pub fn id(&self) -> &MonsterId {
        &self.monster.id
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.monster.name
    }
}

/// The active loadout view for one monster
///
/// Defaults to the monster's reserved default variant; toggling a weapon
/// switches `checked` and re-derives effect/skills (see the selection store).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedWeapon {
    /// Currently active variant key
    pub checked: VariantKey,
    /// Effect of the active variant
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect: Option<EffectType>,
    /// Skills of the active variant
    #[serde(default)]
    pub skills: Vec<MonsterSkill>,
}

impl SelectedWeapon {
    /// Seed a selection from a monster's default variant
    pub fn from_default_variant(monster: &Monster) -> Self {
        let default = monster.default_variant();
        Self {
            checked: VariantKey::Default,
            effect: default.and_then(|v| v.effect),
            skills: default
                .and_then(|v| v.skills.clone())
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monster_json() -> &'static str {
        r#"{
            "id": "emberdrake",
            "name": "Emberdrake",
            "weapon": {
                "default": {"effect": "fire", "skills": [{"id": "attack-boost", "level": 2}]},
                "bow": {"effect": "blast"}
            },
            "armor": {
                "helm": {"slots": 1, "skills": [{"id": "focus", "level": 1}]}
            }
        }"#
    }

    #[test]
    fn test_monster_variant_lookup() {
        let monster: Monster = serde_json::from_str(monster_json()).unwrap();
        assert_eq!(monster.id.as_str(), "emberdrake");

        let default = monster.default_variant().unwrap();
        assert_eq!(default.effect, Some(EffectType::Fire));

        let bow = monster.variant(&VariantKey::from("bow")).unwrap();
        assert_eq!(bow.effect, Some(EffectType::Blast));
        assert!(bow.skills.is_none());

        assert!(monster.has_weapon(&crate::WeaponId::new("bow")));
        assert!(!monster.has_weapon(&crate::WeaponId::new("lance")));
    }

    #[test]
    fn test_selected_weapon_seeds_from_default() {
        let monster: Monster = serde_json::from_str(monster_json()).unwrap();
        let selected = SelectedWeapon::from_default_variant(&monster);
        assert!(selected.checked.is_default());
        assert_eq!(selected.effect, Some(EffectType::Fire));
        assert_eq!(selected.skills, vec![MonsterSkill::new("attack-boost", 2)]);
    }

    #[test]
    fn test_selected_weapon_without_default_variant() {
        let monster: Monster =
            serde_json::from_str(r#"{"id": "palewing", "name": "Palewing"}"#).unwrap();
        let selected = SelectedWeapon::from_default_variant(&monster);
        assert!(selected.checked.is_default());
        assert!(selected.effect.is_none());
        assert!(selected.skills.is_empty());
    }

    #[test]
    fn test_armor_part_map_keys() {
        let monster: Monster = serde_json::from_str(monster_json()).unwrap();
        let armor = monster.armor.as_ref().unwrap();
        assert_eq!(armor.get(&ArmorPart::Helm).unwrap().slots, 1);
        assert!(armor.get(&ArmorPart::Greaves).is_none());
    }
}
