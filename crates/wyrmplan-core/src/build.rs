//! User-authored build (loadout) records
//!
//! A build is a saved snapshot, deliberately independent of the live
//! reference data: rows capture the monster display name as a string so a
//! saved build survives later renames or removals of the source record.

use crate::{ArmorPart, EffectType, MonsterId, MonsterSkill, SkillId};
use serde::{Deserialize, Serialize};

/// Style-upgrade tier kinds a build weapon can roll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RarityType {
    Atk,
    Ele,
    Crit,
}

/// Style-upgrade selection on a build weapon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RarityData {
    /// Skill the upgrade applies to
    pub skill: SkillId,
    /// Chosen tier per upgrade step
    pub level: Vec<RarityType>,
}

/// The weapon row of a build
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildWeaponRow {
    /// Source monster ID
    pub monster: MonsterId,
    /// Source monster display name, captured at build time
    pub monster_name: String,
    /// Effect carried by the chosen variant
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect: Option<EffectType>,
    /// Skills contributed by the weapon
    pub skills: Vec<MonsterSkill>,
    /// Whether the source monster was riftborne
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub riftborne: Option<bool>,
    /// Style-upgrade selection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rarity: Option<RarityData>,
}

/// An armor row of a build
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildArmorRow {
    /// Source monster ID
    pub monster: MonsterId,
    /// Source monster display name, captured at build time
    pub monster_name: String,
    /// Skills contributed by the piece
    pub skills: Vec<MonsterSkill>,
    /// Skills slotted into the piece's decoration slots
    pub slots: Vec<MonsterSkill>,
}

/// A saved equipment loadout
///
/// One optional row per armor part plus an optional weapon row. Identity is
/// `key`, assigned by the editor when the build is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct BuildData {
    /// Unique key of this build
    pub key: String,
    /// User-chosen display name
    pub name: String,
    /// User-chosen grouping category
    pub category: String,
    /// Weapon row
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weapon: Option<BuildWeaponRow>,
    /// Helm row
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub helm: Option<BuildArmorRow>,
    /// Mail row
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mail: Option<BuildArmorRow>,
    /// Gloves row
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gloves: Option<BuildArmorRow>,
    /// Belt row
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub belt: Option<BuildArmorRow>,
    /// Greaves row
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub greaves: Option<BuildArmorRow>,
}

impl BuildData {
    /// Get the armor row for a part
    pub fn armor_row(&self, part: ArmorPart) -> Option<&BuildArmorRow> {
        match part {
            ArmorPart::Helm => self.helm.as_ref(),
            ArmorPart::Mail => self.mail.as_ref(),
            ArmorPart::Gloves => self.gloves.as_ref(),
            ArmorPart::Belt => self.belt.as_ref(),
            ArmorPart::Greaves => self.greaves.as_ref(),
        }
    }

    /// Set the armor row for a part
    pub fn set_armor_row(&mut self, part: ArmorPart, row: Option<BuildArmorRow>) {
        match part {
            ArmorPart::Helm => self.helm = row,
            ArmorPart::Mail => self.mail = row,
            ArmorPart::Gloves => self.gloves = row,
            ArmorPart::Belt => self.belt = row,
            ArmorPart::Greaves => self.greaves = row,
        }
    }

    /// Iterate the equipped armor rows in canonical part order
    pub fn armor_rows(&self) -> impl Iterator<Item = (ArmorPart, &BuildArmorRow)> {
        ArmorPart::all()
            .iter()
            .filter_map(|&part| self.armor_row(part).map(|row| (part, row)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_armor_rows_in_part_order() {
        let mut build = BuildData {
            key: "b1".into(),
            name: "Raid set".into(),
            category: "endgame".into(),
            ..Default::default()
        };
        build.set_armor_row(
            ArmorPart::Greaves,
            Some(BuildArmorRow {
                monster: MonsterId::new("frostmaw"),
                monster_name: "Frostmaw".into(),
                skills: vec![],
                slots: vec![],
            }),
        );
        build.set_armor_row(
            ArmorPart::Helm,
            Some(BuildArmorRow {
                monster: MonsterId::new("emberdrake"),
                monster_name: "Emberdrake".into(),
                skills: vec![],
                slots: vec![],
            }),
        );

        let parts: Vec<ArmorPart> = build.armor_rows().map(|(part, _)| part).collect();
        assert_eq!(parts, vec![ArmorPart::Helm, ArmorPart::Greaves]);
    }

    #[test]
    fn test_wire_format_skips_empty_rows() {
        let build = BuildData {
            key: "b2".into(),
            name: "Bare".into(),
            category: "draft".into(),
            ..Default::default()
        };
        let json = serde_json::to_string(&build).unwrap();
        assert!(!json.contains("helm"));
        assert!(!json.contains("weapon"));

        let back: BuildData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, build);
    }
}
