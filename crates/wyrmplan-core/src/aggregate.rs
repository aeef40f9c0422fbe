//! Skill-level aggregation across equipped items

use crate::{BuildData, MonsterSkill, SkillId};
use indexmap::IndexMap;

/// Merge duplicate skill contributions into one entry per skill
///
/// Levels are summed across duplicates (a missing level counts as 0) and the
/// result is sorted descending by total. The sort is stable: skills with
/// equal totals keep their first-seen order. The input is left untouched.
pub fn merge_skill_levels(skills: &[MonsterSkill]) -> Vec<MonsterSkill> {
    let mut totals: IndexMap<SkillId, u32> = IndexMap::new();
    for skill in skills {
        *totals.entry(skill.id.clone()).or_insert(0) += skill.level();
    }

    let mut merged: Vec<MonsterSkill> = totals
        .into_iter()
        .map(|(id, level)| MonsterSkill {
            id,
            level: Some(level),
        })
        .collect();
    merged.sort_by_key(|skill| std::cmp::Reverse(skill.level()));
    merged
}

/// Collect and merge every skill contribution of one build
///
/// Gathers the weapon row's skills plus each armor row's own skills and
/// slotted skills, then merges them with [`merge_skill_levels`].
pub fn collect_build_skills(build: &BuildData) -> Vec<MonsterSkill> {
    let mut all: Vec<MonsterSkill> = Vec::new();
    if let Some(weapon) = &build.weapon {
        all.extend(weapon.skills.iter().cloned());
    }
    for (_, row) in build.armor_rows() {
        all.extend(row.skills.iter().cloned());
        all.extend(row.slots.iter().cloned());
    }
    merge_skill_levels(&all)
}
