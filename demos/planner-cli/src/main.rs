//! Planner CLI Demo
//!
//! Walks the whole store layer once: load and normalize the bundled monster
//! data, toggle a weapon, aggregate a build's skills, then export and
//! re-import the build list.

use wyrmplan_core::{
    collect_build_skills, BuildData, BuildWeaponRow, MonsterId, WeaponId,
};
use wyrmplan_store::{ConfirmGate, Planner, EXPORT_FILE_NAME};

/// Stand-in for the UI shell's confirmation dialog
struct AutoConfirm;

impl ConfirmGate for AutoConfirm {
    fn confirm_import(&self, builds: &[BuildData]) -> bool {
        println!("import {} build(s)? -> yes", builds.len());
        true
    }
}

fn main() -> wyrmplan_store::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    println!("=== Wyrmplan Planner Demo ===\n");

    let mut planner = Planner::in_memory()?;
    planner.init();

    println!("Loaded {} monsters:", planner.reference.monsters().len());
    for monster in planner.reference.monsters() {
        let weapons: Vec<&str> = monster
            .sort_weapons
            .iter()
            .map(|w| w.id.as_str())
            .collect();
        println!("  {:<12} weapons: [{}]", monster.name(), weapons.join(", "));
    }

    // Toggle Emberdrake onto its bow variant
    let emberdrake = MonsterId::new("emberdrake");
    planner.change_weapon_handler(&emberdrake, &WeaponId::new("bow"));
    let selected = planner.selection.get(&emberdrake).expect("selection entry");
    println!(
        "\nEmberdrake now wields '{}' (effect: {:?})",
        selected.checked, selected.effect
    );

    // Save a build from the current selection and aggregate its skills
    let build = BuildData {
        key: "demo-1".into(),
        name: "Emberdrake opener".into(),
        category: "demo".into(),
        weapon: Some(BuildWeaponRow {
            monster: emberdrake.clone(),
            monster_name: planner.reference.get_monster_name(&emberdrake).to_string(),
            effect: selected.effect,
            skills: selected.skills.clone(),
            riftborne: None,
            rarity: None,
        }),
        ..Default::default()
    };
    println!("\nAggregated skills for '{}':", build.name);
    for skill in collect_build_skills(&build) {
        println!(
            "  {} Lv{} ({})",
            planner.reference.get_skill_name(&skill.id),
            skill.level(),
            planner.reference.get_smelt_category(&skill.id),
        );
    }
    planner.builds.add_build(build);
    planner.save_builds()?;

    // Export, then import the same file back (imported entries go first)
    let mut file = Vec::new();
    planner.download_build_data_list(&mut file)?;
    println!("\nExported {} byte(s) as {}", file.len(), EXPORT_FILE_NAME);

    let text = String::from_utf8(file).expect("export is UTF-8");
    planner.import_build_data_list(&text, &AutoConfirm);
    println!(
        "Build list now holds {} build(s)",
        planner.builds.build_data_list().len()
    );

    Ok(())
}
