//! Sequential monster loading
//!
//! Records load one by one in the canonical order, never in registry
//! iteration order: downstream consumers rely on array position matching the
//! order list. A missing or failing source is skipped with a warning and
//! must not abort the rest of the batch.

use crate::registry::MonsterRegistry;
use tracing::{debug, warn};
use wyrmplan_core::{Monster, MonsterId};

/// Load monster records in canonical order, skipping failures
pub fn load_monsters(order: &[MonsterId], registry: &MonsterRegistry) -> Vec<Monster> {
    let mut monsters = Vec::with_capacity(order.len());
    for id in order {
        let Some(key) = registry.find_key(id) else {
            warn!(monster = %id, "no data source registered, skipping");
            continue;
        };
        match registry.load(key) {
            Ok(monster) => {
                debug!(monster = %id, name = %monster.name, "loaded");
                monsters.push(monster);
            }
            Err(err) => {
                warn!(monster = %id, error = %err, "failed to load, skipping");
            }
        }
    }
    monsters
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::registry::dragon_order;

    fn test_monster(id: &str) -> Monster {
        serde_json::from_str(&format!(r#"{{"id": "{id}", "name": "{id}"}}"#)).unwrap()
    }

    #[test]
    fn test_output_follows_order_not_registry() {
        let mut registry = MonsterRegistry::new();
        // registered b first, a second
        registry.register("data/monsters/b.json", || Ok(test_monster("b")));
        registry.register("data/monsters/a.json", || Ok(test_monster("a")));

        let order = vec![MonsterId::new("a"), MonsterId::new("b")];
        let loaded = load_monsters(&order, &registry);
        let ids: Vec<&str> = loaded.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_failures_skip_without_aborting() {
        let mut registry = MonsterRegistry::new();
        registry.register("data/monsters/a.json", || Ok(test_monster("a")));
        registry.register("data/monsters/broken.json", || {
            Err(Error::MissingSource("broken".into()))
        });
        registry.register("data/monsters/c.json", || Ok(test_monster("c")));

        let order = vec![
            MonsterId::new("a"),
            MonsterId::new("broken"),
            MonsterId::new("absent"),
            MonsterId::new("c"),
        ];
        let loaded = load_monsters(&order, &registry);
        let ids: Vec<&str> = loaded.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn test_bundled_batch_loads_fully() {
        let order = dragon_order().unwrap();
        let loaded = load_monsters(&order, &MonsterRegistry::bundled());
        assert_eq!(loaded.len(), order.len());
        for (id, monster) in order.iter().zip(&loaded) {
            assert_eq!(id, &monster.id);
        }
    }
}
