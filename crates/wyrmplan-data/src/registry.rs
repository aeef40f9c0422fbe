//! Registry of monster data sources
//!
//! Monster records are discovered from a compile-time enumerable set of
//! bundled JSON resources. The registry maps a resource key (the bundled
//! path) to a loader closure; lookups match by key suffix `/{id}.json`, so
//! keys do not have to be exact IDs.

use crate::error::{Error, Result};
use indexmap::IndexMap;
use wyrmplan_core::{Monster, MonsterId};

const DRAGON_ORDER_JSON: &str = include_str!("../data/dragon-order.json");

/// Bundled monster resources: (resource key, raw JSON)
const BUNDLED_MONSTERS: &[(&str, &str)] = &[
    (
        "data/monsters/emberdrake.json",
        include_str!("../data/monsters/emberdrake.json"),
    ),
    (
        "data/monsters/frostmaw.json",
        include_str!("../data/monsters/frostmaw.json"),
    ),
    (
        "data/monsters/stormcrest.json",
        include_str!("../data/monsters/stormcrest.json"),
    ),
    (
        "data/monsters/mirewyrm.json",
        include_str!("../data/monsters/mirewyrm.json"),
    ),
    (
        "data/monsters/galehorn.json",
        include_str!("../data/monsters/galehorn.json"),
    ),
    (
        "data/monsters/duskveil.json",
        include_str!("../data/monsters/duskveil.json"),
    ),
    (
        "data/monsters/cinderlord.json",
        include_str!("../data/monsters/cinderlord.json"),
    ),
    (
        "data/monsters/palewing.json",
        include_str!("../data/monsters/palewing.json"),
    ),
    (
        "data/monsters/thornback.json",
        include_str!("../data/monsters/thornback.json"),
    ),
    (
        "data/monsters/riftfang.json",
        include_str!("../data/monsters/riftfang.json"),
    ),
];

/// The canonical monster load order
///
/// Array position of loaded records is semantic downstream; consumers index
/// into the loaded list assuming this order.
pub fn dragon_order() -> Result<Vec<MonsterId>> {
    serde_json::from_str(DRAGON_ORDER_JSON).map_err(|source| Error::InvalidTable {
        table: "dragon-order",
        source,
    })
}

/// A loader closure producing one monster record
pub type LoadFn = Box<dyn Fn() -> Result<Monster> + Send + Sync>;

/// Registry mapping resource keys to monster loaders
#[derive(Default)]
pub struct MonsterRegistry {
    modules: IndexMap<String, LoadFn>,
}

impl MonsterRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry over all bundled monster resources
    pub fn bundled() -> Self {
        let mut registry = Self::new();
        for (key, raw) in BUNDLED_MONSTERS {
            registry.register(*key, move || Ok(serde_json::from_str::<Monster>(raw)?));
        }
        registry
    }

    /// Register a loader under a resource key
    pub fn register(
        &mut self,
        key: impl Into<String>,
        loader: impl Fn() -> Result<Monster> + Send + Sync + 'static,
    ) {
        self.modules.insert(key.into(), Box::new(loader));
    }

    /// Number of registered sources
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Check if no sources are registered
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Find the resource key for a monster ID by suffix match
    pub fn find_key(&self, id: &MonsterId) -> Option<&str> {
        let suffix = format!("/{}.json", id);
        self.modules
            .keys()
            .find(|key| key.ends_with(&suffix))
            .map(String::as_str)
    }

    /// Run the loader registered under a resource key
    pub fn load(&self, key: &str) -> Result<Monster> {
        match self.modules.get(key) {
            Some(loader) => loader(),
            None => Err(Error::MissingSource(key.to_string())),
        }
    }
}

impl std::fmt::Debug for MonsterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MonsterRegistry")
            .field("modules", &self.modules.keys().collect::<Vec<_>>())
            .finish()
    }
}
