//! Identity types for reference-data entities
//!
//! All reference data is keyed by string IDs that come straight from the
//! bundled JSON tables. Each entity kind gets its own newtype so a skill ID
//! can never be passed where a monster ID is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Create a new ID
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::new(s)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }
    };
}

string_id! {
    /// Identifier for a monster record (e.g., "emberdrake")
    MonsterId
}

string_id! {
    /// Identifier for a weapon class in the weapon table (e.g., "greatsword")
    WeaponId
}

string_id! {
    /// Identifier for a skill in the skill table (e.g., "attack-boost")
    SkillId
}

string_id! {
    /// Identifier for a smelt recipe category (e.g., "offense")
    SmeltId
}

/// Key of a monster's weapon-variant map
///
/// The wire format is a plain string: the reserved key `"default"` names the
/// baseline variant, any other key is a weapon ID from the weapon table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum VariantKey {
    /// The reserved baseline variant
    #[default]
    Default,
    /// A concrete weapon variant
    Weapon(WeaponId),
}

/// The reserved variant-map key for the baseline loadout
pub const DEFAULT_VARIANT: &str = "default";

impl VariantKey {
    /// Get the wire-format key string
    pub fn as_str(&self) -> &str {
        match self {
            VariantKey::Default => DEFAULT_VARIANT,
            VariantKey::Weapon(id) => id.as_str(),
        }
    }

    /// Check if this is the reserved default variant
    pub fn is_default(&self) -> bool {
        matches!(self, VariantKey::Default)
    }
}

impl fmt::Display for VariantKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for VariantKey {
    fn from(s: &str) -> Self {
        if s == DEFAULT_VARIANT {
            VariantKey::Default
        } else {
            VariantKey::Weapon(WeaponId::new(s))
        }
    }
}

impl From<WeaponId> for VariantKey {
    fn from(id: WeaponId) -> Self {
        VariantKey::Weapon(id)
    }
}

impl Serialize for VariantKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for VariantKey {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = String::deserialize(deserializer)?;
        Ok(VariantKey::from(key.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_ids() {
        let id = SkillId::new("attack-boost");
        assert_eq!(id.as_str(), "attack-boost");
        assert_eq!(format!("{}", id), "attack-boost");
        assert_eq!(SkillId::from("attack-boost"), id);
    }

    #[test]
    fn test_variant_key_wire_format() {
        assert_eq!(VariantKey::from("default"), VariantKey::Default);
        assert_eq!(
            VariantKey::from("bow"),
            VariantKey::Weapon(WeaponId::new("bow"))
        );

        let json = serde_json::to_string(&VariantKey::Default).unwrap();
        assert_eq!(json, "\"default\"");
        let key: VariantKey = serde_json::from_str("\"hammer\"").unwrap();
        assert_eq!(key, VariantKey::Weapon(WeaponId::new("hammer")));
    }

    #[test]
    fn test_variant_key_as_map_key() {
        use indexmap::IndexMap;

        let mut map: IndexMap<VariantKey, u32> = IndexMap::new();
        map.insert(VariantKey::Default, 0);
        map.insert(VariantKey::from("lance"), 1);

        let json = serde_json::to_string(&map).unwrap();
        let back: IndexMap<VariantKey, u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.get(&VariantKey::Default), Some(&0));
        assert_eq!(back.get(&VariantKey::from("lance")), Some(&1));
    }
}
