//! Elemental and status effect types

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of elemental/status effects a weapon variant can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectType {
    Blast,
    Dragon,
    Fire,
    Ice,
    Paralysis,
    Poison,
    Riftborne,
    Sleep,
    Thunder,
    Water,
}

impl EffectType {
    /// All effect types in canonical display order
    pub fn all() -> &'static [EffectType] {
        &[
            EffectType::Blast,
            EffectType::Dragon,
            EffectType::Fire,
            EffectType::Ice,
            EffectType::Paralysis,
            EffectType::Poison,
            EffectType::Riftborne,
            EffectType::Sleep,
            EffectType::Thunder,
            EffectType::Water,
        ]
    }

    /// Get the wire-format identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            EffectType::Blast => "blast",
            EffectType::Dragon => "dragon",
            EffectType::Fire => "fire",
            EffectType::Ice => "ice",
            EffectType::Paralysis => "paralysis",
            EffectType::Poison => "poison",
            EffectType::Riftborne => "riftborne",
            EffectType::Sleep => "sleep",
            EffectType::Thunder => "thunder",
            EffectType::Water => "water",
        }
    }
}

impl fmt::Display for EffectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An entry of the bundled effect table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Effect {
    /// Effect identifier
    pub id: EffectType,
    /// Display name
    pub name: String,
}

/// The bundled effect table, in canonical display order
pub type EffectTable = Vec<Effect>;
