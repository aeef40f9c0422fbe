//! Wyrmplan Data - Bundled reference data and monster loading
//!
//! Reference tables and monster records ship as JSON inside this crate:
//! - `ReferenceTables` - the weapon/skill/smelt/effect tables
//! - `MonsterRegistry` - resource key to loader mapping with suffix lookup
//! - `load_monsters` - sequential canonical-order loading
//! - `normalize_monsters` - derived-view computation

mod error;
mod loader;
mod normalize;
mod registry;
mod tables;

pub use error::{Error, Result};
pub use loader::load_monsters;
pub use normalize::{normalize_monsters, sort_weapons_for};
pub use registry::{dragon_order, LoadFn, MonsterRegistry};
pub use tables::ReferenceTables;
