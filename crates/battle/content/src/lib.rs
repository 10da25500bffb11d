//! Static battle content and loaders.
//!
//! This crate houses the data battles are built from:
//! - The monster catalog (built-in templates, level-based selection)
//! - Hero class presets
//! - Loaders for RON monster catalogs and TOML battle configuration
//!
//! Content only produces `battle-core` values; it never drives a battle.

pub mod classes;
pub mod monsters;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use classes::HeroClass;
pub use monsters::{MonsterCatalog, MonsterKind};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, MonsterLoader};
