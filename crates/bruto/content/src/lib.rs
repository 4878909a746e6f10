//! Reference data for the bruto stat engine.
//!
//! Weapons and skills are static definitions, loaded once per process from
//! RON catalogs and validated before any resolution runs:
//! - Weapon catalog (`weapons.ron`)
//! - Skill catalog (`skills.ron`)
//! - Engine configuration (`engine.toml`)
//!
//! The bundled data lives under [`DATA_DIR`].

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    Catalog, ConfigLoader, LoadResult, SkillCatalog, SkillLoader, WeaponCatalog, WeaponLoader,
};

/// Directory holding the data files shipped with this crate.
pub const DATA_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data");
