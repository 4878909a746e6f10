//! Content loaders for reading reference data from files.

pub mod catalog;
pub mod config;
pub mod skills;
pub mod weapons;

pub use catalog::Catalog;
pub use config::ConfigLoader;
pub use skills::{SkillCatalog, SkillLoader};
pub use weapons::{WeaponCatalog, WeaponLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
