//! Catalog of all reference data, loaded once per process.

use std::path::{Path, PathBuf};

use bruto_core::{EngineConfig, Skill, SkillId, Weapon, WeaponId};

use crate::loaders::{ConfigLoader, LoadResult, SkillLoader, WeaponLoader};

/// Weapons, skills and engine configuration loaded from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── engine.toml
/// ├── weapons.ron
/// └── skills.ron
/// ```
#[derive(Clone, Debug)]
pub struct Catalog {
    pub config: EngineConfig,
    pub weapons: Vec<Weapon>,
    pub skills: Vec<Skill>,
}

impl Catalog {
    /// Loads every file of `data_dir`.
    pub fn load(data_dir: impl AsRef<Path>) -> LoadResult<Self> {
        let data_dir = data_dir.as_ref();
        Self::load_files(
            &data_dir.join("engine.toml"),
            &data_dir.join("weapons.ron"),
            &data_dir.join("skills.ron"),
        )
    }

    /// Loads the data bundled with this crate.
    pub fn bundled() -> LoadResult<Self> {
        Self::load(PathBuf::from(crate::DATA_DIR))
    }

    pub fn load_files(config: &Path, weapons: &Path, skills: &Path) -> LoadResult<Self> {
        let catalog = Self {
            config: ConfigLoader::load(config)?,
            weapons: WeaponLoader::load(weapons)?,
            skills: SkillLoader::load(skills)?,
        };
        tracing::info!(
            weapons = catalog.weapons.len(),
            skills = catalog.skills.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    pub fn weapon(&self, id: WeaponId) -> Option<&Weapon> {
        self.weapons.iter().find(|w| w.id == id)
    }

    pub fn skill(&self, id: SkillId) -> Option<&Skill> {
        self.skills.iter().find(|s| s.id == id)
    }

    /// Case-insensitive lookup by canonical or localized name.
    pub fn weapon_named(&self, name: &str) -> Option<&Weapon> {
        self.weapons.iter().find(|w| {
            w.name.eq_ignore_ascii_case(name)
                || w.names.values().any(|n| n.eq_ignore_ascii_case(name))
        })
    }

    /// Case-insensitive lookup by name.
    pub fn skill_named(&self, name: &str) -> Option<&Skill> {
        self.skills.iter().find(|s| s.name.eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog {
            config: EngineConfig::default(),
            weapons: vec![
                Weapon::new(WeaponId(1), "Knife").with_localized_name("fr", "Couteau"),
                Weapon::new(WeaponId(2), "Axe"),
            ],
            skills: vec![Skill::new(SkillId(1), "Herculean Strength")],
        }
    }

    #[test]
    fn lookups_by_id_and_name() {
        let catalog = catalog();
        assert_eq!(catalog.weapon(WeaponId(2)).map(|w| w.name.as_str()), Some("Axe"));
        assert_eq!(catalog.weapon_named("couteau").map(|w| w.id), Some(WeaponId(1)));
        assert_eq!(catalog.weapon_named("KNIFE").map(|w| w.id), Some(WeaponId(1)));
        assert!(catalog.weapon_named("Trident").is_none());
        assert_eq!(
            catalog.skill_named("herculean strength").map(|s| s.id),
            Some(SkillId(1))
        );
        assert!(catalog.skill(SkillId(9)).is_none());
    }
}
