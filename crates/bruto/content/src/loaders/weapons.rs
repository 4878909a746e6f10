//! Weapon catalog loader.

use std::collections::BTreeSet;
use std::path::Path;

use anyhow::Context;
use bruto_core::Weapon;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Weapon catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeaponCatalog {
    pub weapons: Vec<Weapon>,
}

impl WeaponCatalog {
    /// Checks every weapon's bounds and that ids are unique.
    pub fn validate(&self) -> LoadResult<()> {
        let mut seen = BTreeSet::new();
        for weapon in &self.weapons {
            weapon
                .validate()
                .with_context(|| format!("invalid weapon '{}'", weapon.name))?;
            if !seen.insert(weapon.id) {
                anyhow::bail!("duplicate weapon id {} ('{}')", weapon.id, weapon.name);
            }
        }
        Ok(())
    }
}

/// Loader for weapon catalog from RON files.
pub struct WeaponLoader;

impl WeaponLoader {
    /// Load and validate a weapon catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<Weapon>> {
        let content = read_file(path)?;
        let weapons = Self::parse(&content)?;
        tracing::debug!(path = %path.display(), count = weapons.len(), "weapon catalog loaded");
        Ok(weapons)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<Weapon>> {
        let catalog: WeaponCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse weapon catalog RON: {}", e))?;
        catalog.validate()?;
        Ok(catalog.weapons)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bruto_core::{DataIntegrityError, SkillCategory, StatName, WeaponId, WeaponTypes};

    const KNIFE: &str = r#"(
        id: WeaponId(1),
        name: "Knife",
        names: { "fr": "Couteau" },
        types: "FAST | SHARP",
        damage: 7,
        hit_speed: 150.0,
        draw_chance: 40.0,
        reach: 1,
        modifiers: Some({ critical_chance: 50.0, evasion: 10.0 }),
    )"#;

    #[test]
    fn parses_a_full_weapon() {
        let weapons = WeaponLoader::parse(&format!("(weapons: [{KNIFE}])")).unwrap();
        let knife = &weapons[0];

        assert_eq!(knife.id, WeaponId(1));
        assert_eq!(knife.display_name("fr"), "Couteau");
        assert_eq!(knife.types, WeaponTypes::FAST | WeaponTypes::SHARP);
        let modifiers = knife.modifiers.as_ref().unwrap();
        assert_eq!(modifiers.get(StatName::CriticalChance), Some(50.0));
        assert_eq!(modifiers.get(StatName::Block), None);
    }

    #[test]
    fn tag_sets_are_bare_flag_strings() {
        let types: WeaponTypes = ron::from_str(r#""HEAVY | BLUNT""#).unwrap();
        let categories: SkillCategory = ron::from_str(r#""STAT_BUFF""#).unwrap();
        let none: WeaponTypes = ron::from_str(r#""""#).unwrap();

        assert_eq!(types, WeaponTypes::HEAVY | WeaponTypes::BLUNT);
        assert_eq!(categories, SkillCategory::STAT_BUFF);
        assert!(none.is_empty());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = WeaponLoader::parse(&format!("(weapons: [{KNIFE}, {KNIFE}])")).unwrap_err();
        assert!(err.to_string().contains("duplicate weapon id #1"));
    }

    #[test]
    fn rejects_out_of_range_bounds() {
        let broken = KNIFE.replace("draw_chance: 40.0", "draw_chance: 140.0");
        let err = WeaponLoader::parse(&format!("(weapons: [{broken}])")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DataIntegrityError>(),
            Some(DataIntegrityError::DrawChanceOutOfRange { .. })
        ));
    }

    #[test]
    fn rejects_unknown_modifier_stats() {
        let broken = KNIFE.replace("evasion: 10.0", "luck: 10.0");
        assert!(WeaponLoader::parse(&format!("(weapons: [{broken}])")).is_err());
    }
}
