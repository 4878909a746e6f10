//! Skill catalog loader.

use std::collections::BTreeSet;
use std::path::Path;

use anyhow::Context;
use bruto_core::Skill;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Skill catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCatalog {
    pub skills: Vec<Skill>,
}

impl SkillCatalog {
    /// Validates every skill, including unimplemented ones, and checks that
    /// ids are unique and exclusivity references resolve within the catalog.
    pub fn validate(&self) -> LoadResult<()> {
        let mut ids = BTreeSet::new();
        for skill in &self.skills {
            skill
                .validate()
                .with_context(|| format!("invalid skill '{}'", skill.name))?;
            if !ids.insert(skill.id) {
                anyhow::bail!("duplicate skill id {} ('{}')", skill.id, skill.name);
            }
        }
        for skill in &self.skills {
            if let Some(missing) = skill.exclusive_with.iter().find(|id| !ids.contains(id)) {
                anyhow::bail!(
                    "skill '{}' is exclusive with unknown skill {}",
                    skill.name,
                    missing
                );
            }
        }
        Ok(())
    }
}

/// Loader for skill catalog from RON files.
pub struct SkillLoader;

impl SkillLoader {
    /// Load and validate a skill catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<Skill>> {
        let content = read_file(path)?;
        let skills = Self::parse(&content)?;
        tracing::debug!(path = %path.display(), count = skills.len(), "skill catalog loaded");
        Ok(skills)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<Skill>> {
        let catalog: SkillCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse skill catalog RON: {}", e))?;
        catalog.validate()?;
        Ok(catalog.skills)
    }
}
