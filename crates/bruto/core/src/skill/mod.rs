//! Skill definitions and the effect aggregator.
//!
//! # Design
//!
//! - [`Skill`] and [`SkillEffect`] are shared immutable reference data
//! - Per-bruto runtime state (stack counts) travels in [`ActiveSkill`]
//! - [`fold_skills`] turns active skills into stat and attribute deltas
//!
//! Mutual exclusivity is enforced when skills are acquired; the aggregator
//! trusts the set it is given.

pub mod aggregate;
pub mod effect;

use std::fmt;

use bitflags::bitflags;

use crate::config::EngineConfig;
use crate::error::DataIntegrityError;

pub use aggregate::{
    ActiveSkill, AttributeDeltas, ConditionEvaluator, NamedDelta, NoConditions, SkillOutcome,
    TimingSet, fold_skills,
};
pub use effect::{EffectKind, EffectTarget, ModifierKind, SkillEffect, StatTarget, Timing};

/// Unique identifier for a skill definition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillId(pub u16);

impl fmt::Display for SkillId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

bitflags! {
    /// Skill category tags, used for display and filtering.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct SkillCategory: u8 {
        const STAT_BUFF      = 1 << 0;
        const ACTIVE_ABILITY = 1 << 1;
        const PASSIVE_EFFECT = 1 << 2;
        const OFFENSIVE      = 1 << 3;
        const DEFENSIVE      = 1 << 4;
    }
}

/// A skill definition.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Skill {
    pub id: SkillId,
    pub name: String,

    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,

    #[cfg_attr(feature = "serde", serde(default))]
    pub categories: SkillCategory,

    /// Effects in declaration order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub effects: Vec<SkillEffect>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub stackable: bool,

    /// Stack cap; only meaningful when `stackable`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub max_stacks: Option<u32>,

    /// Skills that cannot be held together with this one.
    #[cfg_attr(feature = "serde", serde(default))]
    pub exclusive_with: Vec<SkillId>,

    /// Acquisition odds in `[0, 100]`, read by the acquisition system.
    #[cfg_attr(feature = "serde", serde(default))]
    pub odds: f64,

    /// Unimplemented skills are shown but never contribute.
    pub implemented: bool,
}

impl Skill {
    /// Creates an implemented, non-stackable skill with no effects.
    pub fn new(id: SkillId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            categories: SkillCategory::empty(),
            effects: Vec::new(),
            stackable: false,
            max_stacks: None,
            exclusive_with: Vec::new(),
            odds: 0.0,
            implemented: true,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_categories(mut self, categories: SkillCategory) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_effect(mut self, effect: SkillEffect) -> Self {
        self.effects.push(effect);
        self
    }

    /// Marks the skill stackable, optionally capped.
    pub fn stackable(mut self, max_stacks: Option<u32>) -> Self {
        self.stackable = true;
        self.max_stacks = max_stacks;
        self
    }

    pub fn exclusive_with(mut self, other: SkillId) -> Self {
        self.exclusive_with.push(other);
        self
    }

    pub fn with_odds(mut self, odds: f64) -> Self {
        self.odds = odds;
        self
    }

    pub fn unimplemented(mut self) -> Self {
        self.implemented = false;
        self
    }

    pub fn excludes(&self, other: SkillId) -> bool {
        self.exclusive_with.contains(&other)
    }

    /// Multiplier applied to every contribution for `stacks` active stacks.
    ///
    /// Stackable skills count `min(stacks, max_stacks)` (uncapped without a
    /// cap); non-stackable skills count once.
    pub fn stack_factor(&self, stacks: u32) -> u32 {
        if !self.stackable {
            return 1;
        }
        self.max_stacks.map_or(stacks, |cap| stacks.min(cap))
    }

    /// Checks the properties resolution depends on.
    ///
    /// Fails on `max_stacks` without `stackable`, or on an effect naming a
    /// stat outside the nine combat stats and four attributes.
    pub fn check_integrity(&self) -> Result<(), DataIntegrityError> {
        if self.max_stacks.is_some() && !self.stackable {
            return Err(DataIntegrityError::MaxStacksWithoutStacking(self.id));
        }
        for (index, effect) in self.effects.iter().enumerate() {
            if let Err(name) = effect.stat_target() {
                return Err(DataIntegrityError::UnknownStat {
                    skill: self.id,
                    effect: index,
                    stat: name.to_owned(),
                });
            }
        }
        Ok(())
    }

    /// Full load-time validation: integrity plus declared bounds.
    pub fn validate(&self) -> Result<(), DataIntegrityError> {
        self.check_integrity()?;
        if !(0.0..=EngineConfig::PERCENT_MAX).contains(&self.odds) {
            return Err(DataIntegrityError::OddsOutOfRange {
                skill: self.id,
                value: self.odds,
            });
        }
        Ok(())
    }
}
