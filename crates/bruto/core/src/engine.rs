//! Combat stats aggregator.
//!
//! Resolution runs in a fixed order, each step a pure function of the
//! previous one and the immutable inputs:
//!
//! 1. Start from the caller's base stats
//! 2. Add skill contributions, skills in the given order
//! 3. Add the active weapon's modifiers, taken as percentages of the
//!    original base
//!
//! Because both skill percentages and weapon percentages read the original
//! base, no percentage ever compounds on another. The base itself is never
//! mutated and may be reused across turns.

use crate::config::EngineConfig;
use crate::error::DataIntegrityError;
use crate::skill::{
    ActiveSkill, AttributeDeltas, ConditionEvaluator, NamedDelta, NoConditions, TimingSet,
    fold_skills,
};
use crate::state::Bruto;
use crate::stats::CombatStats;
use crate::weapon::{Weapon, WeaponId, weapon_deltas};

/// Everything one resolution produces.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Resolution {
    /// Final combat stats for this turn.
    pub stats: CombatStats,
    /// Attribute deltas from skills; the bruto itself is left untouched.
    pub attributes: AttributeDeltas,
    /// Effects left to the turn resolver.
    pub named: Vec<NamedDelta>,
    /// Weapon the stats were resolved with, `None` when bare-handed.
    pub weapon: Option<WeaponId>,
}

/// Resolves the final combat stats of `bruto` for one turn.
///
/// Folds passive and combat-start skill effects, then the active weapon.
/// Conditional effects are never applied here; use [`ResolutionBuilder`]
/// with an evaluator for those.
///
/// # Errors
/// Returns a [`DataIntegrityError`] if an implemented skill is malformed.
pub fn resolve(
    bruto: &Bruto,
    base_stats: &CombatStats,
    active_skills: &[ActiveSkill<'_>],
    active_weapon: Option<&Weapon>,
) -> Result<CombatStats, DataIntegrityError> {
    ResolutionBuilder::new(bruto, base_stats)
        .skills(active_skills)
        .weapon(active_weapon)
        .build()
        .map(|resolution| resolution.stats)
}

/// Fluent construction of a [`Resolution`].
pub struct ResolutionBuilder<'a> {
    bruto: &'a Bruto,
    base: &'a CombatStats,
    skills: &'a [ActiveSkill<'a>],
    weapon: Option<&'a Weapon>,
    timings: TimingSet,
    conditions: Option<&'a dyn ConditionEvaluator>,
}

impl<'a> ResolutionBuilder<'a> {
    /// Starts with no skills, bare hands and the default timings.
    pub fn new(bruto: &'a Bruto, base: &'a CombatStats) -> Self {
        Self {
            bruto,
            base,
            skills: &[],
            weapon: None,
            timings: EngineConfig::DEFAULT_RESOLVE_TIMINGS,
            conditions: None,
        }
    }

    pub fn skills(mut self, skills: &'a [ActiveSkill<'a>]) -> Self {
        self.skills = skills;
        self
    }

    pub fn weapon(mut self, weapon: Option<&'a Weapon>) -> Self {
        self.weapon = weapon;
        self
    }

    /// Overrides the effect timings to fold.
    ///
    /// Conditional effects stay enabled once an evaluator is set.
    pub fn timings(mut self, timings: TimingSet) -> Self {
        self.timings = timings;
        self
    }

    /// Takes the timings from `config`.
    pub fn config(self, config: &EngineConfig) -> Self {
        self.timings(config.resolve_timings)
    }

    /// Enables conditional effects, judged by `conditions`.
    pub fn conditions(mut self, conditions: &'a dyn ConditionEvaluator) -> Self {
        self.conditions = Some(conditions);
        self
    }

    pub fn build(self) -> Result<Resolution, DataIntegrityError> {
        let (timings, conditions) = match self.conditions {
            Some(conditions) => (self.timings | TimingSet::CONDITIONAL, conditions),
            None => (self.timings, &NoConditions as &dyn ConditionEvaluator),
        };
        let outcome = fold_skills(self.bruto, self.base, self.skills, timings, conditions)?;
        let stats = *self.base + outcome.stats + weapon_deltas(self.base, self.weapon);

        tracing::debug!(
            bruto = %self.bruto.id,
            skills = self.skills.len(),
            weapon = ?self.weapon.map(|w| w.id),
            "combat stats resolved"
        );

        Ok(Resolution {
            stats,
            attributes: outcome.attributes,
            named: outcome.named,
            weapon: self.weapon.map(|w| w.id),
        })
    }
}
