//! Skill effect aggregator.
//!
//! Folds the effects of a bruto's active skills into deltas:
//!
//! 1. Skip unimplemented skills
//! 2. Check the integrity of every remaining skill
//! 3. Keep effects whose timing is selected (conditional effects also need
//!    the caller's evaluator to accept them)
//! 4. Compute each contribution against the pre-modification base and
//!    multiply it by the skill's stack factor
//!
//! Combat stat contributions land in [`SkillOutcome::stats`], attribute
//! contributions in [`SkillOutcome::attributes`], and effects without a stat
//! in [`SkillOutcome::named`].

use bitflags::bitflags;

use crate::error::DataIntegrityError;
use crate::state::Bruto;
use crate::stats::{AttributeName, CombatStats};

use super::effect::{EffectKind, EffectTarget, ModifierKind, SkillEffect, StatTarget, Timing};
use super::{Skill, SkillId};

/// A skill held by a bruto, with its caller-owned stack count.
#[derive(Clone, Copy, Debug)]
pub struct ActiveSkill<'a> {
    pub skill: &'a Skill,
    pub stacks: u32,
}

impl<'a> ActiveSkill<'a> {
    /// A single stack.
    pub fn new(skill: &'a Skill) -> Self {
        Self { skill, stacks: 1 }
    }

    pub fn with_stacks(skill: &'a Skill, stacks: u32) -> Self {
        Self { skill, stacks }
    }
}

bitflags! {
    /// Set of effect timings to include in a fold.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct TimingSet: u8 {
        const IMMEDIATE       = 1 << 0;
        const PASSIVE         = 1 << 1;
        const ON_COMBAT_START = 1 << 2;
        const CONDITIONAL     = 1 << 3;
    }
}

impl TimingSet {
    pub fn includes(&self, timing: Timing) -> bool {
        self.contains(Self::from(timing))
    }
}

impl From<Timing> for TimingSet {
    fn from(timing: Timing) -> Self {
        match timing {
            Timing::Immediate => Self::IMMEDIATE,
            Timing::Passive => Self::PASSIVE,
            Timing::OnCombatStart => Self::ON_COMBAT_START,
            Timing::Conditional => Self::CONDITIONAL,
        }
    }
}

/// Decides whether a conditional effect applies right now.
///
/// The engine never interprets [`SkillEffect::condition`]; this is where the
/// caller does.
pub trait ConditionEvaluator {
    fn holds(&self, skill: &Skill, effect: &SkillEffect) -> bool;
}

impl<F> ConditionEvaluator for F
where
    F: Fn(&Skill, &SkillEffect) -> bool,
{
    fn holds(&self, skill: &Skill, effect: &SkillEffect) -> bool {
        self(skill, effect)
    }
}

/// Evaluator rejecting every conditional effect.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoConditions;

impl ConditionEvaluator for NoConditions {
    fn holds(&self, _skill: &Skill, _effect: &SkillEffect) -> bool {
        false
    }
}

/// Deltas on the four bruto attributes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeDeltas {
    pub strength: f64,
    pub speed: f64,
    pub agility: f64,
    pub resistance: f64,
}

impl AttributeDeltas {
    pub fn get(&self, attribute: AttributeName) -> f64 {
        match attribute {
            AttributeName::Strength => self.strength,
            AttributeName::Speed => self.speed,
            AttributeName::Agility => self.agility,
            AttributeName::Resistance => self.resistance,
        }
    }

    pub fn get_mut(&mut self, attribute: AttributeName) -> &mut f64 {
        match attribute {
            AttributeName::Strength => &mut self.strength,
            AttributeName::Speed => &mut self.speed,
            AttributeName::Agility => &mut self.agility,
            AttributeName::Resistance => &mut self.resistance,
        }
    }
}

/// An effect the turn resolver applies itself.
///
/// Either the effect names no stat, or it targets the opponent, whose base
/// the engine does not see. `value` already includes the stack factor.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NamedDelta {
    pub skill: SkillId,
    /// Position of the effect within the skill.
    pub effect: usize,
    pub kind: EffectKind,
    pub stat: Option<StatTarget>,
    pub value: f64,
    pub modifier: ModifierKind,
    pub target: EffectTarget,
}

/// Result of folding active skills.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillOutcome {
    /// Deltas to add to the base combat stats.
    pub stats: CombatStats,
    /// Deltas on the bruto's attributes.
    pub attributes: AttributeDeltas,
    /// Stat-less and opponent-targeted effects in declaration order.
    pub named: Vec<NamedDelta>,
}

/// Folds the selected effects of `skills` into deltas.
///
/// Percentages are taken of `base` for combat stats and of the bruto's
/// attributes for attribute targets, never of a partially folded value.
pub fn fold_skills(
    bruto: &Bruto,
    base: &CombatStats,
    skills: &[ActiveSkill<'_>],
    timings: TimingSet,
    conditions: &dyn ConditionEvaluator,
) -> Result<SkillOutcome, DataIntegrityError> {
    let mut outcome = SkillOutcome::default();

    for active in skills {
        let skill = active.skill;
        if !skill.implemented {
            tracing::trace!(skill = %skill.id, "skipping unimplemented skill");
            continue;
        }
        skill.check_integrity()?;

        let factor = skill.stack_factor(active.stacks);
        if factor == 0 {
            continue;
        }
        let factor = f64::from(factor);

        for (index, effect) in skill.effects.iter().enumerate() {
            if !timings.includes(effect.timing) {
                continue;
            }
            if effect.timing == Timing::Conditional && !conditions.holds(skill, effect) {
                continue;
            }

            // Integrity was checked above, so the name parses.
            let target = effect.stat_target().ok().flatten();
            if effect.target == EffectTarget::Opponent {
                outcome
                    .named
                    .push(named_delta(skill.id, index, effect, target, factor));
                continue;
            }
            match target {
                Some(StatTarget::Combat(stat)) => {
                    let delta = effect.contribution(base.get(stat)) * factor;
                    *outcome.stats.get_mut(stat) += delta;
                    tracing::trace!(skill = %skill.id, %stat, delta, "skill stat contribution");
                }
                Some(StatTarget::Attribute(attribute)) => {
                    let current = f64::from(bruto.attributes.get(attribute));
                    let delta = effect.contribution(current) * factor;
                    *outcome.attributes.get_mut(attribute) += delta;
                    tracing::trace!(
                        skill = %skill.id,
                        %attribute,
                        delta,
                        "skill attribute contribution"
                    );
                }
                None => outcome
                    .named
                    .push(named_delta(skill.id, index, effect, None, factor)),
            }
        }
    }

    Ok(outcome)
}

fn named_delta(
    skill: SkillId,
    index: usize,
    effect: &SkillEffect,
    stat: Option<StatTarget>,
    factor: f64,
) -> NamedDelta {
    NamedDelta {
        skill,
        effect: index,
        kind: effect.kind,
        stat,
        value: effect.value * factor,
        modifier: effect.modifier,
        target: effect.target,
    }
}
