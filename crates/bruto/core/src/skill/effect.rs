//! Skill effects.
//!
//! An effect is a rule, not a runtime instance: it says what a skill does and
//! when, and is never mutated. Runtime state (stack counts, whether a
//! combat has started) belongs to the caller.

use std::str::FromStr;

use crate::stats::{AttributeName, StatName, percentage_of};

/// What an effect changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EffectKind {
    /// Raises or lowers a combat stat or attribute.
    StatBoost,
    /// Changes damage dealt; applied by the turn resolver.
    DamageModifier,
    /// Reduces damage taken; applied by the turn resolver.
    ArmorBonus,
    /// Changes maximum hit points.
    HealthBonus,
    /// Anything the turn resolver handles by name.
    Special,
}

/// When an effect applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Timing {
    /// Once, when the skill is acquired.
    Immediate,
    /// On every resolution while the skill is active.
    Passive,
    /// Once per fight, when the caller decides the fight starts.
    OnCombatStart,
    /// When the caller's condition evaluator accepts it.
    Conditional,
}

/// How `value` is interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ModifierKind {
    /// `value` is added as is.
    Flat,
    /// `value` is a percentage of the base.
    Percentage,
    /// Both of the above.
    Both,
}

/// Who a conditional effect applies to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EffectTarget {
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "self"))]
    Owner,
    #[cfg_attr(feature = "serde", serde(rename = "opponent"))]
    Opponent,
}

/// A stat an effect may name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StatTarget {
    Combat(StatName),
    Attribute(AttributeName),
}

impl FromStr for StatTarget {
    type Err = strum::ParseError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        StatName::from_str(name)
            .map(StatTarget::Combat)
            .or_else(|_| AttributeName::from_str(name).map(StatTarget::Attribute))
    }
}

/// One timed, typed numeric rule of a skill.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillEffect {
    pub kind: EffectKind,
    pub timing: Timing,

    /// Stat or attribute name; `None` for effects the turn resolver applies
    /// to its own formulas.
    #[cfg_attr(feature = "serde", serde(default))]
    pub stat: Option<String>,

    pub value: f64,
    pub modifier: ModifierKind,

    /// Free-form description read by the caller's condition evaluator.
    #[cfg_attr(feature = "serde", serde(default))]
    pub condition: Option<String>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub target: EffectTarget,
}

impl SkillEffect {
    pub fn new(kind: EffectKind, timing: Timing, value: f64, modifier: ModifierKind) -> Self {
        Self {
            kind,
            timing,
            stat: None,
            value,
            modifier,
            condition: None,
            target: EffectTarget::Owner,
        }
    }

    /// Passive stat boost on a named stat or attribute.
    pub fn stat_boost(stat: impl Into<String>, value: f64, modifier: ModifierKind) -> Self {
        Self::new(EffectKind::StatBoost, Timing::Passive, value, modifier).on_stat(stat)
    }

    pub fn on_stat(mut self, stat: impl Into<String>) -> Self {
        self.stat = Some(stat.into());
        self
    }

    pub fn at(mut self, timing: Timing) -> Self {
        self.timing = timing;
        self
    }

    /// Makes the effect conditional.
    pub fn when(mut self, condition: impl Into<String>, target: EffectTarget) -> Self {
        self.timing = Timing::Conditional;
        self.condition = Some(condition.into());
        self.target = target;
        self
    }

    /// Parses the named stat, if any.
    ///
    /// `Err` carries the unrecognized name.
    pub fn stat_target(&self) -> Result<Option<StatTarget>, &str> {
        match self.stat.as_deref() {
            None => Ok(None),
            Some(name) => name.parse().map(Some).map_err(|_| name),
        }
    }

    /// Contribution of one stack of this effect against `base`.
    ///
    /// Flat → `value`, percentage → `value`% of `base`, both → the sum.
    pub fn contribution(&self, base: f64) -> f64 {
        match self.modifier {
            ModifierKind::Flat => self.value,
            ModifierKind::Percentage => percentage_of(base, self.value),
            ModifierKind::Both => self.value + percentage_of(base, self.value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contribution_by_modifier_kind() {
        let flat = SkillEffect::stat_boost("evasion", 5.0, ModifierKind::Flat);
        let pct = SkillEffect::stat_boost("evasion", 50.0, ModifierKind::Percentage);
        let both = SkillEffect::stat_boost("evasion", 10.0, ModifierKind::Both);

        assert_eq!(flat.contribution(20.0), 5.0);
        assert_eq!(pct.contribution(20.0), 10.0);
        assert_eq!(both.contribution(20.0), 12.0);
    }

    #[test]
    fn stat_target_parses_stats_and_attributes() {
        let combo = SkillEffect::stat_boost("combo", 1.0, ModifierKind::Flat);
        let strength = SkillEffect::stat_boost("strength", 1.0, ModifierKind::Flat);
        let armor = SkillEffect::new(
            EffectKind::ArmorBonus,
            Timing::Passive,
            2.0,
            ModifierKind::Flat,
        );
        let bogus = SkillEffect::stat_boost("luck", 1.0, ModifierKind::Flat);

        assert_eq!(
            combo.stat_target(),
            Ok(Some(StatTarget::Combat(StatName::Combo)))
        );
        assert_eq!(
            strength.stat_target(),
            Ok(Some(StatTarget::Attribute(AttributeName::Strength)))
        );
        assert_eq!(armor.stat_target(), Ok(None));
        assert_eq!(bogus.stat_target(), Err("luck"));
    }

    #[test]
    fn when_marks_conditional() {
        let effect = SkillEffect::stat_boost("block", 20.0, ModifierKind::Flat)
            .when("opponent wields a heavy weapon", EffectTarget::Owner);
        assert_eq!(effect.timing, Timing::Conditional);
        assert!(effect.condition.is_some());
    }
}
