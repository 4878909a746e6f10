//! Combat stat resolution for brutos.
//!
//! `bruto-core` turns a combatant's base stats, active skills and the weapon
//! it drew this turn into a single [`CombatStats`] snapshot. Everything here is
//! a pure function over immutable reference data, with one exception: the
//! weapon draw in [`weapon::draw`] consumes an injected [`RandomSource`].
//!
//! The per-turn flow is:
//!
//! ```text
//! [ Equipped weapons ] --select_active(rng)--> [ Active weapon ]
//!                                                    ↓
//! [ Base stats ] → [ Skill contributions ] → [ Weapon modifiers ] → CombatStats
//! ```
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod skill;
pub mod state;
pub mod stats;
pub mod weapon;

pub use config::EngineConfig;
pub use engine::{Resolution, ResolutionBuilder, resolve};
pub use env::{PcgSource, RandSource, RandomSource, compute_seed};
pub use error::{DataIntegrityError, EngineError, ErrorSeverity};
pub use skill::{
    ActiveSkill, AttributeDeltas, ConditionEvaluator, EffectKind, EffectTarget, ModifierKind,
    NamedDelta, NoConditions, Skill, SkillCategory, SkillEffect, SkillId, SkillOutcome,
    StatTarget, Timing, TimingSet, fold_skills,
};
pub use state::{Attributes, Bruto, BrutoId};
pub use stats::{AttributeName, CombatStats, StatName, WeaponModifiers, percentage_of, sum_modifiers};
pub use weapon::{
    Weapon, WeaponId, WeaponTypes, apply_modifiers, apply_weapon, combine_weapons,
    hit_speed_multiplier, select_active, should_draw, total_damage, weapon_deltas, weapon_reach,
};
