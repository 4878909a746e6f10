//! Error infrastructure for bruto-core.
//!
//! The engine only fails on malformed reference data. Such failures are
//! reported to the immediate caller and never papered over with a default
//! stat value.

use crate::skill::SkillId;
use crate::weapon::WeaponId;

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Reference data violates a declared bound.
    ///
    /// Raised while validating catalogs at load time, before any resolution.
    Validation,

    /// Reference data cannot be resolved at all.
    ///
    /// Examples: unknown stat name, `max_stacks` on a non-stackable skill.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }
}

/// Common trait for all bruto-core errors.
///
/// Use `#[derive(thiserror::Error)]` for the Display/Error impl and classify
/// severity here.
pub trait EngineError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Malformed weapon or skill definitions.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DataIntegrityError {
    /// A skill effect names a stat the engine does not know.
    #[error("skill {skill} effect #{effect} targets unknown stat '{stat}'")]
    UnknownStat {
        skill: SkillId,
        effect: usize,
        stat: String,
    },

    /// `max_stacks` is only meaningful on stackable skills.
    #[error("skill {0} declares max_stacks but is not stackable")]
    MaxStacksWithoutStacking(SkillId),

    /// Weapon draw chance outside [0, 100].
    #[error("weapon {weapon} draw chance {value} is outside [0, 100]")]
    DrawChanceOutOfRange { weapon: WeaponId, value: f64 },

    /// Weapon reach below the bare-hands minimum.
    #[error("weapon {weapon} reach {value} is below 1")]
    ReachBelowMinimum { weapon: WeaponId, value: u32 },

    /// Weapon hit speed must be positive.
    #[error("weapon {weapon} hit speed must be positive, got {value}")]
    NonPositiveHitSpeed { weapon: WeaponId, value: f64 },

    /// Skill acquisition odds outside [0, 100].
    #[error("skill {skill} odds {value} are outside [0, 100]")]
    OddsOutOfRange { skill: SkillId, value: f64 },
}

impl EngineError for DataIntegrityError {
    fn severity(&self) -> ErrorSeverity {
        use DataIntegrityError::*;
        match self {
            UnknownStat { .. } | MaxStacksWithoutStacking(_) => ErrorSeverity::Fatal,

            DrawChanceOutOfRange { .. }
            | ReachBelowMinimum { .. }
            | NonPositiveHitSpeed { .. }
            | OddsOutOfRange { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use DataIntegrityError::*;
        match self {
            UnknownStat { .. } => "DATA_UNKNOWN_STAT",
            MaxStacksWithoutStacking(_) => "DATA_MAX_STACKS_WITHOUT_STACKING",
            DrawChanceOutOfRange { .. } => "DATA_DRAW_CHANCE_OUT_OF_RANGE",
            ReachBelowMinimum { .. } => "DATA_REACH_BELOW_MINIMUM",
            NonPositiveHitSpeed { .. } => "DATA_NON_POSITIVE_HIT_SPEED",
            OddsOutOfRange { .. } => "DATA_ODDS_OUT_OF_RANGE",
        }
    }
}
