//! Weapons: static definitions, the modifier resolver and the per-turn draw.
//!
//! # Design
//!
//! - [`Weapon`] is immutable reference data loaded once per process
//! - [`resolver`] derives stats and read accessors from a weapon choice
//! - [`draw`] decides which weapon, if any, is wielded this turn
//!
//! Bare hands are represented by `None` everywhere a weapon is optional.

pub mod draw;
pub mod resolver;

use std::collections::BTreeMap;
use std::fmt;

use bitflags::bitflags;

use crate::config::EngineConfig;
use crate::error::DataIntegrityError;
use crate::stats::WeaponModifiers;

pub use draw::{select_active, should_draw};
pub use resolver::{
    apply_modifiers, apply_weapon, combine_weapons, hit_speed_multiplier, total_damage,
    weapon_deltas, weapon_reach,
};

/// Unique identifier for a weapon definition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponId(pub u16);

impl fmt::Display for WeaponId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

bitflags! {
    /// Weapon type tags.
    ///
    /// Consumed by the turn resolver (e.g. sharp weapons cut, heavy weapons
    /// cannot be thrown); the stat engine only carries them.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct WeaponTypes: u8 {
        const FAST   = 1 << 0;
        const SHARP  = 1 << 1;
        const BLUNT  = 1 << 2;
        const HEAVY  = 1 << 3;
        const LONG   = 1 << 4;
        const THRUST = 1 << 5;
        const THROWN = 1 << 6;
    }
}

/// A weapon definition.
///
/// # Fields
///
/// - `damage`: flat bonus added to the wielder's strength
/// - `hit_speed`: percentage, 100 is the baseline
/// - `draw_chance`: chance in `[0, 100]` that the weapon is wielded on a turn
/// - `reach`: at least 1; longer reach acts first in the turn order
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Weapon {
    pub id: WeaponId,
    pub name: String,

    /// Localized display names keyed by locale (`"fr"`, `"es"`, ...).
    #[cfg_attr(feature = "serde", serde(default))]
    pub names: BTreeMap<String, String>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub types: WeaponTypes,

    pub damage: u32,
    pub hit_speed: f64,
    pub draw_chance: f64,
    pub reach: u32,

    #[cfg_attr(feature = "serde", serde(default))]
    pub modifiers: Option<WeaponModifiers>,
}

impl Weapon {
    /// Creates a weapon with baseline values: no damage, 100% hit speed,
    /// always drawn, reach 1, no modifiers.
    pub fn new(id: WeaponId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            names: BTreeMap::new(),
            types: WeaponTypes::empty(),
            damage: 0,
            hit_speed: f64::from(EngineConfig::BASELINE_HIT_SPEED),
            draw_chance: EngineConfig::PERCENT_MAX,
            reach: EngineConfig::BARE_HANDS_REACH,
            modifiers: None,
        }
    }

    pub fn with_types(mut self, types: WeaponTypes) -> Self {
        self.types = types;
        self
    }

    pub fn with_damage(mut self, damage: u32) -> Self {
        self.damage = damage;
        self
    }

    pub fn with_hit_speed(mut self, hit_speed: f64) -> Self {
        self.hit_speed = hit_speed;
        self
    }

    pub fn with_draw_chance(mut self, draw_chance: f64) -> Self {
        self.draw_chance = draw_chance;
        self
    }

    pub fn with_reach(mut self, reach: u32) -> Self {
        self.reach = reach;
        self
    }

    pub fn with_modifiers(mut self, modifiers: WeaponModifiers) -> Self {
        self.modifiers = Some(modifiers);
        self
    }

    pub fn with_localized_name(mut self, locale: impl Into<String>, name: impl Into<String>) -> Self {
        self.names.insert(locale.into(), name.into());
        self
    }

    /// Display name for a locale, falling back to the canonical name.
    pub fn display_name(&self, locale: &str) -> &str {
        self.names.get(locale).map_or(self.name.as_str(), String::as_str)
    }

    /// Checks the declared bounds of this definition.
    ///
    /// Meant for loaders: the resolver itself trusts validated data.
    pub fn validate(&self) -> Result<(), DataIntegrityError> {
        if !(0.0..=EngineConfig::PERCENT_MAX).contains(&self.draw_chance) {
            return Err(DataIntegrityError::DrawChanceOutOfRange {
                weapon: self.id,
                value: self.draw_chance,
            });
        }
        if self.reach < EngineConfig::BARE_HANDS_REACH {
            return Err(DataIntegrityError::ReachBelowMinimum {
                weapon: self.id,
                value: self.reach,
            });
        }
        if self.hit_speed.is_nan() || self.hit_speed <= 0.0 {
            return Err(DataIntegrityError::NonPositiveHitSpeed {
                weapon: self.id,
                value: self.hit_speed,
            });
        }
        Ok(())
    }
}
