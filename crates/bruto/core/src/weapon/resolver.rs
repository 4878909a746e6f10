//! Weapon modifier resolver.
//!
//! Modifiers are percentages of the base stat. Combining several weapons sums
//! their percentages first and applies the total once, so the result never
//! depends on the order weapons are listed in.

use crate::config::EngineConfig;
use crate::state::Bruto;
use crate::stats::{CombatStats, WeaponModifiers, percentage_of, sum_modifiers};

use super::Weapon;

/// Per-stat deltas produced by a modifier set against `base`.
///
/// Stats without a modifier get a zero delta.
fn modifier_deltas(base: &CombatStats, modifiers: &WeaponModifiers) -> CombatStats {
    let mut deltas = CombatStats::ZERO;
    for (stat, percent) in modifiers.iter() {
        *deltas.get_mut(stat) = percentage_of(base.get(stat), percent);
    }
    deltas
}

/// Per-stat deltas of the wielded weapon against `base`.
///
/// Bare hands and weapons without modifiers yield all zeros.
pub fn weapon_deltas(base: &CombatStats, weapon: Option<&Weapon>) -> CombatStats {
    match weapon.and_then(|w| w.modifiers.as_ref()) {
        Some(modifiers) => modifier_deltas(base, modifiers),
        None => CombatStats::ZERO,
    }
}

/// Applies a modifier set once against `base`.
pub fn apply_modifiers(base: &CombatStats, modifiers: &WeaponModifiers) -> CombatStats {
    *base + modifier_deltas(base, modifiers)
}

/// Applies a single weapon's modifiers to `base`.
///
/// Returns an owned copy; bare hands or a weapon without modifiers leave
/// every stat unchanged.
///
/// # Example
/// ```
/// # use bruto_core::{CombatStats, StatName, Weapon, WeaponId, WeaponModifiers, apply_weapon};
/// let base = CombatStats::ZERO.with(StatName::Evasion, 20.0);
/// let fan = Weapon::new(WeaponId(1), "Fan")
///     .with_modifiers(WeaponModifiers::new().with(StatName::Evasion, 50.0));
///
/// assert_eq!(apply_weapon(&base, Some(&fan)).evasion, 30.0);
/// assert_eq!(apply_weapon(&base, None), base);
/// ```
pub fn apply_weapon(base: &CombatStats, weapon: Option<&Weapon>) -> CombatStats {
    *base + weapon_deltas(base, weapon)
}

/// Sums the modifier sets of several simultaneously active weapons.
///
/// Apply the result with [`apply_modifiers`] against the original base.
pub fn combine_weapons<'a>(weapons: impl IntoIterator<Item = &'a Weapon>) -> WeaponModifiers {
    sum_modifiers(weapons.into_iter().filter_map(|w| w.modifiers.as_ref()))
}

/// Strength plus the weapon's flat damage.
///
/// Saturates at `u32::MAX`.
pub fn total_damage(bruto: &Bruto, weapon: Option<&Weapon>) -> u32 {
    bruto
        .strength()
        .saturating_add(weapon.map_or(0, |w| w.damage))
}

/// Hit speed as a multiplier (100% → 1.0). Bare hands are 1.0.
pub fn hit_speed_multiplier(weapon: Option<&Weapon>) -> f64 {
    weapon.map_or(1.0, |w| {
        w.hit_speed / f64::from(EngineConfig::BASELINE_HIT_SPEED)
    })
}

/// Reach of the wielded weapon. Bare hands reach 1.
pub fn weapon_reach(weapon: Option<&Weapon>) -> u32 {
    weapon.map_or(EngineConfig::BARE_HANDS_REACH, |w| w.reach)
}
