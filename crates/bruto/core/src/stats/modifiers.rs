//! Sparse percentage modifiers carried by weapons.

use std::collections::BTreeMap;

use super::name::StatName;

/// Signed percentage modifiers keyed by stat.
///
/// Every stat is optional: a missing entry means the weapon does not touch
/// that stat, which is kept distinct from an explicit `0.0`.
///
/// # Example
/// ```
/// # use bruto_core::stats::{StatName, WeaponModifiers};
/// let mods = WeaponModifiers::new()
///     .with(StatName::Evasion, 30.0)
///     .with(StatName::Block, 0.0);
///
/// assert_eq!(mods.get(StatName::Evasion), Some(30.0));
/// assert_eq!(mods.get(StatName::Block), Some(0.0));
/// assert_eq!(mods.get(StatName::Combo), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct WeaponModifiers {
    values: BTreeMap<StatName, f64>,
}

impl WeaponModifiers {
    /// Create an empty modifier set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a modifier (builder pattern)
    pub fn with(mut self, stat: StatName, percent: f64) -> Self {
        self.set(stat, percent);
        self
    }

    /// Set a modifier, replacing any previous value
    pub fn set(&mut self, stat: StatName, percent: f64) {
        self.values.insert(stat, percent);
    }

    /// Add to a modifier, inserting it if absent
    pub fn add(&mut self, stat: StatName, percent: f64) {
        *self.values.entry(stat).or_insert(0.0) += percent;
    }

    /// Get the modifier for a stat, `None` when the stat is untouched
    pub fn get(&self, stat: StatName) -> Option<f64> {
        self.values.get(&stat).copied()
    }

    /// Iterate defined modifiers in stat order
    pub fn iter(&self) -> impl Iterator<Item = (StatName, f64)> + '_ {
        self.values.iter().map(|(stat, value)| (*stat, *value))
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }
}

impl FromIterator<(StatName, f64)> for WeaponModifiers {
    fn from_iter<I: IntoIterator<Item = (StatName, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
