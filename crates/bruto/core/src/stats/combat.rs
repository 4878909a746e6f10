//! CombatStats - the resolved stat snapshot.
//!
//! A snapshot is always built whole and handed to the caller by value. The
//! same record doubles as a dense delta carrier when skill contributions are
//! accumulated before being added to the base.

use core::ops::{Add, AddAssign};

use strum::IntoEnumIterator;

use super::name::StatName;

/// The nine effective combat stats of a bruto for one turn.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatStats {
    pub critical_chance: f64,
    pub evasion: f64,
    pub dexterity: f64,
    pub accuracy: f64,
    pub block: f64,
    pub disarm: f64,
    pub combo: f64,
    pub deflect: f64,
    pub reversal: f64,
}

impl CombatStats {
    /// All stats at zero.
    pub const ZERO: Self = Self {
        critical_chance: 0.0,
        evasion: 0.0,
        dexterity: 0.0,
        accuracy: 0.0,
        block: 0.0,
        disarm: 0.0,
        combo: 0.0,
        deflect: 0.0,
        reversal: 0.0,
    };

    /// Get a single stat
    pub fn get(&self, stat: StatName) -> f64 {
        match stat {
            StatName::CriticalChance => self.critical_chance,
            StatName::Evasion => self.evasion,
            StatName::Dexterity => self.dexterity,
            StatName::Accuracy => self.accuracy,
            StatName::Block => self.block,
            StatName::Disarm => self.disarm,
            StatName::Combo => self.combo,
            StatName::Deflect => self.deflect,
            StatName::Reversal => self.reversal,
        }
    }

    /// Get a mutable reference to a single stat
    pub fn get_mut(&mut self, stat: StatName) -> &mut f64 {
        match stat {
            StatName::CriticalChance => &mut self.critical_chance,
            StatName::Evasion => &mut self.evasion,
            StatName::Dexterity => &mut self.dexterity,
            StatName::Accuracy => &mut self.accuracy,
            StatName::Block => &mut self.block,
            StatName::Disarm => &mut self.disarm,
            StatName::Combo => &mut self.combo,
            StatName::Deflect => &mut self.deflect,
            StatName::Reversal => &mut self.reversal,
        }
    }

    /// Set a single stat (builder pattern)
    pub fn with(mut self, stat: StatName, value: f64) -> Self {
        *self.get_mut(stat) = value;
        self
    }

    /// Iterate all nine stats in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (StatName, f64)> + '_ {
        StatName::iter().map(move |stat| (stat, self.get(stat)))
    }
}

impl Add for CombatStats {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl AddAssign for CombatStats {
    fn add_assign(&mut self, rhs: Self) {
        for stat in StatName::iter() {
            *self.get_mut(stat) += rhs.get(stat);
        }
    }
}
