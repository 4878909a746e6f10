//! Closed enumerations of stat and attribute names.
//!
//! Names parse from snake_case (`critical_chance`) and from the camelCase
//! spelling used by older catalogs (`criticalChance`).

use strum::{Display, EnumCount, EnumIter, EnumString};

/// The nine combat stats tracked by [`super::CombatStats`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString, EnumIter, EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StatName {
    #[strum(to_string = "critical_chance", serialize = "criticalChance")]
    #[cfg_attr(feature = "serde", serde(alias = "criticalChance"))]
    CriticalChance,
    #[strum(to_string = "evasion")]
    Evasion,
    #[strum(to_string = "dexterity")]
    Dexterity,
    #[strum(to_string = "accuracy")]
    Accuracy,
    #[strum(to_string = "block")]
    Block,
    #[strum(to_string = "disarm")]
    Disarm,
    #[strum(to_string = "combo")]
    Combo,
    #[strum(to_string = "deflect")]
    Deflect,
    #[strum(to_string = "reversal")]
    Reversal,
}

/// Innate bruto attributes a skill effect may target.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString, EnumIter, EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AttributeName {
    #[strum(to_string = "strength")]
    Strength,
    #[strum(to_string = "speed")]
    Speed,
    #[strum(to_string = "agility")]
    Agility,
    #[strum(to_string = "resistance")]
    Resistance,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn stat_names_accept_both_spellings() {
        assert_eq!(
            StatName::from_str("critical_chance"),
            Ok(StatName::CriticalChance)
        );
        assert_eq!(
            StatName::from_str("criticalChance"),
            Ok(StatName::CriticalChance)
        );
        assert_eq!(StatName::CriticalChance.to_string(), "critical_chance");
        assert!(StatName::from_str("strength").is_err());
    }

    #[test]
    fn there_are_nine_combat_stats() {
        assert_eq!(StatName::COUNT, 9);
        assert_eq!(StatName::iter().count(), 9);
        assert_eq!(AttributeName::iter().count(), 4);
    }
}
