//! Modifier arithmetic.
//!
//! Pure numeric helpers shared by the weapon resolver and the skill
//! aggregator. Nothing here rounds.

use super::modifiers::WeaponModifiers;

/// Returns `percent`% of `base`.
///
/// Negative percentages yield negative deltas.
///
/// # Example
/// ```
/// # use bruto_core::stats::percentage_of;
/// assert_eq!(percentage_of(40.0, 25.0), 10.0);
/// assert_eq!(percentage_of(40.0, -50.0), -20.0);
/// ```
#[inline]
pub fn percentage_of(base: f64, percent: f64) -> f64 {
    base * percent / 100.0
}

/// Sums modifier sets stat by stat.
///
/// A stat present in at least one input carries the sum of its present
/// values. A stat absent from every input stays absent in the result.
pub fn sum_modifiers<'a>(sets: impl IntoIterator<Item = &'a WeaponModifiers>) -> WeaponModifiers {
    let mut total = WeaponModifiers::new();
    for set in sets {
        for (stat, value) in set.iter() {
            total.add(stat, value);
        }
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::StatName;

    #[test]
    fn percentage_of_handles_zero_and_negative() {
        assert_eq!(percentage_of(0.0, 80.0), 0.0);
        assert_eq!(percentage_of(12.0, 0.0), 0.0);
        assert_eq!(percentage_of(12.0, -25.0), -3.0);
        assert_eq!(percentage_of(7.0, 10.0), 0.7);
    }

    #[test]
    fn sum_keeps_absent_stats_absent() {
        let a = WeaponModifiers::new()
            .with(StatName::Evasion, 10.0)
            .with(StatName::Block, 5.0);
        let b = WeaponModifiers::new()
            .with(StatName::Evasion, -10.0)
            .with(StatName::Combo, 20.0);

        let total = sum_modifiers([&a, &b]);

        assert_eq!(total.get(StatName::Evasion), Some(0.0));
        assert_eq!(total.get(StatName::Block), Some(5.0));
        assert_eq!(total.get(StatName::Combo), Some(20.0));
        assert_eq!(total.get(StatName::Accuracy), None);
        assert_eq!(total.len(), 3);
    }

    #[test]
    fn sum_of_nothing_is_empty() {
        let total = sum_modifiers(std::iter::empty());
        assert!(total.is_empty());
    }
}
