//! Weapon draw engine.
//!
//! Each turn a bruto may pull one of its equipped weapons. Every weapon rolls
//! its own independent trial against its draw chance; among the weapons that
//! pass, one is chosen uniformly. If none passes the bruto fights bare-handed.

use crate::env::RandomSource;

use super::Weapon;

/// Whether `weapon` is drawn this turn.
///
/// Bare hands (`None`) are always available and consume no sample. A weapon
/// consumes one sample and is drawn when `sample <= draw_chance`.
pub fn should_draw<R: RandomSource + ?Sized>(rng: &mut R, weapon: Option<&Weapon>) -> bool {
    let Some(weapon) = weapon else {
        return true;
    };
    let sample = rng.sample_percent();
    let drawn = sample <= weapon.draw_chance;
    tracing::trace!(
        weapon = %weapon.id,
        sample,
        draw_chance = weapon.draw_chance,
        drawn,
        "weapon draw trial"
    );
    drawn
}

/// Selects the weapon wielded this turn.
///
/// Returns `None` when nothing is equipped or no weapon passes its trial; the
/// caller then treats the bruto as bare-handed. Trials run in the given
/// order, then one more sample picks among the survivors if there are
/// several. The pick is not weighted by draw chance.
pub fn select_active<'a, R: RandomSource + ?Sized>(
    rng: &mut R,
    equipped: impl IntoIterator<Item = &'a Weapon>,
) -> Option<&'a Weapon> {
    let survivors: Vec<&Weapon> = equipped
        .into_iter()
        .filter(|weapon| should_draw(rng, Some(*weapon)))
        .collect();

    let selected = match survivors.as_slice() {
        [] => None,
        [only] => Some(*only),
        many => Some(many[rng.pick_index(many.len())]),
    };

    tracing::debug!(
        survivors = survivors.len(),
        selected = ?selected.map(|w| w.id),
        "active weapon selected"
    );
    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{PcgSource, RandSource, ScriptedSource};
    use crate::weapon::WeaponId;

    const TRIALS: usize = 1000;

    fn weapon(id: u16, draw_chance: f64) -> Weapon {
        Weapon::new(WeaponId(id), format!("w{id}")).with_draw_chance(draw_chance)
    }

    #[test]
    fn bare_hands_always_draw_without_sampling() {
        let mut rng = ScriptedSource::new([99.0]);
        for _ in 0..TRIALS {
            assert!(should_draw(&mut rng, None));
        }
        assert_eq!(rng.consumed(), 0);
    }

    #[test]
    fn certain_and_impossible_weapons() {
        let always = weapon(1, 100.0);
        let never = weapon(2, 0.0);
        let mut pcg = PcgSource::new(2024);
        let mut chacha = RandSource::seeded(2024);

        for _ in 0..TRIALS {
            assert!(should_draw(&mut pcg, Some(&always)));
            assert!(should_draw(&mut chacha, Some(&always)));
            assert!(!should_draw(&mut pcg, Some(&never)));
            assert!(!should_draw(&mut chacha, Some(&never)));
        }
    }

    #[test]
    fn threshold_is_inclusive() {
        let never = weapon(1, 0.0);
        let half = weapon(2, 50.0);
        let mut rng = ScriptedSource::new([0.0, 50.0, 50.5]);
        assert!(should_draw(&mut rng, Some(&never)));
        assert!(should_draw(&mut rng, Some(&half)));
        assert!(!should_draw(&mut rng, Some(&half)));
    }

    #[test]
    fn empty_equipment_selects_nothing() {
        let mut rng = PcgSource::new(1);
        assert!(select_active(&mut rng, &Vec::<Weapon>::new()).is_none());
    }

    #[test]
    fn only_the_certain_weapon_survives() {
        let equipped = [weapon(1, 100.0), weapon(2, 0.0)];
        let mut rng = PcgSource::new(7);
        for _ in 0..TRIALS {
            let selected = select_active(&mut rng, &equipped).map(|w| w.id);
            assert_eq!(selected, Some(WeaponId(1)));
        }
    }

    #[test]
    fn impossible_weapons_leave_bare_hands() {
        let equipped = [weapon(1, 0.0), weapon(2, 0.0)];
        let mut rng = PcgSource::new(11);
        for _ in 0..TRIALS {
            assert!(select_active(&mut rng, &equipped).is_none());
        }
    }

    #[test]
    fn survivors_are_picked_uniformly() {
        // Both weapons pass (10 <= 100, 20 <= 30); the pick sample 60 lands
        // in the upper half of two survivors.
        let equipped = [weapon(1, 100.0), weapon(2, 30.0)];
        let mut rng = ScriptedSource::new([10.0, 20.0, 60.0]);
        let selected = select_active(&mut rng, &equipped).map(|w| w.id);
        assert_eq!(selected, Some(WeaponId(2)));
        assert_eq!(rng.consumed(), 3);
    }

    #[test]
    fn selection_is_not_weighted_by_draw_chance() {
        let equipped = [weapon(1, 100.0), weapon(2, 100.0), weapon(3, 100.0)];
        let mut rng = PcgSource::new(99);
        let mut counts = [0usize; 3];
        for _ in 0..3000 {
            let id = select_active(&mut rng, &equipped).map(|w| w.id.0).unwrap();
            counts[usize::from(id) - 1] += 1;
        }
        for count in counts {
            assert!((800..1200).contains(&count), "skewed pick: {counts:?}");
        }
    }
}
