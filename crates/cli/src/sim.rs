//! Turn loop: load content, set up the bruto, then draw and resolve.

use std::io::Write;

use anyhow::{Context, Result};
use bruto_content::{Catalog, ConfigLoader, SkillLoader, WeaponLoader};
use bruto_core::{
    ActiveSkill, AttributeDeltas, AttributeName, Attributes, Bruto, BrutoId, CombatStats,
    EffectKind, EffectTarget, ModifierKind, NamedDelta, NoConditions, PcgSource,
    ResolutionBuilder, Skill, SkillEffect, TimingSet, Weapon, fold_skills, hit_speed_multiplier,
    percentage_of, select_active, total_damage, weapon_reach,
};
use serde::Serialize;

use crate::args::Cli;

/// One line of output.
#[derive(Debug, Serialize)]
pub struct TurnReport<'a> {
    pub turn: u64,
    pub hp: u32,
    pub weapon: Option<&'a str>,
    /// Strength after this turn's attribute deltas, plus weapon damage.
    pub damage: u32,
    pub hit_speed_multiplier: f64,
    pub reach: u32,
    pub stats: CombatStats,
    pub attributes: AttributeDeltas,
    pub named: Vec<NamedDelta>,
}

pub fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    let catalog = load_catalog(cli)?;
    let seed = cli.seed.unwrap_or(catalog.config.seed);

    let equipped = cli
        .weapons_equipped
        .iter()
        .map(|name| {
            catalog
                .weapon_named(name)
                .with_context(|| format!("unknown weapon '{name}'"))
        })
        .collect::<Result<Vec<&Weapon>>>()?;
    let skills = active_skills(&catalog, cli)?;

    let base = cli
        .base
        .iter()
        .fold(CombatStats::ZERO, |stats, arg| stats.with(arg.stat, arg.value));
    let bruto = acquire(
        Bruto::new(BrutoId(1), "Simulated", cli.attributes(), cli.hp),
        &base,
        &skills,
    )?;
    let conditions = |_: &Skill, effect: &SkillEffect| {
        effect
            .condition
            .as_deref()
            .is_some_and(|text| cli.conditions.iter().any(|c| c == text))
    };

    tracing::info!(
        seed,
        turns = cli.turns,
        weapons = equipped.len(),
        skills = skills.len(),
        "simulation started"
    );

    for turn in 1..=cli.turns {
        let mut rng = PcgSource::for_turn(seed, turn, bruto.id.0, 0);
        let weapon = select_active(&mut rng, equipped.iter().copied());

        let resolution = ResolutionBuilder::new(&bruto, &base)
            .skills(&skills)
            .weapon(weapon)
            .config(&catalog.config)
            .conditions(&conditions)
            .build()?;

        let mut fighter = bruto.clone();
        fighter.attributes = apply_deltas(bruto.attributes, &resolution.attributes);

        let report = TurnReport {
            turn,
            hp: bruto.max_hp,
            weapon: weapon.map(|w| w.name.as_str()),
            damage: total_damage(&fighter, weapon),
            hit_speed_multiplier: hit_speed_multiplier(weapon),
            reach: weapon_reach(weapon),
            stats: resolution.stats,
            attributes: resolution.attributes,
            named: resolution.named,
        };
        serde_json::to_writer(&mut *out, &report)?;
        writeln!(out)?;
    }

    Ok(())
}

fn load_catalog(cli: &Cli) -> Result<Catalog> {
    let mut catalog = match &cli.data {
        Some(dir) => Catalog::load(dir)?,
        None => Catalog::bundled()?,
    };
    if let Some(path) = &cli.config {
        catalog.config = ConfigLoader::load(path)?;
    }
    if let Some(path) = &cli.weapons {
        catalog.weapons = WeaponLoader::load(path)?;
    }
    if let Some(path) = &cli.skills {
        catalog.skills = SkillLoader::load(path)?;
    }
    Ok(catalog)
}

/// Resolves `--skill` flags and rejects mutually exclusive pairs.
fn active_skills<'a>(catalog: &'a Catalog, cli: &Cli) -> Result<Vec<ActiveSkill<'a>>> {
    let mut active: Vec<ActiveSkill<'a>> = Vec::new();
    for arg in &cli.skills_active {
        let skill = catalog
            .skill_named(&arg.name)
            .with_context(|| format!("unknown skill '{}'", arg.name))?;
        if let Some(held) = active
            .iter()
            .find(|held| held.skill.excludes(skill.id) || skill.excludes(held.skill.id))
        {
            anyhow::bail!("'{}' cannot be held with '{}'", skill.name, held.skill.name);
        }
        active.push(ActiveSkill::with_stacks(skill, arg.stacks));
    }
    Ok(active)
}

/// Applies immediate effects once, as when the skills were acquired.
///
/// Attribute deltas are rounded to the nearest point and floored at zero.
/// Health bonuses raise maximum hit points, percentages taken of the
/// starting maximum.
fn acquire(mut bruto: Bruto, base: &CombatStats, skills: &[ActiveSkill<'_>]) -> Result<Bruto> {
    let outcome = fold_skills(&bruto, base, skills, TimingSet::IMMEDIATE, &NoConditions)?;
    bruto.attributes = apply_deltas(bruto.attributes, &outcome.attributes);

    let max_hp = f64::from(bruto.max_hp);
    let bonus: f64 = outcome
        .named
        .iter()
        .filter(|delta| {
            delta.kind == EffectKind::HealthBonus && delta.target == EffectTarget::Owner
        })
        .map(|delta| health_bonus(max_hp, delta))
        .sum();
    bruto.max_hp = (max_hp + bonus).round().max(0.0) as u32;
    bruto.hp = bruto.max_hp;
    Ok(bruto)
}

fn health_bonus(max_hp: f64, delta: &NamedDelta) -> f64 {
    match delta.modifier {
        ModifierKind::Flat => delta.value,
        ModifierKind::Percentage => percentage_of(max_hp, delta.value),
        ModifierKind::Both => delta.value + percentage_of(max_hp, delta.value),
    }
}

fn apply_deltas(attributes: Attributes, deltas: &AttributeDeltas) -> Attributes {
    let adjust = |attribute| {
        let value = f64::from(attributes.get(attribute)) + deltas.get(attribute);
        value.round().max(0.0) as u32
    };
    Attributes::new(
        adjust(AttributeName::Strength),
        adjust(AttributeName::Speed),
        adjust(AttributeName::Agility),
        adjust(AttributeName::Resistance),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn run_with(args: &[&str]) -> Result<Vec<serde_json::Value>> {
        let cli = Cli::try_parse_from(std::iter::once("bruto-sim").chain(args.iter().copied()))?;
        let mut out = Vec::new();
        run(&cli, &mut out)?;
        String::from_utf8(out)?
            .lines()
            .map(|line| serde_json::from_str(line).map_err(Into::into))
            .collect()
    }

    #[test]
    fn prints_one_line_per_turn() {
        let lines = run_with(&["--turns", "4", "--weapon", "Baton"]).unwrap();

        assert_eq!(lines.len(), 4);
        for (turn, line) in lines.iter().enumerate() {
            assert_eq!(line["turn"], turn as u64 + 1);
            assert_eq!(line["weapon"], "Baton");
            assert_eq!(line["reach"], 2);
            assert_eq!(line["damage"], 2 + 6);
        }
    }

    #[test]
    fn bare_handed_without_weapons() {
        let lines = run_with(&["--turns", "1", "--base", "evasion=10"]).unwrap();
        assert!(lines[0]["weapon"].is_null());
        assert_eq!(lines[0]["hit_speed_multiplier"], 1.0);
        assert_eq!(lines[0]["stats"]["evasion"], 10.0);
    }

    #[test]
    fn same_seed_same_output() {
        let args = ["--seed", "17", "--turns", "10", "--weapon", "Axe", "--weapon", "Knife"];
        assert_eq!(run_with(&args).unwrap(), run_with(&args).unwrap());
    }

    #[test]
    fn immediate_effects_raise_attributes_once() {
        // Herculean Strength: +3 flat and +50% of 4 on strength
        let lines = run_with(&[
            "--turns",
            "1",
            "--strength",
            "4",
            "--skill",
            "Herculean Strength",
        ])
        .unwrap();
        assert_eq!(lines[0]["damage"], 9);
    }

    #[test]
    fn conditions_enable_conditional_effects() {
        let plain = run_with(&["--turns", "1", "--skill", "Counter Attack"]).unwrap();
        let heavy = run_with(&[
            "--turns",
            "1",
            "--skill",
            "Counter Attack",
            "--condition",
            "opponent wields a heavy weapon",
        ])
        .unwrap();
        assert_eq!(plain[0]["stats"]["reversal"], 10.0);
        assert_eq!(heavy[0]["stats"]["reversal"], 30.0);
    }

    #[test]
    fn exclusive_skills_are_rejected() {
        let err = run_with(&["--skill", "Immortal", "--skill", "Vitality"]).unwrap_err();
        assert!(err.to_string().contains("cannot be held"));
    }

    #[test]
    fn unknown_names_are_errors() {
        assert!(run_with(&["--weapon", "Lightsaber"]).is_err());
        assert!(run_with(&["--skill", "Flight"]).is_err());
    }

    #[test]
    fn passive_attribute_deltas_are_reported() {
        // Armor: -10% of speed 2 per stack
        let lines = run_with(&["--turns", "1", "--skill", "Armor:2"]).unwrap();
        assert_eq!(lines[0]["attributes"]["speed"], -0.4);
        assert_eq!(lines[0]["attributes"]["strength"], 0.0);
        assert_eq!(lines[0]["named"][0]["kind"], "armor_bonus");
        assert_eq!(lines[0]["named"][0]["value"], 50.0);
    }

    #[test]
    fn health_bonuses_raise_max_hp() {
        let plain = run_with(&["--turns", "1", "--hp", "60"]).unwrap();
        let vitality = run_with(&["--turns", "1", "--hp", "60", "--skill", "Vitality"]).unwrap();
        let immortal = run_with(&["--turns", "1", "--hp", "60", "--skill", "Immortal"]).unwrap();
        assert_eq!(plain[0]["hp"], 60);
        assert_eq!(vitality[0]["hp"], 90);
        assert_eq!(immortal[0]["hp"], 210);
    }

    #[test]
    fn passive_strength_feeds_damage() {
        let dir = tempfile::TempDir::new().unwrap();
        let skills = dir.path().join("skills.ron");
        std::fs::write(
            &skills,
            r#"(skills: [
                (
                    id: SkillId(1),
                    name: "Bulk",
                    effects: [(kind: stat_boost, timing: passive, stat: Some("strength"), value: 4.0, modifier: flat)],
                    implemented: true,
                ),
            ])"#,
        )
        .unwrap();
        let skills = skills.to_string_lossy().into_owned();

        let lines = run_with(&[
            "--turns",
            "1",
            "--strength",
            "5",
            "--skills",
            &skills,
            "--skill",
            "Bulk",
        ])
        .unwrap();

        assert_eq!(lines[0]["damage"], 9);
    }

    #[test]
    fn apply_deltas_rounds_and_floors() {
        let deltas = AttributeDeltas {
            strength: 1.6,
            speed: -10.0,
            ..AttributeDeltas::default()
        };
        let attributes = apply_deltas(Attributes::new(4, 3, 2, 2), &deltas);
        assert_eq!(attributes, Attributes::new(6, 0, 2, 2));
    }
}
