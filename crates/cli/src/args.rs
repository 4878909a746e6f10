//! Command line arguments.

use std::path::PathBuf;
use std::str::FromStr;

use bruto_core::{Attributes, StatName};
use clap::Parser;

/// Draws weapons and resolves combat stats for a bruto, one JSON line per turn
#[derive(Parser, Debug)]
#[command(name = "bruto-sim")]
#[command(version)]
pub struct Cli {
    /// Data directory with engine.toml, weapons.ron and skills.ron
    /// [default: bundled data]
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Engine configuration file, overriding the data directory's
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Weapon catalog, overriding the data directory's
    #[arg(long)]
    pub weapons: Option<PathBuf>,

    /// Skill catalog, overriding the data directory's
    #[arg(long)]
    pub skills: Option<PathBuf>,

    /// Combat seed, overriding the configured one
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of turns to simulate
    #[arg(long, default_value_t = 5)]
    pub turns: u64,

    #[arg(long, default_value_t = 2)]
    pub strength: u32,

    #[arg(long, default_value_t = 2)]
    pub speed: u32,

    #[arg(long, default_value_t = 2)]
    pub agility: u32,

    #[arg(long, default_value_t = 2)]
    pub resistance: u32,

    /// Maximum hit points
    #[arg(long, default_value_t = 60)]
    pub hp: u32,

    /// Base combat stat as STAT=VALUE (repeatable)
    #[arg(long = "base", value_name = "STAT=VALUE")]
    pub base: Vec<BaseStatArg>,

    /// Equipped weapon by name (repeatable)
    #[arg(long = "weapon", value_name = "NAME")]
    pub weapons_equipped: Vec<String>,

    /// Active skill by name with an optional stack count (repeatable)
    #[arg(long = "skill", value_name = "NAME[:STACKS]")]
    pub skills_active: Vec<SkillArg>,

    /// Condition text accepted for conditional effects (repeatable)
    #[arg(long = "condition", value_name = "TEXT")]
    pub conditions: Vec<String>,
}

impl Cli {
    pub fn attributes(&self) -> Attributes {
        Attributes::new(self.strength, self.speed, self.agility, self.resistance)
    }
}

/// `NAME[:STACKS]`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkillArg {
    pub name: String,
    pub stacks: u32,
}

impl FromStr for SkillArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, stacks) = match s.rsplit_once(':') {
            Some((name, stacks)) => {
                let stacks = stacks
                    .parse()
                    .map_err(|_| format!("invalid stack count '{stacks}'"))?;
                (name, stacks)
            }
            None => (s, 1),
        };
        if name.is_empty() {
            return Err("empty skill name".into());
        }
        Ok(Self {
            name: name.to_owned(),
            stacks,
        })
    }
}

/// `STAT=VALUE`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BaseStatArg {
    pub stat: StatName,
    pub value: f64,
}

impl FromStr for BaseStatArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (stat, value) = s
            .split_once('=')
            .ok_or_else(|| format!("expected STAT=VALUE, got '{s}'"))?;
        let stat = stat
            .trim()
            .parse()
            .map_err(|_| format!("unknown stat '{stat}'"))?;
        let value = value
            .trim()
            .parse()
            .map_err(|_| format!("invalid value '{value}'"))?;
        Ok(Self { stat, value })
    }
}
