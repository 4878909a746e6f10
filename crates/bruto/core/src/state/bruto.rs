use std::fmt;

use crate::stats::AttributeName;

/// Unique identifier for a bruto.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BrutoId(pub u32);

impl fmt::Display for BrutoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The four innate attributes of a bruto.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attributes {
    pub strength: u32,
    pub speed: u32,
    pub agility: u32,
    pub resistance: u32,
}

impl Attributes {
    pub fn new(strength: u32, speed: u32, agility: u32, resistance: u32) -> Self {
        Self {
            strength,
            speed,
            agility,
            resistance,
        }
    }

    /// Returns the value of a single attribute.
    pub fn get(&self, attribute: AttributeName) -> u32 {
        match attribute {
            AttributeName::Strength => self.strength,
            AttributeName::Speed => self.speed,
            AttributeName::Agility => self.agility,
            AttributeName::Resistance => self.resistance,
        }
    }
}

impl Default for Attributes {
    /// Attributes of a freshly created level 1 bruto.
    fn default() -> Self {
        Self::new(2, 2, 2, 2)
    }
}

/// A combatant.
///
/// Level, experience and hit points are carried for the turn resolver; the
/// stat engine itself only reads [`Attributes`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bruto {
    pub id: BrutoId,
    pub name: String,
    pub level: u32,
    pub xp: u32,
    pub hp: u32,
    pub max_hp: u32,
    pub attributes: Attributes,
}

impl Bruto {
    /// Creates a level 1 bruto at full health.
    pub fn new(id: BrutoId, name: impl Into<String>, attributes: Attributes, max_hp: u32) -> Self {
        Self {
            id,
            name: name.into(),
            level: 1,
            xp: 0,
            hp: max_hp,
            max_hp,
            attributes,
        }
    }

    pub fn with_level(mut self, level: u32, xp: u32) -> Self {
        self.level = level;
        self.xp = xp;
        self
    }

    pub fn strength(&self) -> u32 {
        self.attributes.strength
    }
}
