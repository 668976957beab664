use core::fmt;

use super::{Ability, AbilitySet, AttributeError};

/// Which abilities a boost or flaw may be applied to.
///
/// A fixed-ability modifier only targets that ability, `Free` targets any,
/// and `LimitedChoice` targets any ability in its set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttributeModifier {
    Free,
    Strength,
    Dexterity,
    Constitution,
    Intelligence,
    Wisdom,
    Charisma,
    LimitedChoice(LimitedChoice),
}

impl AttributeModifier {
    /// Whether this modifier may be applied to `target`.
    pub fn authorizes(&self, target: Ability) -> bool {
        match self {
            Self::Free => true,
            Self::LimitedChoice(choice) => choice.contains(target),
            fixed => fixed.fixed_ability() == Some(target),
        }
    }

    /// The single ability of a fixed modifier.
    pub const fn fixed_ability(&self) -> Option<Ability> {
        match self {
            Self::Strength => Some(Ability::Strength),
            Self::Dexterity => Some(Ability::Dexterity),
            Self::Constitution => Some(Ability::Constitution),
            Self::Intelligence => Some(Ability::Intelligence),
            Self::Wisdom => Some(Ability::Wisdom),
            Self::Charisma => Some(Ability::Charisma),
            Self::Free | Self::LimitedChoice(_) => None,
        }
    }

    /// Fails with `InvalidModifierTarget` unless [`authorizes`](Self::authorizes).
    pub fn authorize(&self, target: Ability) -> Result<(), AttributeError> {
        if self.authorizes(target) {
            Ok(())
        } else {
            Err(AttributeError::InvalidModifierTarget {
                modifier: *self,
                target,
            })
        }
    }
}

impl From<Ability> for AttributeModifier {
    fn from(ability: Ability) -> Self {
        match ability {
            Ability::Strength => Self::Strength,
            Ability::Dexterity => Self::Dexterity,
            Ability::Constitution => Self::Constitution,
            Ability::Intelligence => Self::Intelligence,
            Ability::Wisdom => Self::Wisdom,
            Ability::Charisma => Self::Charisma,
        }
    }
}

impl fmt::Display for AttributeModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Free => f.write_str("free"),
            Self::LimitedChoice(choice) => write!(f, "one of {choice}"),
            fixed => match fixed.fixed_ability() {
                Some(ability) => write!(f, "{ability}"),
                None => Ok(()),
            },
        }
    }
}

/// A set of at least two abilities one of which may be chosen.
///
/// Serialized as a list of abilities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Ability>", into = "Vec<Ability>")
)]
pub struct LimitedChoice(AbilitySet);

impl LimitedChoice {
    pub const MIN_CHOICES: u32 = 2;

    pub fn new(choices: AbilitySet) -> Result<Self, AttributeError> {
        let count = choices.bits().count_ones();
        if count < Self::MIN_CHOICES {
            return Err(AttributeError::LimitedChoiceTooSmall { count });
        }
        Ok(Self(choices))
    }

    pub const fn choices(&self) -> AbilitySet {
        self.0
    }

    pub const fn contains(&self, ability: Ability) -> bool {
        self.0.has(ability)
    }
}

impl TryFrom<Vec<Ability>> for LimitedChoice {
    type Error = AttributeError;

    fn try_from(abilities: Vec<Ability>) -> Result<Self, Self::Error> {
        Self::new(abilities.into_iter().collect())
    }
}

impl From<LimitedChoice> for Vec<Ability> {
    fn from(choice: LimitedChoice) -> Self {
        choice.0.abilities().collect()
    }
}

impl fmt::Display for LimitedChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, ability) in self.0.abilities().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            write!(f, "{ability}")?;
        }
        Ok(())
    }
}
