use bitflags::bitflags;

/// The six abilities of a character.
///
/// Parses from either the full name or the three-letter abbreviation,
/// case-insensitively (`"Strength"`, `"str"`, `"STR"`).
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Ability {
    #[strum(to_string = "strength", serialize = "str")]
    Strength,
    #[strum(to_string = "dexterity", serialize = "dex")]
    Dexterity,
    #[strum(to_string = "constitution", serialize = "con")]
    Constitution,
    #[strum(to_string = "intelligence", serialize = "int")]
    Intelligence,
    #[strum(to_string = "wisdom", serialize = "wis")]
    Wisdom,
    #[strum(to_string = "charisma", serialize = "cha")]
    Charisma,
}

impl Ability {
    /// All abilities in sheet order.
    pub const ALL: [Ability; 6] = [
        Ability::Strength,
        Ability::Dexterity,
        Ability::Constitution,
        Ability::Intelligence,
        Ability::Wisdom,
        Ability::Charisma,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn flag(self) -> AbilitySet {
        match self {
            Ability::Strength => AbilitySet::STRENGTH,
            Ability::Dexterity => AbilitySet::DEXTERITY,
            Ability::Constitution => AbilitySet::CONSTITUTION,
            Ability::Intelligence => AbilitySet::INTELLIGENCE,
            Ability::Wisdom => AbilitySet::WISDOM,
            Ability::Charisma => AbilitySet::CHARISMA,
        }
    }
}

bitflags! {
    /// A set of abilities, one bit each.
    ///
    /// Used both for the "partial boost pending" flags of an
    /// [`AttributeBlock`](super::AttributeBlock) and for the choices of a
    /// [`LimitedChoice`](super::LimitedChoice) modifier.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct AbilitySet: u8 {
        const STRENGTH     = 1 << 0;
        const DEXTERITY    = 1 << 1;
        const CONSTITUTION = 1 << 2;
        const INTELLIGENCE = 1 << 3;
        const WISDOM       = 1 << 4;
        const CHARISMA     = 1 << 5;
    }
}

impl AbilitySet {
    pub const fn has(self, ability: Ability) -> bool {
        self.contains(ability.flag())
    }

    /// Members in sheet order.
    pub fn abilities(self) -> impl Iterator<Item = Ability> {
        Ability::ALL.into_iter().filter(move |a| self.has(*a))
    }
}

impl From<Ability> for AbilitySet {
    fn from(ability: Ability) -> Self {
        ability.flag()
    }
}

impl FromIterator<Ability> for AbilitySet {
    fn from_iter<I: IntoIterator<Item = Ability>>(iter: I) -> Self {
        iter.into_iter()
            .fold(AbilitySet::empty(), |set, a| set | a.flag())
    }
}
