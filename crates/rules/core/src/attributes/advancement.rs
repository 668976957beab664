//! Character creation and level advancement.
//!
//! Both events apply a batch of boosts to a block and only then check the
//! resulting scores against [`RulesConfig::attribute_bounds`]. A failing
//! event returns an error and no block.

use crate::config::RulesConfig;

use super::{Ability, AttributeBlock, AttributeError, AttributeModifier};

/// A modifier together with the ability the player applied it to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeChoice {
    pub modifier: AttributeModifier,
    pub target: Ability,
}

impl AttributeChoice {
    pub const fn new(modifier: AttributeModifier, target: Ability) -> Self {
        Self { modifier, target }
    }

    pub const fn free(target: Ability) -> Self {
        Self::new(AttributeModifier::Free, target)
    }

    /// A fixed modifier applied to its own ability.
    pub fn fixed(ability: Ability) -> Self {
        Self::new(AttributeModifier::from(ability), ability)
    }
}

/// Everything that shapes a new character's scores, in application order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StartingBoosts {
    pub free: Vec<AttributeChoice>,
    pub ancestry_boosts: Vec<AttributeChoice>,
    pub ancestry_flaws: Vec<AttributeChoice>,
    pub background_boosts: Vec<AttributeChoice>,
}

/// Build a level 1 block.
///
/// Every score starts at [`RulesConfig::STARTING_SCORE`]. Free boosts are
/// applied first, then ancestry boosts, ancestry flaws and background boosts.
pub fn build_starting_attributes(
    boosts: &StartingBoosts,
    config: &RulesConfig,
) -> Result<AttributeBlock, AttributeError> {
    if boosts.free.len() < RulesConfig::CREATION_FREE_BOOSTS {
        return Err(AttributeError::NotEnoughFreeBoosts {
            required: RulesConfig::CREATION_FREE_BOOSTS,
            provided: boosts.free.len(),
        });
    }

    let mut block = AttributeBlock::default();
    for choice in boosts.free.iter().chain(&boosts.ancestry_boosts) {
        block.boost(&choice.modifier, choice.target)?;
    }
    for choice in &boosts.ancestry_flaws {
        block.reduce(&choice.modifier, choice.target)?;
    }
    for choice in &boosts.background_boosts {
        block.boost(&choice.modifier, choice.target)?;
    }

    block.validate(config)?;
    tracing::debug!(scores = ?block.scores(), "built starting attributes");
    Ok(block)
}

/// Number of boosts granted on reaching `level`.
pub const fn boosts_for_level(level: u32) -> usize {
    if level % RulesConfig::BOOST_LEVEL_INTERVAL == 0 {
        RulesConfig::BOOSTS_PER_INTERVAL
    } else {
        0
    }
}

/// Advance `block` from `current_level` to `new_level`.
///
/// Levels go up one at a time and stop at [`RulesConfig::MAX_LEVEL`]. Every
/// fifth level grants exactly [`RulesConfig::BOOSTS_PER_INTERVAL`] boosts;
/// other levels grant none.
pub fn apply_level_up(
    block: &AttributeBlock,
    current_level: u32,
    new_level: u32,
    boosts: &[AttributeChoice],
    config: &RulesConfig,
) -> Result<AttributeBlock, AttributeError> {
    if current_level == 0
        || current_level.checked_add(1) != Some(new_level)
        || new_level > RulesConfig::MAX_LEVEL
    {
        return Err(AttributeError::InvalidLevel {
            current: current_level,
            requested: new_level,
        });
    }

    let expected = boosts_for_level(new_level);
    if boosts.len() != expected {
        return Err(AttributeError::WrongBoostCount {
            level: new_level,
            expected,
            provided: boosts.len(),
        });
    }

    let mut next = *block;
    for choice in boosts {
        next.boost(&choice.modifier, choice.target)?;
    }
    next.validate(config)?;

    tracing::debug!(level = new_level, scores = ?next.scores(), "applied level up");
    Ok(next)
}
