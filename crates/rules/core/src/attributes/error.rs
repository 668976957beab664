use crate::error::{ErrorSeverity, RuleError};

use super::{Ability, AttributeModifier};

/// Errors raised while applying boosts and flaws.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttributeError {
    #[error("modifier {modifier} cannot target {target}")]
    InvalidModifierTarget {
        modifier: AttributeModifier,
        target: Ability,
    },

    #[error("limited choice needs at least 2 abilities, got {count}")]
    LimitedChoiceTooSmall { count: u32 },

    #[error("character creation needs at least {required} free boosts, got {provided}")]
    NotEnoughFreeBoosts { required: usize, provided: usize },

    #[error("cannot advance from level {current} to level {requested}")]
    InvalidLevel { current: u32, requested: u32 },

    #[error("level {level} grants {expected} boosts, got {provided}")]
    WrongBoostCount {
        level: u32,
        expected: usize,
        provided: usize,
    },

    #[error("{ability} score {score} is outside {min}..={max}")]
    ScoreOutOfRange {
        ability: Ability,
        score: i32,
        min: i32,
        max: i32,
    },
}

impl RuleError for AttributeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidModifierTarget { .. } | Self::LimitedChoiceTooSmall { .. } => {
                ErrorSeverity::Validation
            }
            Self::NotEnoughFreeBoosts { .. }
            | Self::InvalidLevel { .. }
            | Self::WrongBoostCount { .. }
            | Self::ScoreOutOfRange { .. } => ErrorSeverity::Rule,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidModifierTarget { .. } => "ATTRIBUTE_INVALID_MODIFIER_TARGET",
            Self::LimitedChoiceTooSmall { .. } => "ATTRIBUTE_LIMITED_CHOICE_TOO_SMALL",
            Self::NotEnoughFreeBoosts { .. } => "ATTRIBUTE_NOT_ENOUGH_FREE_BOOSTS",
            Self::InvalidLevel { .. } => "ATTRIBUTE_INVALID_LEVEL",
            Self::WrongBoostCount { .. } => "ATTRIBUTE_WRONG_BOOST_COUNT",
            Self::ScoreOutOfRange { .. } => "ATTRIBUTE_SCORE_OUT_OF_RANGE",
        }
    }
}
