//! Dice notation and seeded evaluation.
//!
//! [`parse`] turns text like `"2d6+3"` into a validated [`DiceExpression`];
//! [`roll`] evaluates it against a seed. Parsing and rolling are separate so
//! callers can reject bad notation before committing to a seed.
mod expression;
mod roll;

pub use expression::{DiceError, DiceExpression, ExpressionFault, Keep, parse};
pub use roll::{RollResult, Rolls, roll, roll_with};

use crate::config::RulesConfig;

/// Capacity of a single roll's face buffer.
pub(crate) const MAX_ROLLS: usize = RulesConfig::MAX_DICE_COUNT as usize;
