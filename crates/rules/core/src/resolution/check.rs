use crate::dice::{DiceExpression, RollResult, roll_with};
use crate::rng::RngOracle;

use super::{CriticalRule, DegreeOfSuccess, NaturalRoll};

/// A roll of any expression plus a flat modifier, optionally against a DC.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CheckRequest {
    pub expression: DiceExpression,
    /// Added on top of the expression's own modifier.
    pub modifier: i32,
    pub dc: Option<i32>,
}

impl CheckRequest {
    pub const fn new(expression: DiceExpression) -> Self {
        Self {
            expression,
            modifier: 0,
            dc: None,
        }
    }

    pub const fn with_modifier(mut self, modifier: i32) -> Self {
        self.modifier = modifier;
        self
    }

    pub const fn against(mut self, dc: i32) -> Self {
        self.dc = Some(dc);
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CheckResult {
    pub roll: RollResult,
    /// `roll.total + modifier`
    pub total: i32,
    /// Only a bare `1d20` can roll a natural.
    pub natural: Option<NaturalRoll>,
    /// `None` without a DC.
    pub degree: Option<DegreeOfSuccess>,
}

pub(super) fn resolve<R: RngOracle + ?Sized>(
    rng: &R,
    rule: CriticalRule,
    request: &CheckRequest,
    seed: &str,
) -> CheckResult {
    let roll = roll_with(rng, &request.expression, seed);
    let total = roll.total().saturating_add(request.modifier);

    let natural = if request.expression.is_single_d20() {
        NaturalRoll::from_face(roll.dice_total() as u32)
    } else {
        None
    };
    let degree = request.dc.map(|dc| rule.grade(total, dc, natural));

    tracing::debug!(
        seed,
        expression = %request.expression,
        total,
        dc = ?request.dc,
        ?degree,
        "resolved check"
    );

    CheckResult {
        roll,
        total,
        natural,
        degree,
    }
}
