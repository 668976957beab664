use crate::rng::RngOracle;

use super::{CriticalRule, ResolutionOutcome, roll_d20};

/// A skill check, optionally against a DC.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SkillCheckRequest {
    pub skill_modifier: i32,
    pub circumstance_bonus: i32,
    pub item_bonus: i32,
    /// Without a DC the check is rolled but not graded.
    pub dc: Option<i32>,
    /// Secret checks are graded by the GM out of band.
    pub is_secret: bool,
}

impl SkillCheckRequest {
    pub const fn new(skill_modifier: i32) -> Self {
        Self {
            skill_modifier,
            circumstance_bonus: 0,
            item_bonus: 0,
            dc: None,
            is_secret: false,
        }
    }

    pub const fn with_bonuses(mut self, circumstance_bonus: i32, item_bonus: i32) -> Self {
        self.circumstance_bonus = circumstance_bonus;
        self.item_bonus = item_bonus;
        self
    }

    pub const fn against(mut self, dc: i32) -> Self {
        self.dc = Some(dc);
        self
    }

    pub const fn secret(mut self) -> Self {
        self.is_secret = true;
        self
    }

    pub const fn total_bonus(&self) -> i32 {
        self.skill_modifier + self.circumstance_bonus + self.item_bonus
    }
}

/// Result of a skill check.
///
/// `outcome` is `None` when the check had no DC or was secret; that is a
/// complete result, not a failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillCheckResult {
    pub roll: u32,
    pub total: i32,
    pub outcome: Option<ResolutionOutcome>,
}

impl SkillCheckResult {
    pub const fn is_determined(&self) -> bool {
        self.outcome.is_some()
    }
}

pub(super) fn resolve<R: RngOracle + ?Sized>(
    rng: &R,
    rule: CriticalRule,
    request: &SkillCheckRequest,
    seed: &str,
) -> SkillCheckResult {
    let roll = roll_d20(rng, seed);
    let bonus = request.total_bonus();

    let outcome = match request.dc {
        Some(dc) if !request.is_secret => Some(ResolutionOutcome::grade(roll, bonus, dc, rule)),
        _ => None,
    };

    tracing::debug!(
        seed,
        roll,
        total = roll as i32 + bonus,
        dc = ?request.dc,
        secret = request.is_secret,
        degree = ?outcome.map(|o| o.degree),
        "resolved skill check"
    );

    SkillCheckResult {
        roll,
        total: roll as i32 + bonus,
        outcome,
    }
}
