//! Attack resolution.

use arrayvec::ArrayVec;

use crate::dice::{DiceExpression, RollResult, roll_with};
use crate::rng::{RngOracle, SeedPurpose};

use super::{CriticalRule, InputFault, ResolutionError, ResolutionOutcome, roll_d20};

/// How many d20s an attack rolls and which face counts.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum RollMode {
    #[default]
    Normal,
    /// Roll twice, keep the higher face.
    Advantage,
    /// Roll twice, keep the lower face.
    Disadvantage,
}

impl RollMode {
    pub fn from_flags(has_advantage: bool, has_disadvantage: bool) -> Result<Self, ResolutionError> {
        match (has_advantage, has_disadvantage) {
            (false, false) => Ok(Self::Normal),
            (true, false) => Ok(Self::Advantage),
            (false, true) => Ok(Self::Disadvantage),
            (true, true) => Err(ResolutionError::InvalidInput(
                InputFault::AdvantageAndDisadvantage,
            )),
        }
    }
}

/// An attack against a fixed armor class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackRequest {
    pub attack_bonus: i32,
    pub target_ac: i32,
    /// Damage rolled on a hit.
    pub damage: Option<DiceExpression>,
    /// Subtracted from the (possibly doubled) damage total.
    pub damage_reduction: i32,
    pub has_advantage: bool,
    pub has_disadvantage: bool,
}

impl AttackRequest {
    pub const fn new(attack_bonus: i32, target_ac: i32) -> Self {
        Self {
            attack_bonus,
            target_ac,
            damage: None,
            damage_reduction: 0,
            has_advantage: false,
            has_disadvantage: false,
        }
    }

    pub const fn with_damage(mut self, damage: DiceExpression) -> Self {
        self.damage = Some(damage);
        self
    }

    /// Parse `notation` as the damage expression.
    pub fn with_damage_notation(self, notation: &str) -> Result<Self, ResolutionError> {
        Ok(self.with_damage(crate::dice::parse(notation)?))
    }

    pub const fn with_damage_reduction(mut self, reduction: i32) -> Self {
        self.damage_reduction = reduction;
        self
    }

    pub const fn with_advantage(mut self) -> Self {
        self.has_advantage = true;
        self
    }

    pub const fn with_disadvantage(mut self) -> Self {
        self.has_disadvantage = true;
        self
    }
}

/// Damage dealt by a hit.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageResult {
    pub roll: RollResult,
    /// Roll total, doubled on a critical hit.
    pub total: i32,
    pub reduction: i32,
    /// `max(0, total - reduction)`
    pub final_damage: i32,
}

/// Result of [`resolve_attack`](super::resolve_attack).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackResult {
    pub mode: RollMode,
    /// Every d20 face rolled, in seed order.
    pub faces: ArrayVec<u32, 2>,
    pub outcome: ResolutionOutcome,
    /// Present only on a hit with a damage expression.
    pub damage: Option<DamageResult>,
}

impl AttackResult {
    /// The d20 face that counted.
    pub const fn attack_roll(&self) -> u32 {
        self.outcome.roll
    }

    pub const fn total(&self) -> i32 {
        self.outcome.total
    }

    pub const fn is_hit(&self) -> bool {
        self.outcome.is_success()
    }

    pub const fn is_critical(&self) -> bool {
        self.outcome.is_critical_success()
    }

    pub const fn is_critical_miss(&self) -> bool {
        self.outcome.is_critical_failure()
    }
}

pub(super) fn resolve<R: RngOracle + ?Sized>(
    rng: &R,
    rule: CriticalRule,
    request: &AttackRequest,
    seed: &str,
) -> Result<AttackResult, ResolutionError> {
    let mode = RollMode::from_flags(request.has_advantage, request.has_disadvantage)?;

    let mut faces = ArrayVec::new();
    let face = match mode {
        RollMode::Normal => {
            let face = roll_d20(rng, seed);
            faces.push(face);
            face
        }
        RollMode::Advantage | RollMode::Disadvantage => {
            let first = roll_d20(rng, &SeedPurpose::FirstOfPair.derive(seed));
            let second = roll_d20(rng, &SeedPurpose::SecondOfPair.derive(seed));
            faces.push(first);
            faces.push(second);
            if mode == RollMode::Advantage {
                first.max(second)
            } else {
                first.min(second)
            }
        }
    };

    let outcome = ResolutionOutcome::grade(face, request.attack_bonus, request.target_ac, rule);

    let damage = match request.damage {
        Some(expr) if outcome.is_success() => Some(roll_damage(
            rng,
            &expr,
            seed,
            outcome.is_critical_success(),
            request.damage_reduction,
        )),
        _ => None,
    };

    tracing::debug!(
        seed,
        %mode,
        ?faces,
        total = outcome.total,
        target_ac = request.target_ac,
        degree = %outcome.degree,
        damage = ?damage.as_ref().map(|d| d.final_damage),
        "resolved attack"
    );

    Ok(AttackResult {
        mode,
        faces,
        outcome,
        damage,
    })
}

fn roll_damage<R: RngOracle + ?Sized>(
    rng: &R,
    expr: &DiceExpression,
    seed: &str,
    is_critical: bool,
    reduction: i32,
) -> DamageResult {
    let roll = roll_with(rng, expr, &SeedPurpose::Damage.derive(seed));
    let total = if is_critical {
        roll.total().saturating_mul(2)
    } else {
        roll.total()
    };

    DamageResult {
        roll,
        total,
        reduction,
        final_damage: total.saturating_sub(reduction).max(0),
    }
}
