//! Resolution engine.
//!
//! Turns bonuses, targets and a seed into graded outcomes. Every operation
//! is a single-shot pure computation: the same request and seed always give
//! the same result, and nothing is retained between calls.
//!
//! # Seeds
//!
//! A plain roll draws from the seed itself. Advantage and disadvantage draw
//! their two d20s from `seed_1` and `seed_2`, and attack damage from
//! `seed_damage` (see [`SeedPurpose`](crate::rng::SeedPurpose)).
//!
//! # Entry points
//!
//! The free functions use [`PcgRng`] and [`RulesConfig::default`]. Use a
//! [`Resolver`] to pick another generator or critical rule.

mod attack;
mod check;
mod degree;
mod error;
mod initiative;
mod outcome;
mod save;
mod skill;

pub use attack::{AttackRequest, AttackResult, DamageResult, RollMode};
pub use check::{CheckRequest, CheckResult};
pub use degree::{CriticalRule, DegreeOfSuccess, NaturalRoll};
pub use error::{InputFault, ResolutionError};
pub use initiative::{InitiativeEntry, order_initiative};
pub use outcome::ResolutionOutcome;
pub use skill::{SkillCheckRequest, SkillCheckResult};

use crate::config::RulesConfig;
use crate::dice::{DiceExpression, roll_with};
use crate::rng::{PcgRng, RngOracle};

/// A generator plus the rules configuration it resolves under.
#[derive(Clone, Debug, Default)]
pub struct Resolver<R: RngOracle = PcgRng> {
    rng: R,
    config: RulesConfig,
}

impl Resolver<PcgRng> {
    pub fn new(config: RulesConfig) -> Self {
        Self::with_rng(PcgRng, config)
    }
}

impl<R: RngOracle> Resolver<R> {
    pub fn with_rng(rng: R, config: RulesConfig) -> Self {
        Self { rng, config }
    }

    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Resolve an attack. Fails before rolling when both advantage and
    /// disadvantage are set.
    pub fn attack(&self, request: &AttackRequest, seed: &str) -> Result<AttackResult, ResolutionError> {
        attack::resolve(&self.rng, self.config.critical_rule, request, seed)
    }

    pub fn saving_throw(&self, modifier: i32, dc: i32, seed: &str) -> ResolutionOutcome {
        save::resolve(&self.rng, self.config.critical_rule, modifier, dc, seed)
    }

    pub fn skill_check(&self, request: &SkillCheckRequest, seed: &str) -> SkillCheckResult {
        skill::resolve(&self.rng, self.config.critical_rule, request, seed)
    }

    /// Roll any expression with an extra modifier and grade it when a DC is
    /// given.
    pub fn check(&self, request: &CheckRequest, seed: &str) -> CheckResult {
        check::resolve(&self.rng, self.config.critical_rule, request, seed)
    }

    pub fn initiative<T>(&self, participant: T, bonus: i32, seed: &str) -> InitiativeEntry<T> {
        initiative::roll(&self.rng, participant, bonus, seed)
    }
}

pub fn resolve_attack(request: &AttackRequest, seed: &str) -> Result<AttackResult, ResolutionError> {
    Resolver::new(RulesConfig::default()).attack(request, seed)
}

pub fn resolve_saving_throw(modifier: i32, dc: i32, seed: &str) -> ResolutionOutcome {
    Resolver::new(RulesConfig::default()).saving_throw(modifier, dc, seed)
}

pub fn resolve_skill_check(request: &SkillCheckRequest, seed: &str) -> SkillCheckResult {
    Resolver::new(RulesConfig::default()).skill_check(request, seed)
}

pub fn resolve_check(request: &CheckRequest, seed: &str) -> CheckResult {
    Resolver::new(RulesConfig::default()).check(request, seed)
}

pub fn roll_initiative<T>(participant: T, bonus: i32, seed: &str) -> InitiativeEntry<T> {
    Resolver::new(RulesConfig::default()).initiative(participant, bonus, seed)
}

/// Face of one d20 drawn from `seed`.
fn roll_d20<R: RngOracle + ?Sized>(rng: &R, seed: &str) -> u32 {
    roll_with(rng, &DiceExpression::D20, seed).dice_total() as u32
}
