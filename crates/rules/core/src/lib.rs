//! Deterministic tabletop rules engine.
//!
//! `rules-core` turns ability scores, proficiency ranks, level, dice
//! expressions and an externally agreed seed into reproducible outcomes.
//! Every participant re-executing the same request derives the same numbers:
//! all randomness is a pure function of `(seed, index)` through an
//! [`RngOracle`], and nothing reads clocks, ambient entropy or global state.
//!
//! Data flows one way: [`rng`] feeds [`dice`], which feeds [`resolution`].
//! [`attributes`] and [`stats`] are dice-free and feed both the resolution
//! engine and external sheet composers.
pub mod attributes;
pub mod config;
pub mod dice;
pub mod error;
pub mod resolution;
pub mod rng;
pub mod stats;

pub use attributes::{
    Ability, AbilitySet, AttributeBlock, AttributeChoice, AttributeError, AttributeModifier,
    LimitedChoice, StartingBoosts, apply_level_up, build_starting_attributes,
};
pub use config::RulesConfig;
pub use dice::{DiceError, DiceExpression, ExpressionFault, Keep, RollResult, parse, roll, roll_with};
pub use error::{ErrorSeverity, RuleError};
pub use resolution::{
    AttackRequest, AttackResult, CheckRequest, CheckResult, CriticalRule, DamageResult,
    DegreeOfSuccess, InitiativeEntry, InputFault, NaturalRoll, ResolutionError, ResolutionOutcome,
    Resolver, RollMode, SkillCheckRequest, SkillCheckResult, order_initiative, resolve_attack,
    resolve_check, resolve_saving_throw, resolve_skill_check, roll_initiative,
};
pub use rng::{LegacyLcgRng, PcgRng, RngOracle, SeedPurpose};
pub use stats::{BulkLimits, ProficiencyRank};
