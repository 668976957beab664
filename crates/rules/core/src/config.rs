//! Rules configuration constants and tunable parameters.

use core::ops::RangeInclusive;

use crate::resolution::CriticalRule;

/// Rules configuration: compile-time limits plus the few values a table may tune.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RulesConfig {
    /// Lowest legal ability score after a creation or level-up event.
    pub attribute_min: i32,

    /// Highest legal ability score after a creation or level-up event.
    pub attribute_max: i32,

    /// How natural 20s and natural 1s move the degree of success.
    pub critical_rule: CriticalRule,
}

impl RulesConfig {
    // ===== dice =====
    pub const MIN_DICE_COUNT: u32 = 1;
    pub const MAX_DICE_COUNT: u32 = 100;
    pub const MIN_DIE_SIDES: u32 = 2;
    pub const MAX_DIE_SIDES: u32 = 1000;

    // ===== attributes =====
    /// Scores at or above this only move on every second boost.
    pub const PARTIAL_BOOST_THRESHOLD: i32 = 18;
    pub const STARTING_SCORE: i32 = 10;
    pub const CREATION_FREE_BOOSTS: usize = 4;

    // ===== advancement =====
    pub const MAX_LEVEL: u32 = 20;
    pub const BOOST_LEVEL_INTERVAL: u32 = 5;
    pub const BOOSTS_PER_INTERVAL: usize = 4;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_ATTRIBUTE_MIN: i32 = 8;
    pub const DEFAULT_ATTRIBUTE_MAX: i32 = 30;

    pub fn new() -> Self {
        Self {
            attribute_min: Self::DEFAULT_ATTRIBUTE_MIN,
            attribute_max: Self::DEFAULT_ATTRIBUTE_MAX,
            critical_rule: CriticalRule::default(),
        }
    }

    pub fn with_critical_rule(mut self, critical_rule: CriticalRule) -> Self {
        self.critical_rule = critical_rule;
        self
    }

    pub fn with_attribute_bounds(mut self, min: i32, max: i32) -> Self {
        self.attribute_min = min;
        self.attribute_max = max;
        self
    }

    /// Legal ability score range as an inclusive range.
    pub fn attribute_bounds(&self) -> RangeInclusive<i32> {
        self.attribute_min..=self.attribute_max
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self::new()
    }
}
