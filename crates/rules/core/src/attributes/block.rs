//! Ability scores and the partial-boost state machine.
//!
//! Below the soft cap every boost is worth one point. At or above it a boost
//! is only half a point: the first one marks the ability as pending, the
//! second consumes the mark and adds the point. A flaw on a pending ability
//! cancels the pending half instead of lowering the score.

use crate::config::RulesConfig;

use super::{Ability, AbilitySet, AttributeError, AttributeModifier};

/// Six ability scores plus their pending partial-boost flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeBlock {
    scores: [i32; 6],
    pending: AbilitySet,
}

impl AttributeBlock {
    /// Every score at `score`, nothing pending.
    pub const fn uniform(score: i32) -> Self {
        Self {
            scores: [score; 6],
            pending: AbilitySet::empty(),
        }
    }

    /// Scores in sheet order (STR, DEX, CON, INT, WIS, CHA), nothing pending.
    pub const fn from_scores(scores: [i32; 6]) -> Self {
        Self {
            scores,
            pending: AbilitySet::empty(),
        }
    }

    pub const fn with_pending(mut self, pending: AbilitySet) -> Self {
        self.pending = pending;
        self
    }

    pub const fn score(&self, ability: Ability) -> i32 {
        self.scores[ability.index()]
    }

    pub const fn scores(&self) -> [i32; 6] {
        self.scores
    }

    /// Ability modifier for the current score.
    pub const fn modifier(&self, ability: Ability) -> i32 {
        crate::stats::modifier(self.score(ability))
    }

    pub const fn has_partial(&self, ability: Ability) -> bool {
        self.pending.has(ability)
    }

    pub const fn pending(&self) -> AbilitySet {
        self.pending
    }

    /// Apply one boost to `target`.
    ///
    /// Nothing changes when `modifier` does not authorize `target`.
    pub fn boost(
        &mut self,
        modifier: &AttributeModifier,
        target: Ability,
    ) -> Result<(), AttributeError> {
        modifier.authorize(target)?;

        let index = target.index();
        if self.scores[index] < RulesConfig::PARTIAL_BOOST_THRESHOLD {
            self.scores[index] += 1;
        } else if self.pending.has(target) {
            self.scores[index] += 1;
            self.pending.remove(target.flag());
        } else {
            self.pending.insert(target.flag());
        }

        tracing::trace!(%target, score = self.scores[index], pending = self.pending.has(target), "boost");
        Ok(())
    }

    /// Apply one flaw to `target`.
    pub fn reduce(
        &mut self,
        modifier: &AttributeModifier,
        target: Ability,
    ) -> Result<(), AttributeError> {
        modifier.authorize(target)?;

        let index = target.index();
        if self.scores[index] < RulesConfig::PARTIAL_BOOST_THRESHOLD {
            self.scores[index] -= 1;
        } else if self.pending.has(target) {
            self.pending.remove(target.flag());
        } else {
            self.scores[index] -= 1;
            self.pending.set(
                target.flag(),
                self.scores[index] >= RulesConfig::PARTIAL_BOOST_THRESHOLD,
            );
        }

        tracing::trace!(%target, score = self.scores[index], pending = self.pending.has(target), "flaw");
        Ok(())
    }

    /// Consuming form of [`boost`](Self::boost).
    pub fn boosted(
        mut self,
        modifier: &AttributeModifier,
        target: Ability,
    ) -> Result<Self, AttributeError> {
        self.boost(modifier, target)?;
        Ok(self)
    }

    /// Consuming form of [`reduce`](Self::reduce).
    pub fn reduced(
        mut self,
        modifier: &AttributeModifier,
        target: Ability,
    ) -> Result<Self, AttributeError> {
        self.reduce(modifier, target)?;
        Ok(self)
    }

    /// Checks every score against the configured bounds, reporting the first
    /// ability (in sheet order) that falls outside them.
    pub fn validate(&self, config: &RulesConfig) -> Result<(), AttributeError> {
        let bounds = config.attribute_bounds();
        match Ability::ALL
            .into_iter()
            .find(|a| !bounds.contains(&self.score(*a)))
        {
            Some(ability) => Err(AttributeError::ScoreOutOfRange {
                ability,
                score: self.score(ability),
                min: config.attribute_min,
                max: config.attribute_max,
            }),
            None => Ok(()),
        }
    }
}

impl Default for AttributeBlock {
    fn default() -> Self {
        Self::uniform(RulesConfig::STARTING_SCORE)
    }
}
