use crate::rng::RngOracle;

use super::{CriticalRule, ResolutionOutcome, roll_d20};

pub(super) fn resolve<R: RngOracle + ?Sized>(
    rng: &R,
    rule: CriticalRule,
    modifier: i32,
    dc: i32,
    seed: &str,
) -> ResolutionOutcome {
    let outcome = ResolutionOutcome::grade(roll_d20(rng, seed), modifier, dc, rule);
    tracing::debug!(
        seed,
        roll = outcome.roll,
        total = outcome.total,
        dc,
        degree = %outcome.degree,
        "resolved saving throw"
    );
    outcome
}
