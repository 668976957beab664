use crate::rng::RngOracle;

use super::roll_d20;

/// One participant's initiative.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InitiativeEntry<T> {
    pub participant: T,
    /// Rolled initiative (`d20 + bonus`).
    pub initiative: i32,
    /// Initiative bonus, used to break ties.
    pub bonus: i32,
}

pub(super) fn roll<R: RngOracle + ?Sized, T>(
    rng: &R,
    participant: T,
    bonus: i32,
    seed: &str,
) -> InitiativeEntry<T> {
    let face = roll_d20(rng, seed);
    tracing::debug!(seed, face, bonus, "rolled initiative");
    InitiativeEntry {
        participant,
        initiative: face as i32 + bonus,
        bonus,
    }
}

/// Sort into turn order: higher initiative first, then higher bonus.
///
/// The sort is stable, so full ties keep their input order.
pub fn order_initiative<T>(entries: &mut [InitiativeEntry<T>]) {
    entries.sort_by(|a, b| {
        b.initiative
            .cmp(&a.initiative)
            .then_with(|| b.bonus.cmp(&a.bonus))
    });
}
