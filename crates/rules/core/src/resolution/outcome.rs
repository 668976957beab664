use super::{CriticalRule, DegreeOfSuccess, NaturalRoll};

/// A graded d20 check.
///
/// The success flags are views of a single [`DegreeOfSuccess`], so exactly
/// one of critical failure, failure, success and critical success holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolutionOutcome {
    /// Face of the d20 that counted.
    pub roll: u32,
    /// Face plus all bonuses.
    pub total: i32,
    /// AC or DC the total was compared against.
    pub target: i32,
    pub degree: DegreeOfSuccess,
}

impl ResolutionOutcome {
    /// Grade a single d20 face against `target`.
    pub fn grade(roll: u32, bonus: i32, target: i32, rule: CriticalRule) -> Self {
        let total = roll as i32 + bonus;
        Self {
            roll,
            total,
            target,
            degree: rule.grade(total, target, NaturalRoll::from_face(roll)),
        }
    }

    pub const fn is_success(&self) -> bool {
        self.degree.is_success()
    }

    pub const fn is_critical_success(&self) -> bool {
        matches!(self.degree, DegreeOfSuccess::CriticalSuccess)
    }

    pub const fn is_critical_failure(&self) -> bool {
        matches!(self.degree, DegreeOfSuccess::CriticalFailure)
    }

    pub const fn natural(&self) -> Option<NaturalRoll> {
        NaturalRoll::from_face(self.roll)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(outcome: &ResolutionOutcome) -> [bool; 3] {
        [
            outcome.is_success(),
            outcome.is_critical_success(),
            outcome.is_critical_failure(),
        ]
    }

    #[test]
    fn exactly_one_degree_holds() {
        for roll in 1..=20 {
            for bonus in [-15, -5, 0, 5, 15] {
                let outcome = ResolutionOutcome::grade(roll, bonus, 15, CriticalRule::Absolute);
                let [success, crit, fumble] = flags(&outcome);
                assert!(!(crit && !success));
                assert!(!(fumble && success));
                assert!(!(crit && fumble));
            }
        }
    }

    #[test]
    fn natural_twenty_beats_margin() {
        // 20 - 10 = 10 is a critical failure by margin
        let outcome = ResolutionOutcome::grade(20, -10, 20, CriticalRule::Absolute);
        assert_eq!(outcome.total, 10);
        assert_eq!(outcome.degree, DegreeOfSuccess::CriticalSuccess);
        assert_eq!(flags(&outcome), [true, true, false]);

        let same_side = ResolutionOutcome::grade(20, -10, 20, CriticalRule::SameSide);
        assert_eq!(same_side.degree, DegreeOfSuccess::CriticalFailure);
    }

    #[test]
    fn natural_one_beats_margin() {
        // 1 + 20 = 21 is a success by margin
        let outcome = ResolutionOutcome::grade(1, 20, 15, CriticalRule::Absolute);
        assert_eq!(outcome.degree, DegreeOfSuccess::CriticalFailure);
        assert_eq!(flags(&outcome), [false, false, true]);
        assert_eq!(outcome.natural(), Some(NaturalRoll::One));
    }
}
