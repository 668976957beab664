//! Dice roll evaluation.

use arrayvec::ArrayVec;

use super::MAX_ROLLS;
#[cfg(feature = "serde")]
use super::expression::DiceError;
use super::expression::{DiceExpression, Keep};
use crate::rng::{PcgRng, RngOracle};

/// Die faces of one roll, in the order they count toward the total.
pub type Rolls = ArrayVec<u32, MAX_ROLLS>;

/// Result of evaluating a [`DiceExpression`] against a seed.
///
/// `total` is always `sum(individual_rolls) + modifier`. When a keep clause
/// applied, `individual_rolls` holds only the kept dice, sorted (descending
/// for keep-highest, ascending for keep-lowest); otherwise it holds every
/// die in draw order.
///
/// Deserializing re-checks the total against the faces, so a tampered
/// record fails to load.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RollRecord")
)]
pub struct RollResult {
    individual_rolls: Rolls,
    modifier: i32,
    total: i32,
}

impl RollResult {
    pub fn individual_rolls(&self) -> &[u32] {
        &self.individual_rolls
    }

    pub const fn modifier(&self) -> i32 {
        self.modifier
    }

    pub const fn total(&self) -> i32 {
        self.total
    }

    /// Sum of the kept dice, without the modifier.
    pub fn dice_total(&self) -> i32 {
        self.total - self.modifier
    }

    /// SHA-256 commitment to this roll.
    ///
    /// Persisting the commitment next to the seed lets any participant check a
    /// stored roll by re-deriving it.
    #[cfg(feature = "serde")]
    pub fn commitment(&self) -> bincode::Result<[u8; 32]> {
        use sha2::{Digest, Sha256};

        let bytes = bincode::serialize(self)?;
        Ok(Sha256::digest(&bytes).into())
    }
}

/// Unchecked shape of a stored [`RollResult`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RollRecord {
    individual_rolls: Rolls,
    modifier: i32,
    total: i32,
}

#[cfg(feature = "serde")]
impl TryFrom<RollRecord> for RollResult {
    type Error = DiceError;

    fn try_from(record: RollRecord) -> Result<Self, Self::Error> {
        if record.individual_rolls.contains(&0) {
            return Err(DiceError::ZeroFace);
        }

        let dice: i64 = record.individual_rolls.iter().copied().map(i64::from).sum();
        let expected = dice + i64::from(record.modifier);
        if expected != i64::from(record.total) {
            return Err(DiceError::TotalMismatch {
                total: record.total,
                expected,
            });
        }

        Ok(Self {
            individual_rolls: record.individual_rolls,
            modifier: record.modifier,
            total: record.total,
        })
    }
}

/// Roll `expr` with the default generator.
pub fn roll(expr: &DiceExpression, seed: &str) -> RollResult {
    roll_with(&PcgRng, expr, seed)
}

/// Roll `expr`, drawing die `i` from `rng` at `(seed, i)`.
pub fn roll_with(
    rng: &(impl RngOracle + ?Sized),
    expr: &DiceExpression,
    seed: &str,
) -> RollResult {
    let mut rolls: Rolls = (0..expr.count())
        .map(|index| rng.roll_die(seed, index, expr.sides()))
        .collect();

    match expr.keep() {
        Some(Keep::Highest(n)) => {
            rolls.sort_unstable_by(|a, b| b.cmp(a));
            rolls.truncate(n as usize);
        }
        Some(Keep::Lowest(n)) => {
            rolls.sort_unstable();
            rolls.truncate(n as usize);
        }
        None => {}
    }

    let dice_total: u32 = rolls.iter().sum();
    // Bounded by expr.max(), which construction keeps inside i32.
    let total = expr.modifier() + dice_total as i32;

    tracing::trace!(
        expression = %expr,
        seed,
        ?rolls,
        total,
        "rolled dice"
    );

    RollResult {
        individual_rolls: rolls,
        modifier: expr.modifier(),
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::parse;
    use crate::rng::LegacyLcgRng;

    #[test]
    fn same_seed_same_result() {
        let expr = parse("8d12+4").unwrap();
        assert_eq!(roll(&expr, "tx-9000"), roll(&expr, "tx-9000"));
    }

    #[test]
    fn total_is_sum_plus_modifier() {
        let expr = parse("5d10-3").unwrap();
        for n in 0..50 {
            let result = roll(&expr, &format!("seed-{n}"));
            let sum: u32 = result.individual_rolls().iter().sum();
            assert_eq!(result.total(), sum as i32 - 3);
            assert_eq!(result.dice_total(), sum as i32);
            assert_eq!(result.individual_rolls().len(), 5);
        }
    }

    #[test]
    fn example_two_d6_plus_three() {
        let expr = parse("2d6+3").unwrap();
        let result = roll(&expr, "x");
        assert_eq!(result.individual_rolls(), &[4, 3]);
        assert_eq!(result.total(), 10);
        assert!((5..=15).contains(&result.total()));
    }

    #[test]
    fn keep_highest_sorts_and_trims() {
        let expr = parse("4d6kh3").unwrap();
        let result = roll(&expr, "x");
        // raw faces for "x" are [4, 3, 1, 1]
        assert_eq!(result.individual_rolls(), &[4, 3, 1]);
        assert_eq!(result.total(), 8);
    }

    #[test]
    fn keep_lowest_sorts_and_trims() {
        let expr = parse("4d6kl2").unwrap();
        let result = roll(&expr, "x");
        assert_eq!(result.individual_rolls(), &[1, 1]);
        assert_eq!(result.total(), 2);
    }

    #[test]
    fn faces_stay_within_bounds() {
        let expr = parse("100d1000").unwrap();
        let result = roll(&expr, "bounds");
        assert_eq!(result.individual_rolls().len(), 100);
        assert!(result.individual_rolls().iter().all(|f| (1..=1000).contains(f)));
        assert!(result.total() >= expr.min() && result.total() <= expr.max());
    }

    #[test]
    fn generator_is_pluggable() {
        let expr = parse("2d6").unwrap();
        let legacy = roll_with(&LegacyLcgRng, &expr, "x");
        assert_eq!(legacy.individual_rolls(), &[5, 5]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn commitment_tracks_content() {
        let expr = parse("3d6").unwrap();
        let a = roll(&expr, "commit-a").commitment().unwrap();
        assert_eq!(a, roll(&expr, "commit-a").commitment().unwrap());
        assert_eq!(hex::encode(a).len(), 64);

        let other = parse("3d6+1").unwrap();
        assert_ne!(a, roll(&other, "commit-a").commitment().unwrap());
    }

    #[test]
    fn huge_modifier_rolls_without_overflow() {
        let expr = parse("1d20+2147483627").unwrap();
        let result = roll(&expr, "x");
        assert_eq!(result.modifier(), 2147483627);
        assert_eq!(result.total(), 2147483627 + result.dice_total());

        let expr = parse("1d20-2147483648").unwrap();
        let result = roll(&expr, "x");
        assert_eq!(result.total(), i32::MIN + result.dice_total());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn stored_rolls_are_checked_on_load() {
        // Same byte layout as a RollResult: faces, modifier, total.
        let honest = bincode::serialize(&(vec![3u32, 4], 1i32, 8i32)).unwrap();
        let loaded: RollResult = bincode::deserialize(&honest).unwrap();
        assert_eq!(loaded.individual_rolls(), &[3, 4]);
        assert_eq!(loaded.total(), 8);

        let original = roll(&parse("4d6+2").unwrap(), "store");
        let bytes = bincode::serialize(&original).unwrap();
        assert_eq!(bincode::deserialize::<RollResult>(&bytes).unwrap(), original);

        let tampered = bincode::serialize(&(vec![3u32, 4], 1i32, 9i32)).unwrap();
        let err = bincode::deserialize::<RollResult>(&tampered).unwrap_err();
        assert!(err.to_string().contains("does not match"));

        let zero = bincode::serialize(&(vec![0u32, 4], 0i32, 4i32)).unwrap();
        let err = bincode::deserialize::<RollResult>(&zero).unwrap_err();
        assert!(err.to_string().contains("zero face"));
    }
}
