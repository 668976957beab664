//! RNG oracle for deterministic random number generation.
//!
//! Every "random" value in the engine is a pure function of an externally
//! agreed seed string and a draw index. Nothing here reads ambient entropy,
//! clocks, or addresses, so any participant re-executing a transaction
//! derives the same faces.
//!
//! # Determinism
//!
//! Implementations must map the same `(seed, index)` to the same value on
//! every platform. Die faces are computed with integer arithmetic so no
//! floating-point rounding is involved.

/// RNG oracle for deterministic random number generation.
///
/// Implementations must be deterministic and produce the same values
/// given the same seed and index.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed and draw index.
    fn next_u32(&self, seed: &str, index: u32) -> u32;

    /// Uniform value in `[0, 1)`.
    ///
    /// Exact: a 32-bit integer divided by `2^32` is representable in `f64`.
    fn next_unit(&self, seed: &str, index: u32) -> f64 {
        f64::from(self.next_u32(seed, index)) / UNIT_SCALE
    }

    /// Roll a die with N sides (1-N inclusive).
    ///
    /// Equivalent to `floor(next_unit * sides) + 1`, computed in integers.
    fn roll_die(&self, seed: &str, index: u32, sides: u32) -> u32 {
        let scaled = u64::from(self.next_u32(seed, index)) * u64::from(sides);
        (scaled >> 32) as u32 + 1
    }
}

const UNIT_SCALE: f64 = 4_294_967_296.0;

/// Draw a value in `[0, 1)` from the default generator.
pub fn next(seed: &str, index: u32) -> f64 {
    PcgRng.next_unit(seed, index)
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// The seed string and the decimal draw index are folded into a 64-bit
/// state with FNV-1a, then one PCG-XSH-RR step turns that state into 32
/// bits of output.
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    const FNV_OFFSET: u64 = 0xcbf29ce484222325;
    const FNV_PRIME: u64 = 0x100000001b3;

    /// Advance the PCG state by one step.
    ///
    /// `state' = (state × multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// PCG output function using XSH-RR (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    fn fnv1a(mut hash: u64, bytes: &[u8]) -> u64 {
        for &byte in bytes {
            hash ^= u64::from(byte);
            hash = hash.wrapping_mul(Self::FNV_PRIME);
        }
        hash
    }

    /// Hash of `seed || decimal(index)`.
    fn seed_state(seed: &str, index: u32) -> u64 {
        let digits = DecimalDigits::new(index);
        let hash = Self::fnv1a(Self::FNV_OFFSET, seed.as_bytes());
        Self::fnv1a(hash, digits.as_bytes())
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: &str, index: u32) -> u32 {
        let state = Self::pcg_step(Self::seed_state(seed, index));
        Self::pcg_output(state)
    }
}

/// Generator used by the ledger application before PCG.
///
/// A 31-multiplier string hash over UTF-16 code units of `seed || index`,
/// followed by the LCG `(1664525·h + 1013904223) mod 2^32`. Kept so that
/// rolls recorded by older transactions can be re-derived. Neighbouring
/// indices land on nearly identical values, so new rolls should use
/// [`PcgRng`].
#[derive(Clone, Copy, Debug, Default)]
pub struct LegacyLcgRng;

impl LegacyLcgRng {
    const MULTIPLIER: u64 = 1664525;
    const INCREMENT: u64 = 1013904223;

    fn string_hash(seed: &str, index: u32) -> u32 {
        let digits = DecimalDigits::new(index);
        let units = seed
            .encode_utf16()
            .chain(digits.as_bytes().iter().map(|&b| u16::from(b)));

        let hash = units.fold(0i32, |hash, unit| {
            hash.wrapping_shl(5)
                .wrapping_sub(hash)
                .wrapping_add(i32::from(unit))
        });
        hash.unsigned_abs()
    }
}

impl RngOracle for LegacyLcgRng {
    fn next_u32(&self, seed: &str, index: u32) -> u32 {
        let hash = u64::from(Self::string_hash(seed, index));
        // Truncation is the `mod 2^32`.
        hash.wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT) as u32
    }
}

/// ASCII decimal rendering of a `u32` without allocating.
struct DecimalDigits {
    buf: [u8; 10],
    start: usize,
}

impl DecimalDigits {
    fn new(mut value: u32) -> Self {
        let mut buf = [b'0'; 10];
        let mut start = buf.len();
        loop {
            start -= 1;
            buf[start] = b'0' + (value % 10) as u8;
            value /= 10;
            if value == 0 {
                break;
            }
        }
        Self { buf, start }
    }

    fn as_bytes(&self) -> &[u8] {
        &self.buf[self.start..]
    }
}

/// Seed suffixes that keep the rolls of one logical action independent.
///
/// An attack with advantage draws its two d20s from `seed_1` and `seed_2`
/// and its damage from `seed_damage`; callers persisting rolls rely on
/// these exact suffixes to re-derive them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum SeedPurpose {
    /// The action's main roll, drawn from the seed itself.
    Primary,
    /// First d20 of an advantage/disadvantage pair.
    FirstOfPair,
    /// Second d20 of an advantage/disadvantage pair.
    SecondOfPair,
    /// Damage dice following a hit.
    Damage,
}

impl SeedPurpose {
    pub const fn suffix(&self) -> &'static str {
        match self {
            Self::Primary => "",
            Self::FirstOfPair => "_1",
            Self::SecondOfPair => "_2",
            Self::Damage => "_damage",
        }
    }

    /// Seed to use for this purpose.
    pub fn derive(&self, seed: &str) -> String {
        let mut derived = String::with_capacity(seed.len() + self.suffix().len());
        derived.push_str(seed);
        derived.push_str(self.suffix());
        derived
    }
}
