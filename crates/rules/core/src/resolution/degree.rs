//! Degrees of success.
//!
//! A check lands on exactly one of four degrees. The margin against the
//! target picks a degree first, then a natural 20 or natural 1 on the d20
//! moves it according to the table's [`CriticalRule`].

/// How far a check landed from its target.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum DegreeOfSuccess {
    CriticalFailure,
    Failure,
    Success,
    CriticalSuccess,
}

impl DegreeOfSuccess {
    /// Margin needed beyond the target for a critical result.
    pub const CRITICAL_MARGIN: i32 = 10;

    /// Degree from margin alone.
    ///
    /// ```text
    /// total >= target + 10  critical success
    /// total >= target       success
    /// total <= target - 10  critical failure
    /// otherwise             failure
    /// ```
    pub const fn from_margin(total: i32, target: i32) -> Self {
        let margin = total as i64 - target as i64;
        if margin >= Self::CRITICAL_MARGIN as i64 {
            Self::CriticalSuccess
        } else if margin >= 0 {
            Self::Success
        } else if margin <= -(Self::CRITICAL_MARGIN as i64) {
            Self::CriticalFailure
        } else {
            Self::Failure
        }
    }

    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success | Self::CriticalSuccess)
    }
}

/// A d20 face that overrides the margin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum NaturalRoll {
    #[strum(to_string = "natural_20")]
    #[cfg_attr(feature = "serde", serde(rename = "natural_20"))]
    Twenty,
    #[strum(to_string = "natural_1")]
    #[cfg_attr(feature = "serde", serde(rename = "natural_1"))]
    One,
}

impl NaturalRoll {
    pub const fn from_face(face: u32) -> Option<Self> {
        match face {
            20 => Some(Self::Twenty),
            1 => Some(Self::One),
            _ => None,
        }
    }
}

/// How natural rolls move the margin-based degree.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CriticalRule {
    /// A natural 20 is always a critical success and a natural 1 always a
    /// critical failure, whatever the margin.
    #[default]
    Absolute,
    /// A natural 20 only turns a success into a critical success, and a
    /// natural 1 only turns a failure into a critical failure.
    SameSide,
}

impl CriticalRule {
    pub const fn apply(self, degree: DegreeOfSuccess, natural: Option<NaturalRoll>) -> DegreeOfSuccess {
        use DegreeOfSuccess::*;

        match (self, natural) {
            (Self::Absolute, Some(NaturalRoll::Twenty)) => CriticalSuccess,
            (Self::Absolute, Some(NaturalRoll::One)) => CriticalFailure,
            (Self::SameSide, Some(NaturalRoll::Twenty)) if matches!(degree, Success) => {
                CriticalSuccess
            }
            (Self::SameSide, Some(NaturalRoll::One)) if matches!(degree, Failure) => {
                CriticalFailure
            }
            _ => degree,
        }
    }

    /// Margin degree adjusted for `natural`.
    pub const fn grade(self, total: i32, target: i32, natural: Option<NaturalRoll>) -> DegreeOfSuccess {
        self.apply(DegreeOfSuccess::from_margin(total, target), natural)
    }
}
