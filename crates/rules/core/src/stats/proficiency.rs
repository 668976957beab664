/// Training tier for a statistic.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
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
pub enum ProficiencyRank {
    #[default]
    Untrained,
    Trained,
    Expert,
    Master,
    Legendary,
}

impl ProficiencyRank {
    pub const fn rank_value(self) -> i32 {
        match self {
            Self::Untrained => 0,
            Self::Trained => 2,
            Self::Expert => 4,
            Self::Master => 6,
            Self::Legendary => 8,
        }
    }

    /// `0` when untrained, otherwise `rank_value + level`.
    pub const fn bonus(self, level: i32) -> i32 {
        match self {
            Self::Untrained => 0,
            trained => trained.rank_value() + level,
        }
    }

    /// One step up, saturating at legendary.
    pub const fn next(self) -> Self {
        match self {
            Self::Untrained => Self::Trained,
            Self::Trained => Self::Expert,
            Self::Expert => Self::Master,
            Self::Master | Self::Legendary => Self::Legendary,
        }
    }
}
