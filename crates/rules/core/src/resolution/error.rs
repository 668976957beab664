use crate::dice::DiceError;
use crate::error::{ErrorSeverity, RuleError};

/// Errors raised by resolution requests.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResolutionError {
    #[error("invalid input: {0}")]
    InvalidInput(InputFault),

    #[error(transparent)]
    Dice(#[from] DiceError),
}

/// Contradictory request fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InputFault {
    #[error("advantage and disadvantage cannot both be set")]
    AdvantageAndDisadvantage,
}

impl RuleError for ResolutionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidInput(_) => ErrorSeverity::Validation,
            Self::Dice(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "RESOLUTION_INVALID_INPUT",
            Self::Dice(err) => err.error_code(),
        }
    }
}
