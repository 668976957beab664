//! Common error infrastructure for rules-core.
//!
//! Domain-specific errors (`DiceError`, `AttributeError`, `ResolutionError`)
//! live next to the operations they validate. This module holds the pieces
//! they share.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each domain has its own error enum with specific variants
//! - **Fail Early**: Every error is raised before anything is mutated or returned
//! - **Stable Codes**: `error_code()` values are persisted by callers and never renamed

/// Severity level of an error, used for categorization by callers.
///
/// Nothing in the engine retries internally; severity only tells the caller
/// whether changing the input can help.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input, should not be retried without changes.
    ///
    /// Examples: malformed dice notation, boost aimed at the wrong ability
    Validation,

    /// Input was well-formed but breaks a game rule for the current state.
    ///
    /// Examples: skipping a level, wrong number of boosts for the level
    Rule,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Rule => "rule",
        }
    }
}

/// Common trait for all rules-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Codes are SCREAMING_SNAKE_CASE and prefixed by domain
pub trait RuleError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str;
}
