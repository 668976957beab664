//! Dice notation parsing.
//!
//! Grammar (after lowercasing and removing all whitespace):
//!
//! ```text
//! <count> "d" <sides> [ ("kh" | "kl") <n> ] [ ("+" | "-") <modifier> ]
//! ```
//!
//! `"2d6+3"`, `"1d20"`, `"4d6kh3"` and `"3D8 - 2"` are all accepted.
//! The count is always explicit: `"d6"` is rejected.

use core::fmt;
use core::str::FromStr;

use crate::config::RulesConfig;
use crate::error::{ErrorSeverity, RuleError};

/// Keep clause: only the highest or lowest `n` dice count toward the total.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Keep {
    Highest(u32),
    Lowest(u32),
}

impl Keep {
    pub const fn count(&self) -> u32 {
        match self {
            Self::Highest(n) | Self::Lowest(n) => *n,
        }
    }
}

/// A validated dice expression.
///
/// Construct through [`parse`], [`str::parse`], or [`DiceExpression::new`];
/// every constructor enforces `1 ≤ count ≤ 100` and `2 ≤ sides ≤ 1000`, and
/// that the highest possible total fits in an `i32`.
/// Serialized as its canonical notation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct DiceExpression {
    count: u32,
    sides: u32,
    modifier: i32,
    keep: Option<Keep>,
}

impl DiceExpression {
    /// A single twenty-sided die.
    pub const D20: Self = Self {
        count: 1,
        sides: 20,
        modifier: 0,
        keep: None,
    };

    pub fn new(count: u32, sides: u32, modifier: i32) -> Result<Self, ExpressionFault> {
        if !(RulesConfig::MIN_DICE_COUNT..=RulesConfig::MAX_DICE_COUNT).contains(&count) {
            return Err(ExpressionFault::CountOutOfRange(count));
        }
        if !(RulesConfig::MIN_DIE_SIDES..=RulesConfig::MAX_DIE_SIDES).contains(&sides) {
            return Err(ExpressionFault::SidesOutOfRange(sides));
        }
        // count * sides <= 100_000, so only the upper end can overflow
        if modifier.checked_add((count * sides) as i32).is_none() {
            return Err(ExpressionFault::NumberTooLarge);
        }

        Ok(Self {
            count,
            sides,
            modifier,
            keep: None,
        })
    }

    /// Attach a keep clause.
    ///
    /// Keeping more dice than were rolled keeps all of them: `4d6kh5` is
    /// stored as `4d6kh4`. Keeping zero dice is rejected.
    pub fn with_keep(mut self, keep: Keep) -> Result<Self, ExpressionFault> {
        let kept = match keep.count() {
            0 => {
                return Err(ExpressionFault::KeepOutOfRange {
                    keep: 0,
                    count: self.count,
                });
            }
            n => n.min(self.count),
        };
        self.keep = Some(match keep {
            Keep::Highest(_) => Keep::Highest(kept),
            Keep::Lowest(_) => Keep::Lowest(kept),
        });
        Ok(self)
    }

    pub const fn count(&self) -> u32 {
        self.count
    }

    pub const fn sides(&self) -> u32 {
        self.sides
    }

    pub const fn modifier(&self) -> i32 {
        self.modifier
    }

    pub const fn keep(&self) -> Option<Keep> {
        self.keep
    }

    pub const fn keep_highest(&self) -> Option<u32> {
        match self.keep {
            Some(Keep::Highest(n)) => Some(n),
            _ => None,
        }
    }

    pub const fn keep_lowest(&self) -> Option<u32> {
        match self.keep {
            Some(Keep::Lowest(n)) => Some(n),
            _ => None,
        }
    }

    /// Number of dice that survive the keep clause.
    pub const fn kept_dice(&self) -> u32 {
        match self.keep {
            Some(keep) => keep.count(),
            None => self.count,
        }
    }

    /// Lowest possible total.
    pub const fn min(&self) -> i32 {
        // modifier >= i32::MIN and kept_dice >= 1
        self.modifier + self.kept_dice() as i32
    }

    /// Highest possible total. Construction guarantees it fits.
    pub const fn max(&self) -> i32 {
        self.modifier + (self.kept_dice() * self.sides) as i32
    }

    /// True for a bare `1d20`, the only roll that can produce a natural 20 or 1.
    pub const fn is_single_d20(&self) -> bool {
        self.count == 1 && self.sides == 20 && self.keep.is_none()
    }
}

impl fmt::Display for DiceExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)?;
        match self.keep {
            Some(Keep::Highest(n)) => write!(f, "kh{n}")?,
            Some(Keep::Lowest(n)) => write!(f, "kl{n}")?,
            None => {}
        }
        if self.modifier > 0 {
            write!(f, "+{}", self.modifier)
        } else if self.modifier < 0 {
            write!(f, "{}", self.modifier)
        } else {
            Ok(())
        }
    }
}

impl FromStr for DiceExpression {
    type Err = DiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl TryFrom<String> for DiceExpression {
    type Error = DiceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse(&value)
    }
}

impl From<DiceExpression> for String {
    fn from(value: DiceExpression) -> Self {
        value.to_string()
    }
}

/// Parse dice notation like `"2d6+3"` or `"4d6kh3"`.
pub fn parse(expression: &str) -> Result<DiceExpression, DiceError> {
    let invalid = |fault| DiceError::InvalidExpression {
        expression: expression.to_string(),
        fault,
    };

    let cleaned: String = expression
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_lowercase())
        .collect();

    let tokens = Tokens::scan(&cleaned).ok_or_else(|| invalid(ExpressionFault::Malformed))?;

    let count = parse_u32(tokens.count).map_err(invalid)?;
    let sides = parse_u32(tokens.sides).map_err(invalid)?;
    let modifier = match tokens.modifier {
        Some((negative, digits)) => parse_modifier(negative, digits).map_err(invalid)?,
        None => 0,
    };

    let parsed = DiceExpression::new(count, sides, modifier).map_err(invalid)?;
    match tokens.keep {
        Some((highest, digits)) => {
            let n = parse_u32(digits).map_err(invalid)?;
            let keep = if highest {
                Keep::Highest(n)
            } else {
                Keep::Lowest(n)
            };
            parsed.with_keep(keep).map_err(invalid)
        }
        None => Ok(parsed),
    }
}

fn parse_u32(digits: &str) -> Result<u32, ExpressionFault> {
    digits.parse().map_err(|_| ExpressionFault::NumberTooLarge)
}

fn parse_modifier(negative: bool, digits: &str) -> Result<i32, ExpressionFault> {
    let magnitude: i64 = digits.parse().map_err(|_| ExpressionFault::NumberTooLarge)?;
    let value = if negative { -magnitude } else { magnitude };
    i32::try_from(value).map_err(|_| ExpressionFault::NumberTooLarge)
}

/// Raw pieces of a syntactically valid expression.
struct Tokens<'a> {
    count: &'a str,
    sides: &'a str,
    /// `(is_highest, digits)`
    keep: Option<(bool, &'a str)>,
    /// `(is_negative, digits)`
    modifier: Option<(bool, &'a str)>,
}

impl<'a> Tokens<'a> {
    fn scan(input: &'a str) -> Option<Self> {
        let mut cursor = Cursor { rest: input };

        let count = cursor.digits()?;
        cursor.eat("d").then_some(())?;
        let sides = cursor.digits()?;

        let keep = if cursor.eat("kh") {
            Some((true, cursor.digits()?))
        } else if cursor.eat("kl") {
            Some((false, cursor.digits()?))
        } else {
            None
        };

        let modifier = if cursor.eat("+") {
            Some((false, cursor.digits()?))
        } else if cursor.eat("-") {
            Some((true, cursor.digits()?))
        } else {
            None
        };

        cursor.rest.is_empty().then_some(Self {
            count,
            sides,
            keep,
            modifier,
        })
    }
}

struct Cursor<'a> {
    rest: &'a str,
}

impl<'a> Cursor<'a> {
    fn eat(&mut self, literal: &str) -> bool {
        match self.rest.strip_prefix(literal) {
            Some(rest) => {
                self.rest = rest;
                true
            }
            None => false,
        }
    }

    /// Maximal non-empty run of ASCII digits.
    fn digits(&mut self) -> Option<&'a str> {
        let end = self
            .rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(self.rest.len());
        if end == 0 {
            return None;
        }
        let (digits, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(digits)
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Why an expression was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExpressionFault {
    #[error("expected <count>d<sides>[kh|kl<n>][+|-<modifier>]")]
    Malformed,

    #[error("number does not fit")]
    NumberTooLarge,

    #[error("dice count {0} must be between 1 and 100")]
    CountOutOfRange(u32),

    #[error("die sides {0} must be between 2 and 1000")]
    SidesOutOfRange(u32),

    #[error("cannot keep {keep} of {count} dice")]
    KeepOutOfRange { keep: u32, count: u32 },
}

/// Errors produced by dice parsing and by loading stored rolls.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DiceError {
    #[error("invalid dice expression `{expression}`: {fault}")]
    InvalidExpression {
        expression: String,
        fault: ExpressionFault,
    },

    #[error("stored roll has a zero face")]
    ZeroFace,

    #[error("stored roll total {total} does not match its faces and modifier ({expected})")]
    TotalMismatch { total: i32, expected: i64 },
}

impl DiceError {
    /// Why the expression was rejected, for parse errors.
    pub fn fault(&self) -> Option<ExpressionFault> {
        match self {
            Self::InvalidExpression { fault, .. } => Some(*fault),
            _ => None,
        }
    }
}

impl RuleError for DiceError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidExpression { .. } => "DICE_INVALID_EXPRESSION",
            Self::ZeroFace => "DICE_ZERO_FACE",
            Self::TotalMismatch { .. } => "DICE_TOTAL_MISMATCH",
        }
    }
}
