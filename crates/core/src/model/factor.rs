use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FactorError {
    #[error("factor must be between 1 and 9, got {0}")]
    OutOfRange(u8),
    #[error("failed to parse factor from {raw:?}")]
    Parse { raw: String },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DigitError {
    #[error("digit must be between 0 and 9, got {0}")]
    OutOfRange(u8),
    #[error("not a decimal digit: {0:?}")]
    NotADigit(char),
}

//
// ─── FACTOR ───────────────────────────────────────────────────────────────────
//

/// A single-digit multiplication factor in `1..=9`.
///
/// Used both for the table a session drills (the "dan") and for the
/// right-hand side of each problem.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Factor(u8);

impl Factor {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 9;

    /// Creates a validated factor.
    ///
    /// # Errors
    ///
    /// Returns `FactorError::OutOfRange` if `value` is not in `1..=9`.
    pub fn new(value: u8) -> Result<Self, FactorError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(FactorError::OutOfRange(value))
        }
    }

    /// Returns the underlying value.
    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// All factors in ascending order.
    pub fn all() -> impl DoubleEndedIterator<Item = Factor> + ExactSizeIterator {
        (Self::MIN..=Self::MAX).map(Factor)
    }
}

impl Default for Factor {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl TryFrom<u8> for Factor {
    type Error = FactorError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Factor> for u8 {
    fn from(value: Factor) -> Self {
        value.0
    }
}

impl fmt::Debug for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Factor({})", self.0)
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Factor {
    type Err = FactorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().parse::<u8>().map_err(|_| FactorError::Parse {
            raw: s.to_string(),
        })?;
        Self::new(value)
    }
}

//
// ─── DIGIT ────────────────────────────────────────────────────────────────────
//

/// A keypad digit in `0..=9`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digit(u8);

impl Digit {
    /// Creates a validated digit.
    ///
    /// # Errors
    ///
    /// Returns `DigitError::OutOfRange` if `value > 9`.
    pub fn new(value: u8) -> Result<Self, DigitError> {
        if value <= 9 {
            Ok(Self(value))
        } else {
            Err(DigitError::OutOfRange(value))
        }
    }

    /// Parses a single decimal character.
    ///
    /// # Errors
    ///
    /// Returns `DigitError::NotADigit` for anything other than `'0'..='9'`.
    pub fn from_char(ch: char) -> Result<Self, DigitError> {
        ch.to_digit(10)
            .and_then(|value| u8::try_from(value).ok())
            .map(Self)
            .ok_or(DigitError::NotADigit(ch))
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }

    /// Keypad digits in the on-screen order: 1 through 9, then 0.
    pub fn keypad() -> impl Iterator<Item = Digit> {
        (1..=9).chain(std::iter::once(0)).map(Digit)
    }
}

impl fmt::Debug for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digit({})", self.0)
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
