use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::Factor;

/// Number of problems in every session: one per right-hand factor `1..=9`.
pub const PROBLEMS_PER_SESSION: usize = 9;

/// One multiplication fact to answer.
///
/// The answer is derived, so a `Problem` can never disagree with itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Problem {
    multiplicand: Factor,
    multiplier: Factor,
}

impl Problem {
    #[must_use]
    pub fn new(multiplicand: Factor, multiplier: Factor) -> Self {
        Self {
            multiplicand,
            multiplier,
        }
    }

    /// The session's fixed table factor (left-hand side).
    #[must_use]
    pub fn multiplicand(&self) -> Factor {
        self.multiplicand
    }

    /// The varying factor (right-hand side).
    #[must_use]
    pub fn multiplier(&self) -> Factor {
        self.multiplier
    }

    /// Product of the two factors; at most 81, so always one or two digits.
    #[must_use]
    pub fn answer(&self) -> u8 {
        self.multiplicand.value() * self.multiplier.value()
    }

    /// Text shown on the quiz screen, e.g. `4 × 3`.
    #[must_use]
    pub fn text(&self) -> String {
        format!("{} × {}", self.multiplicand, self.multiplier)
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} × {} = {}", self.multiplicand, self.multiplier, self.answer())
    }
}
