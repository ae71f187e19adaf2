use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown order {raw:?} (expected random, ascending or descending)")]
pub struct OrderParseError {
    raw: String,
}

/// Traversal order for the nine problems of a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    /// Uniformly shuffled every time a session starts.
    #[default]
    Random,
    #[serde(alias = "asc")]
    Ascending,
    #[serde(alias = "desc")]
    Descending,
}

impl Order {
    pub const ALL: [Order; 3] = [Order::Random, Order::Ascending, Order::Descending];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Order::Random => "random",
            Order::Ascending => "ascending",
            Order::Descending => "descending",
        }
    }

    /// Short label for selection buttons.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Order::Random => "Random",
            Order::Ascending => "1 → 9",
            Order::Descending => "9 → 1",
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Order {
    type Err = OrderParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(Order::Random),
            "ascending" | "asc" => Ok(Order::Ascending),
            "descending" | "desc" => Ok(Order::Descending),
            _ => Err(OrderParseError { raw: s.to_string() }),
        }
    }
}
