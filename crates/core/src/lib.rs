#![forbid(unsafe_code)]

pub mod error;
pub mod model;

pub use error::Error;
pub use model::{
    Digit, DigitError, Factor, FactorError, Locale, LocaleParseError, Order, OrderParseError,
    PROBLEMS_PER_SESSION, Problem, Screen, SessionConfig,
};
