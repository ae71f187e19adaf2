use thiserror::Error;

use crate::model::{DigitError, FactorError, LocaleParseError, OrderParseError};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Factor(#[from] FactorError),
    #[error(transparent)]
    Digit(#[from] DigitError),
    #[error(transparent)]
    Order(#[from] OrderParseError),
    #[error(transparent)]
    Locale(#[from] LocaleParseError),
}
