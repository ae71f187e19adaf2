mod config;
mod factor;
mod locale;
mod order;
mod problem;
mod screen;

pub use config::SessionConfig;
pub use factor::{Digit, DigitError, Factor, FactorError};
pub use locale::{Locale, LocaleParseError};
pub use order::{Order, OrderParseError};
pub use problem::{PROBLEMS_PER_SESSION, Problem};
pub use screen::Screen;
