use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unsupported locale {raw:?} (expected en or ja)")]
pub struct LocaleParseError {
    raw: String,
}

/// Language used for spoken prompts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    #[serde(alias = "en")]
    English,
    #[serde(alias = "ja")]
    Japanese,
}

impl Locale {
    /// BCP 47 tag handed to the speech engine.
    #[must_use]
    pub fn language_tag(self) -> &'static str {
        match self {
            Locale::English => "en-US",
            Locale::Japanese => "ja-JP",
        }
    }

    /// Prefix used to pick a matching installed voice.
    #[must_use]
    pub fn voice_prefix(self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::Japanese => "ja",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.voice_prefix())
    }
}

impl FromStr for Locale {
    type Err = LocaleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        match lowered.as_str() {
            "en" | "english" => Ok(Locale::English),
            "ja" | "japanese" => Ok(Locale::Japanese),
            other if other.starts_with("en-") => Ok(Locale::English),
            other if other.starts_with("ja-") => Ok(Locale::Japanese),
            _ => Err(LocaleParseError { raw: s.to_string() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tags_and_names() {
        assert_eq!("ja-JP".parse::<Locale>().unwrap(), Locale::Japanese);
        assert_eq!("English".parse::<Locale>().unwrap(), Locale::English);
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn language_tags() {
        assert_eq!(Locale::English.language_tag(), "en-US");
        assert_eq!(Locale::Japanese.language_tag(), "ja-JP");
    }
}
