//! Launch settings: defaults, then an optional TOML file, then CLI/env overrides.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use services::DEFAULT_ADVANCE_DELAY;
use tables_core::model::{Factor, Locale, Order, SessionConfig};
use ui::speech::DEFAULT_SPEECH_RATE;

/// Range accepted by the webview speech engine.
const SPEECH_RATE_RANGE: std::ops::RangeInclusive<f32> = 0.1..=10.0;

/// Longest pause allowed between a correct answer and the next problem.
const MAX_ADVANCE_DELAY_MS: u64 = 10_000;

fn default_advance_delay_ms() -> u64 {
    u64::try_from(DEFAULT_ADVANCE_DELAY.as_millis()).unwrap_or(800)
}

fn default_window_title() -> String {
    "Times Tables".to_string()
}

/// Settings read from `tables.toml`. Every key is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Table preselected on the setup screen.
    pub multiplier: Factor,
    pub order: Order,
    /// Whether prompts and feedback are spoken.
    pub voice: bool,
    pub locale: Locale,
    /// Pause after a correct answer before the next problem.
    pub advance_delay_ms: u64,
    pub speech_rate: f32,
    pub window_title: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let session = SessionConfig::default();
        Self {
            multiplier: session.multiplier(),
            order: session.order(),
            voice: session.voice_enabled(),
            locale: Locale::default(),
            advance_delay_ms: default_advance_delay_ms(),
            speech_rate: DEFAULT_SPEECH_RATE,
            window_title: default_window_title(),
        }
    }
}

/// Values given on the command line or through `TABLES_*` variables.
#[derive(Debug, Clone, Default, PartialEq, clap::Args)]
pub struct Overrides {
    /// Table to preselect (1-9)
    #[arg(long, env = "TABLES_MULTIPLIER")]
    pub multiplier: Option<Factor>,

    /// Problem order: random, ascending or descending
    #[arg(long, env = "TABLES_ORDER")]
    pub order: Option<Order>,

    /// Start with voice on or off
    #[arg(long, env = "TABLES_VOICE")]
    pub voice: Option<bool>,

    /// Spoken language: en or ja
    #[arg(long, env = "TABLES_LOCALE")]
    pub locale: Option<Locale>,

    /// Milliseconds to wait after a correct answer
    #[arg(long, env = "TABLES_ADVANCE_DELAY_MS")]
    pub advance_delay_ms: Option<u64>,

    /// Speech rate passed to the speech engine
    #[arg(long, env = "TABLES_SPEECH_RATE")]
    pub speech_rate: Option<f32>,

    /// Window title
    #[arg(long)]
    pub title: Option<String>,
}

impl AppConfig {
    /// Read a TOML file on top of the defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            anyhow::bail!("config file not found: {}", path.display());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("failed to parse config: {}", path.display()))
    }

    /// Apply overrides that were actually given.
    pub fn apply(&mut self, overrides: &Overrides) {
        if let Some(multiplier) = overrides.multiplier {
            self.multiplier = multiplier;
        }
        if let Some(order) = overrides.order {
            self.order = order;
        }
        if let Some(voice) = overrides.voice {
            self.voice = voice;
        }
        if let Some(locale) = overrides.locale {
            self.locale = locale;
        }
        if let Some(delay) = overrides.advance_delay_ms {
            self.advance_delay_ms = delay;
        }
        if let Some(rate) = overrides.speech_rate {
            self.speech_rate = rate;
        }
        if let Some(title) = &overrides.title {
            self.window_title.clone_from(title);
        }
    }

    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            SPEECH_RATE_RANGE.contains(&self.speech_rate),
            "speech_rate must be between {} and {}, got {}",
            SPEECH_RATE_RANGE.start(),
            SPEECH_RATE_RANGE.end(),
            self.speech_rate
        );
        anyhow::ensure!(
            self.advance_delay_ms <= MAX_ADVANCE_DELAY_MS,
            "advance_delay_ms must be at most {MAX_ADVANCE_DELAY_MS}, got {}",
            self.advance_delay_ms
        );
        anyhow::ensure!(
            !self.window_title.trim().is_empty(),
            "window_title must not be empty"
        );
        Ok(())
    }

    #[must_use]
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig::new(self.multiplier, self.order, self.voice)
    }

    #[must_use]
    pub fn advance_delay(&self) -> Duration {
        Duration::from_millis(self.advance_delay_ms)
    }
}

/// Defaults, then `path` if given, then `overrides`; the result is validated.
pub fn load_config(path: Option<&Path>, overrides: &Overrides) -> Result<AppConfig> {
    let mut config = match path {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::default(),
    };
    config.apply(overrides);
    config.validate()?;
    tracing::debug!(?config, "configuration resolved");
    Ok(config)
}
