use std::sync::Arc;
use std::time::Duration;

use services::{AnnouncerRef, QuizController};
use tables_core::model::{Locale, SessionConfig};

pub trait UiApp: Send + Sync {
    fn initial_config(&self) -> SessionConfig;
    fn locale(&self) -> Locale;
    fn advance_delay(&self) -> Duration;

    fn announcer(&self) -> AnnouncerRef;
}

#[derive(Clone)]
pub struct AppContext {
    initial_config: SessionConfig,
    locale: Locale,
    advance_delay: Duration,
    announcer: AnnouncerRef,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            initial_config: app.initial_config(),
            locale: app.locale(),
            advance_delay: app.advance_delay(),
            announcer: app.announcer(),
        }
    }

    #[must_use]
    pub fn initial_config(&self) -> SessionConfig {
        self.initial_config
    }

    #[must_use]
    pub fn locale(&self) -> Locale {
        self.locale
    }

    #[must_use]
    pub fn advance_delay(&self) -> Duration {
        self.advance_delay
    }

    #[must_use]
    pub fn announcer(&self) -> AnnouncerRef {
        Arc::clone(&self.announcer)
    }

    /// Fresh controller on the setup screen with the configured defaults.
    #[must_use]
    pub fn build_controller(&self) -> QuizController {
        QuizController::new(self.announcer())
            .with_config(self.initial_config)
            .with_locale(self.locale)
            .with_advance_delay(self.advance_delay)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
