//! Speech output through the webview's `speechSynthesis` engine.

mod scripts;

use dioxus::document::eval;
use services::Announcer;
use tables_core::model::Locale;

use scripts::{cancel_script, speak_script};

/// Default speaking rate; slightly faster than normal suits short prompts.
pub const DEFAULT_SPEECH_RATE: f32 = 1.2;

/// [`Announcer`] backed by the desktop webview.
///
/// Must be used from inside the Dioxus runtime (event handlers, spawned tasks).
#[derive(Debug, Clone, Copy)]
pub struct SpeechAnnouncer {
    locale: Locale,
    rate: f32,
}

impl SpeechAnnouncer {
    #[must_use]
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            rate: DEFAULT_SPEECH_RATE,
        }
    }

    #[must_use]
    pub fn with_rate(mut self, rate: f32) -> Self {
        self.rate = rate;
        self
    }

    #[must_use]
    pub fn locale(&self) -> Locale {
        self.locale
    }

    #[must_use]
    pub fn rate(&self) -> f32 {
        self.rate
    }
}

impl Announcer for SpeechAnnouncer {
    fn announce(&self, text: &str) {
        tracing::trace!(text, "announce");
        let js = speak_script(
            text,
            self.locale.language_tag(),
            self.locale.voice_prefix(),
            self.rate,
        );
        let _ = eval(&js);
    }

    fn cancel(&self) {
        let _ = eval(cancel_script());
    }
}
