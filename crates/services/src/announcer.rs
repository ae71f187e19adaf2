//! Spoken-output port and the phrases fed into it.

use std::sync::{Arc, Mutex, PoisonError};

use tables_core::model::{Locale, Problem};

/// Best-effort speech output.
///
/// A new announcement replaces whatever is still being spoken. Implementations
/// must swallow their own failures, including a missing speech engine.
pub trait Announcer: Send + Sync {
    fn announce(&self, text: &str);

    /// Stop any in-flight announcement.
    fn cancel(&self) {}
}

pub type AnnouncerRef = Arc<dyn Announcer>;

/// Announcer for environments without speech.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentAnnouncer;

impl Announcer for SilentAnnouncer {
    fn announce(&self, _text: &str) {}
}

/// Entry recorded by [`RecordingAnnouncer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Utterance {
    Spoken(String),
    Cancelled,
}

/// Keeps every call in memory. Handy for tests and headless runs.
#[derive(Debug, Clone, Default)]
pub struct RecordingAnnouncer {
    log: Arc<Mutex<Vec<Utterance>>>,
}

impl RecordingAnnouncer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything recorded so far, in call order.
    #[must_use]
    pub fn utterances(&self) -> Vec<Utterance> {
        self.log
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Only the spoken texts, in call order.
    #[must_use]
    pub fn spoken(&self) -> Vec<String> {
        self.utterances()
            .into_iter()
            .filter_map(|utterance| match utterance {
                Utterance::Spoken(text) => Some(text),
                Utterance::Cancelled => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.log
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    fn push(&self, utterance: Utterance) {
        self.log
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(utterance);
    }
}

impl Announcer for RecordingAnnouncer {
    fn announce(&self, text: &str) {
        self.push(Utterance::Spoken(text.to_string()));
    }

    fn cancel(&self) {
        self.push(Utterance::Cancelled);
    }
}

//
// ─── PHRASES ───────────────────────────────────────────────────────────────────
//

/// Locale-specific phrases spoken during a drill.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Phrasebook {
    locale: Locale,
}

impl Phrasebook {
    #[must_use]
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    #[must_use]
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Question for the current problem, e.g. "4 times 3 is?".
    #[must_use]
    pub fn prompt(&self, problem: &Problem) -> String {
        let left = problem.multiplicand();
        let right = problem.multiplier();
        match self.locale {
            Locale::English => format!("{left} times {right} is?"),
            Locale::Japanese => format!("{left} かける {right} は？"),
        }
    }

    #[must_use]
    pub fn correct(&self) -> &'static str {
        match self.locale {
            Locale::English => "Correct!",
            Locale::Japanese => "正解！",
        }
    }

    #[must_use]
    pub fn incorrect(&self) -> &'static str {
        match self.locale {
            Locale::English => "So close!",
            Locale::Japanese => "おしい！",
        }
    }

    #[must_use]
    pub fn completed(&self) -> &'static str {
        match self.locale {
            Locale::English => "Perfect! Congratulations!",
            Locale::Japanese => "完璧です！おめでとう！",
        }
    }

    #[must_use]
    pub fn voice_enabled(&self) -> &'static str {
        match self.locale {
            Locale::English => "Voice is on.",
            Locale::Japanese => "オンにしました",
        }
    }
}
