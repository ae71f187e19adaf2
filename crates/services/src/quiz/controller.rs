use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fmt;
use std::time::Duration;

use tables_core::model::{Digit, Locale, Problem, Screen, SessionConfig};

use crate::announcer::{AnnouncerRef, Phrasebook};

use super::events::{AdvanceTicket, QuizAction, QuizEvent};
use super::session::{DigitOutcome, Judgment, QuizSession};

/// Pause between a correct answer and the next problem (or the result screen).
pub const DEFAULT_ADVANCE_DELAY: Duration = Duration::from_millis(800);

/// Owns the setup selections, the current screen and the running session.
///
/// All changes go through [`QuizController::dispatch`], which returns the
/// events the rendering layer should react to. Spoken output goes straight to
/// the injected announcer and is skipped while voice is disabled.
pub struct QuizController {
    config: SessionConfig,
    screen: Screen,
    session: Option<QuizSession>,
    pending_advance: Option<AdvanceTicket>,
    next_ticket: u64,
    advance_delay: Duration,
    phrases: Phrasebook,
    announcer: AnnouncerRef,
    rng: StdRng,
}

impl QuizController {
    #[must_use]
    pub fn new(announcer: AnnouncerRef) -> Self {
        Self {
            config: SessionConfig::default(),
            screen: Screen::Setup,
            session: None,
            pending_advance: None,
            next_ticket: 0,
            advance_delay: DEFAULT_ADVANCE_DELAY,
            phrases: Phrasebook::default(),
            announcer,
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Initial setup selections.
    #[must_use]
    pub fn with_config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.phrases = Phrasebook::new(locale);
        self
    }

    #[must_use]
    pub fn with_advance_delay(mut self, delay: Duration) -> Self {
        self.advance_delay = delay;
        self
    }

    /// Seed the shuffle so random orders are reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn session(&self) -> Option<&QuizSession> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn phrases(&self) -> Phrasebook {
        self.phrases
    }

    #[must_use]
    pub fn advance_delay(&self) -> Duration {
        self.advance_delay
    }

    /// Ticket of the advance currently waiting on its timer, if any.
    #[must_use]
    pub fn pending_advance(&self) -> Option<AdvanceTicket> {
        self.pending_advance
    }

    /// Fraction of the current session already solved; 0 outside a session.
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.session.as_ref().map_or(0.0, QuizSession::progress)
    }

    /// Problem the quiz screen shows.
    ///
    /// While an advance is pending this is still the problem just solved; the
    /// next one appears when the delay elapses.
    #[must_use]
    pub fn displayed_problem(&self) -> Option<Problem> {
        let session = self.session.as_ref()?;
        let index = self.displayed_index(session)?;
        session.problems().get(index).copied()
    }

    /// Progress matching [`Self::displayed_problem`]; 1.0 on the result screen.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn displayed_progress(&self) -> f64 {
        if self.screen == Screen::Result {
            return 1.0;
        }
        let Some(session) = self.session.as_ref() else {
            return 0.0;
        };
        let total = session.problems().len();
        match self.displayed_index(session) {
            Some(index) if total > 0 => index as f64 / total as f64,
            _ => 0.0,
        }
    }

    fn displayed_index(&self, session: &QuizSession) -> Option<usize> {
        if self.pending_advance.is_some() {
            session.current_index().checked_sub(1)
        } else {
            Some(session.current_index())
        }
    }

    /// Apply one action and return the resulting events in order.
    pub fn dispatch(&mut self, action: QuizAction) -> Vec<QuizEvent> {
        let mut events = Vec::new();
        match action {
            QuizAction::SelectMultiplier(multiplier) => {
                if self.on_screen(Screen::Setup, "select multiplier") {
                    self.config.set_multiplier(multiplier);
                }
            }
            QuizAction::SelectOrder(order) => {
                if self.on_screen(Screen::Setup, "select order") {
                    self.config.set_order(order);
                }
            }
            QuizAction::ToggleVoice(enabled) => {
                if self.on_screen(Screen::Setup, "toggle voice") {
                    self.toggle_voice(enabled);
                }
            }
            QuizAction::Start => {
                if self.on_screen(Screen::Setup, "start") {
                    self.start(&mut events);
                }
            }
            QuizAction::Digit(digit) => self.digit(digit, &mut events),
            QuizAction::Clear => {
                if let Some(session) = self.session.as_mut() {
                    session.clear_input();
                }
            }
            QuizAction::Submit => self.submit(&mut events),
            QuizAction::AdvanceElapsed(ticket) => self.advance(ticket, &mut events),
            QuizAction::Back => {
                if self.on_screen(Screen::Quiz, "back") {
                    self.return_to_setup(&mut events);
                }
            }
            QuizAction::Restart => {
                if self.on_screen(Screen::Result, "restart") {
                    self.return_to_setup(&mut events);
                }
            }
        }
        events
    }

    fn on_screen(&self, expected: Screen, action: &'static str) -> bool {
        if self.screen == expected {
            return true;
        }
        tracing::debug!(?expected, actual = ?self.screen, action, "action ignored on this screen");
        false
    }

    fn toggle_voice(&mut self, enabled: bool) {
        self.config.set_voice_enabled(enabled);
        if enabled {
            self.announcer.announce(self.phrases.voice_enabled());
        } else {
            self.announcer.cancel();
        }
    }

    fn start(&mut self, events: &mut Vec<QuizEvent>) {
        let session = QuizSession::start_with_rng(&self.config, &mut self.rng);
        tracing::info!(
            multiplier = self.config.multiplier().value(),
            order = %self.config.order(),
            voice = self.config.voice_enabled(),
            "quiz started"
        );
        self.session = Some(session);
        self.pending_advance = None;
        self.set_screen(Screen::Quiz, events);
        self.show_current_problem(events);
    }

    fn digit(&mut self, digit: Digit, events: &mut Vec<QuizEvent>) {
        if self.screen != Screen::Quiz || self.pending_advance.is_some() {
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };
        match session.submit_digit(digit) {
            DigitOutcome::Judged(judgment) => self.apply_judgment(judgment, events),
            DigitOutcome::Pending | DigitOutcome::Ignored => {}
        }
    }

    fn submit(&mut self, events: &mut Vec<QuizEvent>) {
        if self.screen != Screen::Quiz || self.pending_advance.is_some() {
            return;
        }
        let judgment = self.session.as_mut().and_then(QuizSession::submit_pending);
        if let Some(judgment) = judgment {
            self.apply_judgment(judgment, events);
        }
    }

    fn apply_judgment(&mut self, judgment: Judgment, events: &mut Vec<QuizEvent>) {
        let correct = judgment.is_correct();
        let index = self.session.as_ref().map(QuizSession::current_index);
        tracing::debug!(correct, ?index, "answer judged");
        events.push(QuizEvent::Feedback { correct });

        if correct {
            self.speak(self.phrases.correct());
            let ticket = self.issue_ticket();
            self.pending_advance = Some(ticket);
            events.push(QuizEvent::AdvanceScheduled {
                ticket,
                delay: self.advance_delay,
            });
        } else {
            self.speak(self.phrases.incorrect());
        }
    }

    fn advance(&mut self, ticket: AdvanceTicket, events: &mut Vec<QuizEvent>) {
        if self.pending_advance != Some(ticket) {
            tracing::debug!(ticket = ticket.value(), "stale advance ignored");
            return;
        }
        self.pending_advance = None;

        let complete = self.session.as_ref().is_some_and(QuizSession::is_complete);
        if complete {
            self.speak(self.phrases.completed());
            tracing::info!("quiz completed");
            events.push(QuizEvent::SessionCompleted);
            self.set_screen(Screen::Result, events);
        } else {
            self.show_current_problem(events);
        }
    }

    fn return_to_setup(&mut self, events: &mut Vec<QuizEvent>) {
        if let Some(ticket) = self.pending_advance.take() {
            tracing::debug!(ticket = ticket.value(), "pending advance cancelled");
        }
        self.session = None;
        self.announcer.cancel();
        self.set_screen(Screen::Setup, events);
    }

    fn show_current_problem(&mut self, events: &mut Vec<QuizEvent>) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        let Some(problem) = session.current_problem().copied() else {
            return;
        };
        events.push(QuizEvent::ProblemChanged {
            problem,
            progress: session.progress(),
        });
        let prompt = self.phrases.prompt(&problem);
        self.speak(&prompt);
    }

    fn set_screen(&mut self, next: Screen, events: &mut Vec<QuizEvent>) {
        debug_assert!(self.screen.can_transition_to(next));
        tracing::debug!(from = ?self.screen, to = ?next, "screen changed");
        self.screen = next;
        events.push(QuizEvent::ScreenChanged(next));
    }

    fn issue_ticket(&mut self) -> AdvanceTicket {
        self.next_ticket = self.next_ticket.wrapping_add(1);
        AdvanceTicket::new(self.next_ticket)
    }

    fn speak(&self, text: &str) {
        if self.config.voice_enabled() {
            self.announcer.announce(text);
        }
    }
}

impl fmt::Debug for QuizController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizController")
            .field("config", &self.config)
            .field("screen", &self.screen)
            .field("session", &self.session)
            .field("pending_advance", &self.pending_advance)
            .field("advance_delay", &self.advance_delay)
            .field("locale", &self.phrases.locale())
            .finish_non_exhaustive()
    }
}
