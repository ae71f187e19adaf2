use std::time::Duration;

use tables_core::model::{Digit, Factor, Order, Problem, Screen};

/// Identifies one scheduled advance.
///
/// Every correct answer gets a fresh ticket. Leaving the quiz invalidates the
/// outstanding ticket, so a timer that fires late is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AdvanceTicket(u64);

impl AdvanceTicket {
    pub(crate) fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// User (or timer) actions fed into [`super::QuizController::dispatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizAction {
    SelectMultiplier(Factor),
    SelectOrder(Order),
    ToggleVoice(bool),
    Start,
    Digit(Digit),
    Clear,
    /// The keypad's OK key: judge the current input without waiting.
    Submit,
    /// The delay scheduled by [`QuizEvent::AdvanceScheduled`] has elapsed.
    AdvanceElapsed(AdvanceTicket),
    /// Abandon the quiz and go back to setup.
    Back,
    /// Leave the result screen for a new run.
    Restart,
}

/// Notifications for the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuizEvent {
    /// A new problem is current. `progress` is the fraction already solved.
    ProblemChanged { problem: Problem, progress: f64 },
    Feedback { correct: bool },
    /// Dispatch `QuizAction::AdvanceElapsed(ticket)` after `delay`.
    AdvanceScheduled { ticket: AdvanceTicket, delay: Duration },
    SessionCompleted,
    ScreenChanged(Screen),
}
