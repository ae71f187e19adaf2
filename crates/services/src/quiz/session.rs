use rand::Rng;
use std::fmt;

use tables_core::model::{Digit, Problem, SessionConfig};

use super::input::PendingInput;
use super::plan::{ProblemSetBuilder, generate_problems_with_rng};

//
// ─── OUTCOMES ──────────────────────────────────────────────────────────────────
//

/// Result of judging the pending input against the current problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Judgment {
    /// The answer matched; `session_complete` is true after the last problem.
    Correct { session_complete: bool },
    /// The answer did not match; the same problem stays current.
    Incorrect,
}

impl Judgment {
    #[must_use]
    pub fn is_correct(self) -> bool {
        matches!(self, Judgment::Correct { .. })
    }
}

/// What happened after a keypad digit was fed to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitOutcome {
    /// The session is already complete; the digit was dropped.
    Ignored,
    /// Digit accepted, waiting for more input before judging.
    Pending,
    /// Digit accepted and the input was judged.
    Judged(Judgment),
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One run through the nine problems of a table.
///
/// Steps through problems sequentially; the index only moves forward on a
/// correct answer and reaching `problems.len()` marks completion.
#[derive(Clone)]
pub struct QuizSession {
    problems: Vec<Problem>,
    current: usize,
    input: PendingInput,
}

impl QuizSession {
    /// Start a session for the configured table, shuffling with the thread-local RNG.
    #[must_use]
    pub fn start(config: &SessionConfig) -> Self {
        Self::from_problems(
            ProblemSetBuilder::new(config.multiplier())
                .with_order(config.order())
                .build(),
        )
    }

    /// Start a session using the given RNG for `Order::Random`.
    pub fn start_with_rng<R: Rng + ?Sized>(config: &SessionConfig, rng: &mut R) -> Self {
        Self::from_problems(generate_problems_with_rng(
            config.multiplier(),
            config.order(),
            rng,
        ))
    }

    pub(crate) fn from_problems(problems: Vec<Problem>) -> Self {
        Self {
            problems,
            current: 0,
            input: PendingInput::new(),
        }
    }

    #[must_use]
    pub fn problems(&self) -> &[Problem] {
        &self.problems
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_problem(&self) -> Option<&Problem> {
        self.problems.get(self.current)
    }

    #[must_use]
    pub fn pending_input(&self) -> &PendingInput {
        &self.input
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.current >= self.problems.len()
    }

    /// Fraction of problems answered correctly so far, in `[0, 1]`.
    ///
    /// Stays below 1.0 until the last problem has been answered.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.problems.is_empty() {
            return 0.0;
        }
        // Both counts are at most 9.
        #[allow(clippy::cast_precision_loss)]
        let fraction = self.current as f64 / self.problems.len() as f64;
        fraction
    }

    /// Feed one keypad digit and auto-judge.
    ///
    /// The input is judged as soon as its value equals the answer, or as soon
    /// as it holds two digits, whichever comes first.
    pub fn submit_digit(&mut self, digit: Digit) -> DigitOutcome {
        let Some(answer) = self.current_problem().map(Problem::answer) else {
            return DigitOutcome::Ignored;
        };
        if !self.input.push(digit) {
            return DigitOutcome::Ignored;
        }

        if self.input.value() == Some(answer) || self.input.is_full() {
            DigitOutcome::Judged(self.judge(answer))
        } else {
            DigitOutcome::Pending
        }
    }

    /// Judge whatever is in the input now (the keypad's OK key).
    ///
    /// Returns `None` when there is nothing to judge.
    pub fn submit_pending(&mut self) -> Option<Judgment> {
        if self.input.is_empty() {
            return None;
        }
        let answer = self.current_problem().map(Problem::answer)?;
        Some(self.judge(answer))
    }

    /// Discard typed digits. Safe to call on an empty input.
    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    fn judge(&mut self, answer: u8) -> Judgment {
        let correct = self.input.value() == Some(answer);
        self.input.clear();
        if correct {
            self.current += 1;
            Judgment::Correct {
                session_complete: self.is_complete(),
            }
        } else {
            Judgment::Incorrect
        }
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("problems_len", &self.problems.len())
            .field("current", &self.current)
            .field("input", &self.input.as_str())
            .finish()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
