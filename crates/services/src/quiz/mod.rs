mod controller;
mod events;
mod input;
mod plan;
mod session;

pub use controller::{DEFAULT_ADVANCE_DELAY, QuizController};
pub use events::{AdvanceTicket, QuizAction, QuizEvent};
pub use input::{INPUT_PLACEHOLDER, MAX_INPUT_DIGITS, PendingInput};
pub use plan::{ProblemSetBuilder, generate_problems, generate_problems_with_rng};
pub use session::{DigitOutcome, Judgment, QuizSession};
