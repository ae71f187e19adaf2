use services::QuizController;
use tables_core::model::{Factor, Order, Screen};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackVm {
    Correct,
    Incorrect,
}

impl FeedbackVm {
    #[must_use]
    pub fn from_correct(correct: bool) -> Self {
        if correct { Self::Correct } else { Self::Incorrect }
    }

    #[must_use]
    pub fn mark(self) -> &'static str {
        match self {
            FeedbackVm::Correct => "○",
            FeedbackVm::Incorrect => "×",
        }
    }

    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            FeedbackVm::Correct => "feedback-overlay feedback-overlay--correct",
            FeedbackVm::Incorrect => "feedback-overlay feedback-overlay--incorrect",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableChoiceVm {
    pub factor: Factor,
    pub label: String,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderChoiceVm {
    pub order: Order,
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SetupVm {
    pub tables: Vec<TableChoiceVm>,
    pub orders: Vec<OrderChoiceVm>,
    pub voice_enabled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProblemVm {
    pub problem_text: String,
    pub answer_text: String,
    pub progress_percent: u32,
    pub progress_label: String,
    pub feedback: Option<FeedbackVm>,
}

impl ProblemVm {
    #[must_use]
    pub fn progress_style(&self) -> String {
        format!("width: {}%;", self.progress_percent)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultVm {
    pub title: String,
    pub subtitle: &'static str,
}

/// Everything the screens render, projected from the controller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizVm {
    pub screen: Screen,
    pub setup: SetupVm,
    pub problem: Option<ProblemVm>,
    pub result: Option<ResultVm>,
}

#[must_use]
pub fn map_quiz_vm(controller: &QuizController, feedback: Option<bool>) -> QuizVm {
    let config = controller.config();
    let setup = SetupVm {
        tables: Factor::all()
            .map(|factor| TableChoiceVm {
                factor,
                label: format!("{factor}×"),
                selected: factor == config.multiplier(),
            })
            .collect(),
        orders: Order::ALL
            .iter()
            .map(|&order| OrderChoiceVm {
                order,
                label: order.label(),
                selected: order == config.order(),
            })
            .collect(),
        voice_enabled: config.voice_enabled(),
    };

    let problem = match controller.screen() {
        Screen::Quiz => map_problem(controller, feedback),
        Screen::Setup | Screen::Result => None,
    };

    let result = match controller.screen() {
        Screen::Result => Some(ResultVm {
            title: format!("You finished the {} times table!", config.multiplier()),
            subtitle: "All nine answers correct.",
        }),
        Screen::Setup | Screen::Quiz => None,
    };

    QuizVm {
        screen: controller.screen(),
        setup,
        problem,
        result,
    }
}

fn map_problem(controller: &QuizController, feedback: Option<bool>) -> Option<ProblemVm> {
    let problem = controller.displayed_problem()?;
    let session = controller.session()?;

    let answer_text = if controller.pending_advance().is_some() {
        problem.answer().to_string()
    } else {
        session.pending_input().display().to_string()
    };

    let progress = controller.displayed_progress();
    // Progress is a fraction in [0, 1].
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let progress_percent = (progress * 100.0).round() as u32;
    let total = session.problems().len();
    let solved = session.current_index().min(total);

    Some(ProblemVm {
        problem_text: problem.text(),
        answer_text,
        progress_percent,
        progress_label: format!("{solved} / {total}"),
        feedback: feedback.map(FeedbackVm::from_correct),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use services::{QuizAction, SilentAnnouncer};
    use std::sync::Arc;
    use tables_core::model::{Digit, SessionConfig};

    fn controller(table: u8) -> QuizController {
        let config = SessionConfig::default()
            .with_multiplier(Factor::new(table).unwrap())
            .with_order(Order::Ascending);
        QuizController::new(Arc::new(SilentAnnouncer)).with_config(config)
    }

    #[test]
    fn setup_marks_selected_choices() {
        let quiz = controller(6);
        let vm = map_quiz_vm(&quiz, None);

        assert_eq!(vm.screen, Screen::Setup);
        assert_eq!(vm.setup.tables.len(), 9);
        let selected: Vec<_> = vm.setup.tables.iter().filter(|t| t.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].label, "6×");
        assert!(
            vm.setup
                .orders
                .iter()
                .any(|o| o.selected && o.order == Order::Ascending)
        );
        assert!(vm.problem.is_none());
    }

    #[test]
    fn quiz_shows_placeholder_then_digits() {
        let mut quiz = controller(9);
        quiz.dispatch(QuizAction::Start);

        let vm = map_quiz_vm(&quiz, None);
        let problem = vm.problem.unwrap();
        assert_eq!(problem.problem_text, "9 × 1");
        assert_eq!(problem.answer_text, "?");
        assert_eq!(problem.progress_percent, 0);
        assert_eq!(problem.progress_label, "0 / 9");

        quiz.dispatch(QuizAction::Digit(Digit::new(1).unwrap()));
        let vm = map_quiz_vm(&quiz, None);
        assert_eq!(vm.problem.unwrap().answer_text, "1");
    }

    #[test]
    fn solved_problem_stays_visible_with_feedback() {
        let mut quiz = controller(5);
        quiz.dispatch(QuizAction::Start);
        quiz.dispatch(QuizAction::Digit(Digit::new(5).unwrap()));

        let problem = map_quiz_vm(&quiz, Some(true)).problem.unwrap();
        assert_eq!(problem.problem_text, "5 × 1");
        assert_eq!(problem.answer_text, "5");
        assert_eq!(problem.feedback, Some(FeedbackVm::Correct));
        assert_eq!(problem.feedback.unwrap().mark(), "○");
    }

    #[test]
    fn progress_style_uses_percent() {
        let mut quiz = controller(2);
        quiz.dispatch(QuizAction::Start);
        quiz.dispatch(QuizAction::Digit(Digit::new(2).unwrap()));
        let ticket = quiz.pending_advance().unwrap();
        quiz.dispatch(QuizAction::AdvanceElapsed(ticket));

        let problem = map_quiz_vm(&quiz, None).problem.unwrap();
        assert_eq!(problem.progress_percent, 11);
        assert_eq!(problem.progress_style(), "width: 11%;");
        assert_eq!(problem.progress_label, "1 / 9");
    }
}
