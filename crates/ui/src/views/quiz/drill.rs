use dioxus::prelude::*;

use services::QuizAction;
use tables_core::model::Digit;

use crate::vm::ProblemVm;

#[component]
fn KeypadButton(
    label: String,
    class: &'static str,
    action: QuizAction,
    on_action: EventHandler<QuizAction>,
) -> Element {
    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            onclick: move |_| on_action.call(action),
            "{label}"
        }
    }
}

#[component]
pub fn DrillView(problem: ProblemVm, on_action: EventHandler<QuizAction>) -> Element {
    let progress_style = problem.progress_style();
    // Phone layout: 1-9 on top, then C 0 OK.
    let (zero, digits): (Vec<Digit>, Vec<Digit>) =
        Digit::keypad().partition(|digit| digit.value() == 0);
    let digit_keys = digits.into_iter().map(|digit| {
        rsx! {
            KeypadButton {
                key: "{digit}",
                label: digit.to_string(),
                class: "num-btn",
                action: QuizAction::Digit(digit),
                on_action,
            }
        }
    });
    let zero_key = zero.into_iter().map(|digit| {
        rsx! {
            KeypadButton {
                key: "{digit}",
                label: digit.to_string(),
                class: "num-btn",
                action: QuizAction::Digit(digit),
                on_action,
            }
        }
    });

    rsx! {
        section { class: "screen quiz-screen", id: "quiz-screen",
            header { class: "quiz-header",
                button {
                    class: "btn btn-secondary back-btn",
                    id: "back-btn",
                    r#type: "button",
                    onclick: move |_| on_action.call(QuizAction::Back),
                    "Back"
                }
                span { class: "quiz-progress-label", "{problem.progress_label}" }
            }
            div { class: "progress-track",
                div { class: "progress-bar", id: "progress", style: "{progress_style}" }
            }
            div { class: "problem-card",
                div { class: "problem-text", id: "problem-text", "{problem.problem_text}" }
                div { class: "answer-display", id: "answer-display", "{problem.answer_text}" }
                if let Some(feedback) = problem.feedback {
                    div { class: feedback.class(), id: "feedback-overlay", "{feedback.mark()}" }
                }
            }
            div { class: "keypad", id: "keypad",
                {digit_keys}
                KeypadButton {
                    label: "C".to_string(),
                    class: "num-btn num-btn--clear",
                    action: QuizAction::Clear,
                    on_action,
                }
                {zero_key}
                KeypadButton {
                    label: "OK".to_string(),
                    class: "num-btn num-btn--submit",
                    action: QuizAction::Submit,
                    on_action,
                }
            }
        }
    }
}
