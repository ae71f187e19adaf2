use dioxus::prelude::*;

use services::QuizAction;

use crate::vm::ResultVm;

#[component]
pub fn ResultView(result: ResultVm, on_action: EventHandler<QuizAction>) -> Element {
    rsx! {
        section { class: "screen result-screen", id: "result-screen",
            div { class: "result-mark", "○" }
            h2 { class: "view-title", id: "result-title", "{result.title}" }
            p { class: "view-subtitle", "{result.subtitle}" }
            button {
                class: "btn btn-primary",
                id: "restart-btn",
                r#type: "button",
                onclick: move |_| on_action.call(QuizAction::Restart),
                "Try another table"
            }
        }
    }
}
