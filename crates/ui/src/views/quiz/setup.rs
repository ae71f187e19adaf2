use dioxus::prelude::*;

use services::QuizAction;

use crate::vm::SetupVm;

fn choice_class(base: &str, selected: bool) -> String {
    if selected {
        format!("{base} selected")
    } else {
        base.to_string()
    }
}

#[component]
pub fn SetupView(setup: SetupVm, on_action: EventHandler<QuizAction>) -> Element {
    let table_buttons = setup.tables.iter().map(|table| {
        let factor = table.factor;
        let class = choice_class("dan-btn", table.selected);
        rsx! {
            button {
                key: "{factor}",
                class: "{class}",
                r#type: "button",
                onclick: move |_| on_action.call(QuizAction::SelectMultiplier(factor)),
                "{table.label}"
            }
        }
    });

    let order_buttons = setup.orders.iter().map(|choice| {
        let order = choice.order;
        let class = choice_class("order-btn", choice.selected);
        rsx! {
            button {
                key: "{order}",
                class: "{class}",
                r#type: "button",
                "data-order": order.as_str(),
                onclick: move |_| on_action.call(QuizAction::SelectOrder(order)),
                "{choice.label}"
            }
        }
    });

    let voice_on_class = choice_class("voice-btn", setup.voice_enabled);
    let voice_off_class = choice_class("voice-btn", !setup.voice_enabled);

    rsx! {
        section { class: "screen setup-screen", id: "setup-screen",
            header { class: "view-header",
                h2 { class: "view-title", "Times Tables" }
                p { class: "view-subtitle", "Pick a table and an order, then press Start." }
            }
            div { class: "setup-group",
                h3 { class: "setup-label", "Table" }
                div { class: "dan-grid", id: "dan-selection", {table_buttons} }
            }
            div { class: "setup-group",
                h3 { class: "setup-label", "Order" }
                div { class: "order-row", id: "order-selection", {order_buttons} }
            }
            div { class: "setup-group",
                h3 { class: "setup-label", "Voice" }
                div { class: "voice-row", id: "voice-selection",
                    button {
                        class: "{voice_on_class}",
                        r#type: "button",
                        "data-voice": "true",
                        onclick: move |_| on_action.call(QuizAction::ToggleVoice(true)),
                        "On"
                    }
                    button {
                        class: "{voice_off_class}",
                        r#type: "button",
                        "data-voice": "false",
                        onclick: move |_| on_action.call(QuizAction::ToggleVoice(false)),
                        "Off"
                    }
                }
            }
            button {
                class: "btn btn-primary start-btn",
                id: "start-btn",
                r#type: "button",
                onclick: move |_| on_action.call(QuizAction::Start),
                "Start"
            }
        }
    }
}
