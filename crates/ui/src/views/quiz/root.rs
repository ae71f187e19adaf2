use dioxus::document::eval;
use dioxus::prelude::*;

use services::{QuizAction, QuizController, QuizEvent};
use tables_core::model::{Digit, Screen};

use crate::context::AppContext;
use crate::vm::map_quiz_vm;
use super::drill::DrillView;
use super::result::ResultView;
use super::setup::SetupView;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

/// Apply an action and react to the emitted events.
///
/// A feedback mark lasts until the next user action, except while the solved
/// problem is still on screen waiting for its advance.
fn run_action(
    mut controller: Signal<QuizController>,
    mut feedback: Signal<Option<bool>>,
    action: QuizAction,
) {
    let advancing = controller.read().pending_advance().is_some();
    if !advancing && !matches!(action, QuizAction::AdvanceElapsed(_)) {
        feedback.set(None);
    }

    let events = controller.write().dispatch(action);
    for event in events {
        match event {
            QuizEvent::Feedback { correct } => feedback.set(Some(correct)),
            QuizEvent::AdvanceScheduled { ticket, delay } => {
                spawn(async move {
                    tokio::time::sleep(delay).await;
                    run_action(controller, feedback, QuizAction::AdvanceElapsed(ticket));
                });
            }
            QuizEvent::ProblemChanged { .. } | QuizEvent::ScreenChanged(_) => feedback.set(None),
            QuizEvent::SessionCompleted => {}
        }
    }
}

fn action_for_key(key: &Key) -> Option<QuizAction> {
    match key {
        Key::Character(text) => {
            let mut chars = text.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => Digit::from_char(ch).ok().map(QuizAction::Digit),
                _ => None,
            }
        }
        Key::Backspace | Key::Delete | Key::Escape => Some(QuizAction::Clear),
        Key::Enter => Some(QuizAction::Submit),
        _ => None,
    }
}

#[component]
pub fn QuizRoot() -> Element {
    let ctx = use_context::<AppContext>();
    let controller = use_signal(|| ctx.build_controller());
    let feedback = use_signal(|| None::<bool>);
    let dispatch = use_callback(move |action: QuizAction| {
        run_action(controller, feedback, action);
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch, controller);
            }
        }
    }

    let vm = map_quiz_vm(&controller.read(), feedback());

    use_effect(move || {
        let _ = eval("document.getElementById(\"quiz-root\")?.focus();");
    });

    let on_key = move |evt: KeyboardEvent| {
        if let Some(action) = action_for_key(&evt.key()) {
            evt.prevent_default();
            dispatch.call(action);
        }
    };

    rsx! {
        div { class: "quiz-app", id: "quiz-root", tabindex: "0", onkeydown: on_key,
            match vm.screen {
                Screen::Setup => rsx! {
                    SetupView { setup: vm.setup.clone(), on_action: dispatch }
                },
                Screen::Quiz => rsx! {
                    if let Some(problem) = vm.problem.clone() {
                        DrillView { problem, on_action: dispatch }
                    }
                },
                Screen::Result => rsx! {
                    if let Some(result) = vm.result.clone() {
                        ResultView { result, on_action: dispatch }
                    }
                },
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizAction>>>>,
    controller: Rc<RefCell<Option<Signal<QuizController>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(
        &self,
        dispatch: Callback<QuizAction>,
        controller: Signal<QuizController>,
    ) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.controller.borrow_mut() = Some(controller);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizAction> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }

    pub(crate) fn controller(&self) -> Signal<QuizController> {
        (*self.controller.borrow()).expect("quiz controller registered")
    }
}
