use std::sync::Arc;
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use services::{AnnouncerRef, AdvanceTicket, QuizAction, QuizController, RecordingAnnouncer};
use tables_core::model::{Locale, SessionConfig};

use crate::context::{UiApp, build_app_context};
use crate::views::QuizRoot;
use crate::views::quiz::QuizTestHandles;

/// Long enough that the real timer never fires while a test is running.
pub const MANUAL_ADVANCE: Duration = Duration::from_secs(600);

#[derive(Clone)]
struct TestApp {
    config: SessionConfig,
    locale: Locale,
    advance_delay: Duration,
    announcer: RecordingAnnouncer,
}

impl UiApp for TestApp {
    fn initial_config(&self) -> SessionConfig {
        self.config
    }

    fn locale(&self) -> Locale {
        self.locale
    }

    fn advance_delay(&self) -> Duration {
        self.advance_delay
    }

    fn announcer(&self) -> AnnouncerRef {
        Arc::new(self.announcer.clone())
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    handles: QuizTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn QuizHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { QuizRoot {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub announcer: RecordingAnnouncer,
    handles: QuizTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn dispatch(&mut self, action: QuizAction) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(action));
        drive_dom(&mut self.dom);
    }

    pub fn pending_advance(&self) -> Option<AdvanceTicket> {
        let controller = self.handles.controller();
        self.dom.in_runtime(|| controller.read().pending_advance())
    }

    pub fn with_controller<T>(&self, f: impl FnOnce(&QuizController) -> T) -> T {
        let controller = self.handles.controller();
        self.dom.in_runtime(|| f(&controller.read()))
    }

    /// Fire the pending advance the way the timer would.
    pub fn elapse_advance(&mut self) {
        let ticket = self.pending_advance().expect("advance scheduled");
        self.dispatch(QuizAction::AdvanceElapsed(ticket));
    }

    pub fn drive(&mut self) {
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(Duration::from_millis(50), self.dom.wait_for_work()).await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(config: SessionConfig, advance_delay: Duration) -> ViewHarness {
    setup_view_harness_with_locale(config, Locale::English, advance_delay)
}

pub fn setup_view_harness_with_locale(
    config: SessionConfig,
    locale: Locale,
    advance_delay: Duration,
) -> ViewHarness {
    let announcer = RecordingAnnouncer::new();
    let handles = QuizTestHandles::default();
    let app = Arc::new(TestApp {
        config,
        locale,
        advance_delay,
        announcer: announcer.clone(),
    });

    let dom = VirtualDom::new_with_props(
        QuizHarness,
        ViewHarnessProps {
            app,
            handles: handles.clone(),
        },
    );

    let mut harness = ViewHarness {
        dom,
        announcer,
        handles,
    };
    harness.rebuild();
    harness
}
