use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{InMemoryQuestionProvider, QuestionProvider};

use crate::context::{UiApp, build_app_context};
use crate::notice::UiNotifier;
use crate::views::QuizPage;
use crate::views::quiz::QuizTestHandles;
use crate::vm::QuizIntent;

struct TestApp {
    provider: Arc<InMemoryQuestionProvider>,
    confirm_reset: bool,
}

impl UiApp for TestApp {
    fn app_name(&self) -> &str {
        "Quiz Test"
    }

    fn question_provider(&self) -> Arc<dyn QuestionProvider> {
        self.provider.clone()
    }

    fn confirm_reset(&self) -> bool {
        self.confirm_reset
    }
}

#[derive(Clone, Default)]
struct NotifierSlot(std::rc::Rc<std::cell::RefCell<Option<Arc<UiNotifier>>>>);

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    handles: QuizTestHandles,
    notifier: NotifierSlot,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    let ctx = use_context_provider(|| build_app_context(&app));
    *props.notifier.0.borrow_mut() = Some(ctx.notifier());
    use_context_provider(|| props.handles.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    rsx! { QuizPage {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub provider: Arc<InMemoryQuestionProvider>,
    pub handles: QuizTestHandles,
    notifier: NotifierSlot,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        for _ in 0..3 {
            let _ = tokio::time::timeout(
                std::time::Duration::from_millis(50),
                self.dom.wait_for_work(),
            )
            .await;
            self.dom.render_immediate(&mut NoOpMutations);
            self.dom.process_events();
        }
    }

    pub fn dispatch(&mut self, intent: QuizIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    pub fn notifier(&self) -> Arc<UiNotifier> {
        self.notifier
            .0
            .borrow()
            .clone()
            .expect("notifier registered")
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

pub fn setup_view_harness(provider: InMemoryQuestionProvider, confirm_reset: bool) -> ViewHarness {
    let provider = Arc::new(provider);
    let handles = QuizTestHandles::default();
    let notifier = NotifierSlot::default();
    let app = Arc::new(TestApp {
        provider: Arc::clone(&provider),
        confirm_reset,
    });

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            handles: handles.clone(),
            notifier: notifier.clone(),
        },
    );

    ViewHarness {
        dom,
        provider,
        handles,
        notifier,
    }
}
