use dioxus::prelude::*;
use services::QuizController;

use crate::context::AppContext;
use crate::views::{ConfirmDialog, NoticeBanner, ViewError, ViewState, view_state_from_resource};
use crate::vm::{
    QuestionVm, QuizIntent, QuizScreen, StartVm, SummaryVm, map_quiz_screen, option_index_for_key,
};

#[cfg(test)]
use services::QuizView;
#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn QuizPage() -> Element {
    let ctx = use_context::<AppContext>();
    let notifier = ctx.notifier();

    let controller = use_signal({
        let ctx = ctx.clone();
        move || Some(ctx.new_controller())
    });
    let snapshot = use_signal(move || controller.peek().as_ref().map(QuizController::view));
    let board = use_signal({
        let notifier = notifier.clone();
        move || notifier.board()
    });

    {
        let notifier = notifier.clone();
        use_future(move || {
            let notifier = notifier.clone();
            let mut board = board;
            async move {
                loop {
                    notifier.changed().await;
                    board.set(notifier.board());
                }
            }
        });
    }

    // First run fetches; later restarts are explicit reloads.
    let resource = use_resource(move || {
        let mut controller = controller;
        let mut snapshot = snapshot;

        async move {
            let Some(mut ctrl) = controller.write().take() else {
                return Err(ViewError::Unknown);
            };
            let result = if ctrl.status().is_loading() {
                ctrl.load().await
            } else {
                ctrl.reload().await
            };

            // Always put the controller back so the page stays usable after errors.
            snapshot.set(Some(ctrl.view()));
            controller.set(Some(ctrl));
            result.map_err(ViewError::from)
        }
    });

    let dispatch_intent = use_callback(move |intent: QuizIntent| {
        let mut controller = controller;
        let mut snapshot = snapshot;
        let mut resource = resource;

        match intent {
            QuizIntent::Reload => resource.restart(),
            QuizIntent::Restart => {
                spawn(async move {
                    let Some(mut ctrl) = controller.write().take() else {
                        return;
                    };
                    ctrl.reset().await;
                    snapshot.set(Some(ctrl.view()));
                    controller.set(Some(ctrl));
                });
            }
            QuizIntent::Start | QuizIntent::Select(_) | QuizIntent::Next => {
                let view = {
                    let mut guard = controller.write();
                    let Some(ctrl) = guard.as_mut() else {
                        return;
                    };
                    match intent {
                        QuizIntent::Start => {
                            if ctrl.view().can_start() {
                                ctrl.start();
                            }
                        }
                        QuizIntent::Select(index) => {
                            ctrl.select_option(index);
                        }
                        // A rejected advance has already been reported through the notifier.
                        _ => {
                            let _ = ctrl.advance();
                        }
                    }
                    ctrl.view()
                };
                snapshot.set(Some(view));
            }
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch_intent, snapshot);
            }
        }
    }

    let on_key = use_callback(move |evt: KeyboardEvent| {
        let screen = snapshot.read().as_ref().map(map_quiz_screen);
        match (evt.data.key(), screen) {
            (Key::Enter, Some(QuizScreen::Start(vm))) if vm.can_start => {
                evt.prevent_default();
                dispatch_intent.call(QuizIntent::Start);
            }
            (Key::Enter, Some(QuizScreen::Question(_))) => {
                evt.prevent_default();
                dispatch_intent.call(QuizIntent::Next);
            }
            (Key::Character(value), Some(QuizScreen::Question(vm))) => {
                if let Some(index) = option_index_for_key(&value, vm.options.len()) {
                    evt.prevent_default();
                    dispatch_intent.call(QuizIntent::Select(index));
                }
            }
            _ => {}
        }
    });

    let state = view_state_from_resource(resource);
    let screen = snapshot.read().as_ref().map(map_quiz_screen);
    let board_now = board.read().clone();
    let notifier_for_dismiss = notifier.clone();
    let notifier_for_confirm = notifier.clone();

    rsx! {
        div { class: "page quiz-page", id: "quiz-root", tabindex: "0", onkeydown: on_key,
            NoticeBanner {
                notices: board_now.notices.clone(),
                on_dismiss: move |index: usize| notifier_for_dismiss.dismiss(index),
            }
            div { class: "quiz-card",
                match state {
                    ViewState::Idle => rsx! {
                        p { "Idle" }
                    },
                    ViewState::Loading => rsx! {
                        p { class: "quiz-status", "Loading questions..." }
                    },
                    ViewState::Error(err) => rsx! {
                        p { class: "quiz-status", "{err.message()}" }
                        button {
                            class: "btn btn-secondary",
                            id: "quiz-retry",
                            r#type: "button",
                            onclick: move |_| dispatch_intent.call(QuizIntent::Reload),
                            "Retry"
                        }
                    },
                    ViewState::Ready(()) => match screen {
                        Some(QuizScreen::Start(vm)) => rsx! {
                            StartScreen { vm, on_intent: dispatch_intent }
                        },
                        Some(QuizScreen::Question(vm)) => rsx! {
                            QuestionScreen { vm, on_intent: dispatch_intent }
                        },
                        Some(QuizScreen::Summary(vm)) => rsx! {
                            SummaryScreen { vm, on_intent: dispatch_intent }
                        },
                        None => rsx! {
                            p { class: "quiz-status", "Loading questions..." }
                        },
                    },
                }
            }
            if let Some(message) = board_now.confirm.clone() {
                ConfirmDialog {
                    message,
                    on_answer: move |accepted: bool| notifier_for_confirm.answer(accepted),
                }
            }
        }
    }
}

#[component]
fn StartScreen(vm: StartVm, on_intent: EventHandler<QuizIntent>) -> Element {
    rsx! {
        div { class: "quiz-start",
            h2 { class: "quiz-start__title", "Quiz App" }
            if let Some(note) = vm.note {
                p { class: "quiz-start__note", "{note}" }
                button {
                    class: "btn btn-secondary",
                    id: "quiz-reload",
                    r#type: "button",
                    onclick: move |_| on_intent.call(QuizIntent::Reload),
                    "Try Again"
                }
            }
            button {
                class: "btn btn-primary quiz-start__cta",
                id: "quiz-start",
                r#type: "button",
                disabled: !vm.can_start,
                onclick: move |_| on_intent.call(QuizIntent::Start),
                "Get Started"
            }
        }
    }
}

#[component]
fn QuestionScreen(vm: QuestionVm, on_intent: EventHandler<QuizIntent>) -> Element {
    rsx! {
        div { class: "quiz-question",
            header { class: "quiz-question__header",
                h2 { class: "quiz-question__progress", "{vm.progress_label}" }
                button {
                    class: "btn btn-ghost",
                    id: "quiz-quit",
                    r#type: "button",
                    onclick: move |_| on_intent.call(QuizIntent::Restart),
                    "Restart"
                }
            }
            if let Some(tags) = vm.tags_label.as_ref() {
                p { class: "quiz-question__tags", "{tags}" }
            }
            h3 { class: "quiz-question__text", "{vm.text}" }
            div { class: "quiz-options", role: "radiogroup",
                for option in vm.options.iter().cloned() {
                    label { key: "{option.index}", class: "quiz-option",
                        input {
                            r#type: "radio",
                            name: "answer",
                            value: "{option.text}",
                            checked: option.selected,
                            onchange: move |_| on_intent.call(QuizIntent::Select(option.index)),
                        }
                        "{option.text}"
                    }
                }
            }
            button {
                class: "btn btn-primary quiz-next",
                id: "quiz-next",
                r#type: "button",
                onclick: move |_| on_intent.call(QuizIntent::Next),
                "Next"
            }
        }
    }
}

#[component]
fn SummaryScreen(vm: SummaryVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let verdict_class = if vm.passed {
        "quiz-summary__verdict quiz-summary__verdict--pass"
    } else {
        "quiz-summary__verdict quiz-summary__verdict--fail"
    };

    rsx! {
        div { class: "quiz-summary",
            h2 { class: "quiz-summary__title", "Quiz Finished!" }
            p { class: "quiz-summary__score", "{vm.score_label}" }
            h3 { class: verdict_class, "{vm.message}" }
            div { class: "quiz-summary__actions",
                button {
                    class: "btn btn-primary",
                    id: "quiz-restart",
                    r#type: "button",
                    onclick: move |_| on_intent.call(QuizIntent::Restart),
                    "Restart Quiz"
                }
                button {
                    class: "btn btn-secondary",
                    id: "quiz-new-questions",
                    r#type: "button",
                    onclick: move |_| on_intent.call(QuizIntent::Reload),
                    "New Questions"
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
    snapshot: Rc<RefCell<Option<Signal<Option<QuizView>>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<QuizIntent>, snapshot: Signal<Option<QuizView>>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.snapshot.borrow_mut() = Some(snapshot);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }

    pub(crate) fn snapshot(&self) -> Signal<Option<QuizView>> {
        (*self.snapshot.borrow()).expect("quiz snapshot registered")
    }
}
