use dioxus::prelude::*;
use services::{Notice, NoticeLevel};

fn level_class(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Info => "notice notice--info",
        NoticeLevel::Warning => "notice notice--warning",
        NoticeLevel::Error => "notice notice--error",
    }
}

#[component]
pub fn NoticeBanner(notices: Vec<Notice>, on_dismiss: EventHandler<usize>) -> Element {
    if notices.is_empty() {
        return rsx! {};
    }

    rsx! {
        div { class: "notices", role: "status",
            for (index, notice) in notices.into_iter().enumerate() {
                div { key: "{index}", class: level_class(notice.level),
                    span { class: "notice__message", "{notice.message}" }
                    button {
                        class: "notice__dismiss",
                        r#type: "button",
                        onclick: move |_| on_dismiss.call(index),
                        "Dismiss"
                    }
                }
            }
        }
    }
}

#[component]
pub fn ConfirmDialog(message: String, on_answer: EventHandler<bool>) -> Element {
    rsx! {
        div { class: "confirm-overlay",
            div {
                class: "confirm-dialog",
                role: "dialog",
                aria_modal: "true",
                p { class: "confirm-dialog__message", "{message}" }
                div { class: "confirm-dialog__actions",
                    button {
                        class: "btn btn-secondary",
                        id: "confirm-decline",
                        r#type: "button",
                        onclick: move |_| on_answer.call(false),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-primary",
                        id: "confirm-accept",
                        r#type: "button",
                        onclick: move |_| on_answer.call(true),
                        "Restart"
                    }
                }
            }
        }
    }
}
