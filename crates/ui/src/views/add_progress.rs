use dioxus::prelude::*;
use dioxus_router::use_navigator;

use progress_core::model::{ProgressStatus, ProgressTemplate};

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::{ProgressFormVm, form_error_message};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SaveState {
    Idle,
    Saving,
    Error(&'static str),
}

#[component]
pub fn AddProgressView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let progress = ctx.progress();
    let mut form = use_signal(ProgressFormVm::default);
    let mut save_state = use_signal(|| SaveState::Idle);

    let on_save = move |_: MouseEvent| {
        if save_state() == SaveState::Saving {
            return;
        }
        let snapshot = form.read().clone();
        if !snapshot.can_submit() {
            save_state.set(SaveState::Error("Please enter a topic."));
            return;
        }
        let progress = progress.clone();
        spawn(async move {
            save_state.set(SaveState::Saving);
            match progress.add_progress(snapshot.to_draft()).await {
                Ok(_) => {
                    save_state.set(SaveState::Idle);
                    let _ = navigator.push(Route::Dashboard {});
                }
                Err(err) => save_state.set(SaveState::Error(form_error_message(&err))),
            }
        });
    };

    let current = form.read().clone();
    let saving = save_state() == SaveState::Saving;

    rsx! {
        div { class: "page add-progress",
            header { class: "view-header",
                h2 { class: "view-title", "Add New Progress" }
            }

            if let SaveState::Error(message) = save_state() {
                p { class: "form-error", role: "alert", "{message}" }
            }

            div { class: "form",
                label { class: "form-field",
                    span { "Topic" }
                    input {
                        r#type: "text",
                        value: "{current.topic}",
                        placeholder: "What did you work on?",
                        oninput: move |evt| form.write().topic = evt.value(),
                    }
                }
                label { class: "form-field",
                    span { "Description" }
                    textarea {
                        value: "{current.description}",
                        oninput: move |evt| form.write().description = evt.value(),
                    }
                }
                label { class: "form-field",
                    span { "Status" }
                    select {
                        value: "{current.status}",
                        onchange: move |evt| form.write().status = evt.value(),
                        for choice in ProgressStatus::CHOICES {
                            option { value: "{choice}", "{choice}" }
                        }
                    }
                }
                label { class: "form-field",
                    span { "Category" }
                    select {
                        value: "{current.template}",
                        onchange: move |evt| form.write().template = evt.value(),
                        for choice in ProgressTemplate::CHOICES {
                            option { value: "{choice}", "{choice}" }
                        }
                    }
                }
                div { class: "form-actions",
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        disabled: saving,
                        onclick: on_save,
                        if saving { "Saving..." } else { "Save Progress" }
                    }
                }
            }
        }
    }
}
