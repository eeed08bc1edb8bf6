#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, load_state_from_resource};
use crate::vm::{ActivityVm, DashboardVm, LoadState, StatCardVm, banner_message, map_dashboard};

#[component]
pub fn DashboardView() -> Element {
    let ctx = use_context::<AppContext>();
    let progress = ctx.progress();
    let mut banner_dismissed = use_signal(|| false);

    // No reactive inputs: the fetch runs once per mount. The task belongs to this
    // scope, so a result that lands after unmount is dropped with it.
    let resource = use_resource(move || {
        let progress = progress.clone();
        async move {
            let records = progress
                .fetch_all_progress()
                .await
                .map_err(|_| ViewError::ProgressLoad)?;
            Ok::<_, ViewError>(map_dashboard(&records))
        }
    });

    let on_dismiss = use_callback(move |()| banner_dismissed.set(true));

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<DashboardTestHandles>() {
                handles.register(on_dismiss);
            }
        }
    }

    let state = load_state_from_resource(resource);
    if state.is_loading() {
        return rsx! {
            div { class: "page dashboard-loading",
                div { class: "spinner" }
                p { "Loading your progress data..." }
            }
        };
    }

    let banner = banner_message(&state, banner_dismissed());
    let vm = match state {
        LoadState::Ready(vm) => vm,
        LoadState::Loading | LoadState::Error(_) => DashboardVm::empty(),
    };

    rsx! {
        div { class: "page dashboard",
            h1 { class: "dashboard-title", "Learning Progress Dashboard" }

            if let Some(message) = banner {
                div { class: "alert alert--error", role: "alert",
                    span { "{message}" }
                    button {
                        class: "alert-dismiss",
                        r#type: "button",
                        title: "Dismiss",
                        onclick: move |_| on_dismiss.call(()),
                        "×"
                    }
                }
            }

            section { class: "panel",
                header { class: "panel-header",
                    h2 { "Statistics" }
                }
                div { class: "stat-grid",
                    for card in vm.stats.iter().copied() {
                        StatCard { key: "{card.label}", card }
                    }
                }
            }

            section { class: "panel",
                header { class: "panel-header",
                    h2 { "Recent Activities" }
                    Link { class: "btn btn-outline", to: Route::Achievements {}, "View All" }
                }
                if vm.recent.is_empty() {
                    p { class: "panel-empty", "No activities found. Start by adding your progress!" }
                } else {
                    ul { class: "activity-list",
                        for item in vm.recent.iter() {
                            ActivityItem { key: "{item.id}", item: item.clone() }
                        }
                    }
                }
                footer { class: "panel-footer",
                    Link { class: "btn btn-primary", to: Route::AddProgress {}, "Add New Progress" }
                }
            }
        }
    }
}

#[component]
fn StatCard(card: StatCardVm) -> Element {
    rsx! {
        div { class: "stat-card",
            h3 { class: "stat-value", "{card.value}" }
            p { class: "stat-label", "{card.label}" }
        }
    }
}

#[component]
pub(crate) fn ActivityItem(item: ActivityVm) -> Element {
    rsx! {
        li { class: "activity",
            div { class: "activity-head",
                h3 { class: "activity-topic", "{item.topic}" }
                span { class: "{item.badge_class}", "{item.status_label}" }
            }
            p { class: "activity-description", "{item.description}" }
            div { class: "activity-meta",
                span { "{item.template_label}" }
                span { "{item.date_str}" }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct DashboardTestHandles {
    dismiss: Rc<RefCell<Option<Callback<()>>>>,
}

#[cfg(test)]
impl DashboardTestHandles {
    pub(crate) fn register(&self, dismiss: Callback<()>) {
        *self.dismiss.borrow_mut() = Some(dismiss);
    }

    /// The handler wired to the banner's dismiss button.
    pub(crate) fn dismiss(&self) -> Callback<()> {
        (*self.dismiss.borrow()).expect("dashboard dismiss registered")
    }
}
