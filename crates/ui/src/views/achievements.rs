use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::dashboard::ActivityItem;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{ActivityVm, map_achievements};

#[derive(Clone, Debug, PartialEq)]
struct AchievementsData {
    items: Vec<ActivityVm>,
}

#[component]
pub fn AchievementsView() -> Element {
    let ctx = use_context::<AppContext>();
    let progress = ctx.progress();

    let resource = use_resource(move || {
        let progress = progress.clone();
        async move {
            let records = progress
                .fetch_all_progress()
                .await
                .map_err(|_| ViewError::ProgressLoad)?;
            Ok::<_, ViewError>(AchievementsData {
                items: map_achievements(&records),
            })
        }
    });

    let state = view_state_from_resource(resource);

    rsx! {
        div { class: "page achievements",
            header { class: "view-header",
                h2 { class: "view-title", "Achievements" }
                Link { class: "btn btn-primary", to: Route::AddProgress {}, "Add New Progress" }
            }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(data) => rsx! {
                    if data.items.is_empty() {
                        p { "No achievements yet. Start by adding your progress!" }
                    } else {
                        ul { class: "activity-list",
                            for item in data.items.iter() {
                                ActivityItem { key: "{item.id}", item: item.clone() }
                            }
                        }
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| {
                            let mut resource = resource;
                            resource.restart();
                        },
                        "Retry"
                    }
                },
            }
        }
    }
}
