use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{AchievementsView, AddProgressView, DashboardView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", DashboardView)] Dashboard {},
        #[route("/achievements", AchievementsView)] Achievements {},
        #[route("/add", AddProgressView)] AddProgress {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    rsx! {
        nav { class: "sidebar",
            h1 { "Progress" }
            ul {
                li { Link { to: Route::Dashboard {}, "Dashboard" } }
                li { Link { to: Route::Achievements {}, "Achievements" } }
                li { Link { to: Route::AddProgress {}, "Add Progress" } }
            }
        }
    }
}
