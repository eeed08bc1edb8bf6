use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use progress_core::time::fixed_now;
use services::{Clock, ProgressService};
use storage::repository::ProgressRepository;

use crate::context::{UiApp, build_app_context};
use crate::views::dashboard::DashboardTestHandles;
use crate::views::{AchievementsView, AddProgressView, DashboardView};

#[derive(Clone)]
struct TestApp {
    progress: Arc<ProgressService>,
}

impl UiApp for TestApp {
    fn progress_service(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Dashboard,
    Achievements,
    AddProgress,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    dashboard: DashboardTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    use_context_provider(|| props.dashboard.clone());
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
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Dashboard => rsx! { DashboardView {} },
        ViewKind::Achievements => rsx! { AchievementsView {} },
        ViewKind::AddProgress => rsx! { AddProgressView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    dashboard: DashboardTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Rebuild, then let pending resources settle.
    pub async fn settle(&mut self) {
        self.rebuild();
        for _ in 0..3 {
            self.drive_async().await;
        }
    }

    /// Fire the dashboard banner's dismiss handler, then flush the render.
    pub fn dismiss_banner(&mut self) {
        let dismiss = self.dashboard.dismiss();
        self.dom.in_runtime(|| dismiss.call(()));
        drive_dom(&mut self.dom);
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

pub fn setup_view_harness(view: ViewKind, repo: Arc<dyn ProgressRepository>) -> ViewHarness {
    let clock = Clock::fixed(fixed_now());
    let progress = Arc::new(ProgressService::new(clock, repo));
    let app = Arc::new(TestApp { progress });

    let dashboard = DashboardTestHandles::default();
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            dashboard: dashboard.clone(),
        },
    );
    ViewHarness { dom, dashboard }
}
