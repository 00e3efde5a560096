use std::sync::Arc;

use academy_core::Curriculum;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};

use crate::components::{ProgressTracker, Sidebar, SidebarTestHandles};
use crate::context::{DEFAULT_TITLE, UiApp, build_app_context};
use crate::routes::Route;
use crate::views::{HomeView, LessonView, SectionView};

#[derive(Clone)]
struct TestApp {
    curriculum: Arc<Curriculum>,
    start_path: Option<String>,
    title: String,
}

impl UiApp for TestApp {
    fn curriculum(&self) -> Arc<Curriculum> {
        Arc::clone(&self.curriculum)
    }

    fn start_path(&self) -> Option<String> {
        self.start_path.clone()
    }

    fn title(&self) -> String {
        self.title.clone()
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Section(String),
    Lesson(String, String),
    Sidebar(String),
    Progress(u32, u32),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    sidebar_handles: SidebarTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(app));
    use_context_provider(|| props.view.clone());
    use_context_provider(|| props.sidebar_handles.clone());
    rsx! { Router::<TestRoute> {} }
}

#[component]
fn AppRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(app));
    use_context_provider(|| props.sidebar_handles.clone());
    rsx! { Router::<Route> {} }
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
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Section(section) => rsx! { SectionView { section } },
        ViewKind::Lesson(section, lesson) => rsx! { LessonView { section, lesson } },
        ViewKind::Sidebar(current_path) => rsx! { Sidebar { current_path } },
        ViewKind::Progress(current_step, total_steps) => {
            rsx! { ProgressTracker { current_step, total_steps } }
        }
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub sidebar_handles: SidebarTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    /// Runs pending effects and navigation a few rounds.
    pub fn settle(&mut self) {
        for _ in 0..5 {
            drive_dom(&mut self.dom);
        }
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

fn test_app(start_path: Option<&str>, title: &str) -> Arc<TestApp> {
    Arc::new(TestApp {
        curriculum: Arc::new(Curriculum::builtin().expect("builtin curriculum")),
        start_path: start_path.map(str::to_string),
        title: title.to_string(),
    })
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    let sidebar_handles = SidebarTestHandles::default();
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app: test_app(None, DEFAULT_TITLE),
            view,
            sidebar_handles: sidebar_handles.clone(),
        },
    );
    ViewHarness {
        dom,
        sidebar_handles,
    }
}

/// Full app routing, starting at `/` and replaying `start_path` if given.
pub fn setup_app_harness(start_path: Option<&str>, title: &str) -> ViewHarness {
    let sidebar_handles = SidebarTestHandles::default();
    let dom = VirtualDom::new_with_props(
        AppRouterHarness,
        ViewHarnessProps {
            app: test_app(start_path, title),
            view: ViewKind::Home,
            sidebar_handles: sidebar_handles.clone(),
        },
    );
    ViewHarness {
        dom,
        sidebar_handles,
    }
}
