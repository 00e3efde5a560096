use academy_core::CurrentPath;
use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable, use_navigator, use_route};
use tracing::{debug, warn};

use crate::components::{Navbar, Sidebar};
use crate::context::AppContext;
use crate::views::{HomeView, LessonView, NotFoundView, SectionView};

#[derive(Clone, Debug, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/:section", SectionView)] SectionOverview { section: String },
        #[route("/:section/:lesson", LessonView)] Lesson { section: String, lesson: String },
        #[route("/:..segments", NotFoundView)] NotFound { segments: Vec<String> },
}

impl CurrentPath for Route {
    fn current_path(&self) -> String {
        self.to_string()
    }
}

#[component]
fn Layout() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let current_path = use_route::<Route>().current_path();

    use_effect(move || {
        let Some(start) = ctx.take_start_path() else {
            return;
        };
        match start.parse::<Route>() {
            Ok(route) => {
                debug!(%start, "opening launch route");
                let _ = navigator.replace(route);
            }
            Err(err) => warn!(%start, %err, "ignoring unparsable launch route"),
        }
    });

    rsx! {
        div { class: "app",
            Navbar { current_path: current_path.clone() }
            div { class: "app-body",
                Sidebar { current_path }
                main { class: "content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}
