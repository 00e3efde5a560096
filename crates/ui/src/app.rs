use dioxus::prelude::*;
use dioxus_router::Router;

use crate::context::AppContext;
use crate::routes::Route;

/// Root component. Expects an [`AppContext`] from the launcher.
#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    let title = ctx.title().to_string();

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "{title}" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    FatalError { message: format!("{errors:?}") }
                },
                Router::<Route> {}
            }
        }
    }
}

#[component]
fn FatalError(message: String) -> Element {
    rsx! {
        section { class: "fatal",
            h1 { "This page failed to render" }
            p { "Reload the app or go back to the course home." }
            details {
                summary { "Error details" }
                pre { "{message}" }
            }
        }
    }
}
