use dioxus::prelude::*;
use dioxus_router::Link;
use tracing::warn;

#[component]
pub fn NotFoundView(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    warn!(%path, "no route matched");
    rsx! { NotFoundPage { path } }
}

#[component]
pub fn NotFoundPage(path: String) -> Element {
    rsx! {
        div { class: "page not-found",
            h2 { "Page not found" }
            p { "Nothing lives at {path}." }
            Link { to: "/", "Back to the course" }
        }
    }
}
