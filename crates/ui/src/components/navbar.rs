use academy_core::{Section, resolve_section};
use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;

#[component]
pub fn Navbar(current_path: String) -> Element {
    let ctx = use_context::<AppContext>();
    let curriculum = ctx.curriculum();
    let active = resolve_section(&current_path);
    let sections: Vec<Section> = curriculum.sections().collect();
    let title = ctx.title().to_string();

    rsx! {
        header { class: "navbar",
            Link { class: "navbar-brand", to: "/", "{title}" }
            nav { class: "navbar-links",
                for section in sections {
                    Link {
                        key: "{section}",
                        class: if active == Some(section) { "navbar-link active" } else { "navbar-link" },
                        to: section.path(),
                        "{section.title()}"
                    }
                }
            }
        }
    }
}
