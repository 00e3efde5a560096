use academy_core::PageMeta;
use dioxus::prelude::*;
use dioxus_router::Link;

use crate::components::ProgressTracker;

/// Frames a lesson body with its title, progress and prev/next buttons.
#[component]
pub fn ContentWrapper(meta: PageMeta, children: Element) -> Element {
    rsx! {
        article { class: "lesson",
            header { class: "lesson-header",
                p { class: "lesson-section", "{meta.section_label}" }
                h2 { class: "lesson-title", "{meta.title}" }
                ProgressTracker {
                    current_step: meta.current_step,
                    total_steps: meta.total_steps,
                }
            }

            div { class: "lesson-content", {children} }

            footer { class: "lesson-nav",
                if let Some(prev) = meta.prev_link.clone() {
                    Link { class: "lesson-nav-prev", to: prev, "← Previous" }
                }
                if let Some(next) = meta.next_link.clone() {
                    Link { class: "lesson-nav-next", to: next, "Next →" }
                }
            }
        }
    }
}
