use dioxus::prelude::*;

use crate::vm::map_progress;

#[component]
pub fn ProgressTracker(current_step: u32, total_steps: u32) -> Element {
    let vm = map_progress(current_step, total_steps);

    rsx! {
        div { class: "progress-tracker",
            span { class: "progress-label", "{vm.label}" }
            div { class: "progress-bar",
                div { class: "progress-fill", style: "{vm.fill_style}" }
            }
        }
    }
}
