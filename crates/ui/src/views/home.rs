use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;

#[derive(Clone, Debug, PartialEq)]
struct TrackCard {
    title: &'static str,
    path: String,
    lesson_count: usize,
    start_path: Option<String>,
}

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let curriculum = ctx.curriculum();
    let tracks: Vec<TrackCard> = curriculum
        .sections()
        .map(|section| TrackCard {
            title: section.title(),
            path: section.path(),
            lesson_count: curriculum.lessons_in(section).count(),
            start_path: curriculum.first_lesson(section).map(|l| l.path()),
        })
        .collect();

    rsx! {
        div { class: "page home",
            h2 { "Learn to build for the web" }
            p { "Work through HTML, CSS and JavaScript, then move on to React." }
            ul { class: "track-list",
                for track in tracks {
                    li { key: "{track.path}", class: "track-card",
                        Link { class: "track-title", to: track.path.clone(), "{track.title}" }
                        span { class: "track-count", "{track.lesson_count} lessons" }
                        if let Some(start) = track.start_path {
                            Link { class: "track-start", to: start, "Start" }
                        }
                    }
                }
            }
        }
    }
}
