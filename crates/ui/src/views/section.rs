use academy_core::Section;
use dioxus::prelude::*;
use dioxus_router::Link;
use tracing::warn;

use crate::context::AppContext;
use crate::views::NotFoundPage;

#[derive(Clone, Debug, PartialEq)]
struct LessonRow {
    step: usize,
    title: String,
    summary: String,
    path: String,
}

#[component]
pub fn SectionView(section: String) -> Element {
    let ctx = use_context::<AppContext>();
    let curriculum = ctx.curriculum();

    let Ok(parsed) = section.parse::<Section>() else {
        warn!(%section, "unknown section");
        return rsx! { NotFoundPage { path: format!("/{section}") } };
    };

    let rows: Vec<LessonRow> = curriculum
        .lessons_in(parsed)
        .enumerate()
        .map(|(index, lesson)| LessonRow {
            step: index + 1,
            title: lesson.title().to_string(),
            summary: lesson.summary().to_string(),
            path: lesson.path(),
        })
        .collect();

    rsx! {
        div { class: "page section-overview",
            h2 { "{parsed.title()}" }
            if rows.is_empty() {
                p { "No lessons in this track yet." }
            } else {
                ol { class: "lesson-list",
                    for row in rows {
                        li { key: "{row.path}",
                            Link { to: row.path.clone(),
                                span { class: "lesson-step", "{row.step}." }
                                " {row.title}"
                            }
                            if !row.summary.is_empty() {
                                p { class: "lesson-summary", "{row.summary}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
