use academy_core::Section;
use dioxus::prelude::*;
use tracing::warn;

use crate::components::ContentWrapper;
use crate::context::AppContext;
use crate::views::NotFoundPage;
use crate::vm::markdown_to_html;

#[component]
pub fn LessonView(section: String, lesson: String) -> Element {
    let ctx = use_context::<AppContext>();
    let curriculum = ctx.curriculum();
    let path = format!("/{section}/{lesson}");

    let found = section.parse::<Section>().ok().and_then(|parsed| {
        let body = curriculum.lesson(parsed, &lesson)?.body_markdown().to_string();
        let meta = curriculum.page_meta(parsed, &lesson)?;
        Some((meta, body))
    });
    let Some((meta, body)) = found else {
        warn!(%path, "unknown lesson");
        return rsx! { NotFoundPage { path } };
    };

    let body_html = markdown_to_html(&body);

    rsx! {
        ContentWrapper { meta,
            div { class: "lesson-body", dangerous_inner_html: "{body_html}" }
        }
    }
}
