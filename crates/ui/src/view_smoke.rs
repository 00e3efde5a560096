use academy_core::Section;

use super::test_harness::{ViewKind, drive_dom, setup_app_harness, setup_view_harness};

fn render(view: ViewKind) -> String {
    let mut harness = setup_view_harness(view);
    harness.rebuild();
    harness.render()
}

#[test]
fn home_view_lists_every_track() {
    let html = render(ViewKind::Home);
    for title in ["HTML", "CSS", "JavaScript", "React Basics", "React Intermediate"] {
        assert!(html.contains(title), "missing {title} in {html}");
    }
    assert!(html.contains("href=\"/html/introduction\""), "missing start link in {html}");
}

#[test]
fn sidebar_opens_only_the_active_section() {
    let html = render(ViewKind::Sidebar("/css/selectors".to_string()));
    assert!(html.contains("sidebar-group active open"), "css not open in {html}");
    assert!(html.contains("sidebar-lesson current"), "no current lesson in {html}");
    assert!(html.contains("href=\"/css/box-model\""), "css lessons hidden in {html}");
    assert!(!html.contains("href=\"/html/forms\""), "html lessons shown in {html}");
    assert_eq!(html.matches("aria-expanded=\"true\"").count(), 1, "{html}");
}

#[test]
fn sidebar_on_unknown_path_is_fully_collapsed() {
    let html = render(ViewKind::Sidebar("/about".to_string()));
    assert!(!html.contains("sidebar-lessons"), "unexpected open group in {html}");
    assert!(!html.contains("sidebar-group active"), "unexpected highlight in {html}");
}

#[test]
fn progress_tracker_renders_label_and_raw_width() {
    let html = render(ViewKind::Progress(1, 6));
    assert!(html.contains("1/6"), "missing label in {html}");
    assert!(html.contains("width: 16.66666666666666"), "missing width in {html}");
}

#[test]
fn lesson_view_wraps_content_with_chrome() {
    let html = render(ViewKind::Lesson("css".to_string(), "selectors".to_string()));
    assert!(html.contains("Selectors"), "missing title in {html}");
    assert!(html.contains("1/5"), "missing progress in {html}");
    assert!(html.contains("width: 20%"), "missing fill in {html}");
    assert!(html.contains("href=\"/html/semantic-html\""), "missing prev in {html}");
    assert!(html.contains("href=\"/css/box-model\""), "missing next in {html}");
    assert!(html.contains("language-css"), "missing code block in {html}");
}

#[test]
fn first_lesson_has_no_back_button() {
    let html = render(ViewKind::Lesson("html".to_string(), "introduction".to_string()));
    assert!(!html.contains("lesson-nav-prev"), "unexpected back button in {html}");
    assert!(html.contains("lesson-nav-next"), "missing forward button in {html}");
    assert!(html.contains("&lt;h1&gt;Hello, web!&lt;/h1&gt;"), "code not escaped in {html}");
}

#[test]
fn last_lesson_has_no_forward_button() {
    let html = render(ViewKind::Lesson(
        "react-intermediate".to_string(),
        "performance".to_string(),
    ));
    assert!(html.contains("lesson-nav-prev"), "missing back button in {html}");
    assert!(!html.contains("lesson-nav-next"), "unexpected forward button in {html}");
    assert!(html.contains("5/5"), "missing progress in {html}");
}

#[test]
fn unknown_lesson_and_section_render_not_found() {
    let lesson = render(ViewKind::Lesson("css".to_string(), "nope".to_string()));
    assert!(lesson.contains("Page not found"), "{lesson}");
    assert!(lesson.contains("/css/nope"), "{lesson}");

    let section = render(ViewKind::Section("rust".to_string()));
    assert!(section.contains("Page not found"), "{section}");
}

#[test]
fn section_view_lists_lessons_in_order() {
    let html = render(ViewKind::Section("javascript".to_string()));
    let variables = html.find("Variables and Types").expect("first lesson");
    let async_lesson = html.find("Promises and async/await").expect("last lesson");
    assert!(variables < async_lesson);
}

#[test]
fn app_layout_at_root_highlights_nothing() {
    let mut harness = setup_app_harness(None, "Web Dev Academy");
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Web Dev Academy"), "missing navbar in {html}");
    assert!(html.contains("Learn to build for the web"), "missing home in {html}");
    assert!(!html.contains("navbar-link active"), "unexpected highlight in {html}");
    assert!(!html.contains("sidebar-lessons"), "unexpected open group in {html}");
}

#[test]
fn launch_path_expands_its_section_in_the_sidebar() {
    let mut harness = setup_app_harness(Some("/css/selectors"), "Web Dev Academy");
    harness.rebuild();
    harness.settle();
    let html = harness.render();
    assert!(html.contains("1/5"), "launch lesson not shown in {html}");
    assert!(html.contains("sidebar-group active open"), "css not expanded at launch path in {html}");
    assert!(html.contains("href=\"/css/box-model\""), "css lessons hidden in {html}");
}

#[test]
fn configured_title_reaches_the_navbar() {
    let mut harness = setup_app_harness(None, "Evening Class");
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Evening Class"), "missing title in {html}");
    assert!(!html.contains("Web Dev Academy"), "default title leaked into {html}");
}

#[test]
fn sidebar_toggle_flips_expanded_state() {
    let mut harness = setup_view_harness(ViewKind::Sidebar("/css/selectors".to_string()));
    harness.rebuild();
    let toggle = harness.sidebar_handles.toggle();

    harness.dom.in_runtime(|| toggle.call(Section::Html));
    drive_dom(&mut harness.dom);
    let html = harness.render();
    assert_eq!(html.matches("aria-expanded=\"true\"").count(), 2, "{html}");
    assert!(html.contains("href=\"/html/forms\""), "html lessons hidden in {html}");

    harness.dom.in_runtime(|| toggle.call(Section::Css));
    drive_dom(&mut harness.dom);
    let html = harness.render();
    assert_eq!(html.matches("aria-expanded=\"true\"").count(), 1, "{html}");
    assert!(!html.contains("href=\"/css/box-model\""), "css lessons shown in {html}");
    assert!(html.contains("sidebar-group active\""), "css lost its highlight in {html}");
}
