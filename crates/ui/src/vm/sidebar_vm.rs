use academy_core::{Curriculum, OpenSections, Section, resolve_section};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarLessonVm {
    pub title: String,
    pub path: String,
    pub is_current: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarGroupVm {
    pub section: Section,
    pub title: &'static str,
    pub path: String,
    pub is_open: bool,
    pub is_active: bool,
    pub lessons: Vec<SidebarLessonVm>,
}

impl SidebarGroupVm {
    #[must_use]
    pub fn class(&self) -> &'static str {
        match (self.is_active, self.is_open) {
            (true, true) => "sidebar-group active open",
            (true, false) => "sidebar-group active",
            (false, true) => "sidebar-group open",
            (false, false) => "sidebar-group",
        }
    }

    #[must_use]
    pub fn toggle_glyph(&self) -> &'static str {
        if self.is_open { "▾" } else { "▸" }
    }
}

/// One group per section with lessons, highlighting the one that matches
/// `current_path`.
#[must_use]
pub fn map_sidebar_groups(
    curriculum: &Curriculum,
    open: &OpenSections,
    current_path: &str,
) -> Vec<SidebarGroupVm> {
    let active = resolve_section(current_path);
    curriculum
        .sections()
        .map(|section| SidebarGroupVm {
            section,
            title: section.title(),
            path: section.path(),
            is_open: open.is_open(section),
            is_active: active == Some(section),
            lessons: curriculum
                .lessons_in(section)
                .map(|lesson| {
                    let path = lesson.path();
                    SidebarLessonVm {
                        title: lesson.title().to_string(),
                        is_current: path == current_path,
                        path,
                    }
                })
                .collect(),
        })
        .collect()
}
