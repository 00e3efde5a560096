use crate::section::Section;

/// A single lesson page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lesson {
    section: Section,
    slug: String,
    title: String,
    summary: String,
    body_markdown: String,
}

impl Lesson {
    #[must_use]
    pub fn new(section: Section, slug: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            section,
            slug: slug.into(),
            title: title.into(),
            summary: String::new(),
            body_markdown: String::new(),
        }
    }

    #[must_use]
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    #[must_use]
    pub fn with_body(mut self, body_markdown: impl Into<String>) -> Self {
        self.body_markdown = body_markdown.into();
        self
    }

    #[must_use]
    pub fn section(&self) -> Section {
        self.section
    }

    #[must_use]
    pub fn slug(&self) -> &str {
        &self.slug
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn summary(&self) -> &str {
        &self.summary
    }

    #[must_use]
    pub fn body_markdown(&self) -> &str {
        &self.body_markdown
    }

    #[must_use]
    pub fn path(&self) -> String {
        lesson_path(self.section, &self.slug)
    }
}

/// Route of a lesson page. Always contains the section prefix.
#[must_use]
pub fn lesson_path(section: Section, slug: &str) -> String {
    format!("/{}/{slug}", section.slug())
}

/// Static lesson table entry used by the built-in content modules.
pub(crate) struct LessonSource {
    pub slug: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub body: &'static str,
}

impl LessonSource {
    pub(crate) fn to_lesson(&self, section: Section) -> Lesson {
        Lesson::new(section, self.slug, self.title)
            .with_summary(self.summary)
            .with_body(self.body)
    }
}
