mod content;
mod lesson;
mod page;

use std::collections::HashSet;

use thiserror::Error;

use crate::section::Section;

pub use lesson::{Lesson, lesson_path};
pub use page::PageMeta;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CurriculumError {
    #[error("lesson slug cannot be empty (section {section})")]
    EmptySlug { section: Section },

    #[error("lesson slug must be a single path segment: {slug}")]
    NestedSlug { slug: String },

    #[error("lesson title cannot be empty: {section}/{slug}")]
    EmptyTitle { section: Section, slug: String },

    #[error("duplicate lesson: {section}/{slug}")]
    DuplicateLesson { section: Section, slug: String },
}

/// Ordered catalogue of lessons, grouped by section in sidebar order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Curriculum {
    lessons: Vec<Lesson>,
}

impl Curriculum {
    /// Builds a catalogue, keeping lesson order within each section.
    ///
    /// # Errors
    ///
    /// Returns an error for empty or nested slugs, empty titles and
    /// duplicate `(section, slug)` pairs.
    pub fn new(lessons: Vec<Lesson>) -> Result<Self, CurriculumError> {
        let mut seen = HashSet::new();
        for lesson in &lessons {
            let section = lesson.section();
            let slug = lesson.slug();
            if slug.trim().is_empty() {
                return Err(CurriculumError::EmptySlug { section });
            }
            if slug.contains('/') {
                return Err(CurriculumError::NestedSlug {
                    slug: slug.to_string(),
                });
            }
            if lesson.title().trim().is_empty() {
                return Err(CurriculumError::EmptyTitle {
                    section,
                    slug: slug.to_string(),
                });
            }
            if !seen.insert((section, slug)) {
                return Err(CurriculumError::DuplicateLesson {
                    section,
                    slug: slug.to_string(),
                });
            }
        }

        let mut lessons = lessons;
        // Stable: keeps authoring order inside a section.
        lessons.sort_by_key(Lesson::section);
        Ok(Self { lessons })
    }

    /// The course shipped with the app.
    ///
    /// # Errors
    ///
    /// Fails only if the bundled lesson tables are malformed.
    pub fn builtin() -> Result<Self, CurriculumError> {
        Self::new(content::builtin_lessons())
    }

    /// Sections that have at least one lesson, in sidebar order.
    pub fn sections(&self) -> impl Iterator<Item = Section> + '_ {
        Section::ALL
            .into_iter()
            .filter(|section| self.lessons.iter().any(|l| l.section() == *section))
    }

    pub fn lessons_in(&self, section: Section) -> impl Iterator<Item = &Lesson> + '_ {
        self.lessons.iter().filter(move |l| l.section() == section)
    }

    #[must_use]
    pub fn lesson(&self, section: Section, slug: &str) -> Option<&Lesson> {
        self.lessons_in(section).find(|l| l.slug() == slug)
    }

    #[must_use]
    pub fn first_lesson(&self, section: Section) -> Option<&Lesson> {
        self.lessons_in(section).next()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }

    /// Chrome data for a lesson page.
    ///
    /// Steps count within the lesson's section; the back and forward links
    /// follow course order and cross section boundaries.
    #[must_use]
    pub fn page_meta(&self, section: Section, slug: &str) -> Option<PageMeta> {
        let index = self
            .lessons
            .iter()
            .position(|l| l.section() == section && l.slug() == slug)?;
        let lesson = &self.lessons[index];

        let step = self
            .lessons_in(section)
            .position(|l| l.slug() == slug)?
            + 1;
        let total = self.lessons_in(section).count();

        let prev_link = index
            .checked_sub(1)
            .and_then(|prev| self.lessons.get(prev))
            .map(Lesson::path);
        let next_link = self.lessons.get(index + 1).map(Lesson::path);

        Some(PageMeta {
            title: lesson.title().to_string(),
            section_label: section.title().to_string(),
            current_step: u32::try_from(step).ok()?,
            total_steps: u32::try_from(total).ok()?,
            prev_link,
            next_link,
        })
    }
}
