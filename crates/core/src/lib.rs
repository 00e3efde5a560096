//! Navigation and progress model for the Web Dev Academy course.

pub mod curriculum;
pub mod error;
pub mod open_sections;
pub mod path;
pub mod progress;
pub mod section;

pub use curriculum::{Curriculum, CurriculumError, Lesson, PageMeta, lesson_path};
pub use error::Error;
pub use open_sections::OpenSections;
pub use path::{CurrentPath, FixedPath};
pub use progress::{ProgressState, percentage, progress_label};
pub use section::{SECTION_PREFIXES, Section, SectionParseError, resolve_section};
