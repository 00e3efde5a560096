mod home;
mod lesson;
mod not_found;
mod section;

pub use home::HomeView;
pub use lesson::LessonView;
pub use not_found::{NotFoundPage, NotFoundView};
pub use section::SectionView;
