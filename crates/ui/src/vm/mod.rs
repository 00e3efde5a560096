mod markdown_vm;
mod progress_vm;
mod sidebar_vm;

pub use markdown_vm::{markdown_to_html, sanitize_html};
pub use progress_vm::{ProgressVm, map_progress};
pub use sidebar_vm::{SidebarGroupVm, SidebarLessonVm, map_sidebar_groups};
