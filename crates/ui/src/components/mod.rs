mod content_wrapper;
mod navbar;
mod progress_tracker;
mod sidebar;

pub use content_wrapper::ContentWrapper;
pub use navbar::Navbar;
pub use progress_tracker::ProgressTracker;
pub use sidebar::Sidebar;
#[cfg(test)]
pub(crate) use sidebar::SidebarTestHandles;
