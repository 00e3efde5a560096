use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use academy_core::Curriculum;

pub const DEFAULT_TITLE: &str = "Web Dev Academy";

pub trait UiApp: Send + Sync {
    fn curriculum(&self) -> Arc<Curriculum>;

    /// Route to open once on launch, if any.
    fn start_path(&self) -> Option<String>;

    fn title(&self) -> String {
        DEFAULT_TITLE.to_string()
    }
}

#[derive(Clone)]
pub struct AppContext {
    curriculum: Arc<Curriculum>,
    title: Arc<str>,
    start_path: Option<String>,
    start_path_pending: Arc<AtomicBool>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        let start_path = app.start_path().filter(|path| path != "/");
        Self {
            curriculum: app.curriculum(),
            title: Arc::from(app.title()),
            start_path_pending: Arc::new(AtomicBool::new(start_path.is_some())),
            start_path,
        }
    }

    #[must_use]
    pub fn curriculum(&self) -> Arc<Curriculum> {
        Arc::clone(&self.curriculum)
    }

    /// Window and navbar title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The configured launch route, whether or not it has been replayed yet.
    ///
    /// Components that seed state on first render read this, since the
    /// router still sits at `/` until the launch navigation runs.
    #[must_use]
    pub fn launch_path(&self) -> Option<&str> {
        self.start_path.as_deref()
    }

    /// Returns the launch route the first time it is called, `None` after.
    #[must_use]
    pub fn take_start_path(&self) -> Option<String> {
        if self.start_path_pending.swap(false, Ordering::AcqRel) {
            self.start_path.clone()
        } else {
            None
        }
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: Arc<dyn UiApp>) -> AppContext {
    AppContext::new(&app)
}
