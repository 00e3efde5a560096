use crate::section::{Section, resolve_section};

/// Anything that can report where the user currently is.
///
/// The UI implements this on top of its router; tests use [`FixedPath`].
pub trait CurrentPath {
    fn current_path(&self) -> String;

    fn active_section(&self) -> Option<Section> {
        resolve_section(&self.current_path())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedPath(pub String);

impl FixedPath {
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }
}

impl CurrentPath for FixedPath {
    fn current_path(&self) -> String {
        self.0.clone()
    }
}
