use std::collections::BTreeSet;

use crate::section::{Section, resolve_section};

/// Sections currently expanded in the sidebar.
///
/// Owned by a single sidebar instance; starts with the active section open
/// and changes only through [`OpenSections::toggle`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpenSections {
    open: BTreeSet<Section>,
}

impl OpenSections {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial state for a sidebar rendered at `path`.
    #[must_use]
    pub fn for_path(path: &str) -> Self {
        Self {
            open: resolve_section(path).into_iter().collect(),
        }
    }

    /// Flips `section` and returns whether it is now open.
    pub fn toggle(&mut self, section: Section) -> bool {
        if self.open.remove(&section) {
            false
        } else {
            self.open.insert(section);
            true
        }
    }

    #[must_use]
    pub fn is_open(&self, section: Section) -> bool {
        self.open.contains(&section)
    }

    pub fn iter(&self) -> impl Iterator<Item = Section> + '_ {
        self.open.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.open.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }
}

impl FromIterator<Section> for OpenSections {
    fn from_iter<I: IntoIterator<Item = Section>>(iter: I) -> Self {
        Self {
            open: iter.into_iter().collect(),
        }
    }
}
