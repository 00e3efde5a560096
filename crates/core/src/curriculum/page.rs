use crate::progress::ProgressState;

/// What a lesson page hands to the layout chrome.
///
/// A missing `prev_link` means no back button; a missing `next_link` means no
/// forward button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    pub title: String,
    pub section_label: String,
    pub current_step: u32,
    pub total_steps: u32,
    pub prev_link: Option<String>,
    pub next_link: Option<String>,
}

impl PageMeta {
    #[must_use]
    pub fn progress(&self) -> ProgressState {
        ProgressState::new(self.current_step, self.total_steps)
    }
}
