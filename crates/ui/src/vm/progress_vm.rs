use academy_core::ProgressState;

#[derive(Clone, Debug, PartialEq)]
pub struct ProgressVm {
    pub label: String,
    pub percent: f64,
    pub fill_style: String,
}

/// Values for the progress tracker. The percentage is passed through
/// unrounded, out-of-range steps included.
#[must_use]
pub fn map_progress(current_step: u32, total_steps: u32) -> ProgressVm {
    let state = ProgressState::new(current_step, total_steps);
    let percent = state.percentage();
    ProgressVm {
        label: state.label(),
        percent,
        fill_style: format!("width: {percent}%;"),
    }
}
