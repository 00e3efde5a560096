use std::fmt::Display;

/// Share of the course covered so far, as `current / total * 100`.
///
/// No rounding and no validation: `total == 0` gives a non-finite value,
/// `current > total` gives more than 100 and a negative `current` gives a
/// negative result. Callers are expected to pass `1 <= current <= total`.
#[must_use]
pub fn percentage(current: f64, total: f64) -> f64 {
    (current / total) * 100.0
}

/// Display label such as `3/6`.
#[must_use]
pub fn progress_label(current: impl Display, total: impl Display) -> String {
    format!("{current}/{total}")
}

/// Position of a page within its section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressState {
    pub current_step: u32,
    pub total_steps: u32,
}

impl ProgressState {
    #[must_use]
    pub fn new(current_step: u32, total_steps: u32) -> Self {
        Self {
            current_step,
            total_steps,
        }
    }

    #[must_use]
    pub fn percentage(&self) -> f64 {
        percentage(f64::from(self.current_step), f64::from(self.total_steps))
    }

    #[must_use]
    pub fn label(&self) -> String {
        progress_label(self.current_step, self.total_steps)
    }
}
