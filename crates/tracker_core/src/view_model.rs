use crate::Phase;

/// Banner shown when the backend accepts the start request.
pub const START_NOTICE: &str = "Check started in background. This may take several minutes.";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProgressView {
    pub phase: Phase,
    pub percent: u8,
    pub processed_sources: usize,
    pub total_sources: usize,
    pub projects_added: u64,
}

impl ProgressView {
    /// Human-readable progress line matching the dashboard's progress text.
    pub fn label(&self) -> String {
        match self.phase {
            Phase::Completed => format!(
                "Completed: {}/{} sources, {} projects added",
                self.processed_sources, self.total_sources, self.projects_added
            ),
            _ => format!(
                "Processing sources: {}/{}, {} projects added",
                self.processed_sources, self.total_sources, self.projects_added
            ),
        }
    }
}

/// Progress percentage, rounded and clamped to 100. A zero total renders as
/// zero rather than dividing by it.
pub(crate) fn percent_of(processed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let ratio = processed as f64 / total as f64 * 100.0;
    (ratio.round() as u64).min(100) as u8
}
