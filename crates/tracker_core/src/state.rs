use crate::view_model::{percent_of, ProgressView};

/// Lifecycle of one check job. `Completed` and `Failed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Starting,
    Polling,
    Completed,
    Failed,
}

/// Backend-reported status of the running check job, one per poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobStatus {
    pub completed: bool,
    pub processed_sources: usize,
    pub total_sources: usize,
    pub projects_added: u64,
    pub error: Option<String>,
}

/// Projects attributed to a single source between two consecutive polls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDelta {
    pub source_name: String,
    pub projects_added: u64,
}

/// Final result of one check, emitted exactly once on completion.
///
/// `total_projects_added` comes from the final status and may exceed the sum
/// of the attributed deltas when an increase lands on the completion tick.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Summary {
    pub total_projects_added: u64,
    pub per_source: Vec<SourceDelta>,
}

/// All mutable state of one check lifecycle. One value per run; a fresh
/// check starts from a fresh `CheckState`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CheckState {
    phase: Phase,
    source_names: Vec<String>,
    total_sources: usize,
    processed_sources: usize,
    projects_added: u64,
    per_source: Vec<SourceDelta>,
    dirty: bool,
}

impl CheckState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn view(&self) -> ProgressView {
        let percent = match self.phase {
            // Displayed progress is forced to full on completion, even when
            // the final status under-reports processed sources.
            Phase::Completed => 100,
            _ => percent_of(self.processed_sources, self.total_sources),
        };
        ProgressView {
            phase: self.phase,
            percent,
            processed_sources: self.processed_sources,
            total_sources: self.total_sources,
            projects_added: self.projects_added,
        }
    }

    /// Returns whether anything view-visible changed since the last call,
    /// and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        let was_dirty = self.dirty;
        self.dirty = false;
        was_dirty
    }

    pub(crate) fn begin_start(&mut self) {
        self.phase = Phase::Starting;
        self.dirty = true;
    }

    pub(crate) fn fail(&mut self) {
        self.phase = Phase::Failed;
        self.dirty = true;
    }

    pub(crate) fn begin_polling(&mut self, names: Vec<String>) {
        self.total_sources = names.len();
        self.source_names = names;
        self.phase = Phase::Polling;
        self.dirty = true;
    }

    pub(crate) fn apply_status(&mut self, status: &JobStatus) {
        if status.total_sources > 0 {
            self.total_sources = status.total_sources;
        }
        self.record_delta(status);
        self.processed_sources = status.processed_sources;
        self.dirty = true;
    }

    /// Consumes the accumulated deltas into the final summary and moves to
    /// `Completed`. Callers guard against re-entry via the phase.
    pub(crate) fn finalize(&mut self, status: &JobStatus) -> Summary {
        if status.total_sources > 0 {
            self.total_sources = status.total_sources;
        }
        self.processed_sources = status.processed_sources;
        self.projects_added = status.projects_added;
        self.phase = Phase::Completed;
        self.dirty = true;
        Summary {
            total_projects_added: status.projects_added,
            per_source: std::mem::take(&mut self.per_source),
        }
    }

    fn record_delta(&mut self, status: &JobStatus) {
        if status.projects_added <= self.projects_added {
            return;
        }
        let delta = status.projects_added - self.projects_added;
        self.projects_added = status.projects_added;

        // The backend processes one source per tick, so the increase belongs
        // to the most recently processed source. An out-of-range index drops
        // the attribution; the running total is unaffected.
        let Some(index) = status.processed_sources.checked_sub(1) else {
            return;
        };
        if let Some(name) = self.source_names.get(index) {
            self.per_source.push(SourceDelta {
                source_name: name.clone(),
                projects_added: delta,
            });
        }
    }
}
