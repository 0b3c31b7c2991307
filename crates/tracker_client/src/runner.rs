use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracker_core::{
    update, AlertSeverity, CheckState, Effect, JobStatus, Msg, Phase, ProgressView, Summary,
};
use tracker_logging::{get_poll_tick, set_poll_tick, tracker_error, tracker_info, tracker_warn};

use crate::{CheckProgress, TrackerApi};

/// Presentation hooks for one check run. Implementations receive every
/// user-visible update; there are no optional callbacks.
pub trait ProgressDisplay: Send + Sync {
    fn progress(&self, view: &ProgressView);
    fn alert(&self, severity: AlertSeverity, message: &str);
    fn summary(&self, summary: &Summary);
}

#[derive(Debug, Clone)]
pub struct RunnerSettings {
    /// Delay before the first poll and between consecutive polls.
    pub poll_interval: Duration,
    /// Cosmetic hold between observing completion and presenting the summary.
    pub summary_hold: Duration,
}

impl Default for RunnerSettings {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(2000),
            summary_hold: Duration::from_millis(1000),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError {
    #[error("check failed to start: {message}")]
    StartFailed { message: String },
}

/// Drives one check lifecycle: start request, source list, sequential
/// status polls, summary. Each poll is dispatched only after the previous
/// response returned, so polls never overlap and the next one exists only
/// while the core keeps asking for it.
pub struct CheckRunner {
    api: Arc<dyn TrackerApi>,
    display: Arc<dyn ProgressDisplay>,
    settings: RunnerSettings,
}

impl CheckRunner {
    pub fn new(
        api: Arc<dyn TrackerApi>,
        display: Arc<dyn ProgressDisplay>,
        settings: RunnerSettings,
    ) -> Self {
        Self {
            api,
            display,
            settings,
        }
    }

    /// Runs the check to a terminal phase. Transport failures while polling
    /// are logged and retried on the next tick indefinitely; only a failed
    /// start is an error.
    pub async fn run(self) -> Result<Summary, CheckError> {
        let mut state = CheckState::new();
        let mut queue: VecDeque<Effect> = VecDeque::new();
        let mut outcome = Err(CheckError::StartFailed {
            message: "check never reached a terminal phase".to_string(),
        });

        set_poll_tick(0);
        self.dispatch(&mut state, &mut queue, Msg::CheckRequested);

        while let Some(effect) = queue.pop_front() {
            match effect {
                Effect::StartCheck => {
                    let msg = match self.api.run_check().await {
                        Ok(reply) if reply.is_success() => Msg::StartAccepted,
                        Ok(reply) => Msg::StartRejected {
                            message: reply
                                .message
                                .unwrap_or_else(|| "check rejected by the server".to_string()),
                        },
                        Err(err) => Msg::StartRejected {
                            message: err.to_string(),
                        },
                    };
                    self.dispatch(&mut state, &mut queue, msg);
                }
                Effect::LoadSources => {
                    let msg = match self.api.sources().await {
                        Ok(records) => Msg::SourcesLoaded {
                            names: records.into_iter().map(|record| record.name).collect(),
                        },
                        Err(err) => Msg::StartRejected {
                            message: err.to_string(),
                        },
                    };
                    self.dispatch(&mut state, &mut queue, msg);
                }
                Effect::SchedulePoll => {
                    tokio::time::sleep(self.settings.poll_interval).await;
                    set_poll_tick(get_poll_tick() + 1);
                    let msg = match self.api.check_progress().await {
                        Ok(progress) => Msg::StatusReceived(map_status(progress)),
                        Err(err) => {
                            tracker_warn!("status poll tick {} failed: {}", get_poll_tick(), err);
                            Msg::PollFailed {
                                message: err.to_string(),
                            }
                        }
                    };
                    self.dispatch(&mut state, &mut queue, msg);
                }
                Effect::ShowAlert { severity, message } => {
                    if state.phase() == Phase::Failed {
                        tracker_error!("check start failed: {}", message);
                        outcome = Err(CheckError::StartFailed {
                            message: message.clone(),
                        });
                    }
                    self.display.alert(severity, &message);
                }
                Effect::PresentSummary(summary) => {
                    tokio::time::sleep(self.settings.summary_hold).await;
                    self.display.summary(&summary);
                    tracker_info!(
                        "check completed after {} polls with {} projects added",
                        get_poll_tick(),
                        summary.total_projects_added
                    );
                    outcome = Ok(summary);
                }
            }
        }

        outcome
    }

    fn dispatch(&self, state: &mut CheckState, queue: &mut VecDeque<Effect>, msg: Msg) {
        let (next, effects) = update(std::mem::take(state), msg);
        *state = next;
        queue.extend(effects);
        if state.consume_dirty() {
            self.display.progress(&state.view());
        }
    }
}

fn map_status(progress: CheckProgress) -> JobStatus {
    JobStatus {
        completed: progress.completed,
        processed_sources: progress.processed_sources,
        total_sources: progress.total_sources,
        projects_added: progress.projects_added,
        error: progress.error,
    }
}
