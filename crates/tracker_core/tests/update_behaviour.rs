use std::sync::Once;

use tracker_core::{
    update, AlertSeverity, CheckState, Effect, JobStatus, Msg, Phase, START_NOTICE,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(tracker_logging::initialize_for_tests);
}

fn status(processed: usize, total: usize, added: u64, completed: bool) -> JobStatus {
    JobStatus {
        completed,
        processed_sources: processed,
        total_sources: total,
        projects_added: added,
        error: None,
    }
}

#[test]
fn check_requested_from_idle_starts() {
    init_logging();
    let state = CheckState::new();

    let (mut state, effects) = update(state, Msg::CheckRequested);

    assert_eq!(state.phase(), Phase::Starting);
    assert_eq!(effects, vec![Effect::StartCheck]);
    assert!(state.consume_dirty());
}

#[test]
fn repeat_check_request_is_ignored() {
    init_logging();
    let state = CheckState::new();
    let (state, _effects) = update(state, Msg::CheckRequested);

    let (mut state, effects) = update(state, Msg::CheckRequested);

    assert_eq!(state.phase(), Phase::Starting);
    assert!(effects.is_empty());
    // Only the first request marked the view dirty.
    assert!(state.consume_dirty());
    let (mut state, _effects) = update(state, Msg::CheckRequested);
    assert!(!state.consume_dirty());
}

#[test]
fn start_accepted_notifies_and_loads_sources() {
    init_logging();
    let state = CheckState::new();
    let (state, _effects) = update(state, Msg::CheckRequested);

    let (state, effects) = update(state, Msg::StartAccepted);

    assert_eq!(state.phase(), Phase::Starting);
    assert_eq!(
        effects,
        vec![
            Effect::ShowAlert {
                severity: AlertSeverity::Info,
                message: START_NOTICE.to_string(),
            },
            Effect::LoadSources,
        ]
    );
}

#[test]
fn start_rejected_fails_with_server_message() {
    init_logging();
    let state = CheckState::new();
    let (state, _effects) = update(state, Msg::CheckRequested);

    let (state, effects) = update(
        state,
        Msg::StartRejected {
            message: "scheduler unavailable".to_string(),
        },
    );

    assert_eq!(state.phase(), Phase::Failed);
    assert_eq!(
        effects,
        vec![Effect::ShowAlert {
            severity: AlertSeverity::Error,
            message: "scheduler unavailable".to_string(),
        }]
    );
}

#[test]
fn sources_loaded_enters_polling_and_schedules_first_poll() {
    init_logging();
    let state = CheckState::new();
    let (state, _effects) = update(state, Msg::CheckRequested);
    let (state, _effects) = update(state, Msg::StartAccepted);

    let (state, effects) = update(
        state,
        Msg::SourcesLoaded {
            names: vec!["Mercom".to_string(), "PV Magazine".to_string()],
        },
    );

    assert_eq!(state.phase(), Phase::Polling);
    assert_eq!(effects, vec![Effect::SchedulePoll]);
    assert_eq!(state.view().total_sources, 2);
    assert_eq!(state.view().processed_sources, 0);
}

#[test]
fn poll_failure_reschedules_without_touching_progress() {
    init_logging();
    let state = CheckState::new();
    let (state, _effects) = update(state, Msg::CheckRequested);
    let (state, _effects) = update(state, Msg::StartAccepted);
    let (state, _effects) = update(
        state,
        Msg::SourcesLoaded {
            names: vec!["Mercom".to_string(), "PV Magazine".to_string()],
        },
    );
    let (mut state, _effects) = update(state, Msg::StatusReceived(status(1, 2, 3, false)));
    state.consume_dirty();
    let before = state.view();

    let (mut state, effects) = update(
        state,
        Msg::PollFailed {
            message: "connection reset".to_string(),
        },
    );

    assert_eq!(effects, vec![Effect::SchedulePoll]);
    assert_eq!(state.view(), before);
    assert!(!state.consume_dirty());
}

#[test]
fn statuses_are_ignored_before_polling() {
    init_logging();
    let state = CheckState::new();

    let (state, effects) = update(state, Msg::StatusReceived(status(1, 2, 0, false)));
    assert!(effects.is_empty());

    let (state, _effects) = update(state, Msg::CheckRequested);
    let (state, effects) = update(state, Msg::StatusReceived(status(1, 2, 0, false)));
    assert_eq!(state.phase(), Phase::Starting);
    assert!(effects.is_empty());
}

#[test]
fn completed_status_is_inert_after_completion() {
    init_logging();
    let state = CheckState::new();
    let (state, _effects) = update(state, Msg::CheckRequested);
    let (state, _effects) = update(state, Msg::StartAccepted);
    let (state, _effects) = update(
        state,
        Msg::SourcesLoaded {
            names: vec!["Mercom".to_string()],
        },
    );

    let (state, effects) = update(state, Msg::StatusReceived(status(1, 1, 0, true)));
    assert_eq!(state.phase(), Phase::Completed);
    assert_eq!(effects.len(), 1);

    // A duplicate completion must not emit a second summary.
    let (mut state, effects) = update(state, Msg::StatusReceived(status(1, 1, 0, true)));
    assert_eq!(state.phase(), Phase::Completed);
    assert!(effects.is_empty());

    state.consume_dirty();
    let (mut state, effects) = update(
        state,
        Msg::PollFailed {
            message: "late failure".to_string(),
        },
    );
    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
}
