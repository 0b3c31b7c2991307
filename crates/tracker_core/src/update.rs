use crate::{AlertSeverity, CheckState, Effect, Msg, Phase, START_NOTICE};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: CheckState, msg: Msg) -> (CheckState, Vec<Effect>) {
    let effects = match msg {
        Msg::CheckRequested => {
            // A state value covers one lifecycle; repeat requests and
            // requests against a terminal phase are ignored.
            if state.phase() != Phase::Idle {
                return (state, Vec::new());
            }
            state.begin_start();
            vec![Effect::StartCheck]
        }
        Msg::StartAccepted => {
            if state.phase() != Phase::Starting {
                return (state, Vec::new());
            }
            vec![
                Effect::ShowAlert {
                    severity: AlertSeverity::Info,
                    message: START_NOTICE.to_string(),
                },
                Effect::LoadSources,
            ]
        }
        Msg::StartRejected { message } => {
            if state.phase() != Phase::Starting {
                return (state, Vec::new());
            }
            state.fail();
            vec![Effect::ShowAlert {
                severity: AlertSeverity::Error,
                message,
            }]
        }
        Msg::SourcesLoaded { names } => {
            if state.phase() != Phase::Starting {
                return (state, Vec::new());
            }
            state.begin_polling(names);
            vec![Effect::SchedulePoll]
        }
        Msg::StatusReceived(status) => {
            // Late or duplicate statuses after a terminal phase are inert,
            // so finalization happens exactly once.
            if state.phase() != Phase::Polling {
                return (state, Vec::new());
            }
            if status.completed {
                let error = status.error.clone();
                let summary = state.finalize(&status);
                let mut effects = Vec::with_capacity(2);
                if let Some(message) = error {
                    effects.push(Effect::ShowAlert {
                        severity: AlertSeverity::Error,
                        message,
                    });
                }
                effects.push(Effect::PresentSummary(summary));
                effects
            } else {
                state.apply_status(&status);
                vec![Effect::SchedulePoll]
            }
        }
        Msg::PollFailed { .. } => {
            if state.phase() != Phase::Polling {
                return (state, Vec::new());
            }
            // Transient transport failures keep the loop alive; the runner
            // logs them.
            vec![Effect::SchedulePoll]
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
