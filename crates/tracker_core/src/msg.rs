#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User asked for a manual source check.
    CheckRequested,
    /// Backend accepted the start request.
    StartAccepted,
    /// Backend rejected the start request, or it never reached the backend.
    StartRejected { message: String },
    /// Source list fetched after an accepted start.
    SourcesLoaded { names: Vec<String> },
    /// One poll returned the current job status.
    StatusReceived(crate::JobStatus),
    /// One poll failed at the transport layer.
    PollFailed { message: String },
    /// Fallback for placeholder wiring.
    NoOp,
}
