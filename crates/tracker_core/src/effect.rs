#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue the start request for the background check job.
    StartCheck,
    /// Fetch the source list used for totals and delta attribution.
    LoadSources,
    /// Schedule the next status poll after the poll interval.
    SchedulePoll,
    /// Surface a banner to the user.
    ShowAlert {
        severity: AlertSeverity,
        message: String,
    },
    /// Present the final summary after the completion hold.
    PresentSummary(crate::Summary),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertSeverity {
    Info,
    Success,
    Error,
}
