//! Tracker client: typed HTTP access to the dashboard backend and the
//! sequential poll runner driving one check lifecycle.
mod api;
mod runner;
mod types;

pub use api::{ApiSettings, HttpTrackerApi, TrackerApi};
pub use runner::{CheckError, CheckRunner, ProgressDisplay, RunnerSettings};
pub use types::{
    ApiError, ApiFailure, CheckProgress, CleanupReply, ExportReply, ReplyStatus, SourceRecord,
    StartReply,
};
