//! Tracker core: pure check-lifecycle state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::{AlertSeverity, Effect};
pub use msg::Msg;
pub use state::{CheckState, JobStatus, Phase, SourceDelta, Summary};
pub use update::update;
pub use view_model::{ProgressView, START_NOTICE};
