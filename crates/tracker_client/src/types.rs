use std::fmt;

use serde::Deserialize;

/// Application-level outcome reported by mutation-style endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplyStatus {
    Success,
    Error,
}

/// Reply to `POST /api/run-check`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StartReply {
    pub status: ReplyStatus,
    #[serde(default)]
    pub message: Option<String>,
}

impl StartReply {
    pub fn is_success(&self) -> bool {
        self.status == ReplyStatus::Success
    }
}

/// One entry of `GET /api/sources`. Only `name` feeds delta attribution;
/// the remaining fields are carried for presentation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SourceRecord {
    pub id: i64,
    pub url: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub last_checked: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Wire shape of `GET /api/check-progress`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CheckProgress {
    #[serde(default)]
    pub in_progress: bool,
    pub completed: bool,
    pub processed_sources: usize,
    pub total_sources: usize,
    pub projects_added: u64,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub elapsed: Option<f64>,
}

/// Reply to `GET /api/export-excel`. `filename` is the download path the
/// backend serves the workbook under.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExportReply {
    pub status: ReplyStatus,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Reply to `POST /cleanup-data`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CleanupReply {
    pub status: ReplyStatus,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub kind: ApiFailure,
    pub message: String,
}

impl ApiError {
    pub fn new(kind: ApiFailure, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ApiError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiFailure {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    Decode,
    Network,
}

impl fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiFailure::InvalidUrl => write!(f, "invalid url"),
            ApiFailure::HttpStatus(code) => write!(f, "http status {code}"),
            ApiFailure::Timeout => write!(f, "timeout"),
            ApiFailure::Decode => write!(f, "decode error"),
            ApiFailure::Network => write!(f, "network error"),
        }
    }
}
