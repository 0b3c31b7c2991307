use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    ApiError, ApiFailure, CheckProgress, CleanupReply, ExportReply, SourceRecord, StartReply,
};

const RUN_CHECK_PATH: &str = "/api/run-check";
const SOURCES_PATH: &str = "/api/sources";
const CHECK_PROGRESS_PATH: &str = "/api/check-progress";
const EXPORT_EXCEL_PATH: &str = "/api/export-excel";
const CLEANUP_PATH: &str = "/cleanup-data";

#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl ApiSettings {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Typed access to the dashboard backend. The runner only depends on this
/// seam, so tests can script replies without a server.
#[async_trait::async_trait]
pub trait TrackerApi: Send + Sync {
    async fn run_check(&self) -> Result<StartReply, ApiError>;
    async fn sources(&self) -> Result<Vec<SourceRecord>, ApiError>;
    async fn check_progress(&self) -> Result<CheckProgress, ApiError>;
    async fn export_excel(&self) -> Result<ExportReply, ApiError>;
    async fn cleanup_data(&self) -> Result<CleanupReply, ApiError>;
}

#[derive(Debug, Clone)]
pub struct HttpTrackerApi {
    base_url: Url,
    client: reqwest::Client,
}

impl HttpTrackerApi {
    pub fn new(settings: ApiSettings) -> Result<Self, ApiError> {
        let base_url = Url::parse(&settings.base_url)
            .map_err(|err| ApiError::new(ApiFailure::InvalidUrl, err.to_string()))?;

        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ApiError::new(ApiFailure::Network, err.to_string()))?;

        Ok(Self { base_url, client })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|err| ApiError::new(ApiFailure::InvalidUrl, err.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .client
            .get(self.endpoint(path)?)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        decode_reply(response).await
    }

    async fn post_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .client
            .post(self.endpoint(path)?)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        decode_reply(response).await
    }
}

#[async_trait::async_trait]
impl TrackerApi for HttpTrackerApi {
    async fn run_check(&self) -> Result<StartReply, ApiError> {
        self.post_json(RUN_CHECK_PATH).await
    }

    async fn sources(&self) -> Result<Vec<SourceRecord>, ApiError> {
        self.get_json(SOURCES_PATH).await
    }

    async fn check_progress(&self) -> Result<CheckProgress, ApiError> {
        self.get_json(CHECK_PROGRESS_PATH).await
    }

    async fn export_excel(&self) -> Result<ExportReply, ApiError> {
        self.get_json(EXPORT_EXCEL_PATH).await
    }

    async fn cleanup_data(&self) -> Result<CleanupReply, ApiError> {
        self.post_json(CLEANUP_PATH).await
    }
}

async fn decode_reply<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::new(
            ApiFailure::HttpStatus(status.as_u16()),
            status.to_string(),
        ));
    }
    response.json::<T>().await.map_err(|err| {
        if err.is_decode() {
            ApiError::new(ApiFailure::Decode, err.to_string())
        } else {
            map_reqwest_error(err)
        }
    })
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::new(ApiFailure::Timeout, err.to_string());
    }
    if err.is_decode() {
        return ApiError::new(ApiFailure::Decode, err.to_string());
    }
    ApiError::new(ApiFailure::Network, err.to_string())
}
