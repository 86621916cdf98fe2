use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;

use crate::{ApiError, FailureKind, JobId, JobPayload, JobRecord, ScrapeReply};

#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    /// `None` waits for the backend indefinitely.
    pub request_timeout: Option<Duration>,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: None,
        }
    }
}

/// The backend REST surface used by the pages.
#[async_trait::async_trait]
pub trait JobsApi: Send + Sync {
    async fn list_jobs(&self) -> Result<Vec<JobRecord>, ApiError>;
    async fn get_job(&self, job_id: &JobId) -> Result<JobRecord, ApiError>;
    async fn create_job(&self, payload: &JobPayload) -> Result<(), ApiError>;
    async fn update_job(&self, job_id: &JobId, payload: &JobPayload) -> Result<(), ApiError>;
    async fn delete_job(&self, job_id: &JobId) -> Result<(), ApiError>;
    async fn list_locations(&self) -> Result<Vec<String>, ApiError>;
    async fn list_tags(&self) -> Result<Vec<String>, ApiError>;
    async fn scrape(&self) -> Result<ScrapeReply, ApiError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestJobsApi {
    base_url: Url,
    client: reqwest::Client,
}

impl ReqwestJobsApi {
    pub fn new(settings: ApiSettings) -> Result<Self, ApiError> {
        let base_url = Url::parse(settings.base_url.trim_end_matches('/'))
            .map_err(|err| ApiError::new(FailureKind::InvalidUrl, err.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::new(
                FailureKind::InvalidUrl,
                format!("{} cannot be used as a base url", settings.base_url),
            ));
        }

        let mut builder = reqwest::Client::builder().connect_timeout(settings.connect_timeout);
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| ApiError::new(FailureKind::Network, err.to_string()))?;

        Ok(Self { base_url, client })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Url::parse(&format!("{base}{path}"))
            .map_err(|err| ApiError::new(FailureKind::InvalidUrl, err.to_string()))
    }

    /// `/jobs/{id}` with the id percent-encoded as a single path segment.
    fn job_endpoint(&self, job_id: &JobId) -> Result<Url, ApiError> {
        let mut url = self.endpoint("/jobs")?;
        url.path_segments_mut()
            .map_err(|()| ApiError::new(FailureKind::InvalidUrl, "base url cannot hold a path"))?
            .push(job_id.as_str());
        Ok(url)
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        Ok(self.build(method, self.endpoint(path)?))
    }

    fn job_request(&self, method: Method, job_id: &JobId) -> Result<RequestBuilder, ApiError> {
        Ok(self.build(method, self.job_endpoint(job_id)?))
    }

    fn build(&self, method: Method, url: Url) -> RequestBuilder {
        self.client
            .request(method, url)
            .header(ACCEPT, "application/json")
    }

    fn with_json(builder: RequestBuilder, payload: &JobPayload) -> Result<RequestBuilder, ApiError> {
        let body = serde_json::to_vec(payload)
            .map_err(|err| ApiError::new(FailureKind::Decode, err.to_string()))?;
        Ok(builder.header(CONTENT_TYPE, "application/json").body(body))
    }
}

async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
    let response = builder.send().await.map_err(map_reqwest_error)?;
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::new(
            FailureKind::HttpStatus(status.as_u16()),
            status.to_string(),
        ));
    }
    Ok(response)
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let bytes = response.bytes().await.map_err(map_reqwest_error)?;
    serde_json::from_slice(&bytes).map_err(|err| ApiError::new(FailureKind::Decode, err.to_string()))
}

#[async_trait::async_trait]
impl JobsApi for ReqwestJobsApi {
    async fn list_jobs(&self) -> Result<Vec<JobRecord>, ApiError> {
        decode(send(self.request(Method::GET, "/jobs")?).await?).await
    }

    async fn get_job(&self, job_id: &JobId) -> Result<JobRecord, ApiError> {
        decode(send(self.job_request(Method::GET, job_id)?).await?).await
    }

    async fn create_job(&self, payload: &JobPayload) -> Result<(), ApiError> {
        let builder = Self::with_json(self.request(Method::POST, "/jobs")?, payload)?;
        send(builder).await?;
        Ok(())
    }

    async fn update_job(&self, job_id: &JobId, payload: &JobPayload) -> Result<(), ApiError> {
        let builder = Self::with_json(self.job_request(Method::PUT, job_id)?, payload)?;
        send(builder).await?;
        Ok(())
    }

    async fn delete_job(&self, job_id: &JobId) -> Result<(), ApiError> {
        send(self.job_request(Method::DELETE, job_id)?).await?;
        Ok(())
    }

    async fn list_locations(&self) -> Result<Vec<String>, ApiError> {
        decode(send(self.request(Method::GET, "/locations")?).await?).await
    }

    async fn list_tags(&self) -> Result<Vec<String>, ApiError> {
        decode(send(self.request(Method::GET, "/tags")?).await?).await
    }

    async fn scrape(&self) -> Result<ScrapeReply, ApiError> {
        let response = send(self.request(Method::POST, "/scrape")?).await?;
        let bytes = response.bytes().await.map_err(map_reqwest_error)?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(ScrapeReply::default());
        }
        serde_json::from_slice(&bytes)
            .map_err(|err| ApiError::new(FailureKind::Decode, err.to_string()))
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return ApiError::new(FailureKind::Decode, err.to_string());
    }
    ApiError::new(FailureKind::Network, err.to_string())
}
