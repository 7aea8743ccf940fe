//! Analysis service client. The only place that talks to `/api/analyze`.
//!
//! One request per call. No retries, no backoff: a failed attempt is reported
//! back to the session and the user decides whether to resubmit.

use async_trait::async_trait;
use reqwest::{multipart, Client};
use tracing::{debug, warn};

use crate::config::Config;
use crate::errors::AnalysisError;
use crate::input::ResumeFile;
use crate::report::MatchReport;

pub const ANALYZE_PATH: &str = "/api/analyze";

/// Snapshot of the inputs sent for one submission attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRequest {
    pub resume: ResumeFile,
    pub job_description: String,
}

/// The remote analysis collaborator. Implement this to swap the transport
/// without touching the session.
#[async_trait]
pub trait AnalysisService: Send + Sync {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<MatchReport, AnalysisError>;
}

/// `AnalysisService` over HTTP multipart.
#[derive(Clone)]
pub struct HttpAnalysisService {
    client: Client,
    endpoint: String,
}

impl HttpAnalysisService {
    pub fn new(config: &Config) -> Result<Self, AnalysisError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.http_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: analyze_endpoint(&config.api_url),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl AnalysisService for HttpAnalysisService {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<MatchReport, AnalysisError> {
        let resume = &request.resume;
        let resume_part = multipart::Part::bytes(resume.content.to_vec())
            .file_name(resume.name.clone())
            .mime_str(&resume.mime_type)?;

        let form = multipart::Form::new()
            .part("resume", resume_part)
            .text("job_description", request.job_description.clone());

        debug!(
            endpoint = %self.endpoint,
            resume = %resume.name,
            resume_bytes = resume.content.len(),
            "Submitting analysis request"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!("Analysis service returned {}: {}", status, body);
            return Err(AnalysisError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str::<MatchReport>(&body)?)
    }
}

/// `<base>/api/analyze`, tolerating a trailing slash on the base URL.
pub fn analyze_endpoint(api_url: &str) -> String {
    format!("{}{}", api_url.trim_end_matches('/'), ANALYZE_PATH)
}
