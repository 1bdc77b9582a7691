use async_trait::async_trait;

use crate::domain::{AudioUpload, ProviderConfig};

/// Outbound seam to a third-party speech-to-text HTTP API.
///
/// One call, one transcript; no retries. Implementations own the wire
/// details (multipart layout, auth header, response normalization).
#[async_trait]
pub trait TranscriptionProvider: Send + Sync {
    async fn transcribe(
        &self,
        upload: &AudioUpload,
        config: &ProviderConfig,
    ) -> Result<String, ProviderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// Non-2xx upstream answer. `message` already carries the status line
    /// plus whatever detail the body yielded; `status` is kept separately
    /// so callers can mirror it.
    #[error("{message}")]
    UpstreamStatus { status: u16, message: String },
    #[error("provider returned a non-JSON response")]
    NonJsonResponse,
    #[error("provider response could not be parsed as JSON: {0}")]
    JsonParse(String),
    #[error("no transcript field found in provider response")]
    TranscriptMissing,
    #[error("request to provider timed out")]
    Timeout,
    #[error("could not connect to provider: {0}")]
    Connect(String),
    #[error("network error while calling provider: {0}")]
    Network(String),
    #[error("failed to build provider request: {0}")]
    RequestBuild(String),
}

impl ProviderError {
    /// Collapses a transport failure into the matching variant.
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            Self::Connect(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}
