use std::sync::Arc;

use crate::application::ports::{ProviderError, TranscriptionProvider};
use crate::domain::{AudioUpload, MAX_UPLOAD_BYTES, ProviderConfig};

/// Process-level fallback values used when a request carries no override.
#[derive(Debug, Clone)]
pub struct ProviderDefaults {
    pub endpoint: String,
    pub api_key: String,
    pub model: String,
}

/// Per-request overrides, already merged from multipart fields and
/// headers by the handler. Blank values count as absent.
#[derive(Debug, Clone, Default)]
pub struct ProviderOverrides {
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
    pub model: Option<String>,
}

pub struct TranscriptionService<P>
where
    P: TranscriptionProvider,
{
    provider: Arc<P>,
    defaults: ProviderDefaults,
}

impl<P> TranscriptionService<P>
where
    P: TranscriptionProvider,
{
    pub fn new(provider: Arc<P>, defaults: ProviderDefaults) -> Self {
        Self { provider, defaults }
    }

    /// Validates the upload, fills in configured defaults, and forwards
    /// the file to the provider. The size ceiling is checked before any
    /// network traffic happens.
    pub async fn transcribe(
        &self,
        upload: &AudioUpload,
        overrides: &ProviderOverrides,
    ) -> Result<String, TranscriptionError> {
        if upload.exceeds_size_limit() {
            tracing::warn!(
                size_bytes = upload.size_bytes(),
                limit_bytes = MAX_UPLOAD_BYTES,
                "Upload rejected: over size limit"
            );
            return Err(TranscriptionError::FileTooLarge {
                size_bytes: upload.size_bytes(),
            });
        }

        let config = self.resolve_config(overrides)?;

        let text = self.provider.transcribe(upload, &config).await?;

        tracing::info!(
            chars = text.len(),
            provider = config.kind().as_str(),
            "Transcription completed"
        );

        Ok(text)
    }

    /// Override beats default; blank strings are treated as absent.
    fn resolve_config(
        &self,
        overrides: &ProviderOverrides,
    ) -> Result<ProviderConfig, TranscriptionError> {
        let endpoint = pick(overrides.endpoint.as_deref(), &self.defaults.endpoint);
        let api_key = pick(overrides.api_key.as_deref(), &self.defaults.api_key);
        let model = pick(overrides.model.as_deref(), &self.defaults.model);

        if api_key.is_empty() {
            return Err(TranscriptionError::MissingApiKey);
        }
        if endpoint.is_empty() {
            return Err(TranscriptionError::MissingEndpoint);
        }

        Ok(ProviderConfig::new(endpoint, api_key, model))
    }
}

fn pick(override_value: Option<&str>, default: &str) -> String {
    match override_value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => default.trim().to_string(),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("no audio file found in request")]
    MissingFile,
    #[error("file size exceeds the limit (max 25 MiB)")]
    FileTooLarge { size_bytes: u64 },
    #[error("API key is not configured")]
    MissingApiKey,
    #[error("API endpoint is not configured")]
    MissingEndpoint,
    #[error("{0}")]
    Provider(#[from] ProviderError),
}
