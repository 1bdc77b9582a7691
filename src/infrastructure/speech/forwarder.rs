use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::multipart;

use crate::application::ports::{ProviderError, TranscriptionProvider};
use crate::domain::{AudioUpload, ProviderConfig};

use super::transcript_extractor::extract_transcript;

const ERROR_DETAIL_MAX_CHARS: usize = 200;
const BODY_LOG_MAX_CHARS: usize = 500;

/// Forwards an upload to any bearer-authenticated speech-to-text HTTP
/// API and normalizes the answer into plain transcript text.
///
/// The transcription call itself carries no deadline; callers wait as
/// long as the provider takes.
pub struct SpeechForwarder {
    client: reqwest::Client,
    language: String,
}

impl SpeechForwarder {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            language: language.into(),
        }
    }
}

#[async_trait]
impl TranscriptionProvider for SpeechForwarder {
    async fn transcribe(
        &self,
        upload: &AudioUpload,
        config: &ProviderConfig,
    ) -> Result<String, ProviderError> {
        let kind = config.kind();

        let file_part = multipart::Part::bytes(upload.data.clone())
            .file_name(upload.file_name.clone())
            .mime_str(&upload.mime_type)
            .map_err(|e| ProviderError::RequestBuild(format!("mime: {}", e)))?;

        let mut form = multipart::Form::new().part("file", file_part);
        for (name, value) in kind.form_fields(&config.model, &self.language) {
            form = form.text(name, value);
        }

        tracing::debug!(
            endpoint = %config.endpoint,
            model = %config.model,
            provider = kind.as_str(),
            bytes = upload.data.len(),
            "Forwarding audio to speech-to-text provider"
        );

        let response = self
            .client
            .post(&config.endpoint)
            .bearer_auth(&config.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(ProviderError::from_reqwest)?;

        let status = response.status();
        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.contains("application/json"));
        let body = response
            .text()
            .await
            .map_err(ProviderError::from_reqwest)?;

        if !status.is_success() {
            let mut message = format!("API request failed: {}", status);
            if let Some(detail) = error_detail(is_json, &body) {
                message.push_str(" - ");
                message.push_str(&detail);
            }
            tracing::warn!(status = status.as_u16(), "Provider rejected transcription");
            return Err(ProviderError::UpstreamStatus {
                status: status.as_u16(),
                message,
            });
        }

        if !is_json {
            tracing::error!(
                body = %truncate_chars(&body, BODY_LOG_MAX_CHARS),
                "Provider returned a non-JSON transcription response"
            );
            return Err(ProviderError::NonJsonResponse);
        }

        let parsed: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| ProviderError::JsonParse(e.to_string()))?;

        match extract_transcript(&parsed) {
            Some(text) => Ok(text),
            None => {
                tracing::error!(
                    body = %truncate_chars(&body, BODY_LOG_MAX_CHARS),
                    "No transcript field in provider response"
                );
                Err(ProviderError::TranscriptMissing)
            }
        }
    }
}

/// Best human-readable detail for a failed call: the JSON `error` or
/// `message` field when the body is JSON, else a truncated slice of the
/// raw body.
fn error_detail(is_json: bool, body: &str) -> Option<String> {
    if is_json {
        if let Ok(parsed) = serde_json::from_str::<serde_json::Value>(body) {
            let field = parsed
                .get("error")
                .and_then(|e| {
                    e.as_str()
                        .map(String::from)
                        .or_else(|| e.get("message").and_then(|m| m.as_str()).map(String::from))
                })
                .or_else(|| {
                    parsed
                        .get("message")
                        .and_then(|m| m.as_str())
                        .map(String::from)
                });
            if field.is_some() {
                return field;
            }
        }
    }

    let detail = truncate_chars(body.trim(), ERROR_DETAIL_MAX_CHARS);
    if detail.is_empty() {
        None
    } else {
        Some(detail)
    }
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
