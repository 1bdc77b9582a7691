use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::{ConnectivityProbe, ProviderError, TranscriptionProvider};
use crate::application::services::{ProviderOverrides, TranscriptionError};
use crate::domain::AudioUpload;
use crate::infrastructure::observability::mask_api_key;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct TranscriptionResponse {
    pub text: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Accepts a multipart upload with an `audio` file part and forwards it to
/// the configured speech provider.
///
/// Provider defaults can be overridden per request, either through the
/// multipart text fields `endpoint`, `apiKey` and `model` or through the
/// `x-api-endpoint`, `x-api-key` and `x-api-model` headers. A form field
/// wins over the matching header; blank values are ignored.
#[tracing::instrument(skip(state, headers, multipart))]
pub async fn transcribe_handler<P, C>(
    State(state): State<AppState<P, C>>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    P: TranscriptionProvider + 'static,
    C: ConnectivityProbe + 'static,
{
    let mut overrides = ProviderOverrides {
        endpoint: header_value(&headers, "x-api-endpoint"),
        api_key: header_value(&headers, "x-api-key"),
        model: header_value(&headers, "x-api-model"),
    };

    let mut upload: Option<AudioUpload> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(f)) => f,
            Ok(None) => break,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: format!("Failed to read multipart: {}", e),
                    }),
                )
                    .into_response();
            }
        };

        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "audio" if upload.is_none() => {
                let file_name = field.file_name().unwrap_or("audio").to_string();
                let mime_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let data = match field.bytes().await {
                    Ok(d) => d,
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to read file bytes");
                        return (
                            StatusCode::BAD_REQUEST,
                            Json(ErrorResponse {
                                error: format!("Failed to read file: {}", e),
                            }),
                        )
                            .into_response();
                    }
                };
                upload = Some(AudioUpload::new(file_name, mime_type, data.to_vec()));
            }
            "endpoint" | "apiKey" | "model" => {
                let value = match field.text().await {
                    Ok(v) => v,
                    Err(e) => {
                        tracing::error!(error = %e, field = %name, "Failed to read multipart field");
                        return (
                            StatusCode::BAD_REQUEST,
                            Json(ErrorResponse {
                                error: format!("Failed to read multipart: {}", e),
                            }),
                        )
                            .into_response();
                    }
                };
                if !value.trim().is_empty() {
                    match name.as_str() {
                        "endpoint" => overrides.endpoint = Some(value),
                        "apiKey" => overrides.api_key = Some(value),
                        _ => overrides.model = Some(value),
                    }
                }
            }
            _ => {}
        }
    }

    let upload = match upload {
        Some(u) => u,
        None => {
            tracing::warn!("Transcription request with no audio file");
            return transcription_error_response(&TranscriptionError::MissingFile);
        }
    };

    tracing::debug!(
        file_name = %upload.file_name,
        mime_type = %upload.mime_type,
        bytes = upload.size_bytes(),
        "Audio upload received"
    );
    if let Some(key) = overrides.api_key.as_deref() {
        tracing::debug!(api_key = %mask_api_key(key), "Using per-request API key");
    }

    match state
        .transcription_service
        .transcribe(&upload, &overrides)
        .await
    {
        Ok(text) => (StatusCode::OK, Json(TranscriptionResponse { text })).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Transcription failed");
            transcription_error_response(&e)
        }
    }
}

fn transcription_error_response(err: &TranscriptionError) -> Response {
    let status = match err {
        TranscriptionError::MissingFile => StatusCode::BAD_REQUEST,
        TranscriptionError::FileTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
        TranscriptionError::MissingApiKey | TranscriptionError::MissingEndpoint => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
        TranscriptionError::Provider(provider_err) => provider_status(provider_err),
    };
    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
        .into_response()
}

/// Upstream HTTP failures keep their original status so clients can react to
/// 401/429/5xx exactly as if they had called the provider directly. Every
/// other provider failure is a gateway problem.
fn provider_status(err: &ProviderError) -> StatusCode {
    match err {
        ProviderError::UpstreamStatus { status, .. } => {
            StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
        }
        _ => StatusCode::BAD_GATEWAY,
    }
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
