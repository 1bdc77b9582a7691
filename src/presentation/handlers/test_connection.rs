use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::ports::{ConnectivityProbe, TranscriptionProvider};
use crate::domain::ProviderConfig;
use crate::infrastructure::observability::{mask_api_key, redact_endpoint};
use crate::presentation::state::AppState;

use super::quick_test::{ProbeRequest, valid_credentials};
use super::transcribe::ErrorResponse;

/// Full connectivity check: sends a request shaped like a real provider call
/// so the verdict also covers authentication and endpoint semantics, not
/// just reachability.
#[tracing::instrument(skip(state, request))]
pub async fn test_connection_handler<P, C>(
    State(state): State<AppState<P, C>>,
    Json(request): Json<ProbeRequest>,
) -> impl IntoResponse
where
    P: TranscriptionProvider + 'static,
    C: ConnectivityProbe + 'static,
{
    let (endpoint, api_key) = match valid_credentials(&request) {
        Some(credentials) => credentials,
        None => {
            tracing::warn!("Connection test with missing endpoint or API key");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "endpoint and API key are required".to_string(),
                }),
            )
                .into_response();
        }
    };

    let model = request
        .model
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(&state.settings.provider.model)
        .to_string();

    tracing::debug!(
        endpoint = %redact_endpoint(&endpoint),
        api_key = %mask_api_key(&api_key),
        model = %model,
        "Running full connection test"
    );

    let config = ProviderConfig::new(endpoint, api_key, model);
    let verdict = state.probe.full_check(&config).await;
    (StatusCode::OK, Json(verdict)).into_response()
}
