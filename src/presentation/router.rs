use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{ConnectivityProbe, TranscriptionProvider};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    health_handler, quick_test_handler, test_connection_handler, transcribe_handler,
};
use crate::presentation::state::AppState;

/// Transport-level body cap. Kept well above the 25 MiB upload ceiling so
/// oversized files reach the size check and get a precise 413 instead of an
/// opaque stream abort.
const BODY_LIMIT_BYTES: usize = 64 * 1024 * 1024;

pub fn create_router<P, C>(state: AppState<P, C>) -> Router
where
    P: TranscriptionProvider + 'static,
    C: ConnectivityProbe + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/v1/transcribe", post(transcribe_handler::<P, C>))
        .route("/api/v1/quick-test", post(quick_test_handler::<P, C>))
        .route(
            "/api/v1/test-connection",
            post(test_connection_handler::<P, C>),
        )
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
