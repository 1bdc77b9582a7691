use std::time::Duration;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{any, post};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use verbatim::application::ports::ConnectivityProbe;
use verbatim::domain::ProviderConfig;
use verbatim::infrastructure::speech::EndpointProbe;

async fn start_status_server(path: &'static str, status: u16) -> (String, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let app = Router::new().route(
        path,
        any(move || async move { StatusCode::from_u16(status).unwrap() }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let endpoint = format!("http://{}{}", addr, path);

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    (endpoint, shutdown_tx)
}

async fn start_post_only_server(path: &'static str, status: u16) -> (String, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let app = Router::new().route(
        path,
        post(move || async move { StatusCode::from_u16(status).unwrap() }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let endpoint = format!("http://{}{}", addr, path);

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    (endpoint, shutdown_tx)
}

async fn start_slow_server(path: &'static str, delay: Duration) -> (String, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let app = Router::new().route(
        path,
        any(move || async move {
            tokio::time::sleep(delay).await;
            StatusCode::OK
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let endpoint = format!("http://{}{}", addr, path);

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    (endpoint, shutdown_tx)
}

fn config_for(endpoint: String) -> ProviderConfig {
    ProviderConfig::new(endpoint, "sk-probe-test", "FunAudioLLM/SenseVoiceSmall")
}

#[tokio::test]
async fn given_healthy_endpoint_when_quick_check_then_reports_connection_ok() {
    let (endpoint, shutdown_tx) = start_status_server("/probe", 200).await;
    let probe = EndpointProbe::new();

    let verdict = probe.quick_check(&config_for(endpoint)).await;

    assert!(verdict.success);
    assert_eq!(verdict.http_status, Some(200));
    assert!(verdict.message.starts_with("connection ok ("));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_missing_route_when_quick_check_then_reports_endpoint_not_found() {
    let (endpoint, shutdown_tx) = start_status_server("/probe", 404).await;
    let probe = EndpointProbe::new();

    let verdict = probe.quick_check(&config_for(endpoint)).await;

    assert!(!verdict.success);
    assert_eq!(verdict.http_status, Some(404));
    assert_eq!(verdict.message, "API endpoint does not exist");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_method_not_allowed_when_quick_check_then_still_counts_as_reachable() {
    let (endpoint, shutdown_tx) = start_status_server("/probe", 405).await;
    let probe = EndpointProbe::new();

    let verdict = probe.quick_check(&config_for(endpoint)).await;

    assert!(verdict.success);
    assert!(verdict.message.starts_with("endpoint reachable ("));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_unauthorized_when_quick_check_then_reports_invalid_key() {
    let (endpoint, shutdown_tx) = start_status_server("/probe", 401).await;
    let probe = EndpointProbe::new();

    let verdict = probe.quick_check(&config_for(endpoint)).await;

    assert!(!verdict.success);
    assert_eq!(verdict.message, "API key is invalid");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_unexpected_status_when_quick_check_then_reports_status_code() {
    let (endpoint, shutdown_tx) = start_status_server("/probe", 500).await;
    let probe = EndpointProbe::new();

    let verdict = probe.quick_check(&config_for(endpoint)).await;

    assert!(!verdict.success);
    assert_eq!(verdict.message, "status code: 500");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_slow_endpoint_when_quick_check_then_times_out() {
    let (endpoint, shutdown_tx) = start_slow_server("/probe", Duration::from_secs(2)).await;
    let probe = EndpointProbe::with_timeouts(Duration::from_millis(100), Duration::from_secs(5));

    let verdict = probe.quick_check(&config_for(endpoint)).await;

    assert!(!verdict.success);
    assert_eq!(verdict.http_status, None);
    assert!(verdict.message.contains("timed out"));
    assert!(verdict.elapsed_ms >= 90);
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_refused_connection_when_quick_check_then_reports_connection_failed() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let probe = EndpointProbe::new();
    let verdict = probe
        .quick_check(&config_for(format!("http://{}/probe", addr)))
        .await;

    assert!(!verdict.success);
    assert_eq!(verdict.http_status, None);
    assert_eq!(verdict.message, "connection failed");
}

#[tokio::test]
async fn given_options_accepting_endpoint_when_full_check_then_succeeds() {
    let (endpoint, shutdown_tx) = start_status_server("/v1/audio/transcriptions", 204).await;
    let probe = EndpointProbe::new();

    let verdict = probe.full_check(&config_for(endpoint)).await;

    assert!(verdict.success);
    assert_eq!(verdict.message, "connection test succeeded");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_unauthorized_when_full_check_then_reports_expired_key() {
    let (endpoint, shutdown_tx) = start_status_server("/v1/audio/transcriptions", 401).await;
    let probe = EndpointProbe::new();

    let verdict = probe.full_check(&config_for(endpoint)).await;

    assert!(!verdict.success);
    assert_eq!(verdict.http_status, Some(401));
    assert_eq!(verdict.message, "API key is invalid or expired");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_siliconflow_endpoint_when_full_check_then_posts_probe_clip() {
    // The route only answers POST, so a 400 verdict proves the upload
    // branch was taken rather than the OPTIONS branch.
    let (endpoint, shutdown_tx) =
        start_post_only_server("/siliconflow/v1/audio/transcriptions", 400).await;
    let probe = EndpointProbe::new();

    let verdict = probe.full_check(&config_for(endpoint)).await;

    assert!(verdict.success);
    assert_eq!(verdict.http_status, Some(400));
    assert_eq!(verdict.message, "endpoint and API key verified");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_rate_limited_endpoint_when_full_check_then_reports_rate_limit() {
    let (endpoint, shutdown_tx) = start_status_server("/v1/audio/transcriptions", 429).await;
    let probe = EndpointProbe::new();

    let verdict = probe.full_check(&config_for(endpoint)).await;

    assert!(!verdict.success);
    assert_eq!(verdict.message, "rate limited, try again later");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_unavailable_server_when_full_check_then_reports_temporary_outage() {
    let (endpoint, shutdown_tx) = start_status_server("/v1/audio/transcriptions", 503).await;
    let probe = EndpointProbe::new();

    let verdict = probe.full_check(&config_for(endpoint)).await;

    assert!(!verdict.success);
    assert_eq!(verdict.message, "provider server temporarily unavailable");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_slow_endpoint_when_full_check_then_times_out_with_hint() {
    let (endpoint, shutdown_tx) = start_slow_server("/probe", Duration::from_secs(2)).await;
    let probe = EndpointProbe::with_timeouts(Duration::from_secs(3), Duration::from_millis(100));

    let verdict = probe.full_check(&config_for(endpoint)).await;

    assert!(!verdict.success);
    assert_eq!(verdict.http_status, None);
    assert!(verdict.message.contains("timed out"));
    assert!(verdict.message.contains("check the network or endpoint"));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_refused_connection_when_full_check_then_points_at_endpoint_url() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let probe = EndpointProbe::new();
    let verdict = probe
        .full_check(&config_for(format!("http://{}/v1", addr)))
        .await;

    assert!(!verdict.success);
    assert_eq!(verdict.http_status, None);
    assert_eq!(
        verdict.message,
        "cannot reach the API server, check the endpoint URL"
    );
}
