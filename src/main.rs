use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use verbatim::application::services::TranscriptionService;
use verbatim::infrastructure::observability::{TracingConfig, init_tracing};
use verbatim::infrastructure::speech::{EndpointProbe, SpeechForwarder};
use verbatim::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();

    init_tracing(
        TracingConfig::new(settings.environment, settings.logging.json_format),
        settings.server.port,
    );

    let forwarder = Arc::new(SpeechForwarder::new(settings.provider.language.clone()));
    let probe = Arc::new(EndpointProbe::new());
    let transcription_service = Arc::new(TranscriptionService::new(
        forwarder,
        settings.provider.to_defaults(),
    ));

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;

    let state = AppState {
        transcription_service,
        probe,
        settings,
    };
    let router = create_router(state);

    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
