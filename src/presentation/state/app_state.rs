use std::sync::Arc;

use crate::application::ports::{ConnectivityProbe, TranscriptionProvider};
use crate::application::services::TranscriptionService;
use crate::presentation::config::Settings;

pub struct AppState<P, C>
where
    P: TranscriptionProvider,
    C: ConnectivityProbe,
{
    pub transcription_service: Arc<TranscriptionService<P>>,
    pub probe: Arc<C>,
    pub settings: Settings,
}

impl<P, C> Clone for AppState<P, C>
where
    P: TranscriptionProvider,
    C: ConnectivityProbe,
{
    fn clone(&self) -> Self {
        Self {
            transcription_service: Arc::clone(&self.transcription_service),
            probe: Arc::clone(&self.probe),
            settings: self.settings.clone(),
        }
    }
}
