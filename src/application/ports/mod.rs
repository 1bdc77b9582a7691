mod connectivity_probe;
mod transcription_provider;

pub use connectivity_probe::ConnectivityProbe;
pub use transcription_provider::{ProviderError, TranscriptionProvider};
