mod transcription_service;

pub use transcription_service::{
    ProviderDefaults, ProviderOverrides, TranscriptionError, TranscriptionService,
};
