mod endpoint_probe;
mod forwarder;
mod probe_clip;
mod transcript_extractor;

pub use endpoint_probe::EndpointProbe;
pub use forwarder::SpeechForwarder;
pub use probe_clip::minimal_wav_clip;
pub use transcript_extractor::extract_transcript;
