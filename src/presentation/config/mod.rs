mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    DEFAULT_ENDPOINT, DEFAULT_MODEL, LoggingSettings, ProviderSettings, ServerSettings, Settings,
};
