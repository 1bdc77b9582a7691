use std::env;

use crate::application::services::ProviderDefaults;
use crate::presentation::config::Environment;

/// Endpoint used when `TRANSCRIPTION_ENDPOINT` is not set.
pub const DEFAULT_ENDPOINT: &str = "https://api.siliconflow.cn/v1/audio/transcriptions";

/// Model used when `TRANSCRIPTION_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "FunAudioLLM/SenseVoiceSmall";

/// Runtime configuration, resolved once at startup.
///
/// Request handlers never read the process environment; every default they
/// need is captured here and injected through the application state.
#[derive(Debug, Clone)]
pub struct Settings {
    pub environment: Environment,
    pub server: ServerSettings,
    pub provider: ProviderSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

/// Defaults for the upstream speech provider. Any of these can be overridden
/// per request through multipart fields or `x-api-*` headers.
#[derive(Debug, Clone)]
pub struct ProviderSettings {
    pub endpoint: String,
    pub api_key: String,
    pub model: String,
    pub language: String,
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    pub json_format: bool,
}

impl Settings {
    /// Reads configuration from environment variables, falling back to
    /// defaults suitable for local development.
    ///
    /// | Variable                 | Default                         |
    /// |--------------------------|---------------------------------|
    /// | `APP_ENV`                | `local`                         |
    /// | `SERVER_HOST`            | `0.0.0.0`                       |
    /// | `SERVER_PORT`            | `3000`                          |
    /// | `TRANSCRIPTION_ENDPOINT` | SiliconFlow transcriptions URL  |
    /// | `SILICONFLOW_API_KEY`    | empty (must be set or overridden per request) |
    /// | `TRANSCRIPTION_MODEL`    | `FunAudioLLM/SenseVoiceSmall`   |
    /// | `TRANSCRIPTION_LANGUAGE` | `zh`                            |
    /// | `LOG_FORMAT`             | plain (`json` enables JSON logs) |
    pub fn from_env() -> Self {
        let environment = env::var("APP_ENV")
            .ok()
            .and_then(|value| Environment::try_from(value).ok())
            .unwrap_or(Environment::Local);

        let server = ServerSettings {
            host: env_or("SERVER_HOST", "0.0.0.0"),
            port: env::var("SERVER_PORT")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(3000),
        };

        let provider = ProviderSettings {
            endpoint: env_or("TRANSCRIPTION_ENDPOINT", DEFAULT_ENDPOINT),
            api_key: env::var("SILICONFLOW_API_KEY").unwrap_or_default(),
            model: env_or("TRANSCRIPTION_MODEL", DEFAULT_MODEL),
            language: env_or("TRANSCRIPTION_LANGUAGE", "zh"),
        };

        let logging = LoggingSettings {
            json_format: env::var("LOG_FORMAT").is_ok_and(|value| value == "json"),
        };

        Settings {
            environment,
            server,
            provider,
            logging,
        }
    }
}

impl ProviderSettings {
    pub fn to_defaults(&self) -> ProviderDefaults {
        ProviderDefaults {
            endpoint: self.endpoint.clone(),
            api_key: self.api_key.clone(),
            model: self.model.clone(),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => default.to_string(),
    }
}
