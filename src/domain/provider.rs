/// Endpoint, credential, and model for one outbound transcription call.
///
/// Treated as an opaque triplet: values come from per-request overrides
/// with process-level defaults filled in, and are never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    pub endpoint: String,
    pub api_key: String,
    pub model: String,
}

impl ProviderConfig {
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    pub fn kind(&self) -> ProviderKind {
        ProviderKind::from_endpoint(&self.endpoint)
    }
}

/// Known provider families, detected from the endpoint URL.
///
/// Detection is a substring heuristic since the URL is the only signal the
/// caller supplies; everything downstream of detection goes through the
/// explicit field table below.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    SiliconFlow,
    OpenAi,
    Generic,
}

impl ProviderKind {
    pub fn from_endpoint(endpoint: &str) -> Self {
        if endpoint.contains("siliconflow") {
            Self::SiliconFlow
        } else if endpoint.contains("openai") {
            Self::OpenAi
        } else {
            Self::Generic
        }
    }

    /// Ordered non-file form fields for the transcription request.
    ///
    /// SiliconFlow expects `language` ahead of `model`; OpenAI-compatible
    /// APIs and unknown providers take `model` first.
    pub fn form_fields(&self, model: &str, language: &str) -> Vec<(&'static str, String)> {
        match self {
            Self::SiliconFlow => vec![
                ("language", language.to_string()),
                ("model", model.to_string()),
            ],
            Self::OpenAi | Self::Generic => vec![
                ("model", model.to_string()),
                ("language", language.to_string()),
            ],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SiliconFlow => "siliconflow",
            Self::OpenAi => "openai",
            Self::Generic => "generic",
        }
    }
}
