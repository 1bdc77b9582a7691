use serde::Serialize;

/// Outcome of a connectivity probe against one provider endpoint.
///
/// `http_status` is absent when no HTTP response came back at all
/// (timeout, refused connection, DNS failure).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectivityVerdict {
    #[serde(rename = "status", skip_serializing_if = "Option::is_none")]
    pub http_status: Option<u16>,
    pub success: bool,
    pub message: String,
    pub elapsed_ms: u64,
}

impl ConnectivityVerdict {
    pub fn reachable(status: u16, message: impl Into<String>, elapsed_ms: u64) -> Self {
        Self {
            http_status: Some(status),
            success: true,
            message: message.into(),
            elapsed_ms,
        }
    }

    pub fn rejected(status: u16, message: impl Into<String>, elapsed_ms: u64) -> Self {
        Self {
            http_status: Some(status),
            success: false,
            message: message.into(),
            elapsed_ms,
        }
    }

    pub fn unreachable(message: impl Into<String>, elapsed_ms: u64) -> Self {
        Self {
            http_status: None,
            success: false,
            message: message.into(),
            elapsed_ms,
        }
    }
}
