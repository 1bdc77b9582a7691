use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, multipart};

use crate::application::ports::ConnectivityProbe;
use crate::domain::{ConnectivityVerdict, ProviderConfig, ProviderKind};

use super::probe_clip::minimal_wav_clip;

const QUICK_PROBE_TIMEOUT: Duration = Duration::from_secs(3);
const FULL_PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Connectivity diagnostics against a provider endpoint.
///
/// Every in-flight request is aborted once its deadline elapses; the
/// timeout verdict is kept distinct from other network failures so the
/// caller can tell "slow or dead endpoint" from "wrong endpoint".
pub struct EndpointProbe {
    client: reqwest::Client,
    quick_timeout: Duration,
    full_timeout: Duration,
}

impl EndpointProbe {
    pub fn new() -> Self {
        Self::with_timeouts(QUICK_PROBE_TIMEOUT, FULL_PROBE_TIMEOUT)
    }

    /// Deadline override used by tests; production code sticks to the
    /// 3 s / 5 s defaults.
    pub fn with_timeouts(quick_timeout: Duration, full_timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            quick_timeout,
            full_timeout,
        }
    }
}

impl Default for EndpointProbe {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConnectivityProbe for EndpointProbe {
    async fn quick_check(&self, config: &ProviderConfig) -> ConnectivityVerdict {
        tracing::debug!(endpoint = %config.endpoint, "Quick connectivity probe");

        let started = Instant::now();
        let result = self
            .client
            .head(&config.endpoint)
            .bearer_auth(&config.api_key)
            .timeout(self.quick_timeout)
            .send()
            .await;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        match result {
            Ok(response) => quick_verdict(response.status().as_u16(), elapsed_ms),
            Err(e) if e.is_timeout() => ConnectivityVerdict::unreachable(
                format!("connection timed out after {:?}", self.quick_timeout),
                elapsed_ms,
            ),
            Err(_) => ConnectivityVerdict::unreachable("connection failed", elapsed_ms),
        }
    }

    async fn full_check(&self, config: &ProviderConfig) -> ConnectivityVerdict {
        tracing::debug!(endpoint = %config.endpoint, "Full connectivity probe");

        let started = Instant::now();
        let result = match config.kind() {
            // SiliconFlow rejects OPTIONS outright, so exercise the real
            // upload path with a silent clip instead.
            ProviderKind::SiliconFlow => match probe_upload_form(&config.model) {
                Ok(form) => {
                    self.client
                        .post(&config.endpoint)
                        .bearer_auth(&config.api_key)
                        .multipart(form)
                        .timeout(self.full_timeout)
                        .send()
                        .await
                }
                Err(verdict) => return verdict,
            },
            _ => {
                self.client
                    .request(Method::OPTIONS, &config.endpoint)
                    .bearer_auth(&config.api_key)
                    .header(CONTENT_TYPE, "application/json")
                    .timeout(self.full_timeout)
                    .send()
                    .await
            }
        };
        let elapsed_ms = started.elapsed().as_millis() as u64;

        match result {
            Ok(response) => full_verdict(response.status().as_u16(), elapsed_ms),
            Err(e) if e.is_timeout() => ConnectivityVerdict::unreachable(
                format!(
                    "connection timed out after {:?}, check the network or endpoint",
                    self.full_timeout
                ),
                elapsed_ms,
            ),
            Err(e) if e.is_connect() => ConnectivityVerdict::unreachable(
                "cannot reach the API server, check the endpoint URL",
                elapsed_ms,
            ),
            Err(e) => {
                ConnectivityVerdict::unreachable(format!("network error: {}", e), elapsed_ms)
            }
        }
    }
}

fn quick_verdict(status: u16, elapsed_ms: u64) -> ConnectivityVerdict {
    match status {
        401 => ConnectivityVerdict::rejected(status, "API key is invalid", elapsed_ms),
        403 => ConnectivityVerdict::rejected(status, "API key lacks permission", elapsed_ms),
        404 => ConnectivityVerdict::rejected(status, "API endpoint does not exist", elapsed_ms),
        // Method Not Allowed still proves the endpoint is there.
        405 => ConnectivityVerdict::reachable(
            status,
            format!("endpoint reachable ({}ms)", elapsed_ms),
            elapsed_ms,
        ),
        s if (200..300).contains(&s) || s == 400 => ConnectivityVerdict::reachable(
            status,
            format!("connection ok ({}ms)", elapsed_ms),
            elapsed_ms,
        ),
        s => ConnectivityVerdict::rejected(status, format!("status code: {}", s), elapsed_ms),
    }
}

fn full_verdict(status: u16, elapsed_ms: u64) -> ConnectivityVerdict {
    match status {
        200 | 201 => {
            ConnectivityVerdict::reachable(status, "connection test succeeded", elapsed_ms)
        }
        // A 400 to a deliberately bogus clip means auth and routing both
        // worked; the provider got far enough to dislike the audio.
        400 => ConnectivityVerdict::reachable(status, "endpoint and API key verified", elapsed_ms),
        401 => ConnectivityVerdict::rejected(status, "API key is invalid or expired", elapsed_ms),
        403 => ConnectivityVerdict::rejected(status, "API key lacks permission", elapsed_ms),
        404 => ConnectivityVerdict::rejected(
            status,
            "API endpoint does not exist, check the URL",
            elapsed_ms,
        ),
        405 => ConnectivityVerdict::reachable(
            status,
            "endpoint reachable, API key accepted",
            elapsed_ms,
        ),
        429 => ConnectivityVerdict::rejected(status, "rate limited, try again later", elapsed_ms),
        500 | 502 | 503 => ConnectivityVerdict::rejected(
            status,
            "provider server temporarily unavailable",
            elapsed_ms,
        ),
        s if (200..300).contains(&s) => {
            ConnectivityVerdict::reachable(status, "connection test succeeded", elapsed_ms)
        }
        s => ConnectivityVerdict::rejected(status, format!("connection failed: {}", s), elapsed_ms),
    }
}

fn probe_upload_form(model: &str) -> Result<multipart::Form, ConnectivityVerdict> {
    let part = multipart::Part::bytes(minimal_wav_clip())
        .file_name("test.wav")
        .mime_str("audio/wav")
        .map_err(|e| {
            ConnectivityVerdict::unreachable(format!("failed to build probe request: {}", e), 0)
        })?;

    Ok(multipart::Form::new()
        .part("file", part)
        .text("model", model.to_string()))
}
