use async_trait::async_trait;

use crate::domain::{ConnectivityVerdict, ProviderConfig};

/// Diagnostic seam: lightweight requests that validate an endpoint and
/// credential pair without running a full transcription.
///
/// Probes never fail as such; every outcome, including timeouts and
/// refused connections, is folded into the returned verdict.
#[async_trait]
pub trait ConnectivityProbe: Send + Sync {
    /// HEAD request with a short deadline; answers "is something
    /// listening there that understands bearer auth".
    async fn quick_check(&self, config: &ProviderConfig) -> ConnectivityVerdict;

    /// Heavier check with a longer deadline: a minimal audio POST for
    /// providers known to accept one, an OPTIONS request otherwise.
    async fn full_check(&self, config: &ProviderConfig) -> ConnectivityVerdict;
}
