mod provider;
mod upload;
mod verdict;

pub use provider::{ProviderConfig, ProviderKind};
pub use upload::{AudioUpload, MAX_UPLOAD_BYTES};
pub use verdict::ConnectivityVerdict;
