mod init_tracing;
mod request_id;
mod secret_masker;
mod tracing_config;

pub use init_tracing::init_tracing;
pub use request_id::{REQUEST_ID_HEADER, RequestId, request_id_middleware};
pub use secret_masker::{mask_api_key, redact_endpoint};
pub use tracing_config::TracingConfig;
