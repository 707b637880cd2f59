pub mod config;
pub mod dto;
pub mod http_backend_client;

pub use crate::config::{ApiRevision, BackendConfig};
pub use crate::http_backend_client::HttpBackendClient;
