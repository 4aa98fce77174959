//! Backend REST API: wire types and the HTTP client.

pub mod http;
pub mod types;

pub use http::{ApiClient, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};
