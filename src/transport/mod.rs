//! Request dispatch collaborator.
//!
//! The core decode path never touches the network; everything HTTP lives
//! behind the [`Transport`] trait so tests can substitute a fake and the
//! decoder stays pure. Retry, timeout and connection pooling policy all
//! belong here (or to reqwest underneath), never to the decode layer.

mod http;

pub use http::HttpTransport;

use async_trait::async_trait;
use bytes::Bytes;

/// HTTP method subset used by the API surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

/// One file part of a multipart upload.
#[derive(Debug, Clone)]
pub struct UploadPart {
    /// Multipart field name the backend expects, e.g. "file".
    pub field: String,
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Dispatches one wire request and hands back the raw response bytes.
///
/// Invoked once per logical API call; no queuing or coalescing of
/// identical requests, no retries. Status-code interpretation is not done
/// here; error payloads are decoded from the body by the envelope layer
/// regardless of HTTP status.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send a JSON request. `parameters`, when present, becomes the JSON
    /// request body.
    async fn send(
        &self,
        method: Method,
        url: &str,
        parameters: Option<&serde_json::Value>,
    ) -> Result<Bytes, TransportError>;

    /// Send a multipart upload with plain-text `fields` and one file part.
    async fn upload(
        &self,
        url: &str,
        fields: Vec<(String, String)>,
        part: UploadPart,
    ) -> Result<Bytes, TransportError>;
}

/// Network or connection-level failure, opaque to the decode layer.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("transport error: {0}")]
    Other(String),
}
