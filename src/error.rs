use crate::transport::TransportError;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Structured error reported by the backend itself.
///
/// Distinct from [`Error::Decode`]: an `ApiError` is a well-formed failure
/// payload the service chose to send, not a payload we failed to understand.
/// `Display` renders the backend message verbatim; the derived `Debug`
/// rendering lists kind, code, param and message in that order.
#[derive(Debug, Clone, PartialEq, Eq, Error, Deserialize, Serialize)]
#[error("{message}")]
pub struct ApiError {
    /// Free-form error kind, e.g. "invalid_request_error".
    #[serde(rename = "type")]
    pub kind: String,
    /// Optional machine code. Arrives as a string, an integer or null
    /// depending on the endpoint; normalized to a string here.
    #[serde(default, deserialize_with = "code_from_wire")]
    pub code: Option<String>,
    /// Name of the offending request parameter, when the backend knows it.
    #[serde(default)]
    pub param: Option<String>,
    /// Human-readable description, rendered verbatim to users.
    pub message: String,
}

fn code_from_wire<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(s)) => Ok(Some(s)),
        Some(serde_json::Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "unsupported error code representation: {other}"
        ))),
    }
}

/// Unified error type for the library.
///
/// All three failure kinds of a call (transport failures, structural decode
/// failures and backend [`ApiError`]s) surface through this one channel,
/// unchanged. Nothing is retried, logged or swallowed on the way up.
#[derive(Debug, Error)]
pub enum Error {
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// The payload matched none of the recognized wire shapes, or a nested
    /// field matched none of its declared alternatives.
    #[error("undecodable payload: {message}")]
    Decode { message: String },

    /// The wire returned an empty list for a single-item contract.
    #[error("empty result for a single-item response")]
    EmptyResponse,

    #[error("request serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    pub(crate) fn decode(message: impl Into<String>) -> Self {
        Error::Decode {
            message: message.into(),
        }
    }

    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    /// The structured backend error, if that is what this failure carries.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Error::Api(err) => Some(err),
            _ => None,
        }
    }
}
