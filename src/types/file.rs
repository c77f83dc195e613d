//! Uploaded file metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata for one uploaded file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct File {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,
    /// File size in bytes. Wire name: `bytes`.
    #[serde(rename = "bytes")]
    pub size: u64,
    /// Unix epoch seconds; see [`File::created`].
    pub created_at: i64,
    pub filename: String,
    pub purpose: String,
}

impl File {
    /// Creation time derived from the stored epoch field.
    ///
    /// Recomputed on every call; never stored separately.
    pub fn created(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.created_at, 0)
    }
}

/// Acknowledgement returned by the file deletion endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileDeletion {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,
    pub deleted: bool,
}
