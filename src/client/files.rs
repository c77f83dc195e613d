//! File listing, upload and deletion.

use crate::transport::{Method, UploadPart};
use crate::types::{File, FileDeletion};
use std::fmt;

use super::core::Client;

/// What an uploaded file will be used for; the backend validates the file
/// format against this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadPurpose {
    Search,
    Answers,
    Classifications,
    FineTune,
}

impl UploadPurpose {
    pub fn as_str(self) -> &'static str {
        match self {
            UploadPurpose::Search => "search",
            UploadPurpose::Answers => "answers",
            UploadPurpose::Classifications => "classifications",
            UploadPurpose::FineTune => "fine-tune",
        }
    }
}

impl fmt::Display for UploadPurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Client {
    /// List files uploaded to this account.
    pub async fn files(&self) -> crate::Result<Vec<File>> {
        self.fetch_list(Method::Get, "/files", None).await
    }

    /// Upload a file (JSONL of documents or labeled examples).
    pub async fn upload_file(
        &self,
        purpose: UploadPurpose,
        filename: impl Into<String>,
        bytes: Vec<u8>,
    ) -> crate::Result<File> {
        let part = UploadPart {
            field: "file".to_string(),
            filename: filename.into(),
            bytes,
        };
        let fields = vec![("purpose".to_string(), purpose.to_string())];
        self.fetch_upload("/files", fields, part).await
    }

    /// Delete an uploaded file by identifier.
    pub async fn delete_file(&self, id: &str) -> crate::Result<FileDeletion> {
        self.fetch(Method::Delete, &format!("/files/{id}"), None).await
    }
}
