//! Semantic search results.

use serde::{Deserialize, Serialize};

/// Relevance of one document against a search query.
///
/// `document` indexes into the document list (or file) the caller supplied
/// with the request; higher `score` means more relevant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub document: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,
    pub score: f64,
}
