//! Semantic search requests.

use crate::transport::Method;
use crate::types::{EngineId, SearchResult};
use serde::Serialize;

use super::core::Client;

/// Parameters for a search request. Exactly one of `documents` or `file`
/// should be set; the backend rejects requests carrying both.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documents: Option<Vec<String>>,
    /// Identifier of an uploaded file to search instead of inline documents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_rerank: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_metadata: Option<bool>,
}

impl Client {
    /// Rank documents by relevance against a query.
    pub async fn search(
        &self,
        engine: &EngineId,
        params: &SearchParams,
    ) -> crate::Result<Vec<SearchResult>> {
        let body = serde_json::to_value(params)?;
        self.fetch_list(
            Method::Post,
            &format!("/engines/{engine}/search"),
            Some(body),
        )
        .await
    }
}
