//! Classification requests.

use crate::transport::Method;
use crate::types::{Classification, EngineId};
use serde::Serialize;

use super::core::Client;

/// Parameters for a classification request. Examples are `[text, label]`
/// pairs; alternatively `file` points at uploaded labeled examples.
#[derive(Debug, Clone, Serialize)]
pub struct ClassificationParams {
    pub model: EngineId,
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<[String; 2]>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_model: Option<EngineId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logprobs: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_examples: Option<u32>,
}

impl ClassificationParams {
    pub fn new(model: EngineId, query: impl Into<String>) -> Self {
        Self {
            model,
            query: query.into(),
            examples: None,
            file: None,
            labels: None,
            search_model: None,
            temperature: None,
            logprobs: None,
            max_examples: None,
        }
    }
}

impl Client {
    /// Classify a query against labeled examples.
    pub async fn classifications(
        &self,
        params: &ClassificationParams,
    ) -> crate::Result<Classification> {
        let body = serde_json::to_value(params)?;
        self.fetch(Method::Post, "/classifications", Some(body)).await
    }
}
