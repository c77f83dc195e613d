//! Question-answering requests.

use crate::transport::Method;
use crate::types::{Answers, EngineId};
use serde::Serialize;

use super::core::Client;

/// Parameters for an answers request. `examples` are `[question, answer]`
/// pairs grounded in `examples_context`; documents to draw the real
/// answer from come inline or from an uploaded `file`.
#[derive(Debug, Clone, Serialize)]
pub struct AnswersParams {
    pub model: EngineId,
    pub question: String,
    pub examples: Vec<[String; 2]>,
    pub examples_context: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documents: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_model: Option<EngineId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_rerank: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n: Option<u32>,
}

impl Client {
    /// Answer a question grounded in the supplied documents.
    pub async fn answers(&self, params: &AnswersParams) -> crate::Result<Answers> {
        let body = serde_json::to_value(params)?;
        self.fetch(Method::Post, "/answers", Some(body)).await
    }
}
