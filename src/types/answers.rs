//! Question-answering records.

use super::engine::EngineId;
use serde::{Deserialize, Serialize};

/// One question-answering response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answers {
    pub answers: Vec<String>,
    /// Identifier of the completion that produced the answers.
    pub completion: String,
    /// Engine used for the final answering step. Wire name: `model`.
    #[serde(rename = "model")]
    pub engine: EngineId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,
    pub search_model: EngineId,
    #[serde(default)]
    pub selected_documents: Vec<SelectedDocument>,
}

/// A document the backend selected to ground the answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedDocument {
    pub document: usize,
    pub text: String,
}
