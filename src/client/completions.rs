//! Text completion requests.

use crate::transport::Method;
use crate::types::{Completion, EngineId};
use serde::Serialize;

use super::core::Client;

/// Parameters for a completion request. Unset options are omitted from
/// the wire dictionary, leaving the backend's defaults in force.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CompletionParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    /// Number of alternatives to generate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logprobs: Option<u32>,
    /// Echo the prompt back in front of the completion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub echo: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presence_penalty: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_penalty: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_of: Option<u32>,
    /// End-user identifier forwarded for abuse monitoring.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

impl Client {
    /// Generate completions for a prompt on the given engine.
    pub async fn completions(
        &self,
        engine: &EngineId,
        params: &CompletionParams,
    ) -> crate::Result<Completion> {
        let body = serde_json::to_value(params)?;
        self.fetch(
            Method::Post,
            &format!("/engines/{engine}/completions"),
            Some(body),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unset_options_are_omitted_from_the_wire() {
        let params = CompletionParams {
            prompt: Some("Once upon a time".to_string()),
            max_tokens: Some(32),
            ..Default::default()
        };
        let wire = serde_json::to_value(&params).unwrap();
        assert_eq!(
            wire,
            json!({"prompt": "Once upon a time", "max_tokens": 32})
        );
    }
}
