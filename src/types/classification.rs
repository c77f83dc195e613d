//! Classification records.

use super::engine::EngineId;
use serde::{Deserialize, Serialize};

/// One classification response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// Identifier of the completion that produced the label.
    pub completion: String,
    pub label: String,
    /// Engine used for the final labeling step. Wire name: `model`.
    #[serde(rename = "model")]
    pub engine: EngineId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,
    pub search_model: EngineId,
    #[serde(default)]
    pub selected_examples: Vec<SelectedExample>,
}

/// An example the backend selected to ground the classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedExample {
    #[serde(flatten)]
    pub source: ExampleSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub text: String,
}

/// Where a selected example came from.
///
/// The wire carries no discriminant; the alternatives are tried in the
/// declared order and the first that decodes wins. An example matching
/// neither fails the whole record with a structural error naming this
/// untagged enum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExampleSource {
    /// Position in the inline example list sent with the request.
    Document { document: usize },
    /// Reference into a previously uploaded file.
    File { file: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decodes_wire_fields() {
        let classification: Classification = serde_json::from_value(json!({
            "completion": "cmpl-2euN7lUVZ0d4RKbQqRV79IiiE6M1f",
            "label": "Negative",
            "model": "curie:2020-05-03",
            "object": "classification",
            "search_model": "ada",
            "selected_examples": [
                {"document": 0, "label": "Negative", "text": "I hated the new movie"},
                {"file": "file-ccmFkB8K4DLDCSCE5HVHnKQD", "label": "Positive", "text": "A great day"}
            ]
        }))
        .unwrap();

        assert_eq!(classification.label, "Negative");
        assert_eq!(classification.engine.as_str(), "curie:2020-05-03");
        assert_eq!(classification.search_model, EngineId::Ada);
        assert_eq!(classification.selected_examples.len(), 2);
        assert_eq!(
            classification.selected_examples[0].source,
            ExampleSource::Document { document: 0 }
        );
        assert_eq!(
            classification.selected_examples[1].source,
            ExampleSource::File {
                file: "file-ccmFkB8K4DLDCSCE5HVHnKQD".to_string()
            }
        );
    }

    #[test]
    fn test_document_position_is_tried_before_file_reference() {
        // Both keys present: the declared order commits to the document arm.
        let example: SelectedExample = serde_json::from_value(json!({
            "document": 3,
            "file": "file-abc123",
            "text": "ambiguous"
        }))
        .unwrap();
        assert_eq!(example.source, ExampleSource::Document { document: 3 });
    }

    #[test]
    fn test_example_with_no_known_source_fails_structurally() {
        let result: Result<SelectedExample, _> = serde_json::from_value(json!({
            "label": "Positive",
            "text": "no source at all"
        }));
        assert!(result.is_err());
    }
}
