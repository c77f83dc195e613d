//! Response envelope decoding.
//!
//! The backend frames logically identical replies differently across
//! endpoints: a completion arrives as a bare object, a search reply as a
//! bare array, listings as `{"object": "list", "data": [...]}`, and errors
//! either at the top level or wrapped under an `error` key. This module
//! normalizes all of them into a single success-or-failure envelope.
//!
//! Decoding is a pure function of the response bytes. It performs no I/O,
//! no logging and no retries, and is safe to invoke concurrently from any
//! number of in-flight calls.

use crate::error::{ApiError, Error};
use serde::de::DeserializeOwned;

/// Outcome of decoding one raw response: exactly one interpretation wins.
///
/// Ephemeral by design. An envelope is constructed once per response and
/// immediately unwrapped into the caller-facing `Result` by the client; it
/// never persists past the decode step.
#[derive(Debug)]
pub(crate) enum Envelope<V> {
    Success(V),
    Failure(ApiError),
}

/// Decode raw response bytes into an [`Envelope`].
///
/// Wire conventions are attempted in a fixed order, first match wins:
///
/// 1. bare value: the whole payload is a `V`;
/// 2. bare error: the whole payload is an [`ApiError`];
/// 3. wrapped value: an object whose `data` field is a `V`;
/// 4. wrapped error: an object whose `error` field is an [`ApiError`].
///
/// The ordering is load-bearing for wire compatibility: value shapes are
/// tried before error shapes so a value schema that coincidentally
/// satisfies the loosely-typed error schema still decodes as a value. Ties
/// are broken by this precedence, never by scoring.
///
/// A payload that is not JSON, or that matches none of the four shapes,
/// yields [`Error::Decode`], a local structural failure, distinct from a
/// backend-reported [`ApiError`].
pub(crate) fn decode_envelope<V>(bytes: &[u8]) -> crate::Result<Envelope<V>>
where
    V: DeserializeOwned,
{
    let payload: serde_json::Value = serde_json::from_slice(bytes)
        .map_err(|e| Error::decode(format!("response is not valid JSON: {e}")))?;

    if let Ok(value) = serde_json::from_value::<V>(payload.clone()) {
        return Ok(Envelope::Success(value));
    }

    if let Ok(error) = serde_json::from_value::<ApiError>(payload.clone()) {
        return Ok(Envelope::Failure(error));
    }

    if let Some(data) = payload.get("data") {
        if let Ok(value) = serde_json::from_value::<V>(data.clone()) {
            return Ok(Envelope::Success(value));
        }
    }

    if let Some(error) = payload.get("error") {
        if let Ok(error) = serde_json::from_value::<ApiError>(error.clone()) {
            return Ok(Envelope::Failure(error));
        }
    }

    Err(Error::decode(
        "response matched no recognized payload shape",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Engine, EngineId, SearchResult};
    use serde::Deserialize;
    use serde_json::json;

    fn bytes(value: serde_json::Value) -> Vec<u8> {
        serde_json::to_vec(&value).unwrap()
    }

    #[test]
    fn test_bare_array_decodes_as_value() {
        let payload = bytes(json!([
            {"document": 0, "object": "search_result", "score": 487.666},
            {"document": 1, "object": "search_result", "score": 240.295}
        ]));
        let envelope = decode_envelope::<Vec<SearchResult>>(&payload).unwrap();
        match envelope {
            Envelope::Success(results) => {
                assert_eq!(results.len(), 2);
                assert_eq!(results[0].document, 0);
            }
            Envelope::Failure(err) => panic!("expected success, got {err:?}"),
        }
    }

    #[test]
    fn test_wrapped_array_falls_through_to_data_field() {
        let payload = bytes(json!({
            "object": "list",
            "data": [
                {"document": 0, "score": 1.25},
                {"document": 1, "score": 0.5}
            ]
        }));
        let envelope = decode_envelope::<Vec<SearchResult>>(&payload).unwrap();
        match envelope {
            Envelope::Success(results) => assert_eq!(results.len(), 2),
            Envelope::Failure(err) => panic!("expected success, got {err:?}"),
        }
    }

    #[test]
    fn test_bare_form_wins_over_wrapped_when_both_parse() {
        // A target type that happens to have its own `data` field: the
        // whole object parses directly, so strategy 1 must win and the
        // decoder must not unwrap `data` a second time.
        #[derive(Debug, Deserialize)]
        struct Probe {
            data: Vec<u32>,
        }

        let payload = bytes(json!({"data": [1, 2, 3]}));
        let envelope = decode_envelope::<Probe>(&payload).unwrap();
        match envelope {
            Envelope::Success(probe) => assert_eq!(probe.data, vec![1, 2, 3]),
            Envelope::Failure(err) => panic!("expected success, got {err:?}"),
        }

        // Same payload, but the target is the inner list: the bare form no
        // longer parses and the decoder falls to the wrapped-value shape.
        let envelope = decode_envelope::<Vec<u32>>(&payload).unwrap();
        match envelope {
            Envelope::Success(items) => assert_eq!(items, vec![1, 2, 3]),
            Envelope::Failure(err) => panic!("expected success, got {err:?}"),
        }
    }

    #[test]
    fn test_bare_error_decodes_as_failure() {
        let payload = bytes(json!({
            "type": "invalid_request_error",
            "code": "model_not_found",
            "param": "model",
            "message": "That model does not exist"
        }));
        let envelope = decode_envelope::<Vec<SearchResult>>(&payload).unwrap();
        match envelope {
            Envelope::Failure(err) => {
                assert_eq!(err.kind, "invalid_request_error");
                assert_eq!(err.code.as_deref(), Some("model_not_found"));
                assert_eq!(err.param.as_deref(), Some("model"));
                assert_eq!(err.message, "That model does not exist");
            }
            Envelope::Success(v) => panic!("expected failure, got {v:?}"),
        }
    }

    #[test]
    fn test_wrapped_error_decodes_as_failure() {
        let payload = bytes(json!({
            "error": {
                "type": "insufficient_quota",
                "message": "You exceeded your current quota"
            }
        }));
        let envelope = decode_envelope::<Vec<Engine>>(&payload).unwrap();
        match envelope {
            Envelope::Failure(err) => {
                assert_eq!(err.kind, "insufficient_quota");
                assert_eq!(err.code, None);
                assert_eq!(err.message, "You exceeded your current quota");
            }
            Envelope::Success(v) => panic!("expected failure, got {v:?}"),
        }
    }

    #[test]
    fn test_engine_listing_shape_uses_wrapped_value() {
        let payload = bytes(json!({
            "object": "list",
            "data": [
                {"id": "ada", "object": "engine", "owner": "openai", "ready": true},
                {"id": "code-cushman-001", "object": "engine", "owner": "openai", "ready": true}
            ]
        }));
        let envelope = decode_envelope::<Vec<Engine>>(&payload).unwrap();
        match envelope {
            Envelope::Success(engines) => {
                assert_eq!(engines.len(), 2);
                assert_eq!(engines[0].id, EngineId::Ada);
                assert_eq!(engines[1].id.as_str(), "code-cushman-001");
            }
            Envelope::Failure(err) => panic!("expected success, got {err:?}"),
        }
    }

    #[test]
    fn test_unrecognized_shape_is_a_structural_failure() {
        let payload = bytes(json!(42));
        let result = decode_envelope::<Vec<SearchResult>>(&payload);
        assert!(matches!(result, Err(Error::Decode { .. })));
    }

    #[test]
    fn test_invalid_json_is_a_structural_failure() {
        let result = decode_envelope::<Vec<SearchResult>>(b"not json at all");
        assert!(matches!(result, Err(Error::Decode { .. })));
    }

    #[test]
    fn test_object_with_unparseable_data_field_is_structural() {
        let payload = bytes(json!({"data": "not-an-array"}));
        let result = decode_envelope::<Vec<SearchResult>>(&payload);
        assert!(matches!(result, Err(Error::Decode { .. })));
    }
}
