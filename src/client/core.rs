//! Client handle and the dispatch-decode-project pipeline.

use crate::envelope::{decode_envelope, Envelope};
use crate::error::Error;
use crate::transport::{Method, Transport, UploadPart};
use serde::de::DeserializeOwned;
use std::sync::Arc;

use super::builder::ClientBuilder;

/// Handle to the remote text-generation API.
///
/// Cheap to clone; concurrent calls share only the transport's connection
/// pool. Each call delivers exactly one result, once; there is no
/// implicit retry, queuing or coalescing anywhere in this layer.
#[derive(Clone)]
pub struct Client {
    pub(super) transport: Arc<dyn Transport>,
    pub(super) base_url: String,
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub(super) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Dispatch a request whose public contract is a single value.
    ///
    /// The `fetch` family doubles as the generic call surface for
    /// endpoints this crate has no typed operation for yet: pick the
    /// helper matching the endpoint's contract and pass the wire path
    /// and parameter dictionary directly.
    pub async fn fetch<V>(
        &self,
        method: Method,
        path: &str,
        parameters: Option<serde_json::Value>,
    ) -> crate::Result<V>
    where
        V: DeserializeOwned,
    {
        let bytes = self
            .transport
            .send(method, &self.url(path), parameters.as_ref())
            .await?;
        match decode_envelope::<V>(&bytes)? {
            Envelope::Success(value) => Ok(value),
            Envelope::Failure(error) => Err(Error::Api(error)),
        }
    }

    /// Dispatch a request whose public contract is a list; the decoded
    /// list passes through unchanged.
    pub async fn fetch_list<V>(
        &self,
        method: Method,
        path: &str,
        parameters: Option<serde_json::Value>,
    ) -> crate::Result<Vec<V>>
    where
        V: DeserializeOwned,
    {
        self.fetch(method, path, parameters).await
    }

    /// Dispatch a request whose public contract is a single value but
    /// whose wire shape is a list: exactly the first element is taken, and
    /// an empty list is an explicit failure.
    pub async fn fetch_first<V>(
        &self,
        method: Method,
        path: &str,
        parameters: Option<serde_json::Value>,
    ) -> crate::Result<V>
    where
        V: DeserializeOwned,
    {
        let mut items: Vec<V> = self.fetch(method, path, parameters).await?;
        if items.is_empty() {
            return Err(Error::EmptyResponse);
        }
        Ok(items.remove(0))
    }

    /// Dispatch a multipart upload and decode the response like any other.
    pub async fn fetch_upload<V>(
        &self,
        path: &str,
        fields: Vec<(String, String)>,
        part: UploadPart,
    ) -> crate::Result<V>
    where
        V: DeserializeOwned,
    {
        let bytes = self
            .transport
            .upload(&self.url(path), fields, part)
            .await?;
        match decode_envelope::<V>(&bytes)? {
            Envelope::Success(value) => Ok(value),
            Envelope::Failure(error) => Err(Error::Api(error)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::TransportError;
    use async_trait::async_trait;
    use bytes::Bytes;
    use serde_json::json;

    struct StaticTransport {
        body: Vec<u8>,
    }

    #[async_trait]
    impl Transport for StaticTransport {
        async fn send(
            &self,
            _method: Method,
            _url: &str,
            _parameters: Option<&serde_json::Value>,
        ) -> Result<Bytes, TransportError> {
            Ok(Bytes::from(self.body.clone()))
        }

        async fn upload(
            &self,
            _url: &str,
            _fields: Vec<(String, String)>,
            _part: UploadPart,
        ) -> Result<Bytes, TransportError> {
            Ok(Bytes::from(self.body.clone()))
        }
    }

    fn client_with_body(value: serde_json::Value) -> Client {
        Client {
            transport: Arc::new(StaticTransport {
                body: serde_json::to_vec(&value).unwrap(),
            }),
            base_url: "http://localhost".to_string(),
        }
    }

    #[tokio::test]
    async fn test_fetch_first_takes_exactly_the_first_element() {
        let client = client_with_body(json!([10, 20, 30]));
        let first: u32 = client
            .fetch_first(Method::Get, "/numbers", None)
            .await
            .unwrap();
        assert_eq!(first, 10);
    }

    #[tokio::test]
    async fn test_fetch_first_of_empty_list_is_an_explicit_failure() {
        let client = client_with_body(json!([]));
        let result: crate::Result<u32> = client.fetch_first(Method::Get, "/numbers", None).await;
        assert!(matches!(result, Err(Error::EmptyResponse)));
    }

    #[tokio::test]
    async fn test_api_failure_envelope_surfaces_as_api_error() {
        let client = client_with_body(json!({
            "error": {"type": "server_error", "message": "boom"}
        }));
        let result: crate::Result<Vec<u32>> = client.fetch_list(Method::Get, "/numbers", None).await;
        match result {
            Err(Error::Api(err)) => assert_eq!(err.message, "boom"),
            other => panic!("expected API error, got {other:?}"),
        }
    }
}
