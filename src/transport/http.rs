use super::{Method, Transport, TransportError, UploadPart};
use async_trait::async_trait;
use bytes::Bytes;
use std::time::Duration;
use tracing::trace;

/// Production [`Transport`] over a pooled reqwest client.
///
/// Injects the bearer-auth header on every request. Timeout policy lives
/// here and nowhere else in the crate.
pub struct HttpTransport {
    client: reqwest::Client,
    api_key: String,
}

impl HttpTransport {
    pub fn new(api_key: impl Into<String>, timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(TransportError::Http)?;
        Ok(Self {
            client,
            api_key: api_key.into(),
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(
        &self,
        method: Method,
        url: &str,
        parameters: Option<&serde_json::Value>,
    ) -> Result<Bytes, TransportError> {
        trace!(?method, url, "dispatching request");

        let mut request = match method {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
            Method::Delete => self.client.delete(url),
        };
        request = request.bearer_auth(&self.api_key);
        if let Some(parameters) = parameters {
            request = request.json(parameters);
        }

        let response = request.send().await?;
        let bytes = response.bytes().await?;
        Ok(bytes)
    }

    async fn upload(
        &self,
        url: &str,
        fields: Vec<(String, String)>,
        part: UploadPart,
    ) -> Result<Bytes, TransportError> {
        trace!(url, filename = %part.filename, "dispatching upload");

        let mut form = reqwest::multipart::Form::new();
        for (name, value) in fields {
            form = form.text(name, value);
        }
        form = form.part(
            part.field,
            reqwest::multipart::Part::bytes(part.bytes).file_name(part.filename),
        );

        let response = self
            .client
            .post(url)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await?;
        let bytes = response.bytes().await?;
        Ok(bytes)
    }
}
