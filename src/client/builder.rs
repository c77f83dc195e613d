//! Client construction.

use crate::error::Error;
use crate::transport::{HttpTransport, Transport};
use std::sync::Arc;
use std::time::Duration;

use super::core::Client;

/// Base URL requests are issued against unless overridden.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Builder for [`Client`].
///
/// ```rust,no_run
/// use textgen_client::Client;
///
/// # fn main() -> textgen_client::Result<()> {
/// let client = Client::builder()
///     .with_api_key("your-api-key")
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct ClientBuilder {
    api_key: Option<String>,
    base_url: String,
    timeout: Duration,
    transport: Option<Arc<dyn Transport>>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            transport: None,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Point the client at a different host, e.g. a proxy or a test
    /// server. A trailing slash is trimmed so path joining stays uniform.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Per-request timeout enforced by the transport. The decode layer
    /// never imposes its own.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Substitute the transport collaborator entirely. The api key and
    /// timeout settings do not apply to an injected transport.
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn build(self) -> crate::Result<Client> {
        let transport: Arc<dyn Transport> = match self.transport {
            Some(transport) => transport,
            None => {
                let api_key = self
                    .api_key
                    .ok_or_else(|| Error::configuration("an api key is required"))?;
                Arc::new(HttpTransport::new(api_key, self.timeout)?)
            }
        };
        Ok(Client {
            transport,
            base_url: self.base_url,
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
