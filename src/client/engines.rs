//! Engine listing and retrieval.

use crate::transport::Method;
use crate::types::{Engine, EngineId};

use super::core::Client;

impl Client {
    /// List the engines the backend currently offers.
    pub async fn engines(&self) -> crate::Result<Vec<Engine>> {
        self.fetch_list(Method::Get, "/engines", None).await
    }

    /// Retrieve one engine by identifier.
    pub async fn engine(&self, id: &EngineId) -> crate::Result<Engine> {
        self.fetch(Method::Get, &format!("/engines/{id}"), None).await
    }
}
