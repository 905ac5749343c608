//! Serverless function invocation

use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;
use talentbook_core::FunctionInvoker;
use tracing::{debug, instrument, warn};

use super::client::BackendClient;

/// Invokes functions at `{base}/functions/v1/{name}`
#[derive(Clone)]
pub struct FunctionsClient {
    client: BackendClient,
}

impl FunctionsClient {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl FunctionInvoker for FunctionsClient {
    #[instrument(skip(self, access_token, body), fields(function = %function))]
    async fn invoke(
        &self,
        function: &str,
        access_token: &str,
        body: Value,
    ) -> talentbook_domain::Result<Value> {
        let path = format!("/functions/v1/{function}");
        let request = self.client.request(Method::POST, &path, Some(access_token)).json(&body);

        match self.client.send::<Value>(request).await {
            Ok(response) => {
                debug!("function returned");
                Ok(response)
            }
            Err(err) => {
                warn!(category = ?err.category(), error = %err, "function call failed");
                Err(err.into())
            }
        }
    }
}
