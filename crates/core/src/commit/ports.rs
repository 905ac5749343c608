//! Port interfaces for serverless function calls

use async_trait::async_trait;
use serde_json::Value;
use talentbook_domain::Result;

/// Trait for invoking a named serverless function with a JSON body
///
/// Implementations make exactly one request per call and do not retry.
/// Remote errors map to `TalentBookError::RemoteRejected` carrying the
/// remote message (possibly empty); transport failures map to
/// `TalentBookError::Network`.
#[async_trait]
pub trait FunctionInvoker: Send + Sync {
    async fn invoke(&self, function: &str, access_token: &str, body: Value) -> Result<Value>;
}
