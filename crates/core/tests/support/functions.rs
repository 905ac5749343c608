use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;
use talentbook_core::FunctionInvoker;
use talentbook_domain::Result as DomainResult;

/// A single recorded function invocation.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub function: String,
    pub access_token: String,
    pub body: Value,
}

/// Function invoker that records calls and replays a canned reply.
#[derive(Clone)]
pub struct ScriptedFunctions {
    reply: DomainResult<Value>,
    calls: Arc<Mutex<Vec<Invocation>>>,
}

impl ScriptedFunctions {
    pub fn replying(reply: DomainResult<Value>) -> Self {
        Self { reply, calls: Arc::default() }
    }

    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl FunctionInvoker for ScriptedFunctions {
    async fn invoke(&self, function: &str, access_token: &str, body: Value) -> DomainResult<Value> {
        self.calls.lock().unwrap().push(Invocation {
            function: function.to_string(),
            access_token: access_token.to_string(),
            body,
        });
        self.reply.clone()
    }
}
