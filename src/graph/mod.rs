use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::customer::RunnableConfig;
use crate::error::Result;
use crate::message::{ChatMessage, Reply};

pub mod factory;
pub mod local;
pub mod remote;

pub use factory::{DefaultGraphFactory, GraphFactory};
pub use local::GroceryAssistantGraph;
pub use remote::RemoteGraph;

/// Graph state passed on invocation.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GraphInput {
    pub messages: Vec<ChatMessage>,
}

impl GraphInput {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            messages: vec![ChatMessage::user(content)],
        }
    }
}

/// Final graph state. Messages are kept as raw JSON because hosted graphs
/// are free to put anything in them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphOutput {
    pub messages: Vec<Value>,
}

impl GraphOutput {
    /// Reads the `messages` array of a state object; anything else yields no messages.
    pub fn from_state(state: &Value) -> Self {
        let messages = state
            .get("messages")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();
        Self { messages }
    }

    pub fn last_reply(&self) -> Option<Reply> {
        self.messages.last().map(Reply::from_message_value)
    }
}

#[async_trait]
pub trait AgentGraph: Send + Sync {
    fn name(&self) -> &str;

    async fn invoke(&self, input: GraphInput, config: &RunnableConfig) -> Result<GraphOutput>;
}

pub type DynAgentGraph = Arc<dyn AgentGraph>;
