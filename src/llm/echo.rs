use async_trait::async_trait;

use super::client::LlmClient;
use super::types::{LlmRequest, LlmResponse};
use crate::error::Result;
use crate::message::MessageRole;

/// Offline client that repeats the last user message.
#[derive(Default, Clone)]
pub struct EchoClient;

#[async_trait]
impl LlmClient for EchoClient {
    fn model(&self) -> &str {
        "echo"
    }

    async fn complete(&self, request: LlmRequest) -> Result<LlmResponse> {
        let last_user = request
            .messages
            .iter()
            .rev()
            .find(|message| message.role == MessageRole::User)
            .map(|message| message.content.as_str())
            .unwrap_or_default();
        Ok(LlmResponse {
            content: format!("[Echo] {last_user}"),
            metadata: None,
        })
    }
}
