use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::instrument;

use super::{AgentGraph, GraphInput, GraphOutput};
use crate::config::HarnessConfig;
use crate::customer::RunnableConfig;
use crate::error::{HarnessError, Result};
use crate::llm::{DynLlmClient, LlmRequest, OpenAiClient};
use crate::memory::{grocery_context, MemoryManager, NO_PROFILE_CONTEXT};
use crate::message::ChatMessage;
use crate::store::{DynProfileStore, SupabaseClient};

/// Single-node assistant: loads the customer's profile, turns it into a
/// system prompt and asks the language model for the reply.
pub struct GroceryAssistantGraph {
    llm: DynLlmClient,
    store: DynProfileStore,
    temperature: f32,
}

impl GroceryAssistantGraph {
    pub fn new(llm: DynLlmClient, store: DynProfileStore) -> Self {
        Self {
            llm,
            store,
            temperature: 0.0,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn from_config(config: &HarnessConfig) -> Result<Self> {
        let llm: DynLlmClient = Arc::new(OpenAiClient::from_config(config)?);
        let store: DynProfileStore = Arc::new(SupabaseClient::from_config(config)?);
        Ok(Self::new(llm, store).with_temperature(config.temperature))
    }
}

#[async_trait]
impl AgentGraph for GroceryAssistantGraph {
    fn name(&self) -> &str {
        "grocery_assistant"
    }

    #[instrument(skip_all, fields(profile_id = %config.configurable.customer_profile_id))]
    async fn invoke(&self, input: GraphInput, config: &RunnableConfig) -> Result<GraphOutput> {
        let manager = MemoryManager::new(
            Arc::clone(&self.llm),
            Arc::clone(&self.store),
            config.configurable.customer_profile_id.as_str(),
        );
        // a store failure fails the turn; only an absent row falls back
        let context = match manager.get_user_profile().await? {
            Some(profile) => grocery_context(&profile),
            None => NO_PROFILE_CONTEXT.to_string(),
        };

        let request = LlmRequest::new(input.messages.clone())
            .with_system(context)
            .with_temperature(self.temperature);
        tracing::debug!(model = manager.llm().model(), "requesting completion");
        let response = manager.llm().complete(request).await?;

        let mut messages = input.messages;
        messages.push(ChatMessage::assistant(response.content));
        let messages = messages
            .into_iter()
            .map(serde_json::to_value)
            .collect::<std::result::Result<Vec<Value>, _>>()
            .map_err(|e| HarnessError::Decode(format!("graph messages: {e}")))?;

        Ok(GraphOutput { messages })
    }
}
