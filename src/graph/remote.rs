use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::instrument;

use super::{AgentGraph, GraphInput, GraphOutput};
use crate::config::AgentEndpoint;
use crate::customer::RunnableConfig;
use crate::error::{HarnessError, Result};
use crate::utils::{build_http_client, ConfigValidator};

#[derive(Deserialize)]
struct ThreadCreated {
    thread_id: String,
}

/// Client for a graph deployed on a hosted LangGraph server.
///
/// Each invocation creates a fresh server thread tagged with the customer
/// identifiers, then blocks on `runs/wait` for the final state.
pub struct RemoteGraph {
    client: reqwest::Client,
    endpoint: AgentEndpoint,
}

impl RemoteGraph {
    pub fn new(endpoint: AgentEndpoint) -> Result<Self> {
        ConfigValidator::validate_url("GROCERY_AGENT_URL", &endpoint.url)?;
        Ok(Self {
            client: build_http_client()?,
            endpoint,
        })
    }

    fn post(&self, path: &str) -> reqwest::RequestBuilder {
        let request = self.client.post(format!("{}{}", self.endpoint.url, path));
        match &self.endpoint.api_key {
            Some(key) => request.header("X-Api-Key", key),
            None => request,
        }
    }

    async fn send_json(&self, path: &str, body: &Value) -> Result<Value> {
        let response = self.post(path).json(body).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(HarnessError::Api {
                service: "agent",
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.json().await?)
    }
}

#[async_trait]
impl AgentGraph for RemoteGraph {
    fn name(&self) -> &str {
        &self.endpoint.assistant_id
    }

    #[instrument(skip_all, fields(assistant = %self.endpoint.assistant_id))]
    async fn invoke(&self, input: GraphInput, config: &RunnableConfig) -> Result<GraphOutput> {
        let customer = &config.configurable;
        let thread = self
            .send_json(
                "/threads",
                &json!({
                    "metadata": {
                        "user_id": customer.user_id,
                        "customer_profile_id": customer.customer_profile_id,
                        "session": customer.thread_id,
                    }
                }),
            )
            .await?;
        let thread: ThreadCreated = serde_json::from_value(thread)
            .map_err(|e| HarnessError::Decode(format!("thread response: {e}")))?;
        tracing::debug!(thread_id = %thread.thread_id, "thread created");

        let state = self
            .send_json(
                &format!("/threads/{}/runs/wait", thread.thread_id),
                &json!({
                    "assistant_id": self.endpoint.assistant_id,
                    "input": input,
                    "config": config,
                }),
            )
            .await?;

        Ok(GraphOutput::from_state(&state))
    }
}
