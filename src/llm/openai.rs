use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::instrument;

use super::client::LlmClient;
use super::types::{LlmRequest, LlmResponse};
use crate::config::HarnessConfig;
use crate::error::{HarnessError, Result};
use crate::utils::build_http_client;

/// Chat-completions client for the hosted language model.
#[derive(Clone)]
pub struct OpenAiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
    temperature: f32,
}

impl OpenAiClient {
    pub fn with_base_url<S1, S2, S3>(base_url: S1, api_key: S2, model: S3) -> Result<Self>
    where
        S1: Into<String>,
        S2: Into<String>,
        S3: Into<String>,
    {
        Ok(Self {
            client: build_http_client()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            model: model.into(),
            temperature: 0.0,
        })
    }

    pub fn from_config(config: &HarnessConfig) -> Result<Self> {
        Ok(Self::with_base_url(
            config.openai_base_url.as_str(),
            config.openai_api_key.as_str(),
            config.model.as_str(),
        )?
        .with_temperature(config.temperature))
    }

    /// Default sampling temperature, used when a request does not set one.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    fn request_body(&self, request: &LlmRequest) -> Value {
        let mut messages = Vec::with_capacity(request.messages.len() + 1);
        if let Some(system) = &request.system {
            messages.push(json!({ "role": "system", "content": system }));
        }
        for message in &request.messages {
            messages.push(json!({ "role": message.role, "content": message.content }));
        }

        let temperature = request.temperature.unwrap_or(self.temperature);

        json!({
            "model": self.model,
            "messages": messages,
            "temperature": temperature,
        })
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    fn model(&self) -> &str {
        &self.model
    }

    #[instrument(skip(self, request), fields(model = %self.model))]
    async fn complete(&self, request: LlmRequest) -> Result<LlmResponse> {
        let url = format!("{}/chat/completions", self.base_url);
        let body = self.request_body(&request);

        let response = self
            .client
            .post(url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(HarnessError::Api {
                service: "openai",
                status: status.as_u16(),
                body,
            });
        }

        let payload: Value = response.json().await?;
        let content = payload["choices"]
            .get(0)
            .and_then(|choice| choice["message"]["content"].as_str())
            .ok_or_else(|| HarnessError::Decode("chat completion without message content".into()))?;

        tracing::debug!(chars = content.len(), "chat completion received");

        Ok(LlmResponse {
            content: content.to_string(),
            metadata: payload.get("usage").cloned(),
        })
    }
}
