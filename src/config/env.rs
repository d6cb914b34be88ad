use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{HarnessError, Result};
use crate::utils::ConfigValidator;

/// Credentials the scenario suite cannot run without, in reporting order.
pub const REQUIRED_ENV_VARS: [&str; 3] = ["OPENAI_API_KEY", "SUPABASE_URL", "SUPABASE_ANON_KEY"];

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_ASSISTANT_ID: &str = "agent";
pub const DEFAULT_SCENARIO_TIMEOUT_SECS: u64 = 120;

/// Environment variable helpers
pub struct EnvConfig;

impl EnvConfig {
    /// Reads a variable, treating an empty value as unset.
    pub fn get_env_optional(key: &str) -> Option<String> {
        env::var(key)
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }

    /// Loads `.env` from the working directory or its parents, if present.
    pub fn load_dotenv() -> Option<PathBuf> {
        dotenvy::dotenv().ok()
    }
}

/// Hosted LangGraph deployment the remote graph talks to.
#[derive(Clone, Debug, PartialEq)]
pub struct AgentEndpoint {
    pub url: String,
    pub api_key: Option<String>,
    pub assistant_id: String,
}

/// Everything the harness reads from the environment, resolved once at startup.
#[derive(Clone, Debug)]
pub struct HarnessConfig {
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub supabase_url: String,
    pub supabase_anon_key: String,
    pub model: String,
    pub temperature: f32,
    pub agent: Option<AgentEndpoint>,
    pub scenario_timeout: Option<Duration>,
}

impl HarnessConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Every required variable is checked before anything else, so the
    /// returned `MissingEnvironment` error names all absent credentials at
    /// once rather than the first one found.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let missing: Vec<String> = REQUIRED_ENV_VARS
            .into_iter()
            .filter(|&key| value(key).is_none())
            .map(String::from)
            .collect();
        if !missing.is_empty() {
            return Err(HarnessError::MissingEnvironment(missing));
        }

        let temperature = match value("GROCERY_TEMPERATURE") {
            Some(raw) => raw.parse::<f32>().map_err(|_| {
                HarnessError::InvalidConfig(format!("GROCERY_TEMPERATURE `{raw}` is not a number"))
            })?,
            None => 0.0,
        };

        let scenario_timeout = match value("GROCERY_SCENARIO_TIMEOUT_SECS") {
            Some(raw) => {
                let secs = raw.parse::<u64>().map_err(|_| {
                    HarnessError::InvalidConfig(format!(
                        "GROCERY_SCENARIO_TIMEOUT_SECS `{raw}` is not a whole number of seconds"
                    ))
                })?;
                // zero disables the bound
                (secs > 0).then(|| Duration::from_secs(secs))
            }
            None => Some(Duration::from_secs(DEFAULT_SCENARIO_TIMEOUT_SECS)),
        };

        let agent = value("GROCERY_AGENT_URL").map(|url| AgentEndpoint {
            url: url.trim_end_matches('/').to_string(),
            api_key: value("GROCERY_AGENT_API_KEY"),
            assistant_id: value("GROCERY_ASSISTANT_ID")
                .unwrap_or_else(|| DEFAULT_ASSISTANT_ID.to_string()),
        });

        let config = Self {
            openai_api_key: value("OPENAI_API_KEY").unwrap_or_default(),
            openai_base_url: value("OPENAI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            supabase_url: value("SUPABASE_URL")
                .unwrap_or_default()
                .trim_end_matches('/')
                .to_string(),
            supabase_anon_key: value("SUPABASE_ANON_KEY").unwrap_or_default(),
            model: value("GROCERY_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            temperature,
            agent,
            scenario_timeout,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        ConfigValidator::validate_api_key("OPENAI_API_KEY", &self.openai_api_key)?;
        ConfigValidator::validate_api_key("SUPABASE_ANON_KEY", &self.supabase_anon_key)?;
        ConfigValidator::validate_url("OPENAI_BASE_URL", &self.openai_base_url)?;
        ConfigValidator::validate_url("SUPABASE_URL", &self.supabase_url)?;
        ConfigValidator::validate_model_name(&self.model)?;
        ConfigValidator::validate_temperature(f64::from(self.temperature))?;
        if let Some(agent) = &self.agent {
            ConfigValidator::validate_url("GROCERY_AGENT_URL", &agent.url)?;
        }
        Ok(())
    }
}
