pub mod env;

pub use env::{
    AgentEndpoint, EnvConfig, HarnessConfig, DEFAULT_ASSISTANT_ID, DEFAULT_MODEL,
    DEFAULT_OPENAI_BASE_URL, DEFAULT_SCENARIO_TIMEOUT_SECS, REQUIRED_ENV_VARS,
};
