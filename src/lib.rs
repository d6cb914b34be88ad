pub mod cli;
pub mod config;
pub mod customer;
pub mod demo;
pub mod error;
pub mod graph;
pub mod llm;
pub mod memory;
pub mod message;
pub mod profile;
pub mod runner;
pub mod scenario;
pub mod store;
pub mod utils;

pub use config::{AgentEndpoint, EnvConfig, HarnessConfig, REQUIRED_ENV_VARS};
pub use customer::{CustomerConfig, CustomerExample, RunnableConfig, EXAMPLE_CUSTOMERS};
pub use error::{HarnessError, Result};
pub use graph::{
    AgentGraph, DefaultGraphFactory, DynAgentGraph, GraphFactory, GraphInput,
    GraphOutput, GroceryAssistantGraph, RemoteGraph,
};
pub use llm::{DynLlmClient, EchoClient, LlmClient, LlmRequest, LlmResponse, OpenAiClient};
pub use memory::MemoryManager;
pub use message::{ChatMessage, MessageRole, Reply};
pub use profile::{CustomerProfile, ShoppingPersona};
pub use runner::{
    run_suite, ScenarioOutcome, ScenarioResult, ScenarioRunner, SuiteOutcome, TestSummary,
};
pub use scenario::{default_scenarios, validate_response, Scenario, ScenarioCheck, ValidationReport};
pub use store::{DynProfileStore, MemoryProfileStore, ProfileStore, SupabaseClient};
pub use utils::{logging, validation};
