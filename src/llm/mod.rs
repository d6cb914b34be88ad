pub mod client;
pub mod echo;
pub mod openai;
pub mod types;

pub use client::{DynLlmClient, LlmClient};
pub use echo::EchoClient;
pub use openai::OpenAiClient;
pub use types::{LlmRequest, LlmResponse};
