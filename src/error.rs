use std::time::Duration;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, HarnessError>;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("Missing environment variables: {0:?}")]
    MissingEnvironment(Vec<String>),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{service} returned status {status}: {body}")]
    Api {
        service: &'static str,
        status: u16,
        body: String,
    },
    #[error("failed to decode {0}")]
    Decode(String),
    #[error("agent graph could not be constructed: {0}")]
    GraphConstruction(String),
    #[error("graph returned no messages")]
    EmptyReply,
    #[error("graph invocation timed out after {0:?}")]
    Timeout(Duration),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
