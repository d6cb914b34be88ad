/// Shared helpers
pub mod http;
pub mod logging;
pub mod text;
pub mod validation;

pub use http::build_http_client;
pub use logging::LoggingConfig;
pub use text::{contains_all, contains_any, preview};
pub use validation::ConfigValidator;
