use std::time::Duration;

use crate::error::Result;

/// HTTP client shared settings: pooled connections and a bounded connect.
///
/// No overall request timeout is set here; scenario invocations are bounded
/// by the runner instead.
pub fn build_http_client() -> Result<reqwest::Client> {
    Ok(reqwest::Client::builder()
        .pool_max_idle_per_host(10)
        .pool_idle_timeout(Duration::from_secs(90))
        .connect_timeout(Duration::from_secs(10))
        .build()?)
}
