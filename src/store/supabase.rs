use async_trait::async_trait;
use tracing::instrument;

use super::ProfileStore;
use crate::config::HarnessConfig;
use crate::error::{HarnessError, Result};
use crate::profile::CustomerProfile;
use crate::utils::{build_http_client, ConfigValidator};

const PROFILE_TABLE: &str = "crm_profiles";

/// PostgREST client for the hosted profile database.
#[derive(Clone)]
pub struct SupabaseClient {
    client: reqwest::Client,
    base_url: String,
    anon_key: String,
}

impl SupabaseClient {
    pub fn new(base_url: impl Into<String>, anon_key: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        ConfigValidator::validate_url("SUPABASE_URL", &base_url)?;
        Ok(Self {
            client: build_http_client()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.into(),
        })
    }

    pub fn from_config(config: &HarnessConfig) -> Result<Self> {
        Self::new(config.supabase_url.as_str(), config.supabase_anon_key.as_str())
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }
}

#[async_trait]
impl ProfileStore for SupabaseClient {
    #[instrument(skip(self))]
    async fn fetch_profile(&self, profile_id: &str) -> Result<Option<CustomerProfile>> {
        ConfigValidator::validate_profile_id(profile_id)?;

        let id_filter = format!("eq.{profile_id}");
        let response = self
            .client
            .get(self.table_url(PROFILE_TABLE))
            .query(&[("id", id_filter.as_str()), ("select", "*")])
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(HarnessError::Api {
                service: "supabase",
                status: status.as_u16(),
                body,
            });
        }

        let rows: Vec<CustomerProfile> = response
            .json()
            .await
            .map_err(|e| HarnessError::Decode(format!("{PROFILE_TABLE} rows: {e}")))?;

        if rows.is_empty() {
            tracing::warn!(profile_id, "no profile row found");
        }
        Ok(rows.into_iter().next())
    }
}
