use crate::error::{HarnessError, Result};

/// Value checks applied to the harness configuration
pub struct ConfigValidator;

impl ConfigValidator {
    /// Rejects empty keys and the `your_...` / short `sk-...` placeholders
    /// that ship in `.env.example`.
    pub fn validate_api_key(setting: &str, api_key: &str) -> Result<()> {
        if api_key.is_empty() {
            return Err(HarnessError::InvalidConfig(format!("{setting} is empty")));
        }

        let placeholder =
            api_key.starts_with("your_") || (api_key.starts_with("sk-") && api_key.len() < 20);
        if placeholder {
            return Err(HarnessError::InvalidConfig(format!(
                "{setting} still holds the example placeholder, copy the real key from the provider dashboard"
            )));
        }

        Ok(())
    }

    /// Endpoint settings (`SUPABASE_URL`, `OPENAI_BASE_URL`, `GROCERY_AGENT_URL`)
    /// need an explicit scheme; reqwest rejects bare hosts.
    pub fn validate_url(setting: &str, url: &str) -> Result<()> {
        if url.is_empty() {
            return Err(HarnessError::InvalidConfig(format!("{setting} is empty")));
        }

        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(HarnessError::InvalidConfig(format!(
                "{setting} `{url}` needs an http:// or https:// scheme"
            )));
        }

        Ok(())
    }

    pub fn validate_model_name(model: &str) -> Result<()> {
        if model.is_empty() {
            return Err(HarnessError::InvalidConfig("GROCERY_MODEL is empty".into()));
        }

        if model.to_lowercase().starts_with("gpt") && !model.contains('-') {
            tracing::warn!(
                model = %model,
                "GROCERY_MODEL does not look like a chat-completions model id such as 'gpt-4o-mini'"
            );
        }

        Ok(())
    }

    /// Checks a customer profile id before it is interpolated into a query string.
    pub fn validate_profile_id(profile_id: &str) -> Result<()> {
        if profile_id.is_empty() {
            return Err(HarnessError::InvalidConfig("profile id must not be empty".into()));
        }

        if !profile_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(HarnessError::InvalidConfig(format!(
                "profile id `{profile_id}` may only contain letters, digits, '_' and '-'"
            )));
        }

        Ok(())
    }

    /// Chat completions accept sampling temperatures in `0.0..=2.0`.
    pub fn validate_temperature(temperature: f64) -> Result<()> {
        if !(0.0..=2.0).contains(&temperature) {
            return Err(HarnessError::InvalidConfig(format!(
                "GROCERY_TEMPERATURE must be between 0.0 and 2.0, got {temperature}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_api_key() {
        assert!(ConfigValidator::validate_api_key("OPENAI_API_KEY", "").is_err());
        assert!(ConfigValidator::validate_api_key("OPENAI_API_KEY", "your_api_key_here").is_err());
        assert!(ConfigValidator::validate_api_key("OPENAI_API_KEY", "sk-short").is_err());
        assert!(ConfigValidator::validate_api_key("OPENAI_API_KEY", "sk-1234567890abcdef1234567890").is_ok());
        assert!(ConfigValidator::validate_api_key("SUPABASE_ANON_KEY", "anon-key").is_ok());
    }

    #[test]
    fn errors_name_the_setting() {
        let err = ConfigValidator::validate_api_key("SUPABASE_ANON_KEY", "your_anon_key").unwrap_err();
        assert!(err.to_string().contains("SUPABASE_ANON_KEY still holds the example placeholder"));

        let err = ConfigValidator::validate_url("SUPABASE_URL", "project.supabase.co").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid configuration: SUPABASE_URL `project.supabase.co` needs an http:// or https:// scheme"
        );
    }

    #[test]
    fn test_validate_url() {
        assert!(ConfigValidator::validate_url("SUPABASE_URL", "").is_err());
        assert!(ConfigValidator::validate_url("SUPABASE_URL", "example.supabase.co").is_err());
        assert!(ConfigValidator::validate_url("SUPABASE_URL", "http://localhost:54321").is_ok());
        assert!(ConfigValidator::validate_url("GROCERY_AGENT_URL", "https://agent.example.com").is_ok());
    }

    #[test]
    fn test_validate_profile_id() {
        assert!(ConfigValidator::validate_profile_id("").is_err());
        assert!(ConfigValidator::validate_profile_id("4c432d3e-0a15-4272-beda-0d327088d5f6").is_ok());
        assert!(ConfigValidator::validate_profile_id("example-uuid-2").is_ok());
        assert!(ConfigValidator::validate_profile_id("id&select=*").is_err());
    }

    #[test]
    fn test_validate_temperature() {
        assert!(ConfigValidator::validate_temperature(-0.1).is_err());
        assert!(ConfigValidator::validate_temperature(0.0).is_ok());
        assert!(ConfigValidator::validate_temperature(2.0).is_ok());
        assert!(ConfigValidator::validate_temperature(2.1).is_err());
    }
}
