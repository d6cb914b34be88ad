use std::io::{self, Write};
use std::sync::Arc;

use crate::config::{HarnessConfig, DEFAULT_MODEL};
use crate::customer::EXAMPLE_CUSTOMERS;
use crate::error::Result;
use crate::llm::{DynLlmClient, OpenAiClient};
use crate::memory::MemoryManager;
use crate::store::{DynProfileStore, SupabaseClient};

pub const BENEFITS: [&str; 5] = [
    "Single codebase serves multiple customers",
    "Personalized responses based on customer profile",
    "Runtime configuration from admin panel",
    "No customer data hardcoded in application",
    "Scalable architecture for many customers",
];

/// Memory manager wired to the hosted services, with a deterministic model.
pub fn build_memory_manager(config: &HarnessConfig, profile_id: &str) -> Result<MemoryManager> {
    let llm: DynLlmClient = Arc::new(
        OpenAiClient::with_base_url(
            config.openai_base_url.as_str(),
            config.openai_api_key.as_str(),
            DEFAULT_MODEL,
        )?
        .with_temperature(0.0),
    );
    let store: DynProfileStore = Arc::new(SupabaseClient::from_config(config)?);
    Ok(MemoryManager::new(llm, store, profile_id))
}

fn or_na(value: Option<&str>) -> &str {
    value.unwrap_or("N/A")
}

/// Prints the stored profile and both derived context blocks.
pub async fn profile_loading<W: Write>(manager: &MemoryManager, out: &mut W) -> io::Result<()> {
    writeln!(out, "📊 Testing Customer Profile Loading")?;
    writeln!(out, "{}", "=".repeat(50))?;
    writeln!(out, "👤 Loading profile for: {}", manager.profile_id())?;
    writeln!(out)?;

    match manager.get_user_profile().await {
        Ok(Some(profile)) => {
            writeln!(out, "✅ Profile loaded successfully:")?;
            writeln!(out, "   Name: {}", or_na(profile.preferred_name.as_deref()))?;
            writeln!(out, "   Stores: {}", profile.preferred_stores.join(", "))?;
            writeln!(out, "   Dietary: {}", profile.dietary_restrictions.join(", "))?;
            writeln!(out, "   Persona: {}", or_na(profile.shopping_persona.as_deref()))?;
            writeln!(
                out,
                "   Budget: {}",
                profile.budget_display().as_deref().unwrap_or("N/A")
            )?;
        }
        Ok(None) => writeln!(out, "❌ Failed to load profile")?,
        Err(err) => writeln!(out, "❌ Failed to load profile: {err}")?,
    }
    writeln!(out)?;

    writeln!(out, "🛒 Grocery Assistant Context:")?;
    writeln!(out, "{}", "-".repeat(30))?;
    writeln!(out, "{}", manager.get_grocery_assistant_context().await)?;
    writeln!(out)?;

    writeln!(out, "📝 Full User Context:")?;
    writeln!(out, "{}", "-".repeat(30))?;
    writeln!(out, "{}", manager.format_user_context().await)?;
    writeln!(out)
}

/// Prints the runtime configuration each example customer would use.
pub fn multi_customer<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "🏢 Multi-Customer Usage Demonstration")?;
    writeln!(out, "{}", "=".repeat(50))?;
    writeln!(out, "💡 Runtime Configuration Examples:")?;
    writeln!(out)?;

    for customer in &EXAMPLE_CUSTOMERS {
        writeln!(out, "Customer: {}", customer.name)?;
        writeln!(out, "Profile: {}", customer.description)?;
        writeln!(out, "Configuration:")?;
        writeln!(out, "{}", serde_json::to_string_pretty(&customer.config())?)?;
        writeln!(out)?;
    }

    writeln!(out, "🔑 Key Benefits:")?;
    for benefit in BENEFITS {
        writeln!(out, "• {benefit}")?;
    }
    writeln!(out)
}
