use tokio::sync::OnceCell;

use crate::error::Result;
use crate::llm::DynLlmClient;
use crate::profile::{CustomerProfile, ShoppingPersona};
use crate::store::DynProfileStore;

pub const NO_PROFILE_CONTEXT: &str =
    "No customer profile is available. Give general grocery advice and ask about preferences.";

/// Profile-backed memory for a single customer.
///
/// The profile is fetched at most once per manager; a failed fetch is not
/// cached and will be retried by the next call.
pub struct MemoryManager {
    llm: DynLlmClient,
    store: DynProfileStore,
    profile_id: String,
    profile: OnceCell<Option<CustomerProfile>>,
}

impl MemoryManager {
    pub fn new(llm: DynLlmClient, store: DynProfileStore, profile_id: impl Into<String>) -> Self {
        Self {
            llm,
            store,
            profile_id: profile_id.into(),
            profile: OnceCell::new(),
        }
    }

    pub fn profile_id(&self) -> &str {
        &self.profile_id
    }

    pub fn llm(&self) -> &DynLlmClient {
        &self.llm
    }

    pub async fn get_user_profile(&self) -> Result<Option<CustomerProfile>> {
        let profile = self
            .profile
            .get_or_try_init(|| async { self.store.fetch_profile(&self.profile_id).await })
            .await?;
        Ok(profile.clone())
    }

    /// Compact context used as the assistant's system prompt.
    pub async fn get_grocery_assistant_context(&self) -> String {
        match self.load_for_context().await {
            Some(profile) => grocery_context(&profile),
            None => NO_PROFILE_CONTEXT.to_string(),
        }
    }

    /// Every populated profile field, one per line.
    pub async fn format_user_context(&self) -> String {
        match self.load_for_context().await {
            Some(profile) => user_context(&profile),
            None => NO_PROFILE_CONTEXT.to_string(),
        }
    }

    async fn load_for_context(&self) -> Option<CustomerProfile> {
        match self.get_user_profile().await {
            Ok(profile) => profile,
            Err(err) => {
                tracing::warn!(profile_id = %self.profile_id, error = %err, "profile lookup failed");
                None
            }
        }
    }
}

fn join_or(items: &[String], fallback: &str) -> String {
    if items.is_empty() {
        fallback.to_string()
    } else {
        items.join(", ")
    }
}

pub fn grocery_context(profile: &CustomerProfile) -> String {
    let name = profile.display_name().unwrap_or("the customer");
    let persona = match profile.shopping_persona.as_deref() {
        Some(raw) => format!("{raw} ({})", ShoppingPersona::parse(raw).guidance()),
        None => "not set".to_string(),
    };

    let mut lines = vec![
        format!("You are a personal grocery assistant for {name}."),
        format!(
            "Preferred stores: {}",
            join_or(&profile.preferred_stores, "none recorded")
        ),
        format!(
            "Dietary restrictions: {}",
            join_or(&profile.dietary_restrictions, "none recorded")
        ),
        format!("Shopping persona: {persona}"),
        format!(
            "Budget range: {}",
            profile
                .budget_display()
                .unwrap_or_else(|| "not set".to_string())
        ),
    ];
    if !profile.dietary_restrictions.is_empty() {
        lines.push("Never suggest products that conflict with the dietary restrictions.".into());
    }
    if !profile.preferred_stores.is_empty() {
        lines.push("Recommend the preferred stores when suggesting where to shop.".into());
    }
    lines.join("\n")
}

pub fn user_context(profile: &CustomerProfile) -> String {
    let mut lines = vec![format!("Profile ID: {}", profile.id)];

    let text_fields = [
        ("Preferred name", &profile.preferred_name),
        ("Full name", &profile.full_name),
        ("Shopping persona", &profile.shopping_persona),
        ("Price sensitivity", &profile.price_sensitivity),
        ("Shopping frequency", &profile.shopping_frequency),
        ("Communication style", &profile.communication_style),
        ("Notes", &profile.notes),
    ];
    for (label, value) in text_fields {
        if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
            lines.push(format!("{label}: {value}"));
        }
    }

    let list_fields = [
        ("Preferred stores", &profile.preferred_stores),
        ("Dietary restrictions", &profile.dietary_restrictions),
        ("Product interests", &profile.product_interests),
    ];
    for (label, values) in list_fields {
        if !values.is_empty() {
            lines.push(format!("{label}: {}", values.join(", ")));
        }
    }

    if let Some(budget) = profile.budget_display() {
        lines.push(format!("Budget range: {budget}"));
    }
    lines.join("\n")
}
