use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One row of the `crm_profiles` table.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct CustomerProfile {
    pub id: String,
    #[serde(default)]
    pub preferred_name: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub preferred_stores: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub dietary_restrictions: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub product_interests: Vec<String>,
    #[serde(default)]
    pub shopping_persona: Option<String>,
    /// Postgres range column; PostgREST renders it as text such as `[80,120)`.
    #[serde(default)]
    pub budget_range: Option<Value>,
    #[serde(default)]
    pub price_sensitivity: Option<String>,
    #[serde(default)]
    pub shopping_frequency: Option<String>,
    #[serde(default)]
    pub communication_style: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl CustomerProfile {
    /// Preferred name, falling back to the full name.
    pub fn display_name(&self) -> Option<&str> {
        self.preferred_name
            .as_deref()
            .or(self.full_name.as_deref())
            .filter(|name| !name.is_empty())
    }

    pub fn budget_display(&self) -> Option<String> {
        match self.budget_range.as_ref()? {
            Value::Null => None,
            Value::String(text) if text.is_empty() => None,
            Value::String(text) => Some(text.clone()),
            other => Some(other.to_string()),
        }
    }
}

/// Behavioural tag stored in `shopping_persona`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShoppingPersona {
    HealthHero,
    EcoShopper,
    BudgetSaver,
    Other(String),
}

impl ShoppingPersona {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "healthHero" => Self::HealthHero,
            "ecoShopper" => Self::EcoShopper,
            "budgetSaver" => Self::BudgetSaver,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn guidance(&self) -> String {
        match self {
            Self::HealthHero => {
                "Prioritise healthy, nutritious and fresh options; mention organic alternatives."
                    .to_string()
            }
            Self::EcoShopper => {
                "Prefer sustainable, organic and locally produced products with little packaging."
                    .to_string()
            }
            Self::BudgetSaver => {
                "Keep costs low: point out deals, store brands and price per unit.".to_string()
            }
            Self::Other(name) => format!("Apply the `{name}` shopping style."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_lists_become_empty() {
        let profile: CustomerProfile = serde_json::from_value(json!({
            "id": "p1",
            "preferred_name": "Sarah",
            "preferred_stores": null,
            "dietary_restrictions": ["gluten-free"],
            "budget_range": "[80,120)",
            "engagement_score": 12
        }))
        .unwrap();
        assert!(profile.preferred_stores.is_empty());
        assert_eq!(profile.dietary_restrictions, vec!["gluten-free"]);
        assert_eq!(profile.budget_display().as_deref(), Some("[80,120)"));
        assert_eq!(profile.display_name(), Some("Sarah"));
    }

    #[test]
    fn persona_parsing() {
        assert_eq!(ShoppingPersona::parse("healthHero"), ShoppingPersona::HealthHero);
        assert_eq!(
            ShoppingPersona::parse("snacker"),
            ShoppingPersona::Other("snacker".into())
        );
        assert!(ShoppingPersona::HealthHero.guidance().contains("healthy"));
    }
}
