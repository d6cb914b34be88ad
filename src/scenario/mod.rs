use serde::{Deserialize, Serialize};

pub mod validation;

pub use validation::{validate_response, CheckResult, ScenarioCheck, ValidationReport};

pub const PROFILE_LOADING: &str = "Check Customer Profile Loading";
pub const DIETARY_RESTRICTION: &str = "Dietary Restriction Awareness";
pub const STORE_PREFERENCE: &str = "Store Preference Recognition";
pub const BUDGET_AWARENESS: &str = "Budget Awareness";
pub const PERSONA_APPLICATION: &str = "Shopping Persona Application";

/// A user message plus a human-readable note on what a good reply contains.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Scenario {
    pub name: String,
    pub message: String,
    /// Shown to the operator only; the check itself is chosen by `name`.
    pub expected: String,
}

impl Scenario {
    pub fn new(
        name: impl Into<String>,
        message: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            expected: expected.into(),
        }
    }
}

pub fn default_scenarios() -> Vec<Scenario> {
    vec![
        Scenario::new(
            PROFILE_LOADING,
            "Hi! I'm looking for some healthy breakfast options. What do you recommend?",
            "Should load Sarah's profile (gluten-free, lactose-intolerant, health-focused)",
        ),
        Scenario::new(
            DIETARY_RESTRICTION,
            "I want to make pancakes for breakfast. Can you suggest ingredients?",
            "Should recommend gluten-free flour and lactose-free milk",
        ),
        Scenario::new(
            STORE_PREFERENCE,
            "Where should I shop for organic vegetables?",
            "Should recommend Albert Heijn or Jumbo (Sarah's preferred stores)",
        ),
        Scenario::new(
            BUDGET_AWARENESS,
            "I need to plan my weekly grocery shopping with a budget of €100",
            "Should respect the €80-120 budget range from profile",
        ),
        Scenario::new(
            PERSONA_APPLICATION,
            "What snacks would you recommend for me?",
            "Should suggest healthy options (healthHero persona)",
        ),
    ]
}
