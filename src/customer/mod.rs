use serde::{Deserialize, Serialize};

/// Sarah Johnson: gluten-free, lactose-intolerant, healthHero persona.
pub const SARAH_PROFILE_ID: &str = "4c432d3e-0a15-4272-beda-0d327088d5f6";

/// Identifiers that route a request to one customer's stored preferences.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomerConfig {
    pub customer_profile_id: String,
    pub user_id: String,
    pub thread_id: String,
}

impl CustomerConfig {
    pub fn new(
        customer_profile_id: impl Into<String>,
        user_id: impl Into<String>,
        thread_id: impl Into<String>,
    ) -> Self {
        Self {
            customer_profile_id: customer_profile_id.into(),
            user_id: user_id.into(),
            thread_id: thread_id.into(),
        }
    }

    /// The session the scenario suite runs under.
    pub fn test_session() -> Self {
        Self::new(SARAH_PROFILE_ID, "sarah_test_session", "grocery_session_001")
    }

    pub fn into_runnable(self) -> RunnableConfig {
        RunnableConfig { configurable: self }
    }
}

/// Invocation config in the `{"configurable": {...}}` shape graphs expect.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RunnableConfig {
    pub configurable: CustomerConfig,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CustomerExample {
    pub name: &'static str,
    pub profile_id: &'static str,
    pub description: &'static str,
}

impl CustomerExample {
    /// `user_` followed by the lowercased name with spaces as underscores.
    pub fn user_id(&self) -> String {
        format!("user_{}", self.name.to_lowercase().replace(' ', "_"))
    }

    /// `session_` followed by the first eight characters of the profile id.
    pub fn thread_id(&self) -> String {
        let prefix: String = self.profile_id.chars().take(8).collect();
        format!("session_{prefix}")
    }

    pub fn config(&self) -> RunnableConfig {
        CustomerConfig::new(self.profile_id, self.user_id(), self.thread_id()).into_runnable()
    }
}

pub const EXAMPLE_CUSTOMERS: [CustomerExample; 3] = [
    CustomerExample {
        name: "Sarah Johnson",
        profile_id: SARAH_PROFILE_ID,
        description: "Health-focused, gluten-free, shops at Albert Heijn",
    },
    CustomerExample {
        name: "Budget-Conscious Customer",
        profile_id: "example-uuid-2",
        description: "Price-sensitive, family shopping, prefers deals",
    },
    CustomerExample {
        name: "Eco-Friendly Customer",
        profile_id: "example-uuid-3",
        description: "Environmentally conscious, organic foods only",
    },
];
