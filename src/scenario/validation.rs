use std::fmt;

use super::{
    Scenario, BUDGET_AWARENESS, DIETARY_RESTRICTION, PERSONA_APPLICATION, PROFILE_LOADING,
    STORE_PREFERENCE,
};
use crate::utils::{contains_all, contains_any};

pub const UNKNOWN_SCENARIO_CHECK: &str = "Known scenario";

/// Keyword predicate attached to one of the fixed scenarios.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScenarioCheck {
    Personalization,
    GlutenFree,
    StorePreference,
    Budget,
    HealthFocus,
}

impl ScenarioCheck {
    /// Exact, case-sensitive match on the scenario name.
    pub fn for_name(name: &str) -> Option<Self> {
        match name {
            PROFILE_LOADING => Some(Self::Personalization),
            DIETARY_RESTRICTION => Some(Self::GlutenFree),
            STORE_PREFERENCE => Some(Self::StorePreference),
            BUDGET_AWARENESS => Some(Self::Budget),
            PERSONA_APPLICATION => Some(Self::HealthFocus),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Personalization => "Personalization",
            Self::GlutenFree => "Gluten-free awareness",
            Self::StorePreference => "Store preferences",
            Self::Budget => "Budget awareness",
            Self::HealthFocus => "Health focus",
        }
    }

    pub fn evaluate(&self, reply: &str) -> bool {
        match self {
            Self::Personalization => contains_any(reply, &["sarah", "hi", "hello"]),
            Self::GlutenFree => contains_all(reply, &["gluten", "free"]),
            Self::StorePreference => contains_any(reply, &["albert heijn", "jumbo"]),
            Self::Budget => contains_any(reply, &["budget", "€", "euro", "cost", "price"]),
            Self::HealthFocus => {
                contains_any(reply, &["healthy", "organic", "nutritious", "fresh"])
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckResult {
    pub name: String,
    pub passed: bool,
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.passed { "✅" } else { "❌" };
        write!(f, "{status} {}: {}", self.name, self.passed)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub checks: Vec<CheckResult>,
}

impl ValidationReport {
    /// A report with no checks never passes.
    pub fn passed(&self) -> bool {
        !self.checks.is_empty() && self.checks.iter().all(|check| check.passed)
    }
}

/// Applies the scenario's keyword predicate to a reply.
///
/// Scenarios without a predicate fail with a single `Known scenario` check
/// so that new scenarios cannot pass without being wired in here.
pub fn validate_response(scenario: &Scenario, reply: &str) -> ValidationReport {
    let check = match ScenarioCheck::for_name(&scenario.name) {
        Some(check) => CheckResult {
            name: check.label().to_string(),
            passed: check.evaluate(reply),
        },
        None => {
            tracing::warn!(scenario = %scenario.name, "no validation predicate for scenario");
            CheckResult {
                name: UNKNOWN_SCENARIO_CHECK.to_string(),
                passed: false,
            }
        }
    };
    ValidationReport {
        checks: vec![check],
    }
}
