use std::sync::Arc;

use serde_json::json;

use grocery_harness::customer::{CustomerConfig, EXAMPLE_CUSTOMERS, SARAH_PROFILE_ID};
use grocery_harness::demo;
use grocery_harness::{CustomerProfile, EchoClient, MemoryManager, MemoryProfileStore};

#[test]
fn example_customers_derive_ids() {
    let ids: Vec<(String, String)> = EXAMPLE_CUSTOMERS
        .iter()
        .map(|customer| (customer.user_id(), customer.thread_id()))
        .collect();

    assert_eq!(
        ids,
        vec![
            ("user_sarah_johnson".to_string(), "session_4c432d3e".to_string()),
            (
                "user_budget-conscious_customer".to_string(),
                "session_example-".to_string()
            ),
            (
                "user_eco-friendly_customer".to_string(),
                "session_example-".to_string()
            ),
        ]
    );
}

#[test]
fn runnable_config_has_configurable_shape() {
    let value = serde_json::to_value(CustomerConfig::test_session().into_runnable()).unwrap();
    assert_eq!(
        value,
        json!({
            "configurable": {
                "customer_profile_id": SARAH_PROFILE_ID,
                "user_id": "sarah_test_session",
                "thread_id": "grocery_session_001"
            }
        })
    );
}

#[test]
fn multi_customer_demo_prints_every_config() {
    let mut out = Vec::new();
    demo::multi_customer(&mut out).unwrap();
    let printed = String::from_utf8(out).unwrap();

    assert!(printed.contains("Customer: Budget-Conscious Customer"));
    assert!(printed.contains("\"thread_id\": \"session_example-\""));
    assert!(printed.contains("\"user_id\": \"user_sarah_johnson\""));
    assert!(printed.contains("• Scalable architecture for many customers"));
}

#[tokio::test]
async fn profile_demo_prints_fields_with_fallbacks() {
    let profile = CustomerProfile {
        id: SARAH_PROFILE_ID.into(),
        preferred_name: Some("Sarah".into()),
        preferred_stores: vec!["Albert Heijn".into(), "Jumbo".into()],
        ..Default::default()
    };
    let manager = MemoryManager::new(
        Arc::new(EchoClient),
        Arc::new(MemoryProfileStore::new().with_profile(profile)),
        SARAH_PROFILE_ID,
    );
    let mut out = Vec::new();

    demo::profile_loading(&manager, &mut out).await.unwrap();

    let printed = String::from_utf8(out).unwrap();
    assert!(printed.contains("✅ Profile loaded successfully:"));
    assert!(printed.contains("   Name: Sarah"));
    assert!(printed.contains("   Stores: Albert Heijn, Jumbo"));
    assert!(printed.contains("   Persona: N/A"));
    assert!(printed.contains("   Budget: N/A"));
    assert!(printed.contains("🛒 Grocery Assistant Context:"));
    assert!(printed.contains("📝 Full User Context:"));
}

#[tokio::test]
async fn profile_demo_reports_missing_profile() {
    let manager = MemoryManager::new(
        Arc::new(EchoClient),
        Arc::new(MemoryProfileStore::new()),
        "example-uuid-3",
    );
    let mut out = Vec::new();

    demo::profile_loading(&manager, &mut out).await.unwrap();

    assert!(String::from_utf8(out)
        .unwrap()
        .contains("❌ Failed to load profile"));
}
