use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::json;

use grocery_harness::customer::SARAH_PROFILE_ID;
use grocery_harness::memory::NO_PROFILE_CONTEXT;
use grocery_harness::runner::{ScenarioOutcome, ScenarioRunner};
use grocery_harness::scenario::default_scenarios;
use grocery_harness::{
    AgentGraph, CustomerConfig, CustomerProfile, DynLlmClient, EchoClient, GraphInput,
    GroceryAssistantGraph, HarnessError, LlmClient, LlmRequest, LlmResponse, MemoryManager,
    MemoryProfileStore, ProfileStore, Reply,
};

fn sarah() -> CustomerProfile {
    serde_json::from_value(json!({
        "id": SARAH_PROFILE_ID,
        "preferred_name": "Sarah",
        "full_name": "Sarah Johnson",
        "preferred_stores": ["Albert Heijn", "Jumbo"],
        "dietary_restrictions": ["gluten-free", "lactose-intolerant"],
        "product_interests": null,
        "shopping_persona": "healthHero",
        "budget_range": "[80,120)"
    }))
    .unwrap()
}

struct CountingStore {
    inner: MemoryProfileStore,
    calls: AtomicUsize,
}

#[async_trait]
impl ProfileStore for CountingStore {
    async fn fetch_profile(&self, profile_id: &str) -> grocery_harness::Result<Option<CustomerProfile>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.fetch_profile(profile_id).await
    }
}

struct UnreachableStore;

#[async_trait]
impl ProfileStore for UnreachableStore {
    async fn fetch_profile(&self, _profile_id: &str) -> grocery_harness::Result<Option<CustomerProfile>> {
        Err(HarnessError::Api {
            service: "supabase",
            status: 503,
            body: "unavailable".into(),
        })
    }
}

/// Records the system prompt it was given and answers with a fixed line.
#[derive(Default)]
struct RecordingClient {
    systems: Mutex<Vec<Option<String>>>,
}

#[async_trait]
impl LlmClient for RecordingClient {
    fn model(&self) -> &str {
        "recording"
    }

    async fn complete(&self, request: LlmRequest) -> grocery_harness::Result<LlmResponse> {
        self.systems.lock().push(request.system.clone());
        Ok(LlmResponse {
            content: "Hello Sarah! Albert Heijn has gluten-free oats.".into(),
            metadata: None,
        })
    }
}

fn echo() -> DynLlmClient {
    Arc::new(EchoClient)
}

#[tokio::test]
async fn profile_is_fetched_once() {
    let store = Arc::new(CountingStore {
        inner: MemoryProfileStore::new().with_profile(sarah()),
        calls: AtomicUsize::new(0),
    });
    let manager = MemoryManager::new(echo(), store.clone(), SARAH_PROFILE_ID);

    let profile = manager.get_user_profile().await.unwrap().unwrap();
    assert_eq!(profile.preferred_name.as_deref(), Some("Sarah"));
    let _ = manager.get_grocery_assistant_context().await;
    let _ = manager.format_user_context().await;

    assert_eq!(store.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn grocery_context_names_preferences() {
    let store = Arc::new(MemoryProfileStore::new().with_profile(sarah()));
    let manager = MemoryManager::new(echo(), store, SARAH_PROFILE_ID);

    let context = manager.get_grocery_assistant_context().await;

    assert!(context.contains("personal grocery assistant for Sarah"));
    assert!(context.contains("Preferred stores: Albert Heijn, Jumbo"));
    assert!(context.contains("Dietary restrictions: gluten-free, lactose-intolerant"));
    assert!(context.contains("Shopping persona: healthHero"));
    assert!(context.contains("Budget range: [80,120)"));
}

#[tokio::test]
async fn user_context_lists_populated_fields_only() {
    let store = Arc::new(MemoryProfileStore::new().with_profile(sarah()));
    let manager = MemoryManager::new(echo(), store, SARAH_PROFILE_ID);

    let context = manager.format_user_context().await;

    assert!(context.starts_with(&format!("Profile ID: {SARAH_PROFILE_ID}")));
    assert!(context.contains("Full name: Sarah Johnson"));
    assert!(!context.contains("Product interests"));
    assert!(!context.contains("Notes"));
}

#[tokio::test]
async fn missing_or_unreachable_profile_falls_back() {
    let manager = MemoryManager::new(echo(), Arc::new(MemoryProfileStore::new()), "example-uuid-2");
    assert_eq!(manager.get_user_profile().await.unwrap(), None);
    assert_eq!(manager.get_grocery_assistant_context().await, NO_PROFILE_CONTEXT);

    let manager = MemoryManager::new(echo(), Arc::new(UnreachableStore), SARAH_PROFILE_ID);
    assert!(manager.get_user_profile().await.is_err());
    assert_eq!(manager.format_user_context().await, NO_PROFILE_CONTEXT);
}

#[tokio::test]
async fn local_graph_uses_profile_as_system_prompt() {
    let llm = Arc::new(RecordingClient::default());
    let store = Arc::new(MemoryProfileStore::new().with_profile(sarah()));
    let graph = GroceryAssistantGraph::new(llm.clone(), store);

    let output = graph
        .invoke(
            GraphInput::user("Where should I shop?"),
            &CustomerConfig::test_session().into_runnable(),
        )
        .await
        .unwrap();

    assert_eq!(output.messages.len(), 2);
    assert_eq!(output.messages[1]["role"], "assistant");
    assert_eq!(
        output.last_reply(),
        Some(Reply::Text("Hello Sarah! Albert Heijn has gluten-free oats.".into()))
    );

    let systems = llm.systems.lock();
    let system = systems[0].as_deref().unwrap();
    assert!(system.contains("Albert Heijn, Jumbo"));
}

#[tokio::test]
async fn local_graph_with_echo_client_repeats_message() {
    let graph = GroceryAssistantGraph::new(echo(), Arc::new(MemoryProfileStore::new()));
    let output = graph
        .invoke(
            GraphInput::user("What snacks would you recommend for me?"),
            &CustomerConfig::test_session().into_runnable(),
        )
        .await
        .unwrap();
    assert_eq!(
        output.last_reply().map(|reply| reply.display_text()),
        Some("[Echo] What snacks would you recommend for me?".to_string())
    );
}

#[tokio::test]
async fn local_graph_fails_when_profile_store_errors() {
    let llm = Arc::new(RecordingClient::default());
    let graph = GroceryAssistantGraph::new(llm.clone(), Arc::new(UnreachableStore));

    let result = graph
        .invoke(
            GraphInput::user("Hi! I'm looking for some healthy breakfast options. What do you recommend?"),
            &CustomerConfig::test_session().into_runnable(),
        )
        .await;

    assert!(matches!(result, Err(HarnessError::Api { status: 503, .. })));
    assert!(llm.systems.lock().is_empty());
}

#[tokio::test]
async fn local_graph_without_profile_row_uses_general_prompt() {
    let llm = Arc::new(RecordingClient::default());
    let graph = GroceryAssistantGraph::new(llm.clone(), Arc::new(MemoryProfileStore::new()));

    graph
        .invoke(
            GraphInput::user("Where should I shop?"),
            &CustomerConfig::test_session().into_runnable(),
        )
        .await
        .unwrap();

    assert_eq!(llm.systems.lock()[0].as_deref(), Some(NO_PROFILE_CONTEXT));
}

#[tokio::test]
async fn unreachable_store_fails_profile_scenario() {
    let graph = Arc::new(GroceryAssistantGraph::new(echo(), Arc::new(UnreachableStore)));
    let runner = ScenarioRunner::new(graph, CustomerConfig::test_session());

    let outcome = runner.run_scenario(&default_scenarios()[0]).await;

    assert!(!outcome.passed());
    assert!(matches!(
        outcome,
        ScenarioOutcome::Errored { reason } if reason.contains("supabase returned status 503")
    ));
}
