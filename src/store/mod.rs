use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::error::Result;
use crate::profile::CustomerProfile;

pub mod supabase;

pub use supabase::SupabaseClient;

/// Source of customer profiles.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn fetch_profile(&self, profile_id: &str) -> Result<Option<CustomerProfile>>;
}

pub type DynProfileStore = Arc<dyn ProfileStore>;

/// In-memory profile store
#[derive(Default)]
pub struct MemoryProfileStore {
    inner: RwLock<HashMap<String, CustomerProfile>>,
}

impl MemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(self, profile: CustomerProfile) -> Self {
        self.insert(profile);
        self
    }

    pub fn insert(&self, profile: CustomerProfile) {
        self.inner.write().insert(profile.id.clone(), profile);
    }
}

#[async_trait]
impl ProfileStore for MemoryProfileStore {
    async fn fetch_profile(&self, profile_id: &str) -> Result<Option<CustomerProfile>> {
        Ok(self.inner.read().get(profile_id).cloned())
    }
}
