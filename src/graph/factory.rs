use std::sync::Arc;

use super::{DynAgentGraph, GroceryAssistantGraph, RemoteGraph};
use crate::config::HarnessConfig;
use crate::error::{HarnessError, Result};

/// Builds the graph under test from a validated configuration.
pub trait GraphFactory: Send + Sync {
    fn create(&self, config: &HarnessConfig) -> Result<DynAgentGraph>;
}

/// Remote graph when an agent URL is configured, otherwise the local one.
#[derive(Default, Clone, Copy)]
pub struct DefaultGraphFactory;

impl GraphFactory for DefaultGraphFactory {
    fn create(&self, config: &HarnessConfig) -> Result<DynAgentGraph> {
        let graph: DynAgentGraph = match &config.agent {
            Some(endpoint) => Arc::new(RemoteGraph::new(endpoint.clone()).map_err(construction)?),
            None => Arc::new(GroceryAssistantGraph::from_config(config).map_err(construction)?),
        };
        tracing::info!(graph = graph.name(), "agent graph ready");
        Ok(graph)
    }
}

fn construction(err: HarnessError) -> HarnessError {
    HarnessError::GraphConstruction(err.to_string())
}
