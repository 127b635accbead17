//! Application state for the web layer.

use std::sync::Arc;

use crate::graph::Graph;
use crate::planner::PathFinder;

/// Shared application state.
///
/// The graph is moved into the path finder at startup and is read-only
/// from then on, so handlers can query it concurrently.
#[derive(Clone)]
pub struct AppState {
    /// Path finder over the loaded graph
    pub finder: Arc<PathFinder>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(graph: Graph) -> Self {
        Self {
            finder: Arc::new(PathFinder::new(graph)),
        }
    }

    /// The loaded graph.
    pub fn graph(&self) -> &Graph {
        self.finder.graph()
    }
}
