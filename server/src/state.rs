//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! planner keeps no data between requests, so the state is only the solver
//! settings every request runs with.

use planner::SolverConfig;

use crate::config::ServerConfig;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub solver: SolverConfig,
}

impl AppState {
    #[must_use]
    pub fn new(config: &ServerConfig) -> Self {
        Self { solver: SolverConfig { node_budget: config.node_budget } }
    }
}
