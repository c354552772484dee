//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::CachedPlanner;
use crate::fare::FareTable;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Route planner with its shared network and path cache
    pub planner: Arc<CachedPlanner>,

    /// Last-mile fare rates
    pub fares: Arc<FareTable>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(planner: CachedPlanner, fares: FareTable) -> Self {
        Self {
            planner: Arc::new(planner),
            fares: Arc::new(fares),
        }
    }
}
