//! Web layer for the route planner.
//!
//! Provides HTTP endpoints for finding routes, browsing the catalogue and
//! quoting last-mile fares.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
