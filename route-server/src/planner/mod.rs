//! Route planner.
//!
//! Answers "which ways can this shipment get from here to there?":
//!
//! 1. Both query coordinates are matched to their nearest network locations.
//! 2. Yen's algorithm finds up to k simple paths between them, driving a
//!    Dijkstra solver with per-call link exclusions so the shared network is
//!    never modified.
//! 3. Each path is checked against the shipment weight and either annotated
//!    or dropped, depending on the feasibility policy.

mod alternates;
mod config;
mod feasibility;
mod plan;
mod solver;

pub use alternates::AlternatePathFinder;
pub use config::{PlannerConfig, ScoreWeights};
pub use feasibility::{FeasibilityPolicy, RouteOption, assess, is_feasible};
pub use plan::{Endpoints, PlanError, Planner, RouteRequest, RoutePlan};
pub use solver::{Exclusions, ShortestPathSolver, SolverOptions};
