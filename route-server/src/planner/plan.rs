//! End-to-end route planning: match endpoints, find alternates, check
//! feasibility.

use tracing::{debug, info};

use super::alternates::AlternatePathFinder;
use super::config::{PlannerConfig, ScoreWeights};
use super::feasibility::{FeasibilityPolicy, RouteOption, assess};
use super::solver::{ShortestPathSolver, SolverOptions};
use crate::domain::{Coordinates, ModeSet, Path};
use crate::geo::{MatchResult, NearestLocationMatcher};
use crate::network::{Network, NetworkError};

/// Error from route planning.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlanError {
    /// Request is missing a field or carries an unusable value
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// No locations to match coordinates against
    #[error("no locations available")]
    NoLocationAvailable,

    /// Destination cannot be reached from the source
    #[error("no path from {from} to {to}")]
    NoPathFound { from: String, to: String },

    /// Paths exist but none can carry the weight
    #[error("no route can carry {weight} (largest capacity {best_capacity})")]
    NoFeasibleRoute { weight: f64, best_capacity: f64 },

    /// Per-request network could not be built
    #[error("network error: {0}")]
    Network(#[from] NetworkError),
}

/// A shipment to route between two points.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteRequest {
    /// Label the caller chose for the source; display only.
    pub source_label: String,
    pub destination_label: String,
    pub source: Coordinates,
    pub destination: Coordinates,
    /// Shipment weight, checked against link capacities.
    pub weight: f64,
    /// Number of units; scales synthesized costs.
    pub quantity: f64,
    pub modes: ModeSet,
    pub weights: Option<ScoreWeights>,
    pub k: Option<usize>,
    pub feasibility: Option<FeasibilityPolicy>,
}

impl RouteRequest {
    /// Create a request for all modes with planner defaults for everything
    /// else.
    pub fn new(
        source_label: impl Into<String>,
        source: Coordinates,
        destination_label: impl Into<String>,
        destination: Coordinates,
        weight: f64,
        quantity: f64,
    ) -> Self {
        Self {
            source_label: source_label.into(),
            destination_label: destination_label.into(),
            source,
            destination,
            weight,
            quantity,
            modes: ModeSet::all(),
            weights: None,
            k: None,
            feasibility: None,
        }
    }

    pub fn with_modes(mut self, modes: ModeSet) -> Self {
        self.modes = modes;
        self
    }

    pub fn with_weights(mut self, weights: ScoreWeights) -> Self {
        self.weights = Some(weights);
        self
    }

    pub fn with_k(mut self, k: usize) -> Self {
        self.k = Some(k);
        self
    }

    pub fn with_feasibility(mut self, policy: FeasibilityPolicy) -> Self {
        self.feasibility = Some(policy);
        self
    }

    /// Total load for synthesized pricing.
    pub fn load(&self) -> f64 {
        self.weight * self.quantity
    }

    /// Validate the request before any graph work.
    pub fn validate(&self) -> Result<(), PlanError> {
        if !self.source.is_valid() {
            return Err(PlanError::InvalidRequest(
                "source coordinates are out of range".to_string(),
            ));
        }
        if !self.destination.is_valid() {
            return Err(PlanError::InvalidRequest(
                "destination coordinates are out of range".to_string(),
            ));
        }
        if !(self.weight.is_finite() && self.weight > 0.0) {
            return Err(PlanError::InvalidRequest(
                "weight must be a positive number".to_string(),
            ));
        }
        if !(self.quantity.is_finite() && self.quantity > 0.0) {
            return Err(PlanError::InvalidRequest(
                "quantity must be a positive number".to_string(),
            ));
        }
        if !self.load().is_finite() {
            return Err(PlanError::InvalidRequest(
                "weight times quantity is too large".to_string(),
            ));
        }
        if self.modes.is_empty() {
            return Err(PlanError::InvalidRequest(
                "at least one transport mode is required".to_string(),
            ));
        }
        if self.weights.is_some_and(|w| !w.is_valid()) {
            return Err(PlanError::InvalidRequest(
                "cost and time weights must be non-negative".to_string(),
            ));
        }
        if self.k == Some(0) {
            return Err(PlanError::InvalidRequest(
                "k must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Network locations matched to a request's endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoints {
    pub source: MatchResult,
    pub destination: MatchResult,
}

/// Ranked route options for a request.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutePlan {
    pub source: MatchResult,
    pub destination: MatchResult,
    /// Best first.
    pub options: Vec<RouteOption>,
}

/// Route planner over a borrowed network.
pub struct Planner<'a> {
    network: &'a Network,
    config: &'a PlannerConfig,
}

impl<'a> Planner<'a> {
    pub fn new(network: &'a Network, config: &'a PlannerConfig) -> Self {
        Self { network, config }
    }

    /// Plan routes for `request`.
    pub fn plan(&self, request: &RouteRequest) -> Result<RoutePlan, PlanError> {
        request.validate()?;
        let endpoints = self.resolve(request)?;
        let paths = self.alternatives(&endpoints, request);
        self.assemble(request, endpoints, paths)
    }

    /// Match both request coordinates to their nearest network locations.
    pub fn resolve(&self, request: &RouteRequest) -> Result<Endpoints, PlanError> {
        let matcher = NearestLocationMatcher::new(self.network.registry())
            .with_cutoff(self.config.match_cutoff_km);

        let source = matcher
            .nearest(request.source)
            .ok_or(PlanError::NoLocationAvailable)?;
        let destination = matcher
            .nearest(request.destination)
            .ok_or(PlanError::NoLocationAvailable)?;

        debug!(
            source = %source.name,
            source_km = source.distance_km,
            destination = %destination.name,
            destination_km = destination.distance_km,
            "matched endpoints"
        );
        Ok(Endpoints {
            source,
            destination,
        })
    }

    /// Solver options for `request`, falling back to configured weights.
    pub fn solver_options(&self, request: &RouteRequest) -> SolverOptions {
        SolverOptions {
            weights: request.weights.unwrap_or(self.config.weights),
            modes: request.modes,
        }
    }

    /// Alternate paths between matched endpoints, best first.
    pub fn alternatives(&self, endpoints: &Endpoints, request: &RouteRequest) -> Vec<Path> {
        let solver = ShortestPathSolver::new(self.network, self.solver_options(request));
        AlternatePathFinder::new(solver).find(
            endpoints.source.location,
            endpoints.destination.location,
            self.config.path_count(request.k),
        )
    }

    /// Apply feasibility to `paths` and build the plan.
    ///
    /// # Errors
    ///
    /// [`PlanError::NoPathFound`] if `paths` is empty, and
    /// [`PlanError::NoFeasibleRoute`] if the feasibility policy removes
    /// every path.
    pub fn assemble(
        &self,
        request: &RouteRequest,
        endpoints: Endpoints,
        paths: Vec<Path>,
    ) -> Result<RoutePlan, PlanError> {
        if paths.is_empty() {
            return Err(PlanError::NoPathFound {
                from: endpoints.source.name,
                to: endpoints.destination.name,
            });
        }

        let found = paths.len();
        let policy = request.feasibility.unwrap_or(self.config.feasibility);
        let options = assess(paths, request.weight, policy)?;

        info!(
            source = %endpoints.source.name,
            destination = %endpoints.destination.name,
            weight = request.weight,
            found,
            feasible = options.iter().filter(|o| o.feasible).count(),
            "planned routes"
        );

        Ok(RoutePlan {
            source: endpoints.source,
            destination: endpoints.destination,
            options,
        })
    }
}
