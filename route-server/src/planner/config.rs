//! Planner configuration.

use crate::network::PricingPolicy;

use super::feasibility::FeasibilityPolicy;

/// Weights that scalarize a link's cost and time into one score.
///
/// A link scores `self.cost × link cost + self.time × link time`; a path
/// scores the sum over its links.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    pub cost: f64,
    pub time: f64,
}

impl ScoreWeights {
    pub fn new(cost: f64, time: f64) -> Self {
        Self { cost, time }
    }

    /// Score of something costing `cost` and taking `time` hours.
    pub fn score(&self, cost: f64, time: f64) -> f64 {
        cost * self.cost + time * self.time
    }

    /// Returns true if both weights are finite and non-negative.
    pub fn is_valid(&self) -> bool {
        [self.cost, self.time]
            .iter()
            .all(|w| w.is_finite() && *w >= 0.0)
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            cost: 0.5,
            time: 0.5,
        }
    }
}

/// Configuration parameters for route planning.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Number of alternate paths returned when a request does not say.
    pub default_paths: usize,

    /// Upper bound on the number of paths a request may ask for.
    pub max_paths: usize,

    /// Score weights used when a request does not supply its own.
    pub weights: ScoreWeights,

    /// Match distance (km) beyond which endpoint matches are flagged.
    /// Matches are still used; the flag is for the caller.
    pub match_cutoff_km: f64,

    /// Feasibility policy used when a request does not say.
    pub feasibility: FeasibilityPolicy,

    /// How catalogue links are priced.
    pub pricing: PricingPolicy,
}

impl PlannerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        default_paths: usize,
        max_paths: usize,
        weights: ScoreWeights,
        match_cutoff_km: f64,
        feasibility: FeasibilityPolicy,
        pricing: PricingPolicy,
    ) -> Self {
        Self {
            default_paths,
            max_paths,
            weights,
            match_cutoff_km,
            feasibility,
            pricing,
        }
    }

    /// Number of paths to search for, given what the request asked for.
    pub fn path_count(&self, requested: Option<usize>) -> usize {
        requested.unwrap_or(self.default_paths).min(self.max_paths)
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            default_paths: 3,
            max_paths: 10,
            weights: ScoreWeights::default(),
            match_cutoff_km: 1000.0,
            feasibility: FeasibilityPolicy::Annotate,
            pricing: PricingPolicy::Static,
        }
    }
}
