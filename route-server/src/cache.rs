//! Caching layer for computed path sets.
//!
//! Under static pricing the network never changes, so the alternate paths
//! between two locations depend only on the search parameters: the matched
//! endpoints, how many paths were asked for, the score weights and the
//! allowed modes. Those path sets are cached. Feasibility depends on the
//! shipment weight and is applied to every request afresh.
//!
//! Under synthesized pricing, link costs depend on the shipment load, so a
//! private network is built for each request and nothing is cached.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::debug;

use crate::catalogue::Catalogue;
use crate::domain::{LocationId, Path};
use crate::network::{ModeTable, Network, NetworkError, PricingPolicy};
use crate::planner::{
    Endpoints, PlanError, Planner, PlannerConfig, RoutePlan, RouteRequest, SolverOptions,
};

/// Cache key for a path set.
///
/// Score weights are keyed by their bit patterns so the key can be `Eq`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PathKey {
    source: LocationId,
    destination: LocationId,
    k: usize,
    cost_weight: u64,
    time_weight: u64,
    modes: u8,
}

impl PathKey {
    pub fn new(endpoints: &Endpoints, options: &SolverOptions, k: usize) -> Self {
        Self {
            source: endpoints.source.location,
            destination: endpoints.destination.location,
            k,
            cost_weight: options.weights.cost.to_bits(),
            time_weight: options.weights.time.to_bits(),
            modes: options.modes.bits(),
        }
    }
}

/// Cached path set entry.
type PathEntry = Arc<Vec<Path>>;

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(300),
            max_capacity: 1000,
        }
    }
}

/// Cache of alternate path sets.
pub struct PathCache {
    paths: MokaCache<PathKey, PathEntry>,
}

impl PathCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let paths = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { paths }
    }

    pub async fn get(&self, key: &PathKey) -> Option<PathEntry> {
        self.paths.get(key).await
    }

    pub async fn insert(&self, key: PathKey, entry: PathEntry) {
        self.paths.insert(key, entry).await;
    }

    /// Get cache statistics (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.paths.entry_count()
    }
}

/// Route planner over a shared network, with cached path sets.
///
/// Holds the catalogue as well as the network built from it so that
/// synthesized pricing can build per-request networks.
pub struct CachedPlanner {
    catalogue: Catalogue,
    network: Arc<Network>,
    config: PlannerConfig,
    cache: PathCache,
}

impl CachedPlanner {
    /// Build the shared network and an empty cache.
    ///
    /// # Errors
    ///
    /// Fails if the catalogue does not form a valid network; such a
    /// catalogue must not serve requests.
    pub fn new(
        catalogue: Catalogue,
        modes: ModeTable,
        config: PlannerConfig,
        cache_config: &CacheConfig,
    ) -> Result<Self, NetworkError> {
        let network = catalogue.build(&modes, PricingPolicy::Static, 1.0)?;
        Ok(Self {
            catalogue,
            network: Arc::new(network),
            config,
            cache: PathCache::new(cache_config),
        })
    }

    /// The shared network, priced statically.
    pub fn network(&self) -> &Arc<Network> {
        &self.network
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn cache(&self) -> &PathCache {
        &self.cache
    }

    /// Plan routes for `request` under the configured pricing policy.
    pub async fn plan(&self, request: &RouteRequest) -> Result<RoutePlan, PlanError> {
        request.validate()?;

        match self.config.pricing {
            PricingPolicy::Static => self.plan_shared(request).await,
            PricingPolicy::Synthesized => self.plan_private(request),
        }
    }

    async fn plan_shared(&self, request: &RouteRequest) -> Result<RoutePlan, PlanError> {
        let planner = Planner::new(&self.network, &self.config);
        let endpoints = planner.resolve(request)?;
        let key = PathKey::new(
            &endpoints,
            &planner.solver_options(request),
            self.config.path_count(request.k),
        );

        let paths = match self.cache.get(&key).await {
            Some(cached) => {
                debug!(?key, "path cache hit");
                cached
            }
            None => {
                let entry = Arc::new(planner.alternatives(&endpoints, request));
                self.cache.insert(key, entry.clone()).await;
                entry
            }
        };

        planner.assemble(request, endpoints, paths.as_ref().clone())
    }

    fn plan_private(&self, request: &RouteRequest) -> Result<RoutePlan, PlanError> {
        let network = self.catalogue.build(
            self.network.modes(),
            PricingPolicy::Synthesized,
            request.load(),
        )?;
        Planner::new(&network, &self.config).plan(request)
    }
}
