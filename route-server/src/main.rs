use std::net::SocketAddr;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use route_server::cache::{CacheConfig, CachedPlanner};
use route_server::catalogue::{Catalogue, world};
use route_server::fare::FareTable;
use route_server::network::{ModeTable, PricingPolicy};
use route_server::planner::PlannerConfig;
use route_server::web::{AppState, create_router};

const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("route_server=info,tower_http=info")),
        )
        .init();

    let addr: SocketAddr = std::env::var("ROUTE_SERVER_ADDR")
        .unwrap_or_else(|_| DEFAULT_ADDR.to_string())
        .parse()
        .expect("ROUTE_SERVER_ADDR must be a socket address");

    let pricing = match std::env::var("ROUTE_PRICING") {
        Ok(name) => PricingPolicy::parse(&name)
            .expect("ROUTE_PRICING must be `static` or `synthesized`"),
        Err(_) => PricingPolicy::default(),
    };

    // Load the catalogue (fail fast if it is unreadable)
    let catalogue = match std::env::var("ROUTE_CATALOGUE") {
        Ok(path) => {
            info!(%path, "loading catalogue");
            Catalogue::from_path(&path).expect("Failed to load catalogue")
        }
        Err(_) => {
            warn!("ROUTE_CATALOGUE not set, using built-in world catalogue");
            world()
        }
    };

    let config = PlannerConfig {
        pricing,
        ..PlannerConfig::default()
    };

    // A catalogue that does not form a valid network must not serve requests
    let planner = CachedPlanner::new(
        catalogue,
        ModeTable::default(),
        config,
        &CacheConfig::default(),
    )
    .expect("Catalogue does not form a valid network");

    let state = AppState::new(planner, FareTable::default());
    let app = create_router(state);

    info!(%addr, ?pricing, "route planner listening");
    info!("  GET  /health                 - Health check");
    info!("  POST /logistics/find-routes  - Find routes between two points");
    info!("  GET  /api/locations          - List catalogue locations");
    info!("  GET  /api/locations/nearest  - Nearest location to lat/lng");
    info!("  GET  /api/fares              - Last-mile fares for distance_km");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind listener");
    axum::serve(listener, app).await.expect("server error");
}
