//! HTTP route handlers.

use axum::body::Bytes;
use axum::extract::rejection::QueryRejection;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::domain::Coordinates;
use crate::fare::FareError;
use crate::geo::NearestLocationMatcher;
use crate::planner::PlanError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/logistics/find-routes", post(find_routes))
        .route("/api/locations", get(list_locations))
        .route("/api/locations/nearest", get(nearest_location))
        .route("/api/fares", get(fares))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Find ranked routes between two points.
async fn find_routes(State(state): State<AppState>, body: Bytes) -> Result<Response, AppError> {
    // Parse JSON manually so we can log the body on failure
    let req: FindRoutesRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, body = %String::from_utf8_lossy(&body), "unparseable request");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    let request = req.into_route_request()?;
    let plan = state.planner.plan(&request).await?;

    let network = state.planner.network();
    let routes: Vec<RouteResult> = plan
        .options
        .iter()
        .map(|option| RouteResult::from_option(option, &plan, &request, network))
        .collect();

    Ok(Json(DataResponse::new(routes)).into_response())
}

/// List every catalogue location.
async fn list_locations(State(state): State<AppState>) -> Json<DataResponse<Vec<LocationResult>>> {
    let locations = state
        .planner
        .network()
        .registry()
        .iter()
        .map(|(_, l)| LocationResult {
            name: l.name.clone(),
            kind: l.kind,
            modes: l.modes,
            latitude: l.coordinates.latitude,
            longitude: l.coordinates.longitude,
        })
        .collect();

    Json(DataResponse::new(locations))
}

/// Find the location nearest to a point.
async fn nearest_location(
    State(state): State<AppState>,
    query: Result<Query<NearestQuery>, QueryRejection>,
) -> Result<Json<DataResponse<NearestResult>>, AppError> {
    let Query(query) = query?;
    let point = Coordinates::new(query.lat, query.lng);
    if !point.is_valid() {
        return Err(AppError::BadRequest {
            message: format!("Invalid coordinates: {}, {}", query.lat, query.lng),
        });
    }

    let network = state.planner.network();
    let matched = NearestLocationMatcher::new(network.registry())
        .with_cutoff(state.planner.config().match_cutoff_km)
        .nearest(point)
        .ok_or(PlanError::NoLocationAvailable)?;

    Ok(Json(DataResponse::new(NearestResult {
        kind: network.location(matched.location).kind,
        name: matched.name,
        latitude: matched.coordinates.latitude,
        longitude: matched.coordinates.longitude,
        distance: matched.distance_km,
        beyond_cutoff: matched.beyond_cutoff,
    })))
}

/// Quote last-mile fares for a distance.
async fn fares(
    State(state): State<AppState>,
    query: Result<Query<FareQuery>, QueryRejection>,
) -> Result<Json<DataResponse<FaresResult>>, AppError> {
    let Query(query) = query?;
    let fares = state.fares.quote(query.distance_km)?;
    Ok(Json(DataResponse::new(FaresResult {
        distance_km: query.distance_km,
        fares,
    })))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<PlanError> for AppError {
    fn from(e: PlanError) -> Self {
        match e {
            PlanError::InvalidRequest(message) => AppError::BadRequest { message },
            PlanError::NoLocationAvailable => AppError::NotFound {
                message: "Could not find suitable nodes for route calculation".to_string(),
            },
            PlanError::NoPathFound { .. } => AppError::NotFound {
                message: "No valid routes found between the selected locations".to_string(),
            },
            PlanError::NoFeasibleRoute { weight, .. } => AppError::NotFound {
                message: format!("No route can carry a shipment weighing {weight}"),
            },
            PlanError::Network(_) => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl From<FareError> for AppError {
    fn from(e: FareError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest {
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse {
            success: false,
            message,
        });
        (status, body).into_response()
    }
}
