//! Data transfer objects for web requests and responses.
//!
//! Field names are camelCase on the wire.

use serde::{Deserialize, Serialize};

use crate::domain::{Coordinates, LocationKind, ModeSet, TransportMode};
use crate::fare::FareQuote;
use crate::geo::MatchResult;
use crate::network::Network;
use crate::planner::{
    FeasibilityPolicy, PlanError, RouteOption, RoutePlan, RouteRequest, ScoreWeights,
};

/// A point as sent by clients; either component may be missing.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PointDto {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl PointDto {
    fn coordinates(&self) -> Option<Coordinates> {
        Some(Coordinates::new(self.latitude?, self.longitude?))
    }
}

/// Request to find routes between two points.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindRoutesRequest {
    /// Label for the source, echoed back
    pub source: Option<String>,

    /// Label for the destination, echoed back
    pub destination: Option<String>,

    /// Shipment weight
    pub weight: Option<f64>,

    /// Number of units
    pub quantity: Option<f64>,

    pub source_coords: Option<PointDto>,
    pub dest_coords: Option<PointDto>,

    /// Allowed modes (default all)
    pub modes: Option<Vec<String>>,

    pub cost_weight: Option<f64>,
    pub time_weight: Option<f64>,

    /// Number of routes to return
    pub k: Option<usize>,

    /// Drop routes that cannot carry the weight instead of flagging them
    pub enforce_feasibility: Option<bool>,
}

impl FindRoutesRequest {
    /// Convert to a planner request.
    ///
    /// Every missing required field is reported in one error.
    pub fn into_route_request(self) -> Result<RouteRequest, PlanError> {
        let source = self.source.filter(|s| !s.trim().is_empty());
        let destination = self.destination.filter(|s| !s.trim().is_empty());
        let source_coords = self.source_coords.and_then(|p| p.coordinates());
        let dest_coords = self.dest_coords.and_then(|p| p.coordinates());

        let mut missing = Vec::new();
        if source.is_none() {
            missing.push("source");
        }
        if destination.is_none() {
            missing.push("destination");
        }
        if self.weight.is_none() {
            missing.push("weight");
        }
        if self.quantity.is_none() {
            missing.push("quantity");
        }
        if source_coords.is_none() {
            missing.push("sourceCoords");
        }
        if dest_coords.is_none() {
            missing.push("destCoords");
        }

        let (
            Some(source),
            Some(destination),
            Some(weight),
            Some(quantity),
            Some(source_coords),
            Some(dest_coords),
        ) = (
            source,
            destination,
            self.weight,
            self.quantity,
            source_coords,
            dest_coords,
        )
        else {
            return Err(PlanError::InvalidRequest(format!(
                "Missing required parameters: {}",
                missing.join(", ")
            )));
        };

        let mut request = RouteRequest::new(
            source,
            source_coords,
            destination,
            dest_coords,
            weight,
            quantity,
        );

        if let Some(names) = self.modes {
            let modes = names
                .iter()
                .map(|name| TransportMode::parse(name))
                .collect::<Result<ModeSet, _>>()
                .map_err(|e| PlanError::InvalidRequest(e.to_string()))?;
            request = request.with_modes(modes);
        }

        if self.cost_weight.is_some() || self.time_weight.is_some() {
            let defaults = ScoreWeights::default();
            request = request.with_weights(ScoreWeights::new(
                self.cost_weight.unwrap_or(defaults.cost),
                self.time_weight.unwrap_or(defaults.time),
            ));
        }

        if let Some(k) = self.k {
            request = request.with_k(k);
        }

        if let Some(enforce) = self.enforce_feasibility {
            request = request.with_feasibility(if enforce {
                FeasibilityPolicy::Enforce
            } else {
                FeasibilityPolicy::Annotate
            });
        }

        Ok(request)
    }
}

/// One leg of a route.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentResult {
    pub from: String,
    pub to: String,
    pub mode: TransportMode,
    pub cost: f64,
    pub time: f64,
    pub capacity: f64,
    pub from_coords: Coordinates,
    pub to_coords: Coordinates,
}

/// How a request endpoint was matched to the network.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchInfo {
    /// Label the client sent
    pub selected: String,

    /// Network location it was matched to
    pub mapped_to: String,

    /// Distance from the client's point, in km
    pub distance: f64,

    /// Whether the match lies beyond the configured cutoff
    pub beyond_cutoff: bool,
}

impl MatchInfo {
    fn new(selected: &str, matched: &MatchResult) -> Self {
        Self {
            selected: selected.to_string(),
            mapped_to: matched.name.clone(),
            distance: matched.distance_km,
            beyond_cutoff: matched.beyond_cutoff,
        }
    }
}

/// A route option.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteResult {
    /// Location names, origin first
    pub path: Vec<String>,
    pub segments: Vec<SegmentResult>,
    pub total_cost: f64,
    /// Hours
    pub total_time: f64,
    pub feasible: bool,
    pub source_info: MatchInfo,
    pub destination_info: MatchInfo,
}

impl RouteResult {
    /// Create from a planned option, naming locations from `network`.
    pub fn from_option(
        option: &RouteOption,
        plan: &RoutePlan,
        request: &RouteRequest,
        network: &Network,
    ) -> Self {
        let name = |id| network.location(id).name.clone();
        let path = &option.path;

        Self {
            path: path.locations().iter().map(|id| name(*id)).collect(),
            segments: path
                .segments()
                .iter()
                .map(|s| SegmentResult {
                    from: name(s.from),
                    to: name(s.to),
                    mode: s.mode,
                    cost: s.cost,
                    time: s.time,
                    capacity: s.capacity,
                    from_coords: s.from_coords,
                    to_coords: s.to_coords,
                })
                .collect(),
            total_cost: path.cost(),
            total_time: path.time(),
            feasible: option.feasible,
            source_info: MatchInfo::new(&request.source_label, &plan.source),
            destination_info: MatchInfo::new(&request.destination_label, &plan.destination),
        }
    }
}

/// Successful response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// A catalogue location.
#[derive(Debug, Serialize)]
pub struct LocationResult {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: LocationKind,
    pub modes: ModeSet,
    pub latitude: f64,
    pub longitude: f64,
}

/// Query for the nearest location.
#[derive(Debug, Deserialize)]
pub struct NearestQuery {
    pub lat: f64,
    pub lng: f64,
}

/// Nearest-location lookup result.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NearestResult {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: LocationKind,
    pub latitude: f64,
    pub longitude: f64,
    /// km
    pub distance: f64,
    pub beyond_cutoff: bool,
}

/// Query for last-mile fares.
#[derive(Debug, Deserialize)]
pub struct FareQuery {
    pub distance_km: f64,
}

/// Last-mile fares for a distance.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FaresResult {
    pub distance_km: f64,
    pub fares: Vec<FareQuote>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}
