//! Nearest-location matching.
//!
//! Maps an arbitrary query coordinate onto the closest registered location.
//! The optional cutoff is informational: the closest location is always
//! returned, flagged when it lies beyond the cutoff, and the caller decides
//! whether that is acceptable.

use tracing::trace;

use super::haversine_km;
use crate::domain::{Coordinates, LocationId};
use crate::network::LocationRegistry;

/// The registered location closest to a query point.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    pub location: LocationId,
    pub name: String,
    pub coordinates: Coordinates,

    /// Great-circle distance from the query point, in km.
    pub distance_km: f64,

    /// True if `distance_km` exceeds the matcher's cutoff.
    pub beyond_cutoff: bool,
}

/// Linear-scan nearest neighbour over a [`LocationRegistry`].
pub struct NearestLocationMatcher<'a> {
    registry: &'a LocationRegistry,
    cutoff_km: f64,
}

impl<'a> NearestLocationMatcher<'a> {
    /// Create a matcher with no cutoff.
    pub fn new(registry: &'a LocationRegistry) -> Self {
        Self {
            registry,
            cutoff_km: f64::INFINITY,
        }
    }

    /// Set the distance beyond which matches are flagged.
    pub fn with_cutoff(mut self, cutoff_km: f64) -> Self {
        self.cutoff_km = cutoff_km;
        self
    }

    pub fn cutoff_km(&self) -> f64 {
        self.cutoff_km
    }

    /// Find the location closest to `query`.
    ///
    /// Ties go to the location registered first. Returns `None` only when
    /// the registry is empty.
    pub fn nearest(&self, query: Coordinates) -> Option<MatchResult> {
        let mut best: Option<(LocationId, f64)> = None;

        for (id, location) in self.registry.iter() {
            let distance = haversine_km(query, location.coordinates);
            trace!(location = %location.name, distance_km = distance, "match candidate");

            if best.is_none_or(|(_, d)| distance < d) {
                best = Some((id, distance));
            }
        }

        let (id, distance_km) = best?;
        let location = &self.registry[id];

        Some(MatchResult {
            location: id,
            name: location.name.clone(),
            coordinates: location.coordinates,
            distance_km,
            beyond_cutoff: distance_km > self.cutoff_km,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Location, LocationKind, ModeSet};

    fn registry(points: &[(&str, f64, f64)]) -> LocationRegistry {
        let mut reg = LocationRegistry::new();
        for (name, lat, lng) in points {
            reg.upsert(Location::new(*name, LocationKind::City, ModeSet::all(), *lat, *lng));
        }
        reg
    }

    #[test]
    fn empty_registry_has_no_match() {
        let reg = LocationRegistry::new();
        assert!(NearestLocationMatcher::new(&reg)
            .nearest(Coordinates::new(0.0, 0.0))
            .is_none());
    }

    #[test]
    fn exact_coordinates_match_with_zero_distance() {
        let reg = registry(&[
            ("Delhi", 28.6139, 77.209),
            ("Mumbai", 19.076, 72.8777),
        ]);

        let m = NearestLocationMatcher::new(&reg)
            .nearest(Coordinates::new(19.076, 72.8777))
            .unwrap();
        assert_eq!(m.name, "Mumbai");
        assert_eq!(m.distance_km, 0.0);
        assert!(!m.beyond_cutoff);
    }

    #[test]
    fn nearby_point_maps_to_closest() {
        let reg = registry(&[
            ("Delhi", 28.6139, 77.209),
            ("Mumbai", 19.076, 72.8777),
            ("Pune", 18.5204, 73.8567),
        ]);

        // Pimpri, just outside Pune
        let m = NearestLocationMatcher::new(&reg)
            .nearest(Coordinates::new(18.6298, 73.8131))
            .unwrap();
        assert_eq!(m.name, "Pune");
        assert!(m.distance_km < 20.0);
    }

    #[test]
    fn distant_query_still_matches() {
        let reg = registry(&[("London", 51.5074, -0.1278), ("Paris", 48.8566, 2.3522)]);

        // Middle of the South Pacific
        let m = NearestLocationMatcher::new(&reg)
            .with_cutoff(1000.0)
            .nearest(Coordinates::new(-40.0, -130.0))
            .unwrap();
        assert!(m.distance_km > 10_000.0);
        assert!(m.beyond_cutoff);
    }

    #[test]
    fn ties_go_to_first_registered() {
        let reg = registry(&[("East", 0.0, 1.0), ("West", 0.0, -1.0)]);

        let m = NearestLocationMatcher::new(&reg)
            .nearest(Coordinates::new(0.0, 0.0))
            .unwrap();
        assert_eq!(m.name, "East");
    }

    #[test]
    fn default_cutoff_is_unbounded() {
        let reg = registry(&[("Only", 0.0, 0.0)]);
        let matcher = NearestLocationMatcher::new(&reg);
        assert_eq!(matcher.cutoff_km(), f64::INFINITY);

        let m = matcher.nearest(Coordinates::new(80.0, 170.0)).unwrap();
        assert!(!m.beyond_cutoff);
    }
}
