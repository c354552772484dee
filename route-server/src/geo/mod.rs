//! Great-circle geometry and nearest-location matching.

mod matcher;

pub use matcher::{MatchResult, NearestLocationMatcher};

use ::geo::{Distance, HaversineMeasure, Point};

use crate::domain::Coordinates;

/// Mean Earth radius used by [`haversine_km`].
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two points in kilometres, assuming a
/// spherical Earth.
///
/// # Examples
///
/// ```
/// use route_server::domain::Coordinates;
/// use route_server::geo::haversine_km;
///
/// let london = Coordinates::new(51.5074, -0.1278);
/// let paris = Coordinates::new(48.8566, 2.3522);
/// let d = haversine_km(london, paris);
/// assert!((d - 343.5).abs() < 1.0);
/// ```
pub fn haversine_km(a: Coordinates, b: Coordinates) -> f64 {
    EARTH.distance(point(a), point(b)) / 1000.0
}

const EARTH: HaversineMeasure = HaversineMeasure::new(EARTH_RADIUS_KM * 1000.0);

/// `geo` points are (x, y), so longitude first.
fn point(c: Coordinates) -> Point {
    Point::new(c.longitude, c.latitude)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_point_is_zero() {
        let p = Coordinates::new(19.076, 72.8777);
        assert_eq!(haversine_km(p, p), 0.0);
    }

    #[test]
    fn known_distances() {
        let delhi = Coordinates::new(28.6139, 77.209);
        let mumbai = Coordinates::new(19.076, 72.8777);
        let d = haversine_km(delhi, mumbai);
        assert!((d - 1153.0).abs() < 5.0, "got {d}");

        let new_york = Coordinates::new(40.7128, -74.006);
        let los_angeles = Coordinates::new(34.0522, -118.2437);
        let d = haversine_km(new_york, los_angeles);
        assert!((d - 3936.0).abs() < 10.0, "got {d}");
    }

    #[test]
    fn one_degree_on_the_equator() {
        let d = haversine_km(Coordinates::new(0.0, 0.0), Coordinates::new(0.0, 1.0));
        assert!((d - EARTH_RADIUS_KM * 1f64.to_radians()).abs() < 1e-9, "got {d}");
    }

    #[test]
    fn antipodes_are_half_circumference() {
        let d = haversine_km(Coordinates::new(0.0, 0.0), Coordinates::new(0.0, 180.0));
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1e-6);
    }
}
