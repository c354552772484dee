//! Built-in world catalogue.

use super::{Catalogue, LinkRecord, LocationRecord};
use crate::domain::{LocationKind, ModeSet, TransportMode};

use LocationKind::{City, Hub, Seaport, Station};
use TransportMode::{Air, Land, Rail, Sea};

fn location(
    name: &str,
    kind: LocationKind,
    modes: &[TransportMode],
    lat: f64,
    lng: f64,
) -> LocationRecord {
    LocationRecord {
        name: name.to_string(),
        kind,
        modes: modes.iter().copied().collect::<ModeSet>(),
        lat,
        lng,
    }
}

fn link(from: &str, to: &str, mode: TransportMode, cost: f64, time: f64) -> LinkRecord {
    LinkRecord {
        from: from.to_string(),
        to: to.to_string(),
        mode,
        cost,
        time,
    }
}

/// Major cities, ports and hubs across India, the Gulf, Europe, Asia and
/// North America, plus the Pune area, with their air, sea, land and rail
/// links.
pub fn world() -> Catalogue {
    let locations = vec![
        // India
        location("Delhi", City, &[Land, Air], 28.6139, 77.209),
        location("Mumbai", City, &[Land, Air, Sea, Rail], 19.076, 72.8777),
        location("Chennai", City, &[Land, Air, Sea], 13.0827, 80.2707),
        location("Bangalore", City, &[Land, Air], 12.9716, 77.5946),
        location("Kolkata", City, &[Land, Air, Sea], 22.5726, 88.3639),
        location("Hyderabad", City, &[Land, Air], 17.385, 78.4867),
        // Pune area
        location("Pune", Hub, &[Air, Land], 18.5204, 73.8567),
        location("Pune Railway", Station, &[Rail], 18.5285, 73.8743),
        location("Pimpri", Station, &[Land], 18.6298, 73.8131),
        location("Chinchwad", Station, &[Land], 18.6298, 73.7997),
        // Europe
        location("Rotterdam", Seaport, &[Sea, Land], 51.9244, 4.4777),
        location("Hamburg", Seaport, &[Sea, Land], 53.5488, 9.9872),
        location("London", City, &[Land, Air], 51.5074, -0.1278),
        location("Paris", City, &[Land, Air], 48.8566, 2.3522),
        location("Amsterdam", City, &[Land, Air, Sea], 52.3676, 4.9041),
        location("Frankfurt", City, &[Land, Air], 50.1109, 8.6821),
        // Middle East
        location("Dubai", City, &[Land, Air, Sea], 25.2048, 55.2708),
        location("Abu Dhabi", City, &[Land, Air, Sea], 24.4539, 54.3773),
        location("Doha", City, &[Land, Air, Sea], 25.2854, 51.531),
        // Asia
        location("Singapore", City, &[Land, Air, Sea], 1.3521, 103.8198),
        location("Hong Kong", City, &[Air, Sea], 22.3193, 114.1694),
        location("Shanghai", City, &[Land, Air, Sea], 31.2304, 121.4737),
        // Americas
        location("New York", City, &[Land, Air, Sea], 40.7128, -74.006),
        location("Los Angeles", City, &[Land, Air, Sea], 34.0522, -118.2437),
    ];

    let links = vec![
        // India
        link("Delhi", "Dubai", Air, 300.0, 4.0),
        link("Delhi", "Mumbai", Land, 100.0, 24.0),
        link("Delhi", "Mumbai", Air, 150.0, 2.0),
        link("Mumbai", "Dubai", Air, 250.0, 3.5),
        link("Mumbai", "Dubai", Sea, 180.0, 72.0),
        link("Chennai", "Singapore", Air, 400.0, 5.5),
        link("Chennai", "Singapore", Sea, 200.0, 120.0),
        link("Mumbai", "Singapore", Sea, 300.0, 168.0),
        link("Kolkata", "Hong Kong", Air, 450.0, 4.5),
        // Pune area
        link("Pune", "Mumbai", Land, 40.0, 4.0),
        link("Pune", "Delhi", Air, 140.0, 2.0),
        link("Pune Railway", "Mumbai", Rail, 30.0, 3.5),
        link("Pimpri", "Pune", Land, 10.0, 0.75),
        link("Chinchwad", "Pimpri", Land, 5.0, 0.25),
        // Middle East
        link("Dubai", "London", Air, 500.0, 7.0),
        link("Dubai", "Rotterdam", Sea, 800.0, 240.0),
        link("Dubai", "Singapore", Air, 450.0, 7.5),
        link("Dubai", "Doha", Land, 80.0, 8.0),
        link("Abu Dhabi", "Doha", Air, 120.0, 1.0),
        // Europe
        link("London", "Rotterdam", Land, 150.0, 8.0),
        link("London", "Paris", Land, 100.0, 5.0),
        link("Paris", "Frankfurt", Land, 120.0, 6.0),
        link("Rotterdam", "Hamburg", Land, 180.0, 7.0),
        link("Rotterdam", "Amsterdam", Land, 50.0, 1.5),
        link("Frankfurt", "Hamburg", Land, 150.0, 6.0),
        // Asia
        link("Singapore", "Hong Kong", Air, 350.0, 4.0),
        link("Singapore", "Hong Kong", Sea, 200.0, 96.0),
        link("Hong Kong", "Shanghai", Air, 250.0, 3.0),
        link("Hong Kong", "Shanghai", Sea, 150.0, 72.0),
        // Trans-Atlantic
        link("London", "New York", Air, 800.0, 8.0),
        link("Rotterdam", "New York", Sea, 600.0, 168.0),
        link("Paris", "New York", Air, 850.0, 8.5),
        // Americas
        link("New York", "Los Angeles", Air, 400.0, 6.0),
        link("New York", "Los Angeles", Land, 300.0, 48.0),
    ];

    Catalogue { locations, links }
}
