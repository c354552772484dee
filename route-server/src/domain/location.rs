//! Location types.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{ModeSet, TransportMode};

/// Index of a location within the registry that issued it.
///
/// Ids are only meaningful for the network they came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocationId(pub usize);

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A point on the Earth's surface, in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns true if both components are finite and within range.
    ///
    /// ```
    /// use route_server::domain::Coordinates;
    ///
    /// assert!(Coordinates::new(51.5, -0.12).is_valid());
    /// assert!(!Coordinates::new(91.0, 0.0).is_valid());
    /// assert!(!Coordinates::new(f64::NAN, 0.0).is_valid());
    /// ```
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// What kind of place a location is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationKind {
    City,
    Seaport,
    Station,
    Hub,
}

impl LocationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LocationKind::City => "city",
            LocationKind::Seaport => "seaport",
            LocationKind::Station => "station",
            LocationKind::Hub => "hub",
        }
    }
}

impl fmt::Display for LocationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named place in the transport network.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub name: String,
    pub kind: LocationKind,
    /// Modes this location can dispatch or receive.
    pub modes: ModeSet,
    pub coordinates: Coordinates,
}

impl Location {
    pub fn new(
        name: impl Into<String>,
        kind: LocationKind,
        modes: ModeSet,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            modes,
            coordinates: Coordinates::new(latitude, longitude),
        }
    }

    pub fn supports(&self, mode: TransportMode) -> bool {
        self.modes.contains(mode)
    }
}
