//! Per-mode transport economics.
//!
//! Capacity, distance rate and average speed are looked up by mode. They are
//! configuration rather than constants so tests and deployments can swap in
//! their own numbers.

use serde::{Deserialize, Serialize};

use crate::domain::TransportMode;

/// Economics of a single transport mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModeProfile {
    /// Heaviest shipment a link of this mode can carry.
    pub capacity: f64,

    /// Cost per kilometre per unit of load, used when pricing links from
    /// distance.
    pub rate_per_km: f64,

    /// Average speed in km/h, used when timing links from distance.
    pub speed_kmh: f64,
}

impl ModeProfile {
    pub fn new(capacity: f64, rate_per_km: f64, speed_kmh: f64) -> Self {
        Self {
            capacity,
            rate_per_km,
            speed_kmh,
        }
    }
}

/// Lookup table from mode to its [`ModeProfile`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModeTable {
    pub air: ModeProfile,
    pub sea: ModeProfile,
    pub land: ModeProfile,
    pub rail: ModeProfile,
}

impl ModeTable {
    pub fn profile(&self, mode: TransportMode) -> &ModeProfile {
        match mode {
            TransportMode::Air => &self.air,
            TransportMode::Sea => &self.sea,
            TransportMode::Land => &self.land,
            TransportMode::Rail => &self.rail,
        }
    }

    pub fn capacity(&self, mode: TransportMode) -> f64 {
        self.profile(mode).capacity
    }

    /// Returns a copy of the table with one mode's profile replaced.
    pub fn with_profile(mut self, mode: TransportMode, profile: ModeProfile) -> Self {
        match mode {
            TransportMode::Air => self.air = profile,
            TransportMode::Sea => self.sea = profile,
            TransportMode::Land => self.land = profile,
            TransportMode::Rail => self.rail = profile,
        }
        self
    }
}

impl Default for ModeTable {
    fn default() -> Self {
        Self {
            air: ModeProfile::new(1000.0, 0.05, 800.0),
            sea: ModeProfile::new(5000.0, 0.01, 35.0),
            land: ModeProfile::new(2000.0, 0.02, 60.0),
            rail: ModeProfile::new(3000.0, 0.015, 80.0),
        }
    }
}
