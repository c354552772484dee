//! Last-mile fare estimates.
//!
//! Quotes what a local vehicle would charge to carry a shipment between a
//! query point and the network location it was matched to.

use serde::{Deserialize, Serialize};

/// Local vehicle class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VehicleClass {
    Bike,
    Auto,
    CabEconomy,
    CabPremium,
}

impl VehicleClass {
    pub const ALL: [VehicleClass; 4] = [
        VehicleClass::Bike,
        VehicleClass::Auto,
        VehicleClass::CabEconomy,
        VehicleClass::CabPremium,
    ];
}

/// Base fare plus a per-km rate, never less than a minimum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FareRate {
    pub base: f64,
    pub per_km: f64,
    pub minimum: f64,
}

impl FareRate {
    pub fn new(base: f64, per_km: f64, minimum: f64) -> Self {
        Self {
            base,
            per_km,
            minimum,
        }
    }

    pub fn fare(&self, distance_km: f64) -> f64 {
        (self.base + distance_km * self.per_km).max(self.minimum)
    }
}

/// Error from fare quoting.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FareError {
    #[error("distance must be a non-negative number of km (got {0})")]
    InvalidDistance(f64),
}

/// One class's fare for a distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FareQuote {
    pub class: VehicleClass,
    pub fare: f64,
}

/// Fare rates per vehicle class.
#[derive(Debug, Clone, PartialEq)]
pub struct FareTable {
    rates: Vec<(VehicleClass, FareRate)>,
}

impl FareTable {
    pub fn new(rates: Vec<(VehicleClass, FareRate)>) -> Self {
        Self { rates }
    }

    pub fn rate(&self, class: VehicleClass) -> Option<&FareRate> {
        self.rates.iter().find(|(c, _)| *c == class).map(|(_, r)| r)
    }

    /// Fares for every class, in table order.
    pub fn quote(&self, distance_km: f64) -> Result<Vec<FareQuote>, FareError> {
        if !(distance_km.is_finite() && distance_km >= 0.0) {
            return Err(FareError::InvalidDistance(distance_km));
        }
        Ok(self
            .rates
            .iter()
            .map(|(class, rate)| FareQuote {
                class: *class,
                fare: rate.fare(distance_km),
            })
            .collect())
    }
}

impl Default for FareTable {
    fn default() -> Self {
        Self::new(vec![
            (VehicleClass::Bike, FareRate::new(10.0, 5.0, 25.0)),
            (VehicleClass::Auto, FareRate::new(15.0, 7.0, 30.0)),
            (VehicleClass::CabEconomy, FareRate::new(20.0, 10.0, 50.0)),
            (VehicleClass::CabPremium, FareRate::new(30.0, 15.0, 70.0)),
        ])
    }
}
