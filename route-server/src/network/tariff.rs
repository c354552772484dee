//! Link pricing.
//!
//! A link's cost and time either come straight from the catalogue or are
//! derived from the great-circle distance between its endpoints. Both go
//! through [`Tariff::price`], so the network has a single link construction
//! path regardless of pricing policy.

use serde::{Deserialize, Serialize};

use super::{ModeProfile, NetworkError};

/// How a single link is priced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tariff {
    /// Cost and time as given.
    Fixed { cost: f64, time: f64 },

    /// Cost and time derived from distance for a shipment of `load`
    /// (weight × quantity).
    Distance { load: f64 },
}

impl Tariff {
    /// Resolve this tariff to `(cost, time)` for a link of `distance_km`
    /// travelled under `profile`.
    ///
    /// Distance pricing charges `distance × rate × load` and takes
    /// `ceil(distance / speed)` hours.
    pub fn price(
        &self,
        distance_km: f64,
        profile: &ModeProfile,
    ) -> Result<(f64, f64), NetworkError> {
        match *self {
            Tariff::Fixed { cost, time } => {
                if !is_non_negative(cost) || !is_non_negative(time) {
                    return Err(NetworkError::InvalidTariff(format!(
                        "cost and time must be finite and non-negative (got {cost}, {time})"
                    )));
                }
                Ok((cost, time))
            }
            Tariff::Distance { load } => {
                if !is_non_negative(load) {
                    return Err(NetworkError::InvalidTariff(format!(
                        "load must be finite and non-negative (got {load})"
                    )));
                }
                let speed_ok = profile.speed_kmh.is_finite() && profile.speed_kmh > 0.0;
                if !speed_ok || !is_non_negative(profile.rate_per_km) {
                    return Err(NetworkError::InvalidTariff(
                        "mode profile needs a positive speed and a non-negative rate".to_string(),
                    ));
                }
                let cost = distance_km * profile.rate_per_km * load;
                let time = (distance_km / profile.speed_kmh).ceil();
                Ok((cost, time))
            }
        }
    }
}

fn is_non_negative(x: f64) -> bool {
    x.is_finite() && x >= 0.0
}

/// Network-wide pricing policy: which kind of [`Tariff`] catalogue links get.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PricingPolicy {
    /// Use the catalogue's cost and time.
    #[default]
    Static,

    /// Derive cost and time from distance and the shipment load.
    Synthesized,
}

impl PricingPolicy {
    /// Parse a policy name (`static` or `synthesized`).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "static" => Some(PricingPolicy::Static),
            "synthesized" | "synthesised" | "distance" => Some(PricingPolicy::Synthesized),
            _ => None,
        }
    }

    /// The tariff for a catalogue link with the given static figures.
    pub fn tariff(&self, cost: f64, time: f64, load: f64) -> Tariff {
        match self {
            PricingPolicy::Static => Tariff::Fixed { cost, time },
            PricingPolicy::Synthesized => Tariff::Distance { load },
        }
    }
}
