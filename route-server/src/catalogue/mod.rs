//! Location and link catalogue.
//!
//! The catalogue is plain data: the places a shipment can pass through and
//! the transport links between them. It is loaded from JSON (or taken from
//! the built-in [`world`] catalogue) and turned into a [`Network`] once the
//! pricing policy is known.

mod error;
mod world;

pub use error::CatalogueError;
pub use world::world;

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::{LocationKind, ModeSet, TransportMode};
use crate::network::{ModeTable, Network, NetworkError, PricingPolicy};

/// A location as it appears in a catalogue file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: LocationKind,
    pub modes: ModeSet,
    pub lat: f64,
    pub lng: f64,
}

/// A link as it appears in a catalogue file.
///
/// `cost` and `time` are used as given under static pricing and ignored
/// under synthesized pricing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkRecord {
    pub from: String,
    pub to: String,
    pub mode: TransportMode,
    pub cost: f64,
    pub time: f64,
}

/// Locations and links, in the order they should be registered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalogue {
    pub locations: Vec<LocationRecord>,
    pub links: Vec<LinkRecord>,
}

impl Catalogue {
    pub fn from_json_str(json: &str) -> Result<Self, CatalogueError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a catalogue from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogueError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Build a network from this catalogue.
    ///
    /// `load` (weight × quantity) only matters under
    /// [`PricingPolicy::Synthesized`].
    ///
    /// # Errors
    ///
    /// Fails on the first link that names an unknown location or cannot be
    /// priced; the partial network is discarded.
    pub fn build(
        &self,
        modes: &ModeTable,
        pricing: PricingPolicy,
        load: f64,
    ) -> Result<Network, NetworkError> {
        let mut network = Network::new(modes.clone());

        for record in &self.locations {
            network.add_location(&record.name, record.kind, record.modes, record.lat, record.lng);
        }
        for record in &self.links {
            let tariff = pricing.tariff(record.cost, record.time, load);
            network.add_link(&record.from, &record.to, record.mode, tariff)?;
        }

        info!(
            locations = network.registry().len(),
            links = network.links().len(),
            ?pricing,
            "built network"
        );
        Ok(network)
    }
}
