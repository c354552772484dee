//! The transport network: locations, links and per-mode economics.
//!
//! A [`Network`] is built once from catalogue data and is read-only while
//! routes are planned over it, so it can be shared between requests behind
//! an `Arc`.

mod error;
mod links;
mod modes;
mod registry;
mod tariff;

pub use error::NetworkError;
pub use links::{Link, LinkTable};
pub use modes::{ModeProfile, ModeTable};
pub use registry::LocationRegistry;
pub use tariff::{PricingPolicy, Tariff};

use std::collections::HashMap;

use tracing::warn;

use crate::domain::{Location, LocationId, LocationKind, ModeSet, TransportMode};
use crate::geo::haversine_km;

/// Undirected key for a link's tariff.
type TariffKey = (LocationId, LocationId, TransportMode);

fn tariff_key(a: LocationId, b: LocationId, mode: TransportMode) -> TariffKey {
    (a.min(b), a.max(b), mode)
}

/// Locations and the symmetric links between them.
#[derive(Debug, Clone)]
pub struct Network {
    registry: LocationRegistry,
    links: LinkTable,
    modes: ModeTable,
    tariffs: HashMap<TariffKey, Tariff>,
}

impl Network {
    /// Create an empty network using `modes` for link capacities and
    /// distance pricing.
    pub fn new(modes: ModeTable) -> Self {
        Self {
            registry: LocationRegistry::new(),
            links: LinkTable::new(),
            modes,
            tariffs: HashMap::new(),
        }
    }

    /// Register a location, replacing any existing one with the same name.
    ///
    /// Links already attached to a replaced location are kept. If its
    /// coordinates changed, they are priced again from the new distance.
    pub fn add_location(
        &mut self,
        name: &str,
        kind: LocationKind,
        modes: ModeSet,
        latitude: f64,
        longitude: f64,
    ) -> LocationId {
        let location = Location::new(name, kind, modes, latitude, longitude);
        let moved = self
            .registry
            .id(name)
            .is_some_and(|id| self.registry[id].coordinates != location.coordinates);

        let id = self.registry.upsert(location);
        self.links.reserve_location(id);
        if moved {
            self.reprice(id);
        }
        id
    }

    /// Price every link out of `id` again with its recorded tariff.
    fn reprice(&mut self, id: LocationId) {
        let attached: Vec<Link> = self.links.outgoing(id).to_vec();
        for link in attached {
            let Some(tariff) = self.tariffs.get(&tariff_key(link.from, link.to, link.mode)) else {
                continue;
            };
            match self.price(link.from, link.to, link.mode, *tariff) {
                Ok(repriced) => self.links.insert_pair(repriced),
                Err(e) => warn!(error = %e, "keeping previous link pricing"),
            }
        }
    }

    fn price(
        &self,
        from: LocationId,
        to: LocationId,
        mode: TransportMode,
        tariff: Tariff,
    ) -> Result<Link, NetworkError> {
        let profile = self.modes.profile(mode);
        let distance = haversine_km(
            self.registry[from].coordinates,
            self.registry[to].coordinates,
        );
        let (cost, time) = tariff.price(distance, profile)?;

        Ok(Link {
            from,
            to,
            mode,
            cost,
            time,
            capacity: profile.capacity,
        })
    }

    /// Add a link between two registered locations, in both directions.
    ///
    /// Capacity comes from the mode table. Cost and time come from `tariff`.
    /// Nothing is recorded unless both directions can be.
    ///
    /// # Errors
    ///
    /// - [`NetworkError::UnknownLocation`] if either endpoint is not registered
    /// - [`NetworkError::SelfLink`] if both endpoints are the same location
    /// - [`NetworkError::InvalidTariff`] if the tariff cannot be priced
    pub fn add_link(
        &mut self,
        from: &str,
        to: &str,
        mode: TransportMode,
        tariff: Tariff,
    ) -> Result<(), NetworkError> {
        let from_id = self
            .registry
            .id(from)
            .ok_or_else(|| NetworkError::UnknownLocation(from.to_string()))?;
        let to_id = self
            .registry
            .id(to)
            .ok_or_else(|| NetworkError::UnknownLocation(to.to_string()))?;

        if from_id == to_id {
            return Err(NetworkError::SelfLink(from.to_string()));
        }

        let origin = &self.registry[from_id];
        let destination = &self.registry[to_id];
        for endpoint in [origin, destination] {
            if !endpoint.supports(mode) {
                warn!(
                    location = %endpoint.name,
                    %mode,
                    "link mode not listed for location"
                );
            }
        }

        let link = self.price(from_id, to_id, mode, tariff)?;
        self.links.insert_pair(link);
        self.tariffs.insert(tariff_key(from_id, to_id, mode), tariff);
        Ok(())
    }

    pub fn registry(&self) -> &LocationRegistry {
        &self.registry
    }

    pub fn links(&self) -> &LinkTable {
        &self.links
    }

    pub fn modes(&self) -> &ModeTable {
        &self.modes
    }

    /// The location with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this network.
    pub fn location(&self, id: LocationId) -> &Location {
        &self.registry[id]
    }

    /// Look up a location id by name.
    pub fn id(&self, name: &str) -> Option<LocationId> {
        self.registry.id(name)
    }
}

impl Default for Network {
    fn default() -> Self {
        Self::new(ModeTable::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(cost: f64, time: f64) -> Tariff {
        Tariff::Fixed { cost, time }
    }

    fn abc() -> Network {
        let mut net = Network::default();
        net.add_location("A", LocationKind::City, ModeSet::all(), 0.0, 0.0);
        net.add_location("B", LocationKind::City, ModeSet::all(), 0.0, 1.0);
        net.add_location("C", LocationKind::City, ModeSet::all(), 0.0, 2.0);
        net
    }

    #[test]
    fn add_link_stores_both_directions() {
        let mut net = abc();
        net.add_link("A", "B", TransportMode::Land, fixed(10.0, 2.0))
            .unwrap();

        let a = net.id("A").unwrap();
        let b = net.id("B").unwrap();
        let forward = net.links().get(a, b, TransportMode::Land).unwrap();
        let back = net.links().get(b, a, TransportMode::Land).unwrap();

        assert_eq!((forward.cost, forward.time), (10.0, 2.0));
        assert_eq!((back.cost, back.time, back.capacity), (10.0, 2.0, 2000.0));
    }

    #[test]
    fn capacity_comes_from_mode_table() {
        let modes = ModeTable::default().with_profile(
            TransportMode::Air,
            ModeProfile::new(123.0, 0.0, 500.0),
        );
        let mut net = Network::new(modes);
        net.add_location("A", LocationKind::Hub, ModeSet::all(), 0.0, 0.0);
        net.add_location("B", LocationKind::Hub, ModeSet::all(), 1.0, 0.0);
        net.add_link("A", "B", TransportMode::Air, fixed(1.0, 1.0))
            .unwrap();

        let a = net.id("A").unwrap();
        let b = net.id("B").unwrap();
        assert_eq!(net.links().get(a, b, TransportMode::Air).unwrap().capacity, 123.0);
    }

    #[test]
    fn unknown_endpoint_records_nothing() {
        let mut net = abc();

        let err = net
            .add_link("A", "Nowhere", TransportMode::Land, fixed(1.0, 1.0))
            .unwrap_err();
        assert_eq!(err, NetworkError::UnknownLocation("Nowhere".into()));

        let err = net
            .add_link("Nowhere", "A", TransportMode::Land, fixed(1.0, 1.0))
            .unwrap_err();
        assert_eq!(err, NetworkError::UnknownLocation("Nowhere".into()));

        assert!(net.links().is_empty());
    }

    #[test]
    fn invalid_tariff_records_nothing() {
        let mut net = abc();
        let err = net
            .add_link("A", "B", TransportMode::Land, fixed(-5.0, 1.0))
            .unwrap_err();
        assert!(matches!(err, NetworkError::InvalidTariff(_)));
        assert!(net.links().is_empty());
    }

    #[test]
    fn self_link_rejected() {
        let mut net = abc();
        let err = net
            .add_link("A", "A", TransportMode::Land, fixed(1.0, 1.0))
            .unwrap_err();
        assert_eq!(err, NetworkError::SelfLink("A".into()));
    }

    #[test]
    fn distance_tariff_synthesizes_cost_and_time() {
        let mut net = abc();
        net.add_link("A", "B", TransportMode::Land, Tariff::Distance { load: 10.0 })
            .unwrap();

        let a = net.id("A").unwrap();
        let b = net.id("B").unwrap();
        let link = net.links().get(a, b, TransportMode::Land).unwrap();

        // One degree of longitude on the equator
        let km = haversine_km(net.location(a).coordinates, net.location(b).coordinates);
        assert!((km - 111.19).abs() < 0.1);
        assert!((link.cost - km * 0.02 * 10.0).abs() < 1e-9);
        assert_eq!(link.time, 2.0);
    }

    #[test]
    fn re_adding_location_keeps_links() {
        let mut net = abc();
        net.add_link("A", "B", TransportMode::Land, fixed(1.0, 1.0))
            .unwrap();
        let id = net.add_location("A", LocationKind::Hub, ModeSet::all(), 0.0, 0.0);

        assert_eq!(id, net.id("A").unwrap());
        assert_eq!(net.links().outgoing(id).len(), 1);
        assert_eq!(net.location(id).kind, LocationKind::Hub);
    }

    #[test]
    fn moving_a_location_reprices_distance_links() {
        let mut net = abc();
        net.add_link("A", "B", TransportMode::Land, Tariff::Distance { load: 1.0 })
            .unwrap();
        net.add_link("B", "C", TransportMode::Air, fixed(7.0, 3.0))
            .unwrap();

        let a = net.id("A").unwrap();
        let b = net.id("B").unwrap();
        let c = net.id("C").unwrap();
        let before = *net.links().get(a, b, TransportMode::Land).unwrap();

        // B moves a degree further from A
        net.add_location("B", LocationKind::City, ModeSet::all(), 0.0, 2.0);

        let after = *net.links().get(a, b, TransportMode::Land).unwrap();
        assert!((after.cost - 2.0 * before.cost).abs() < 1e-9);
        assert_eq!(after.time, 4.0);
        assert_eq!(net.links().get(b, a, TransportMode::Land).copied(), Some(after.reversed()));

        let fixed_link = net.links().get(b, c, TransportMode::Air).unwrap();
        assert_eq!((fixed_link.cost, fixed_link.time), (7.0, 3.0));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn any_mode() -> impl Strategy<Value = TransportMode> {
        prop::sample::select(TransportMode::ALL.to_vec())
    }

    proptest! {
        /// Every added link is present in both directions with identical
        /// mode, cost, time and capacity
        #[test]
        fn links_are_symmetric(
            edges in prop::collection::vec((0usize..6, 0usize..6, any_mode(), 0.0f64..1000.0, 0.0f64..100.0), 0..30)
        ) {
            let mut net = Network::default();
            for i in 0..6 {
                net.add_location(&format!("L{i}"), LocationKind::Hub, ModeSet::all(), i as f64, 0.0);
            }
            for (a, b, mode, cost, time) in &edges {
                let _ = net.add_link(&format!("L{a}"), &format!("L{b}"), *mode, Tariff::Fixed { cost: *cost, time: *time });
            }

            for link in net.links().iter() {
                let back = net.links().get(link.to, link.from, link.mode);
                prop_assert_eq!(back.copied(), Some(link.reversed()));
            }
        }
    }
}
