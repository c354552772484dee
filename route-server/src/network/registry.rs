//! Registry of known locations.

use std::collections::HashMap;
use std::ops::Index;

use crate::domain::{Location, LocationId};

/// Known locations, in registration order.
///
/// Iteration order is registration order, which the nearest-location matcher
/// relies on to break ties. Re-registering a name replaces the location in
/// place and keeps its id.
#[derive(Debug, Clone, Default)]
pub struct LocationRegistry {
    locations: Vec<Location>,
    by_name: HashMap<String, LocationId>,
}

impl LocationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a location, or replace the one with the same name.
    pub fn upsert(&mut self, location: Location) -> LocationId {
        if let Some(&id) = self.by_name.get(&location.name) {
            self.locations[id.0] = location;
            return id;
        }

        let id = LocationId(self.locations.len());
        self.by_name.insert(location.name.clone(), id);
        self.locations.push(location);
        id
    }

    /// Look up a location's id by name.
    pub fn id(&self, name: &str) -> Option<LocationId> {
        self.by_name.get(name).copied()
    }

    pub fn get(&self, id: LocationId) -> Option<&Location> {
        self.locations.get(id.0)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Iterate locations in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (LocationId, &Location)> {
        self.locations
            .iter()
            .enumerate()
            .map(|(i, loc)| (LocationId(i), loc))
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

impl Index<LocationId> for LocationRegistry {
    type Output = Location;

    /// # Panics
    ///
    /// Panics if `id` was not issued by this registry.
    fn index(&self, id: LocationId) -> &Location {
        &self.locations[id.0]
    }
}
