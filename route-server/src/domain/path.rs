//! Path types.
//!
//! A `Path` is a simple route through the network: an ordered list of
//! segments where each segment starts where the previous one ended and no
//! location is visited twice.

use std::collections::HashSet;

use super::{Coordinates, DomainError, LocationId, TransportMode};

/// One leg of a path, travelled by a single mode.
///
/// Endpoint coordinates are copied from the registry so a path can be
/// presented without looking anything up.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub from: LocationId,
    pub to: LocationId,
    pub mode: TransportMode,
    pub cost: f64,
    /// Travel time in hours.
    pub time: f64,
    /// Heaviest shipment this leg can carry.
    pub capacity: f64,
    pub from_coords: Coordinates,
    pub to_coords: Coordinates,
}

/// A simple path of at least one segment.
///
/// # Invariants
///
/// - At least one segment (so at least two locations)
/// - Consecutive segments connect
/// - No location appears twice
/// - `cost` and `time` are the sums over the segments
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    locations: Vec<LocationId>,
    segments: Vec<Segment>,
    cost: f64,
    time: f64,
}

impl Path {
    /// Builds a path from connected segments.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the list is empty, if a segment does not start where
    /// the previous one ended, or if any location repeats.
    pub fn from_segments(segments: Vec<Segment>) -> Result<Self, DomainError> {
        let first = segments.first().ok_or(DomainError::EmptyPath)?;

        let mut locations = Vec::with_capacity(segments.len() + 1);
        locations.push(first.from);

        for (i, segment) in segments.iter().enumerate() {
            if i > 0 && segments[i - 1].to != segment.from {
                return Err(DomainError::Disconnected { index: i });
            }
            locations.push(segment.to);
        }

        let mut seen = HashSet::with_capacity(locations.len());
        for loc in &locations {
            if !seen.insert(*loc) {
                return Err(DomainError::RepeatedLocation(*loc));
            }
        }

        let cost = segments.iter().map(|s| s.cost).sum();
        let time = segments.iter().map(|s| s.time).sum();

        Ok(Self {
            locations,
            segments,
            cost,
            time,
        })
    }

    /// Joins the first `spur_index` segments of `self` with a path that
    /// starts at location `spur_index` of `self`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the spur does not start at the spur location or if
    /// the joined path would revisit a location.
    pub fn splice(&self, spur_index: usize, spur: &Path) -> Result<Path, DomainError> {
        let root = spur_index.min(self.segments.len());
        let mut segments = self.segments[..root].to_vec();
        segments.extend(spur.segments.iter().cloned());
        Path::from_segments(segments)
    }

    /// Ordered location sequence, origin first.
    pub fn locations(&self) -> &[LocationId] {
        &self.locations
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Sum of segment costs.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Sum of segment times, in hours.
    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn origin(&self) -> LocationId {
        self.locations[0]
    }

    pub fn destination(&self) -> LocationId {
        self.locations[self.locations.len() - 1]
    }

    /// The smallest capacity of any segment: the heaviest load the whole
    /// path can carry.
    pub fn bottleneck_capacity(&self) -> f64 {
        self.segments
            .iter()
            .map(|s| s.capacity)
            .fold(f64::INFINITY, f64::min)
    }

    /// Returns true if the location sequence begins with `prefix`.
    pub fn starts_with(&self, prefix: &[LocationId]) -> bool {
        self.locations.starts_with(prefix)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// A segment between two ids with placeholder coordinates.
    pub fn seg(
        from: usize,
        to: usize,
        mode: TransportMode,
        cost: f64,
        time: f64,
        capacity: f64,
    ) -> Segment {
        Segment {
            from: LocationId(from),
            to: LocationId(to),
            mode,
            cost,
            time,
            capacity,
            from_coords: Coordinates::new(0.0, from as f64),
            to_coords: Coordinates::new(0.0, to as f64),
        }
    }
}
