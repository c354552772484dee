//! Adjacency table of transport links.

use crate::domain::{LocationId, TransportMode};

/// A directed link between two locations by one mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub from: LocationId,
    pub to: LocationId,
    pub mode: TransportMode,
    pub cost: f64,
    /// Travel time in hours.
    pub time: f64,
    pub capacity: f64,
}

impl Link {
    /// The same link travelled in the opposite direction.
    pub fn reversed(&self) -> Self {
        Self {
            from: self.to,
            to: self.from,
            ..*self
        }
    }
}

/// Links keyed by origin location.
///
/// Each origin keeps its outgoing links in insertion order, at most one per
/// (destination, mode). Links are always stored in both directions, so the
/// table is symmetric.
#[derive(Debug, Clone, Default)]
pub struct LinkTable {
    outgoing: Vec<Vec<Link>>,
}

impl LinkTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make room for links out of `id`.
    pub(crate) fn reserve_location(&mut self, id: LocationId) {
        if self.outgoing.len() <= id.0 {
            self.outgoing.resize_with(id.0 + 1, Vec::new);
        }
    }

    /// Store `link` and its reverse.
    ///
    /// An existing link with the same endpoints and mode is replaced in
    /// place, keeping its position in the discovery order.
    pub(crate) fn insert_pair(&mut self, link: Link) {
        self.reserve_location(link.from);
        self.reserve_location(link.to);
        self.upsert(link);
        self.upsert(link.reversed());
    }

    fn upsert(&mut self, link: Link) {
        let out = &mut self.outgoing[link.from.0];
        match out
            .iter_mut()
            .find(|l| l.to == link.to && l.mode == link.mode)
        {
            Some(existing) => *existing = link,
            None => out.push(link),
        }
    }

    /// Links leaving `from`, in insertion order.
    pub fn outgoing(&self, from: LocationId) -> &[Link] {
        self.outgoing.get(from.0).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The link from `from` to `to` by `mode`, if any.
    pub fn get(&self, from: LocationId, to: LocationId, mode: TransportMode) -> Option<&Link> {
        self.outgoing(from)
            .iter()
            .find(|l| l.to == to && l.mode == mode)
    }

    /// Every directed link.
    pub fn iter(&self) -> impl Iterator<Item = &Link> {
        self.outgoing.iter().flatten()
    }

    /// Returns the number of undirected links (counting A→B and B→A as one).
    pub fn len(&self) -> usize {
        self.iter().count() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.outgoing.iter().all(Vec::is_empty)
    }
}
