//! Domain types for the route planner.
//!
//! This module contains the core value types shared by the network, the
//! planner and the web layer. Paths enforce their invariants at construction
//! time, so code that receives a `Path` can trust that it is simple and
//! connected.

mod error;
mod location;
mod mode;
mod path;

pub use error::DomainError;
pub use location::{Coordinates, Location, LocationId, LocationKind};
pub use mode::{InvalidMode, ModeSet, TransportMode};
pub use path::{Path, Segment};

#[cfg(test)]
pub(crate) use path::test_support;
