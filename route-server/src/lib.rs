//! Multimodal freight route planner.
//!
//! A web service that answers: "how can this shipment get from here to
//! there, by air, sea, land or rail, and which of those ways can carry it?"

pub mod cache;
pub mod catalogue;
pub mod domain;
pub mod fare;
pub mod geo;
pub mod network;
pub mod planner;
pub mod web;
