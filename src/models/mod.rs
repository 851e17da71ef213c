//! Domain model types for campus routing.
//!
//! Provides the core abstractions: named locations with coordinates and a
//! category, routes as ordered location sequences with aggregate metrics,
//! and the closed set of algorithm provenance tags.

mod algorithm;
mod location;
mod route;

pub use algorithm::Algorithm;
pub use location::{Location, LocationKind};
pub use route::Route;
