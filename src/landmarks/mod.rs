//! Landmark matching and landmark-aware route generation.

mod matcher;
mod router;

pub use matcher::{matches, matching_landmarks};
pub use router::{routes_through_kind, via_landmark, PROXIMITY_RADIUS};
