//! Approximation routers: fast heuristics trading optimality for speed
//! and route variety.
//!
//! - [`beam_search`] — bounded depth-first beam exploration
//! - [`greedy_walk`] — nearest-unvisited stepping with a hop cap
//! - [`corner_routes`] — bounding-box detour candidates

mod beam;
mod corner;
mod greedy;

pub use beam::{beam_search, BEAM_WIDTH};
pub use corner::corner_routes;
pub use greedy::{greedy_walk, MAX_HOPS};
