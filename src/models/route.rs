//! Route type shared by every pathfinding algorithm.

use serde::{Deserialize, Serialize};

use super::Algorithm;

/// An ordered walk between two locations with aggregate metrics.
///
/// The path holds location indices into the owning `CampusGraph`. For any
/// non-empty route the first entry is the origin and the last the
/// destination, and the totals equal the sum of the corresponding edge
/// weights along the path. Construct routes through
/// [`CampusGraph::route_along`](crate::graph::CampusGraph::route_along)
/// to get the sums right.
///
/// Landmarks keep insertion order and may repeat: a route that passes the
/// same landmark twice reports it twice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    path: Vec<usize>,
    total_distance: f64,
    total_time: f64,
    landmarks: Vec<usize>,
    algorithm: Algorithm,
}

impl Route {
    /// Creates a route from a path and precomputed totals.
    pub fn new(path: Vec<usize>, total_distance: f64, total_time: f64, algorithm: Algorithm) -> Self {
        Self {
            path,
            total_distance,
            total_time,
            landmarks: Vec::new(),
            algorithm,
        }
    }

    /// Ordered location indices from origin to destination.
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    /// Total walking distance in metres.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Total walking time in minutes.
    pub fn total_time(&self) -> f64 {
        self.total_time
    }

    /// Landmark indices encountered, in insertion order.
    pub fn landmarks(&self) -> &[usize] {
        &self.landmarks
    }

    /// Which algorithm produced this route.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Number of locations on the path.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Returns `true` if the route has no locations.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Records a landmark on this route.
    pub fn push_landmark(&mut self, location: usize) {
        self.landmarks.push(location);
    }

    /// Records several landmarks, keeping the given order.
    pub fn with_landmarks(mut self, locations: impl IntoIterator<Item = usize>) -> Self {
        self.landmarks.extend(locations);
        self
    }

    /// Replaces the total time (used when applying traffic adjustment).
    pub fn set_total_time(&mut self, time: f64) {
        self.total_time = time;
    }
}
