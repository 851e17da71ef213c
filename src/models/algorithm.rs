//! Route provenance tags.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies which algorithm produced a route.
///
/// A closed tag set rather than a free-form string, so callers can match
/// on provenance and the comparison report has a stable ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    Dijkstra,
    FloydWarshall,
    AStar,
    Beam,
    Greedy,
    NorthwestCorner,
    CriticalPath,
    DynamicProgramming,
    DirectLandmark,
    MultiLandmark,
    NearLandmark,
}

impl Algorithm {
    /// Stable human-readable label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "Dijkstra",
            Algorithm::FloydWarshall => "Floyd-Warshall",
            Algorithm::AStar => "A* Search",
            Algorithm::Beam => "Beam Search",
            Algorithm::Greedy => "Greedy",
            Algorithm::NorthwestCorner => "Northwest Corner",
            Algorithm::CriticalPath => "Critical Path",
            Algorithm::DynamicProgramming => "Dynamic Programming",
            Algorithm::DirectLandmark => "Direct Landmark",
            Algorithm::MultiLandmark => "Multi-Landmark",
            Algorithm::NearLandmark => "Near-Landmark",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
