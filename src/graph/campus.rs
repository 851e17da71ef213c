//! Validated campus graph snapshot.

use std::collections::HashMap;

use crate::error::RouteError;
use crate::models::{Algorithm, Location, LocationKind, Route};

use super::CostMatrix;

/// Conversion factor from raw map units to metres.
pub const CAMPUS_SCALE: f64 = 2.5;

/// Average walking speed, metres per minute (5 km/h).
const WALK_SPEED: f64 = 5000.0 / 60.0;

/// An immutable campus snapshot: locations plus complete distance and time
/// matrices.
///
/// Construction validates the matrices (matching sizes, zero diagonal,
/// finite non-negative weights, unique names), so every algorithm can run
/// on trusted indices without defensive checks. Built once per session and
/// shared read-only across all queries.
///
/// # Examples
///
/// ```
/// use campus_nav::graph::CampusGraph;
/// use campus_nav::models::{Location, LocationKind};
///
/// let graph = CampusGraph::from_locations(vec![
///     Location::new("Main Gate", 0.0, 0.0, LocationKind::Entrance),
///     Location::new("Balme Library", 3.0, 4.0, LocationKind::Academic),
/// ])
/// .unwrap();
///
/// // Euclidean distance 5.0 map units, scaled to campus metres.
/// assert!((graph.distance(0, 1) - 12.5).abs() < 1e-10);
/// assert_eq!(graph.index_of("Balme Library").unwrap(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct CampusGraph {
    locations: Vec<Location>,
    index: HashMap<String, usize>,
    distances: CostMatrix,
    times: CostMatrix,
}

/// Congestion multiplier applied to base walking time for an edge,
/// keyed on the location categories at its endpoints. The first matching
/// rule wins: dining, then academic, then administrative.
fn kind_congestion(a: LocationKind, b: LocationKind) -> f64 {
    if a == LocationKind::Dining || b == LocationKind::Dining {
        1.3
    } else if a == LocationKind::Academic || b == LocationKind::Academic {
        1.1
    } else if a == LocationKind::Administrative || b == LocationKind::Administrative {
        1.2
    } else {
        1.0
    }
}

impl CampusGraph {
    /// Creates a graph from locations and explicit distance/time matrices.
    ///
    /// Fails fast with [`RouteError::IncompleteGraph`] on size mismatches,
    /// duplicate names, non-zero diagonals, or non-finite weights, and with
    /// [`RouteError::NegativeWeight`] on any negative entry.
    pub fn new(
        locations: Vec<Location>,
        distances: CostMatrix,
        times: CostMatrix,
    ) -> Result<Self, RouteError> {
        let n = locations.len();

        let mut index = HashMap::with_capacity(n);
        for (i, loc) in locations.iter().enumerate() {
            if index.insert(loc.name().to_owned(), i).is_some() {
                return Err(RouteError::IncompleteGraph {
                    reason: format!("duplicate location name: {}", loc.name()),
                });
            }
        }

        Self::validate_matrix(&locations, &distances, "distance")?;
        Self::validate_matrix(&locations, &times, "time")?;

        Ok(Self {
            locations,
            index,
            distances,
            times,
        })
    }

    /// Derives both matrices from location coordinates.
    ///
    /// Distance is raw Euclidean separation scaled by [`CAMPUS_SCALE`]
    /// (metres); base time assumes a 5 km/h walk, then a congestion
    /// multiplier for the endpoint categories is applied.
    pub fn from_locations(locations: Vec<Location>) -> Result<Self, RouteError> {
        let n = locations.len();
        let mut distances = CostMatrix::new(n);
        let mut times = CostMatrix::new(n);

        for i in 0..n {
            for j in 0..n {
                if i == j {
                    continue;
                }
                let d = locations[i].euclidean_to(&locations[j]) * CAMPUS_SCALE;
                let congestion = kind_congestion(locations[i].kind(), locations[j].kind());
                distances.set(i, j, d);
                times.set(i, j, d / WALK_SPEED * congestion);
            }
        }

        Self::new(locations, distances, times)
    }

    fn validate_matrix(
        locations: &[Location],
        matrix: &CostMatrix,
        label: &str,
    ) -> Result<(), RouteError> {
        let n = locations.len();
        if matrix.size() != n {
            return Err(RouteError::IncompleteGraph {
                reason: format!(
                    "{} matrix covers {} locations, expected {}",
                    label,
                    matrix.size(),
                    n
                ),
            });
        }
        for i in 0..n {
            for j in 0..n {
                let w = matrix.get(i, j);
                if !w.is_finite() {
                    return Err(RouteError::IncompleteGraph {
                        reason: format!(
                            "non-finite {} weight on {} -> {}",
                            label,
                            locations[i].name(),
                            locations[j].name()
                        ),
                    });
                }
                if w < 0.0 {
                    return Err(RouteError::NegativeWeight {
                        from: locations[i].name().to_owned(),
                        to: locations[j].name().to_owned(),
                        weight: w,
                    });
                }
                if i == j && w != 0.0 {
                    return Err(RouteError::IncompleteGraph {
                        reason: format!(
                            "non-zero self-{} at {}",
                            label,
                            locations[i].name()
                        ),
                    });
                }
            }
        }
        Ok(())
    }

    /// Number of locations.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Returns `true` if the graph has no locations.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// All locations, ordered by index.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// The location at the given index.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    pub fn location(&self, index: usize) -> &Location {
        &self.locations[index]
    }

    /// Resolves a location name to its index.
    pub fn index_of(&self, name: &str) -> Result<usize, RouteError> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| RouteError::UnknownLocation {
                name: name.to_owned(),
            })
    }

    /// The full distance matrix.
    pub fn distances(&self) -> &CostMatrix {
        &self.distances
    }

    /// The full base-time matrix.
    pub fn times(&self) -> &CostMatrix {
        &self.times
    }

    /// Walking distance in metres from `from` to `to`.
    pub fn distance(&self, from: usize, to: usize) -> f64 {
        self.distances.get(from, to)
    }

    /// Base walking time in minutes from `from` to `to`.
    pub fn time(&self, from: usize, to: usize) -> f64 {
        self.times.get(from, to)
    }

    /// Raw Euclidean separation in map units, no campus scale applied.
    pub fn euclidean(&self, a: usize, b: usize) -> f64 {
        self.locations[a].euclidean_to(&self.locations[b])
    }

    /// Sum of edge distances along consecutive path steps.
    pub fn path_distance(&self, path: &[usize]) -> f64 {
        path.windows(2).map(|w| self.distance(w[0], w[1])).sum()
    }

    /// Sum of base edge times along consecutive path steps.
    pub fn path_time(&self, path: &[usize]) -> f64 {
        path.windows(2).map(|w| self.time(w[0], w[1])).sum()
    }

    /// Builds a route along the given path, computing both totals from the
    /// matrices so the route invariant holds by construction.
    pub fn route_along(&self, path: Vec<usize>, algorithm: Algorithm) -> Route {
        let distance = self.path_distance(&path);
        let time = self.path_time(&path);
        Route::new(path, distance, time, algorithm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corner_locations() -> Vec<Location> {
        vec![
            Location::new("Gate", 0.0, 0.0, LocationKind::Entrance),
            Location::new("Library", 3.0, 4.0, LocationKind::Academic),
            Location::new("Cafeteria", 6.0, 8.0, LocationKind::Dining),
        ]
    }

    #[test]
    fn test_from_locations_scales_distance() {
        let g = CampusGraph::from_locations(corner_locations()).expect("valid");
        assert!((g.distance(0, 1) - 5.0 * CAMPUS_SCALE).abs() < 1e-10);
        assert_eq!(g.distance(1, 1), 0.0);
    }

    #[test]
    fn test_from_locations_time_uses_congestion() {
        let g = CampusGraph::from_locations(corner_locations()).expect("valid");
        // Entrance -> Academic edge carries the academic multiplier.
        let base = g.distance(0, 1) / WALK_SPEED;
        assert!((g.time(0, 1) - base * 1.1).abs() < 1e-10);
        // Any dining endpoint wins over academic.
        let base_dining = g.distance(1, 2) / WALK_SPEED;
        assert!((g.time(1, 2) - base_dining * 1.3).abs() < 1e-10);
    }

    #[test]
    fn test_index_of_unknown() {
        let g = CampusGraph::from_locations(corner_locations()).expect("valid");
        assert_eq!(g.index_of("Library"), Ok(1));
        assert!(matches!(
            g.index_of("Night Market"),
            Err(RouteError::UnknownLocation { .. })
        ));
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let locs = vec![
            Location::new("Gate", 0.0, 0.0, LocationKind::Entrance),
            Location::new("Gate", 1.0, 1.0, LocationKind::Entrance),
        ];
        assert!(matches!(
            CampusGraph::from_locations(locs),
            Err(RouteError::IncompleteGraph { .. })
        ));
    }

    #[test]
    fn test_size_mismatch_rejected() {
        let locs = corner_locations();
        let distances = CostMatrix::new(2);
        let times = CostMatrix::new(3);
        assert!(matches!(
            CampusGraph::new(locs, distances, times),
            Err(RouteError::IncompleteGraph { .. })
        ));
    }

    #[test]
    fn test_negative_weight_rejected() {
        let locs = corner_locations();
        let mut distances = CostMatrix::new(3);
        distances.set(0, 1, -5.0);
        let times = CostMatrix::new(3);
        assert!(matches!(
            CampusGraph::new(locs, distances, times),
            Err(RouteError::NegativeWeight { .. })
        ));
    }

    #[test]
    fn test_nonzero_diagonal_rejected() {
        let locs = corner_locations();
        let mut distances = CostMatrix::new(3);
        distances.set(1, 1, 2.0);
        let times = CostMatrix::new(3);
        assert!(matches!(
            CampusGraph::new(locs, distances, times),
            Err(RouteError::IncompleteGraph { .. })
        ));
    }

    #[test]
    fn test_empty_graph_is_valid() {
        let g = CampusGraph::from_locations(Vec::new()).expect("valid");
        assert!(g.is_empty());
        assert_eq!(g.len(), 0);
    }

    #[test]
    fn test_route_along_sums_edges() {
        let g = CampusGraph::from_locations(corner_locations()).expect("valid");
        let route = g.route_along(vec![0, 1, 2], Algorithm::Dijkstra);
        let expected = g.distance(0, 1) + g.distance(1, 2);
        assert!((route.total_distance() - expected).abs() < 1e-10);
        let expected_time = g.time(0, 1) + g.time(1, 2);
        assert!((route.total_time() - expected_time).abs() < 1e-10);
    }

    #[test]
    fn test_route_along_empty_path() {
        let g = CampusGraph::from_locations(corner_locations()).expect("valid");
        let route = g.route_along(Vec::new(), Algorithm::Dijkstra);
        assert!(route.is_empty());
        assert_eq!(route.total_distance(), 0.0);
    }
}
