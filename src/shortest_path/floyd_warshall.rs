//! Floyd-Warshall all-pairs shortest paths.
//!
//! # Algorithm
//!
//! Classic O(n³) triple loop with a next-hop matrix for path
//! reconstruction. Because it optimizes the same non-negative distances
//! as Dijkstra, the two must agree on every pair; the test suite leans
//! on that as a cross-check.

use crate::graph::{CampusGraph, CostMatrix};
use crate::models::{Algorithm, Route};

/// Precomputed all-pairs shortest distances with next-hop reconstruction.
///
/// # Examples
///
/// ```
/// use campus_nav::graph::CampusGraph;
/// use campus_nav::models::{Location, LocationKind};
/// use campus_nav::shortest_path::AllPairs;
///
/// let graph = CampusGraph::from_locations(vec![
///     Location::new("Gate", 0.0, 0.0, LocationKind::Entrance),
///     Location::new("Library", 3.0, 4.0, LocationKind::Academic),
/// ])
/// .unwrap();
///
/// let apsp = AllPairs::compute(&graph);
/// assert!((apsp.distance(0, 1) - graph.distance(0, 1)).abs() < 1e-10);
/// assert_eq!(apsp.path(0, 1), vec![0, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct AllPairs {
    dist: CostMatrix,
    next: Vec<usize>,
    size: usize,
}

impl AllPairs {
    /// Runs the O(n³) computation over the graph's distance matrix.
    pub fn compute(graph: &CampusGraph) -> Self {
        let n = graph.len();
        let mut dist = CostMatrix::new(n);
        let mut next = vec![0; n * n];

        for i in 0..n {
            for j in 0..n {
                dist.set(i, j, graph.distance(i, j));
                next[i * n + j] = j;
            }
        }

        for k in 0..n {
            for i in 0..n {
                for j in 0..n {
                    let through = dist.get(i, k) + dist.get(k, j);
                    if through < dist.get(i, j) {
                        dist.set(i, j, through);
                        next[i * n + j] = next[i * n + k];
                    }
                }
            }
        }

        Self { dist, next, size: n }
    }

    /// Shortest distance between two locations.
    pub fn distance(&self, from: usize, to: usize) -> f64 {
        self.dist.get(from, to)
    }

    /// Shortest path between two locations as a location-index sequence.
    pub fn path(&self, from: usize, to: usize) -> Vec<usize> {
        let mut path = Vec::new();
        let mut current = from;
        while current != to {
            path.push(current);
            current = self.next[current * self.size + to];
        }
        path.push(to);
        path
    }
}

/// Finds the shortest-distance route between two locations via the
/// all-pairs matrices.
///
/// Returns a single-route list, or an empty list when the graph is empty
/// or `from == to`.
pub fn floyd_warshall_route(graph: &CampusGraph, from: usize, to: usize) -> Vec<Route> {
    if graph.is_empty() || from == to {
        return Vec::new();
    }
    let apsp = AllPairs::compute(graph);
    if !apsp.distance(from, to).is_finite() {
        return Vec::new();
    }
    vec![graph.route_along(apsp.path(from, to), Algorithm::FloydWarshall)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::detour_graph;
    use crate::models::{Location, LocationKind};
    use crate::shortest_path::dijkstra_route;
    use proptest::prelude::*;

    #[test]
    fn test_detour_matches_dijkstra_scenario() {
        let g = detour_graph();
        let routes = floyd_warshall_route(&g, 0, 2);
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].path(), &[0, 1, 2]);
        assert!((routes[0].total_distance() - 200.0).abs() < 1e-10);
    }

    #[test]
    fn test_same_endpoints_yield_nothing() {
        let g = detour_graph();
        assert!(floyd_warshall_route(&g, 2, 2).is_empty());
    }

    #[test]
    fn test_empty_graph_yields_nothing() {
        let g = CampusGraph::from_locations(Vec::new()).expect("valid");
        assert!(floyd_warshall_route(&g, 0, 0).is_empty());
    }

    proptest! {
        /// Dijkstra and Floyd-Warshall optimize the same objective, so
        /// their distances agree on every pair of a random campus.
        #[test]
        fn prop_agrees_with_dijkstra(
            coords in proptest::collection::vec((0.0f64..500.0, 0.0f64..500.0), 2..7)
        ) {
            let locations: Vec<Location> = coords
                .iter()
                .enumerate()
                .map(|(i, (x, y))| {
                    Location::new(format!("L{i}"), *x, *y, LocationKind::Service)
                })
                .collect();
            let graph = CampusGraph::from_locations(locations).expect("valid");
            let apsp = AllPairs::compute(&graph);

            for from in 0..graph.len() {
                for to in 0..graph.len() {
                    if from == to {
                        continue;
                    }
                    let routes = dijkstra_route(&graph, from, to);
                    prop_assert_eq!(routes.len(), 1);
                    let delta = (routes[0].total_distance() - apsp.distance(from, to)).abs();
                    prop_assert!(delta < 1e-6);
                }
            }
        }
    }
}
