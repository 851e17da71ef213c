//! Earliest-arrival analysis over the time matrix.
//!
//! # Algorithm
//!
//! Forward relaxation with the same shape as Dijkstra but minimizing
//! cumulative travel *time* instead of distance, then path reconstruction
//! through the predecessor chain. Intermediate stops along the resulting
//! path are recorded as landmarks.
//!
//! Despite the historical name this is an earliest-time shortest path,
//! not a longest-path critical-path method; the behavior is kept as-is
//! for compatibility with existing consumers.

use std::collections::BinaryHeap;

use crate::graph::CampusGraph;
use crate::models::{Algorithm, Route};
use crate::shortest_path::{walk_predecessors, MinCost};

/// Finds the earliest-arrival route between two locations over the base
/// time matrix.
///
/// Returns a single-route list, or an empty list when the graph is empty,
/// `from == to`, or the target is unreachable.
///
/// # Examples
///
/// ```
/// use campus_nav::graph::CampusGraph;
/// use campus_nav::models::{Location, LocationKind};
/// use campus_nav::critical_path::critical_path_route;
///
/// let graph = CampusGraph::from_locations(vec![
///     Location::new("Gate", 0.0, 0.0, LocationKind::Entrance),
///     Location::new("Library", 3.0, 4.0, LocationKind::Academic),
/// ])
/// .unwrap();
///
/// let routes = critical_path_route(&graph, 0, 1);
/// assert_eq!(routes[0].path(), &[0, 1]);
/// ```
pub fn critical_path_route(graph: &CampusGraph, from: usize, to: usize) -> Vec<Route> {
    if graph.is_empty() || from == to {
        return Vec::new();
    }

    let n = graph.len();
    let mut earliest = vec![f64::INFINITY; n];
    let mut prev: Vec<Option<usize>> = vec![None; n];
    let mut heap = BinaryHeap::new();

    earliest[from] = 0.0;
    heap.push(MinCost {
        cost: 0.0,
        node: from,
    });

    while let Some(MinCost { cost, node }) = heap.pop() {
        if cost > earliest[node] {
            continue;
        }
        for next in 0..n {
            if next == node {
                continue;
            }
            let arrival = cost + graph.time(node, next);
            if arrival < earliest[next] {
                earliest[next] = arrival;
                prev[next] = Some(node);
                heap.push(MinCost {
                    cost: arrival,
                    node: next,
                });
            }
        }
    }

    let Some(path) = walk_predecessors(&prev, from, to) else {
        return Vec::new();
    };
    let stops: Vec<usize> = path[1..path.len() - 1].to_vec();
    let route = graph
        .route_along(path, Algorithm::CriticalPath)
        .with_landmarks(stops);
    vec![route]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::CostMatrix;
    use crate::models::{Location, LocationKind};

    /// Time matrix where the distance-shortest and time-shortest paths
    /// disagree: the A-C edge is short but slow.
    fn slow_shortcut_graph() -> CampusGraph {
        let locations = vec![
            Location::new("A", 0.0, 0.0, LocationKind::Service),
            Location::new("B", 1.0, 0.0, LocationKind::Service),
            Location::new("C", 2.0, 0.0, LocationKind::Service),
        ];
        let distances = CostMatrix::from_data(
            3,
            vec![0.0, 100.0, 90.0, 100.0, 0.0, 100.0, 90.0, 100.0, 0.0],
        )
        .expect("valid");
        let times = CostMatrix::from_data(
            3,
            vec![0.0, 1.0, 10.0, 1.0, 0.0, 1.0, 10.0, 1.0, 0.0],
        )
        .expect("valid");
        CampusGraph::new(locations, distances, times).expect("valid")
    }

    #[test]
    fn test_minimizes_time_not_distance() {
        let g = slow_shortcut_graph();
        let routes = critical_path_route(&g, 0, 2);
        assert_eq!(routes.len(), 1);
        // Two fast edges (2 min) beat the slow direct one (10 min), even
        // though the direct edge is shorter in metres.
        assert_eq!(routes[0].path(), &[0, 1, 2]);
        assert!((routes[0].total_time() - 2.0).abs() < 1e-10);
        assert!((routes[0].total_distance() - 200.0).abs() < 1e-10);
    }

    #[test]
    fn test_intermediate_stops_become_landmarks() {
        let g = slow_shortcut_graph();
        let routes = critical_path_route(&g, 0, 2);
        assert_eq!(routes[0].landmarks(), &[1]);
    }

    #[test]
    fn test_direct_route_has_no_landmarks() {
        let g = CampusGraph::from_locations(vec![
            Location::new("A", 0.0, 0.0, LocationKind::Service),
            Location::new("B", 10.0, 0.0, LocationKind::Service),
        ])
        .expect("valid");
        let routes = critical_path_route(&g, 0, 1);
        assert!(routes[0].landmarks().is_empty());
    }

    #[test]
    fn test_same_endpoints_yield_nothing() {
        let g = slow_shortcut_graph();
        assert!(critical_path_route(&g, 0, 0).is_empty());
    }

    #[test]
    fn test_empty_graph_yields_nothing() {
        let g = CampusGraph::from_locations(Vec::new()).expect("valid");
        assert!(critical_path_route(&g, 0, 0).is_empty());
    }
}
