//! Dijkstra single-source shortest path.
//!
//! # Algorithm
//!
//! Binary-heap relaxation keyed by tentative distance, terminating as soon
//! as the target pops. Ties in the heap break toward the lower location
//! index (see [`MinCost`](super::MinCost)), so results are reproducible
//! run to run.
//!
//! # Complexity
//!
//! O(n² log n) on a complete graph with n locations.

use std::collections::BinaryHeap;

use crate::graph::CampusGraph;
use crate::models::{Algorithm, Route};

use super::{walk_predecessors, MinCost};

/// Finds the shortest-distance route between two locations.
///
/// Returns a single-route list, or an empty list when the graph is empty,
/// `from == to` (no self-loop semantics), or the target is unreachable.
///
/// # Examples
///
/// ```
/// use campus_nav::graph::CampusGraph;
/// use campus_nav::models::{Location, LocationKind};
/// use campus_nav::shortest_path::dijkstra_route;
///
/// let graph = CampusGraph::from_locations(vec![
///     Location::new("Gate", 0.0, 0.0, LocationKind::Entrance),
///     Location::new("Library", 3.0, 4.0, LocationKind::Academic),
/// ])
/// .unwrap();
///
/// let routes = dijkstra_route(&graph, 0, 1);
/// assert_eq!(routes[0].path(), &[0, 1]);
/// ```
pub fn dijkstra_route(graph: &CampusGraph, from: usize, to: usize) -> Vec<Route> {
    if graph.is_empty() || from == to {
        return Vec::new();
    }

    let n = graph.len();
    let mut dist = vec![f64::INFINITY; n];
    let mut prev: Vec<Option<usize>> = vec![None; n];
    let mut heap = BinaryHeap::new();

    dist[from] = 0.0;
    heap.push(MinCost {
        cost: 0.0,
        node: from,
    });

    while let Some(MinCost { cost, node }) = heap.pop() {
        if node == to {
            break;
        }
        if cost > dist[node] {
            // Stale entry superseded by a cheaper relaxation.
            continue;
        }
        for next in 0..n {
            if next == node {
                continue;
            }
            let alt = cost + graph.distance(node, next);
            if alt < dist[next] {
                dist[next] = alt;
                prev[next] = Some(node);
                heap.push(MinCost {
                    cost: alt,
                    node: next,
                });
            }
        }
    }

    match walk_predecessors(&prev, from, to) {
        Some(path) => vec![graph.route_along(path, Algorithm::Dijkstra)],
        None => Vec::new(),
    }
}
