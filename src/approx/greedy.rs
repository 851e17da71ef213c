//! Greedy nearest-neighbor walk.
//!
//! A fast heuristic with no optimality guarantee: repeatedly step to the
//! nearest unvisited location until the target is reached. The walk is
//! bounded; after [`MAX_HOPS`] locations without arriving, the target is
//! force-appended as the final hop so the walk always terminates on the
//! cyclic campus graph.

use crate::graph::CampusGraph;
use crate::models::{Algorithm, Route};

/// Locations visited before the walk gives up and jumps to the target.
pub const MAX_HOPS: usize = 5;

/// Walks greedily from `from` toward `to`.
///
/// Returns a single-route list. The list is empty for an empty graph,
/// `from == to`, or a dead-ended walk (every location visited without
/// reaching the target); a dead end cannot occur on a complete matrix.
///
/// # Examples
///
/// ```
/// use campus_nav::graph::CampusGraph;
/// use campus_nav::models::{Location, LocationKind};
/// use campus_nav::approx::greedy_walk;
///
/// let graph = CampusGraph::from_locations(vec![
///     Location::new("Gate", 0.0, 0.0, LocationKind::Entrance),
///     Location::new("Quad", 40.0, 30.0, LocationKind::Recreation),
///     Location::new("Library", 80.0, 60.0, LocationKind::Academic),
/// ])
/// .unwrap();
///
/// let routes = greedy_walk(&graph, 0, 2);
/// assert_eq!(routes[0].path()[0], 0);
/// assert_eq!(*routes[0].path().last().unwrap(), 2);
/// ```
pub fn greedy_walk(graph: &CampusGraph, from: usize, to: usize) -> Vec<Route> {
    if graph.is_empty() || from == to {
        return Vec::new();
    }

    let n = graph.len();
    let mut visited = vec![false; n];
    let mut path = vec![from];
    let mut current = from;
    visited[from] = true;

    while current != to {
        let candidates: Vec<usize> = (0..n).filter(|&i| !visited[i]).collect();
        match graph.distances().nearest_neighbor(current, &candidates) {
            Some(next) => {
                visited[next] = true;
                path.push(next);
                current = next;
            }
            None => break,
        }

        if path.len() > MAX_HOPS && current != to {
            path.push(to);
            break;
        }
    }

    if path.last() != Some(&to) {
        return Vec::new();
    }
    vec![graph.route_along(path, Algorithm::Greedy)]
}
