//! Bounded beam search for alternative routes.
//!
//! # Algorithm
//!
//! Depth-first exploration from the origin, expanding at most the
//! [`BEAM_WIDTH`] cheapest unvisited neighbors per step, ranked by edge
//! weight plus the heuristic estimate to the target. Each branch owns a
//! clone of the visited set, so sibling branches backtrack independently.
//! The search stops after [`MAX_ROUTES`] completed routes; if none
//! complete, it falls back to Dijkstra's single best route.
//!
//! The exploration runs on an explicit stack: the graph is cyclic and a
//! complete campus matrix would hand language-level recursion a branch for
//! every location.

use crate::graph::CampusGraph;
use crate::models::{Algorithm, Route};
use crate::shortest_path::{dijkstra_route, heuristic};

/// Neighbors expanded per step.
pub const BEAM_WIDTH: usize = 2;

/// Completed routes captured before the search stops.
pub const MAX_ROUTES: usize = 3;

struct Frame {
    node: usize,
    path: Vec<usize>,
    visited: Vec<bool>,
}

/// Explores up to [`MAX_ROUTES`] alternative routes between two locations.
///
/// Returns Dijkstra's best route when no beam branch reaches the target,
/// and an empty list for an empty graph or `from == to`.
///
/// # Examples
///
/// ```
/// use campus_nav::graph::CampusGraph;
/// use campus_nav::models::{Location, LocationKind};
/// use campus_nav::approx::beam_search;
///
/// let graph = CampusGraph::from_locations(vec![
///     Location::new("Gate", 0.0, 0.0, LocationKind::Entrance),
///     Location::new("Quad", 40.0, 30.0, LocationKind::Recreation),
///     Location::new("Library", 80.0, 60.0, LocationKind::Academic),
/// ])
/// .unwrap();
///
/// let routes = beam_search(&graph, 0, 2);
/// assert!(!routes.is_empty());
/// assert!(routes.len() <= 3);
/// ```
pub fn beam_search(graph: &CampusGraph, from: usize, to: usize) -> Vec<Route> {
    if graph.is_empty() || from == to {
        return Vec::new();
    }

    let n = graph.len();
    let mut routes = Vec::new();
    let mut stack = vec![Frame {
        node: from,
        path: vec![from],
        visited: vec![false; n],
    }];

    while let Some(frame) = stack.pop() {
        if routes.len() >= MAX_ROUTES {
            break;
        }
        if frame.node == to {
            routes.push(graph.route_along(frame.path, Algorithm::Beam));
            continue;
        }

        let mut visited = frame.visited;
        visited[frame.node] = true;

        let mut neighbors: Vec<usize> = (0..n).filter(|&i| !visited[i]).collect();
        neighbors.sort_by(|&a, &b| {
            let ka = graph.distance(frame.node, a) + heuristic(graph, a, to);
            let kb = graph.distance(frame.node, b) + heuristic(graph, b, to);
            ka.partial_cmp(&kb)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.cmp(&b))
        });

        // Push in reverse so the cheapest neighbor is explored first.
        for &next in neighbors.iter().take(BEAM_WIDTH).rev() {
            let mut path = frame.path.clone();
            path.push(next);
            stack.push(Frame {
                node: next,
                path,
                visited: visited.clone(),
            });
        }
    }

    if routes.is_empty() {
        return dijkstra_route(graph, from, to);
    }
    routes
}
