//! Exact shortest-path algorithms over the campus graph.
//!
//! - [`dijkstra_route`] — single-source relaxation with early exit
//! - [`floyd_warshall_route`] / [`AllPairs`] — all-pairs with next-hop
//!   reconstruction, used for cross-algorithm validation
//! - [`astar_route`] — heuristic-guided relaxation
//!
//! All three optimize plain edge distance on the same validated snapshot,
//! so Dijkstra, Floyd-Warshall, and A* agree on the optimal distance for
//! any pair.

mod astar;
mod dijkstra;
mod floyd_warshall;

pub use astar::astar_route;
pub use dijkstra::dijkstra_route;
pub use floyd_warshall::{floyd_warshall_route, AllPairs};

use std::cmp::Ordering;

use crate::graph::{CampusGraph, CAMPUS_SCALE};

/// Min-heap entry for cost-ordered relaxation.
///
/// Ordering is total and deterministic: lower cost pops first, and equal
/// costs break toward the lower location index. Graph validation keeps
/// every weight finite, so the float comparison never sees NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct MinCost {
    pub cost: f64,
    pub node: usize,
}

impl Eq for MinCost {}

impl Ord for MinCost {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: std's BinaryHeap is a max-heap and we want a min-heap.
        other
            .cost
            .partial_cmp(&self.cost)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for MinCost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Estimated remaining distance from `from` to `to`.
///
/// Euclidean separation scaled by [`CAMPUS_SCALE`], matching the units of
/// coordinate-derived edge distances so the estimate stays a lower bound
/// on such graphs. For hand-built matrices this is best-effort guidance
/// only.
pub(crate) fn heuristic(graph: &CampusGraph, from: usize, to: usize) -> f64 {
    graph.euclidean(from, to) * CAMPUS_SCALE
}

/// Walks a predecessor chain from `to` back to `from`.
///
/// Returns `None` if the chain never reaches `from` (unreachable target).
pub(crate) fn walk_predecessors(
    prev: &[Option<usize>],
    from: usize,
    to: usize,
) -> Option<Vec<usize>> {
    let mut path = vec![to];
    let mut current = to;
    while current != from {
        current = prev[current]?;
        path.push(current);
    }
    path.reverse();
    Some(path)
}
