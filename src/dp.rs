//! Memoized dynamic-programming router.
//!
//! # Algorithm
//!
//! Optimal sub-route composition with a memo keyed by `(from, to)`: the
//! base case takes the direct edge when one is present; otherwise every
//! other location is tried as a split point and the two memoized
//! sub-routes with minimal summed distance are combined. Each pair is
//! computed at most once per router instance; repeated queries return
//! the cached value.
//!
//! Sub-problems resolve through an explicit worklist rather than
//! language-level recursion, so a cyclic dependency among pairs can never
//! overflow the stack: a pair already on the worklist is simply not
//! considered as a split until resolved.

use std::collections::HashMap;

use crate::graph::CampusGraph;
use crate::models::{Algorithm, Route};

/// Memoizing route composer.
///
/// Owns its cache: construct one per session (or per call for fully
/// independent state) and query it mutably. The cache only ever grows.
///
/// # Examples
///
/// ```
/// use campus_nav::dp::DpRouter;
/// use campus_nav::graph::CampusGraph;
/// use campus_nav::models::{Location, LocationKind};
///
/// let graph = CampusGraph::from_locations(vec![
///     Location::new("Gate", 0.0, 0.0, LocationKind::Entrance),
///     Location::new("Library", 3.0, 4.0, LocationKind::Academic),
/// ])
/// .unwrap();
///
/// let mut router = DpRouter::new();
/// let first = router.find_optimal_route(&graph, 0, 1).unwrap();
/// let second = router.find_optimal_route(&graph, 0, 1).unwrap();
/// assert_eq!(first, second);
/// assert_eq!(router.computations(), 1);
/// ```
#[derive(Debug, Default)]
pub struct DpRouter {
    memo: HashMap<(usize, usize), Option<Route>>,
    computations: usize,
}

impl DpRouter {
    /// Creates a router with an empty memo.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `(from, to)` pairs actually computed so far.
    ///
    /// Stays flat across repeated queries for the same pair.
    pub fn computations(&self) -> usize {
        self.computations
    }

    /// Returns `true` if the pair is already memoized.
    pub fn is_cached(&self, from: usize, to: usize) -> bool {
        self.memo.contains_key(&(from, to))
    }

    /// Finds the optimal composed route between two locations.
    ///
    /// Returns `None` for an empty graph, `from == to`, or when no
    /// composition reaches the target.
    pub fn find_optimal_route(
        &mut self,
        graph: &CampusGraph,
        from: usize,
        to: usize,
    ) -> Option<Route> {
        if graph.is_empty() || from == to {
            return None;
        }
        if let Some(cached) = self.memo.get(&(from, to)) {
            return cached.clone();
        }
        self.solve(graph, from, to);
        self.memo.get(&(from, to)).cloned().flatten()
    }

    fn solve(&mut self, graph: &CampusGraph, from: usize, to: usize) {
        let n = graph.len();
        let mut stack = vec![(from, to)];

        while let Some(&(f, t)) = stack.last() {
            if self.memo.contains_key(&(f, t)) {
                stack.pop();
                continue;
            }

            // Base case: the direct edge.
            if graph.distance(f, t).is_finite() {
                let direct = graph.route_along(vec![f, t], Algorithm::DynamicProgramming);
                self.memo.insert((f, t), Some(direct));
                self.computations += 1;
                stack.pop();
                continue;
            }

            // Composition: make sure both halves of every split are
            // resolved first. Pairs already queued stay unavailable for
            // this split, which keeps the waits-for relation acyclic.
            let mut pending = false;
            for k in 0..n {
                if k == f || k == t {
                    continue;
                }
                for pair in [(f, k), (k, t)] {
                    if !self.memo.contains_key(&pair) && !stack.contains(&pair) {
                        stack.push(pair);
                        pending = true;
                    }
                }
            }
            if pending {
                continue;
            }

            let mut best: Option<Route> = None;
            for k in 0..n {
                if k == f || k == t {
                    continue;
                }
                let (Some(Some(first)), Some(Some(second))) =
                    (self.memo.get(&(f, k)), self.memo.get(&(k, t)))
                else {
                    continue;
                };
                let cost = first.total_distance() + second.total_distance();
                if best.as_ref().map_or(true, |b| cost < b.total_distance()) {
                    let mut path = first.path().to_vec();
                    path.extend_from_slice(&second.path()[1..]);
                    best = Some(graph.route_along(path, Algorithm::DynamicProgramming));
                }
            }

            self.memo.insert((f, t), best);
            self.computations += 1;
            stack.pop();
        }
    }
}
