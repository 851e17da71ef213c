//! Northwest-corner bounding-box heuristic.
//!
//! Candidate generation by geometry rather than graph search: the direct
//! edge is always a candidate, and every other location whose x or y
//! coordinate falls inside the bounding range spanned by the endpoints
//! contributes a three-node detour. Candidates are ranked by total
//! distance and the best [`MAX_ROUTES`] kept.
//!
//! The bounding test runs on raw map coordinates while route weights use
//! scaled metres; the comparison is scale-free either way since only
//! coordinate ranges are involved.

use crate::graph::CampusGraph;
use crate::models::{Algorithm, Route};

/// Candidates kept after ranking.
pub const MAX_ROUTES: usize = 3;

/// Generates direct and bounding-box detour candidates between two
/// locations, best [`MAX_ROUTES`] by distance.
///
/// Returns an empty list for an empty graph or `from == to`; otherwise at
/// least the direct route is present.
///
/// # Examples
///
/// ```
/// use campus_nav::graph::CampusGraph;
/// use campus_nav::models::{Location, LocationKind};
/// use campus_nav::approx::corner_routes;
///
/// let graph = CampusGraph::from_locations(vec![
///     Location::new("Gate", 0.0, 0.0, LocationKind::Entrance),
///     Location::new("Library", 100.0, 100.0, LocationKind::Academic),
/// ])
/// .unwrap();
///
/// let routes = corner_routes(&graph, 0, 1);
/// assert_eq!(routes.len(), 1);
/// assert_eq!(routes[0].path(), &[0, 1]);
/// ```
pub fn corner_routes(graph: &CampusGraph, from: usize, to: usize) -> Vec<Route> {
    if graph.is_empty() || from == to {
        return Vec::new();
    }

    let mut routes = vec![graph.route_along(vec![from, to], Algorithm::NorthwestCorner)];

    let (fx, fy) = (graph.location(from).x(), graph.location(from).y());
    let (tx, ty) = (graph.location(to).x(), graph.location(to).y());
    let (x_lo, x_hi) = (fx.min(tx), fx.max(tx));
    let (y_lo, y_hi) = (fy.min(ty), fy.max(ty));

    for mid in 0..graph.len() {
        if mid == from || mid == to {
            continue;
        }
        let (mx, my) = (graph.location(mid).x(), graph.location(mid).y());
        let in_x = mx >= x_lo && mx <= x_hi;
        let in_y = my >= y_lo && my <= y_hi;
        if in_x || in_y {
            routes.push(graph.route_along(vec![from, mid, to], Algorithm::NorthwestCorner));
        }
    }

    routes.sort_by(|a, b| {
        a.total_distance()
            .partial_cmp(&b.total_distance())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    routes.truncate(MAX_ROUTES);
    routes
}
