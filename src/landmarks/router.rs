//! Landmark-aware candidate routes.
//!
//! Three independent strategies feed one candidate pool:
//!
//! 1. **Direct** — one three-node route per matching landmark.
//! 2. **Multi-landmark** — four-node routes over a bounded number of
//!    landmark pairs.
//! 3. **Proximity** — three-node routes via any other location close to a
//!    matching landmark.
//!
//! The pool is concatenated without deduplication (the same detour may
//! appear under two tags), traffic-adjusted, sorted by distance, and cut
//! to the best [`MAX_ROUTES`].

use log::debug;

use crate::graph::CampusGraph;
use crate::models::{Algorithm, Route};
use crate::traffic::TrafficProfile;

use super::matcher::matching_landmarks;

/// Proximity cutoff in raw map units. The comparison runs on unscaled
/// coordinates while route weights are in metres; the radius is tuned
/// against the map grid, not against walking distance.
pub const PROXIMITY_RADIUS: f64 = 100.0;

/// Candidates kept after ranking.
pub const MAX_ROUTES: usize = 3;

/// First-landmark positions considered for multi-landmark pairing.
const PAIR_FIRST: usize = 2;

/// Second-landmark positions considered for multi-landmark pairing.
const PAIR_SECOND: usize = 3;

/// Finds up to [`MAX_ROUTES`] landmark-aware routes between two
/// locations, ranked by traffic-adjusted candidates' total distance.
///
/// # Examples
///
/// ```
/// use campus_nav::graph::CampusGraph;
/// use campus_nav::landmarks::via_landmark;
/// use campus_nav::models::{Location, LocationKind};
/// use campus_nav::traffic::TrafficProfile;
///
/// let graph = CampusGraph::from_locations(vec![
///     Location::new("Main Gate", 100.0, 200.0, LocationKind::Entrance),
///     Location::new("GCB Bank", 430.0, 180.0, LocationKind::Banking),
///     Location::new("Sports Complex", 600.0, 400.0, LocationKind::Recreation),
/// ])
/// .unwrap();
///
/// let routes = via_landmark(&graph, &TrafficProfile::new(), 0, 2, "bank");
/// assert_eq!(routes[0].path(), &[0, 1, 2]);
/// assert_eq!(routes[0].landmarks(), &[1]);
/// ```
pub fn via_landmark(
    graph: &CampusGraph,
    traffic: &TrafficProfile,
    from: usize,
    to: usize,
    landmark_type: &str,
) -> Vec<Route> {
    if graph.is_empty() || from == to {
        return Vec::new();
    }

    let landmarks = matching_landmarks(graph, landmark_type);
    let mut routes = direct_routes(graph, from, to, &landmarks);
    routes.extend(multi_landmark_routes(graph, from, to, &landmarks));
    routes.extend(near_landmark_routes(graph, from, to, &landmarks));
    debug!(
        "landmark query {:?}: {} matches, {} candidates",
        landmark_type,
        landmarks.len(),
        routes.len()
    );

    for route in &mut routes {
        traffic.adjust_route(graph, route);
    }
    routes.sort_by(|a, b| {
        a.total_distance()
            .partial_cmp(&b.total_distance())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    routes.truncate(MAX_ROUTES);
    routes
}

/// One `from -> landmark -> to` route per matching landmark.
fn direct_routes(
    graph: &CampusGraph,
    from: usize,
    to: usize,
    landmarks: &[usize],
) -> Vec<Route> {
    landmarks
        .iter()
        .filter(|&&lm| lm != from && lm != to)
        .map(|&lm| {
            graph
                .route_along(vec![from, lm, to], Algorithm::DirectLandmark)
                .with_landmarks([lm])
        })
        .collect()
}

/// Four-node routes over a bounded set of landmark pairs: the first
/// [`PAIR_FIRST`] matches paired with the next [`PAIR_SECOND`].
fn multi_landmark_routes(
    graph: &CampusGraph,
    from: usize,
    to: usize,
    landmarks: &[usize],
) -> Vec<Route> {
    let eligible: Vec<usize> = landmarks
        .iter()
        .copied()
        .filter(|&lm| lm != from && lm != to)
        .collect();

    let mut routes = Vec::new();
    for i in 0..eligible.len().min(PAIR_FIRST) {
        for j in (i + 1)..eligible.len().min(PAIR_SECOND) {
            let (first, second) = (eligible[i], eligible[j]);
            let route = graph
                .route_along(vec![from, first, second, to], Algorithm::MultiLandmark)
                .with_landmarks([first, second]);
            routes.push(route);
        }
    }
    routes
}

/// Three-node routes via any location within [`PROXIMITY_RADIUS`] of a
/// matching landmark. The landmark itself is recorded on the route, not
/// the waypoint actually walked through.
fn near_landmark_routes(
    graph: &CampusGraph,
    from: usize,
    to: usize,
    landmarks: &[usize],
) -> Vec<Route> {
    let mut routes = Vec::new();
    for &lm in landmarks {
        for nearby in 0..graph.len() {
            if nearby == from || nearby == to || nearby == lm {
                continue;
            }
            if graph.euclidean(nearby, lm) < PROXIMITY_RADIUS {
                let route = graph
                    .route_along(vec![from, nearby, to], Algorithm::NearLandmark)
                    .with_landmarks([lm]);
                routes.push(route);
            }
        }
    }
    routes
}

/// Three-node detours via every location of the given kind, the
/// alternative-route generator behind activity recommendations.
pub fn routes_through_kind(
    graph: &CampusGraph,
    from: usize,
    to: usize,
    kind: crate::models::LocationKind,
) -> Vec<Route> {
    if graph.is_empty() || from == to {
        return Vec::new();
    }
    (0..graph.len())
        .filter(|&i| i != from && i != to && graph.location(i).kind() == kind)
        .map(|i| {
            graph
                .route_along(vec![from, i, to], Algorithm::DirectLandmark)
                .with_landmarks([i])
        })
        .collect()
}
