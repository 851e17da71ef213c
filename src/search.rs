//! Queries over already-ranked route lists.
//!
//! Binary-search range selection over distance-sorted routes, plus a
//! linear landmark-name filter. Both operate on lists the caller has
//! already sorted (see [`crate::sort`]).

use crate::graph::CampusGraph;
use crate::models::Route;

/// Selects the routes whose total distance falls in `[min, max]`.
///
/// `routes` must be sorted ascending by distance; the bounds are found by
/// binary search.
///
/// # Examples
///
/// ```
/// use campus_nav::models::{Algorithm, Route};
/// use campus_nav::search::routes_in_distance_range;
///
/// let routes: Vec<Route> = [100.0, 200.0, 300.0, 400.0]
///     .iter()
///     .map(|&d| Route::new(vec![0, 1], d, 1.0, Algorithm::Dijkstra))
///     .collect();
///
/// let hits = routes_in_distance_range(&routes, 150.0, 350.0);
/// assert_eq!(hits.len(), 2);
/// ```
pub fn routes_in_distance_range(routes: &[Route], min: f64, max: f64) -> &[Route] {
    let start = lower_bound(routes, min);
    let end = upper_bound(routes, max);
    if start >= routes.len() || end < start {
        return &[];
    }
    &routes[start..end]
}

/// First index whose distance is `>= target`, or `len` if none.
fn lower_bound(routes: &[Route], target: f64) -> usize {
    let mut left = 0;
    let mut right = routes.len();
    while left < right {
        let mid = left + (right - left) / 2;
        if routes[mid].total_distance() >= target {
            right = mid;
        } else {
            left = mid + 1;
        }
    }
    left
}

/// One past the last index whose distance is `<= target`.
fn upper_bound(routes: &[Route], target: f64) -> usize {
    let mut left = 0;
    let mut right = routes.len();
    while left < right {
        let mid = left + (right - left) / 2;
        if routes[mid].total_distance() <= target {
            left = mid + 1;
        } else {
            right = mid;
        }
    }
    left
}

/// Keeps the routes whose path passes a location matching the landmark
/// query by name.
pub fn filter_by_landmark<'a>(
    routes: &'a [Route],
    graph: &CampusGraph,
    landmark_type: &str,
) -> Vec<&'a Route> {
    let query = landmark_type.to_lowercase();
    routes
        .iter()
        .filter(|route| {
            route
                .path()
                .iter()
                .any(|&i| graph.location(i).name().to_lowercase().contains(&query))
        })
        .collect()
}
