//! Route ordering primitives with differing stability guarantees.
//!
//! Two sorts are deliberately kept side by side: a partition-based sort
//! for distance ranking, which does not preserve the relative order of
//! equal-distance routes, and a divide-and-merge sort for time ranking,
//! which does. Callers pick by whether tie order matters.

use crate::models::Route;

/// Sorts routes ascending by total distance.
///
/// Partition-based (last element as pivot); **not** stable on ties.
///
/// # Examples
///
/// ```
/// use campus_nav::models::{Algorithm, Route};
/// use campus_nav::sort::quicksort_by_distance;
///
/// let mut routes = vec![
///     Route::new(vec![0, 1], 300.0, 5.0, Algorithm::Dijkstra),
///     Route::new(vec![0, 2], 100.0, 2.0, Algorithm::Greedy),
/// ];
/// quicksort_by_distance(&mut routes);
/// assert_eq!(routes[0].total_distance(), 100.0);
/// ```
pub fn quicksort_by_distance(routes: &mut [Route]) {
    if routes.len() <= 1 {
        return;
    }
    let high = routes.len() - 1;
    quicksort(routes, 0, high);
}

fn quicksort(routes: &mut [Route], low: usize, high: usize) {
    if low < high {
        let p = partition(routes, low, high);
        if p > 0 {
            quicksort(routes, low, p - 1);
        }
        quicksort(routes, p + 1, high);
    }
}

fn partition(routes: &mut [Route], low: usize, high: usize) -> usize {
    let pivot = routes[high].total_distance();
    let mut i = low;
    for j in low..high {
        if routes[j].total_distance() < pivot {
            routes.swap(i, j);
            i += 1;
        }
    }
    routes.swap(i, high);
    i
}

/// Sorts routes ascending by total time.
///
/// Divide-and-merge; stable on ties, so equal-time routes keep their
/// relative order.
pub fn mergesort_by_time(routes: &mut Vec<Route>) {
    let n = routes.len();
    if n <= 1 {
        return;
    }
    let mut right = routes.split_off(n / 2);
    let mut left = std::mem::take(routes);
    mergesort_by_time(&mut left);
    mergesort_by_time(&mut right);

    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    while let (Some(l), Some(r)) = (left.peek(), right.peek()) {
        if l.total_time() <= r.total_time() {
            routes.push(left.next().expect("peeked"));
        } else {
            routes.push(right.next().expect("peeked"));
        }
    }
    routes.extend(left);
    routes.extend(right);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Algorithm;

    fn route(tag: Algorithm, distance: f64, time: f64) -> Route {
        Route::new(vec![0, 1], distance, time, tag)
    }

    #[test]
    fn test_quicksort_orders_by_distance() {
        let mut routes = vec![
            route(Algorithm::Dijkstra, 500.0, 5.0),
            route(Algorithm::Greedy, 100.0, 9.0),
            route(Algorithm::AStar, 300.0, 1.0),
        ];
        quicksort_by_distance(&mut routes);
        let distances: Vec<f64> = routes.iter().map(Route::total_distance).collect();
        assert_eq!(distances, vec![100.0, 300.0, 500.0]);
    }

    #[test]
    fn test_quicksort_empty_and_single() {
        let mut empty: Vec<Route> = Vec::new();
        quicksort_by_distance(&mut empty);
        assert!(empty.is_empty());

        let mut one = vec![route(Algorithm::Dijkstra, 10.0, 1.0)];
        quicksort_by_distance(&mut one);
        assert_eq!(one.len(), 1);
    }

    #[test]
    fn test_quicksort_already_sorted() {
        let mut routes: Vec<Route> = (1..=6)
            .map(|i| route(Algorithm::Dijkstra, f64::from(i) * 10.0, 1.0))
            .collect();
        quicksort_by_distance(&mut routes);
        for pair in routes.windows(2) {
            assert!(pair[0].total_distance() <= pair[1].total_distance());
        }
    }

    #[test]
    fn test_mergesort_orders_by_time() {
        let mut routes = vec![
            route(Algorithm::Dijkstra, 1.0, 9.0),
            route(Algorithm::Greedy, 2.0, 3.0),
            route(Algorithm::AStar, 3.0, 6.0),
            route(Algorithm::Beam, 4.0, 1.0),
        ];
        mergesort_by_time(&mut routes);
        let times: Vec<f64> = routes.iter().map(Route::total_time).collect();
        assert_eq!(times, vec![1.0, 3.0, 6.0, 9.0]);
    }

    #[test]
    fn test_mergesort_stable_on_ties() {
        let mut routes = vec![
            route(Algorithm::Dijkstra, 1.0, 5.0),
            route(Algorithm::Greedy, 2.0, 5.0),
            route(Algorithm::AStar, 3.0, 2.0),
            route(Algorithm::Beam, 4.0, 5.0),
        ];
        mergesort_by_time(&mut routes);
        // The three 5.0-minute routes keep insertion order.
        let tags: Vec<Algorithm> = routes.iter().map(Route::algorithm).collect();
        assert_eq!(
            tags,
            vec![
                Algorithm::AStar,
                Algorithm::Dijkstra,
                Algorithm::Greedy,
                Algorithm::Beam
            ]
        );
    }

    #[test]
    fn test_mergesort_empty_and_single() {
        let mut empty: Vec<Route> = Vec::new();
        mergesort_by_time(&mut empty);
        assert!(empty.is_empty());

        let mut one = vec![route(Algorithm::Dijkstra, 10.0, 1.0)];
        mergesort_by_time(&mut one);
        assert_eq!(one.len(), 1);
    }

    #[test]
    fn test_sorts_agree_on_distinct_keys() {
        let mut by_quick = vec![
            route(Algorithm::Dijkstra, 500.0, 500.0),
            route(Algorithm::Greedy, 100.0, 100.0),
            route(Algorithm::AStar, 300.0, 300.0),
        ];
        let mut by_merge = by_quick.clone();
        quicksort_by_distance(&mut by_quick);
        mergesort_by_time(&mut by_merge);
        assert_eq!(by_quick, by_merge);
    }
}
