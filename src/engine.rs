//! High-level routing façade.
//!
//! [`RouteEngine`] owns the validated graph snapshot and traffic profile,
//! resolves location names, and dispatches queries to the individual
//! algorithms. Every query is a pure computation over the shared
//! read-only snapshot; mutable working state (DP memo, visited sets)
//! lives inside the call.

use log::debug;

use serde::{Deserialize, Serialize};

use crate::approx::{beam_search, corner_routes, greedy_walk};
use crate::critical_path::critical_path_route;
use crate::dp::DpRouter;
use crate::error::RouteError;
use crate::graph::CampusGraph;
use crate::landmarks::via_landmark;
use crate::models::{Algorithm, Route};
use crate::optimize::{rank_routes, OptimizationCriteria};
use crate::shortest_path::{astar_route, dijkstra_route, floyd_warshall_route};
use crate::traffic::{time_of_day_factor, TrafficProfile};

/// Dispatch order for [`RouteEngine::compare_algorithms`].
pub const COMPARISON_ORDER: [Algorithm; 8] = [
    Algorithm::Dijkstra,
    Algorithm::FloydWarshall,
    Algorithm::AStar,
    Algorithm::Beam,
    Algorithm::Greedy,
    Algorithm::NorthwestCorner,
    Algorithm::DynamicProgramming,
    Algorithm::CriticalPath,
];

/// Campus activities with a known landmark affinity.
///
/// Each activity maps to an ordered list of landmark queries, replacing
/// free-text activity dispatch with a closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Activity {
    Study,
    Dining,
    Banking,
    Sports,
    Medical,
}

impl Activity {
    /// Landmark queries consulted for this activity, in priority order.
    pub fn landmark_queries(&self) -> &'static [&'static str] {
        match self {
            Activity::Study => &["library", "academic"],
            Activity::Dining => &["cafeteria", "market"],
            Activity::Banking => &["bank"],
            Activity::Sports => &["sports", "recreation"],
            Activity::Medical => &["hospital", "medical"],
        }
    }
}

/// The route-calculation engine.
///
/// Construct once per session from a validated [`CampusGraph`] and a
/// [`TrafficProfile`]; all queries borrow the engine immutably.
///
/// # Examples
///
/// ```
/// use campus_nav::engine::RouteEngine;
/// use campus_nav::graph::CampusGraph;
/// use campus_nav::models::{Algorithm, Location, LocationKind};
/// use campus_nav::traffic::TrafficProfile;
///
/// let graph = CampusGraph::from_locations(vec![
///     Location::new("Main Gate", 100.0, 200.0, LocationKind::Entrance),
///     Location::new("Balme Library", 380.0, 280.0, LocationKind::Academic),
/// ])
/// .unwrap();
/// let engine = RouteEngine::new(graph, TrafficProfile::campus_default());
///
/// let routes = engine
///     .route(Algorithm::Dijkstra, "Main Gate", "Balme Library")
///     .unwrap();
/// assert_eq!(routes[0].path(), &[0, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct RouteEngine {
    graph: CampusGraph,
    traffic: TrafficProfile,
}

impl RouteEngine {
    /// Creates an engine over the given snapshot.
    pub fn new(graph: CampusGraph, traffic: TrafficProfile) -> Self {
        Self { graph, traffic }
    }

    /// The underlying graph snapshot.
    pub fn graph(&self) -> &CampusGraph {
        &self.graph
    }

    /// The traffic profile in effect.
    pub fn traffic(&self) -> &TrafficProfile {
        &self.traffic
    }

    /// Computes routes between two named locations with one algorithm.
    ///
    /// An empty list means no path (or `from == to`), which is an expected
    /// outcome rather than an error. The landmark provenance tags cannot
    /// be dispatched without a landmark query and yield an empty list; use
    /// [`route_via_landmark`](Self::route_via_landmark) for those.
    pub fn route(
        &self,
        algorithm: Algorithm,
        from: &str,
        to: &str,
    ) -> Result<Vec<Route>, RouteError> {
        let (f, t) = self.resolve(from, to)?;
        let routes = self.dispatch(algorithm, f, t);
        debug!(
            "{} from {:?} to {:?}: {} route(s)",
            algorithm,
            from,
            to,
            routes.len()
        );
        Ok(routes)
    }

    fn dispatch(&self, algorithm: Algorithm, from: usize, to: usize) -> Vec<Route> {
        match algorithm {
            Algorithm::Dijkstra => dijkstra_route(&self.graph, from, to),
            Algorithm::FloydWarshall => floyd_warshall_route(&self.graph, from, to),
            Algorithm::AStar => astar_route(&self.graph, from, to),
            Algorithm::Beam => beam_search(&self.graph, from, to),
            Algorithm::Greedy => greedy_walk(&self.graph, from, to),
            Algorithm::NorthwestCorner => corner_routes(&self.graph, from, to),
            Algorithm::CriticalPath => critical_path_route(&self.graph, from, to),
            Algorithm::DynamicProgramming => DpRouter::new()
                .find_optimal_route(&self.graph, from, to)
                .into_iter()
                .collect(),
            Algorithm::DirectLandmark | Algorithm::MultiLandmark | Algorithm::NearLandmark => {
                Vec::new()
            }
        }
    }

    /// Computes landmark-aware routes between two named locations.
    pub fn route_via_landmark(
        &self,
        from: &str,
        to: &str,
        landmark_type: &str,
    ) -> Result<Vec<Route>, RouteError> {
        let (f, t) = self.resolve(from, to)?;
        Ok(via_landmark(&self.graph, &self.traffic, f, t, landmark_type))
    }

    /// Runs every comparable algorithm and reports each one's best route,
    /// in [`COMPARISON_ORDER`]. Algorithms that find nothing are omitted.
    pub fn compare_algorithms(
        &self,
        from: &str,
        to: &str,
    ) -> Result<Vec<(Algorithm, Route)>, RouteError> {
        let (f, t) = self.resolve(from, to)?;
        let mut report = Vec::new();
        for algorithm in COMPARISON_ORDER {
            if let Some(best) = self.dispatch(algorithm, f, t).into_iter().next() {
                report.push((algorithm, best));
            }
        }
        Ok(report)
    }

    /// Landmark-aware recommendations for a campus activity.
    ///
    /// Queries are consulted in the activity's priority order and the
    /// result pools are concatenated.
    pub fn recommended_for_activity(
        &self,
        from: &str,
        to: &str,
        activity: Activity,
    ) -> Result<Vec<Route>, RouteError> {
        let (f, t) = self.resolve(from, to)?;
        let mut routes = Vec::new();
        for query in activity.landmark_queries() {
            routes.extend(via_landmark(&self.graph, &self.traffic, f, t, query));
        }
        Ok(routes)
    }

    /// Shortest routes with walking time scaled by the time-of-day
    /// congestion factor for the given wall-clock hour (0-23).
    pub fn routes_for_hour(
        &self,
        from: &str,
        to: &str,
        hour: u8,
    ) -> Result<Vec<Route>, RouteError> {
        let (f, t) = self.resolve(from, to)?;
        let factor = time_of_day_factor(hour);
        let mut routes = dijkstra_route(&self.graph, f, t);
        for route in &mut routes {
            let scaled = route.total_time() * factor;
            route.set_total_time(scaled);
        }
        Ok(routes)
    }

    /// Pools every algorithm's candidates and ranks them by the weighted
    /// multi-criteria score.
    ///
    /// With `avoid_traffic` set, candidate times are traffic-adjusted
    /// before scoring.
    pub fn best_routes(
        &self,
        from: &str,
        to: &str,
        criteria: &OptimizationCriteria,
    ) -> Result<Vec<Route>, RouteError> {
        let (f, t) = self.resolve(from, to)?;
        let mut pool = Vec::new();
        for algorithm in COMPARISON_ORDER {
            pool.extend(self.dispatch(algorithm, f, t));
        }
        if criteria.avoid_traffic {
            for route in &mut pool {
                self.traffic.adjust_route(&self.graph, route);
            }
        }
        rank_routes(&mut pool, criteria);
        debug!("pooled {} candidate(s) from {:?} to {:?}", pool.len(), from, to);
        Ok(pool)
    }

    fn resolve(&self, from: &str, to: &str) -> Result<(usize, usize), RouteError> {
        Ok((self.graph.index_of(from)?, self.graph.index_of(to)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::mini_campus;
    use crate::optimize::route_score;

    fn engine() -> RouteEngine {
        RouteEngine::new(mini_campus(), TrafficProfile::campus_default())
    }

    #[test]
    fn test_unknown_location_is_an_error() {
        let e = engine();
        let result = e.route(Algorithm::Dijkstra, "Main Gate", "Atlantis");
        assert!(matches!(
            result,
            Err(RouteError::UnknownLocation { ref name }) if name == "Atlantis"
        ));
    }

    #[test]
    fn test_every_algorithm_dispatches() {
        let e = engine();
        for algorithm in COMPARISON_ORDER {
            let routes = e
                .route(algorithm, "Main Gate", "University Hospital")
                .expect("known locations");
            assert!(!routes.is_empty(), "{algorithm} found nothing");
            for route in &routes {
                let path = route.path();
                assert_eq!(path[0], 0);
                assert_eq!(*path.last().expect("non-empty"), 5);
            }
        }
    }

    #[test]
    fn test_same_endpoints_yield_empty_not_error() {
        let e = engine();
        let routes = e
            .route(Algorithm::Dijkstra, "Main Gate", "Main Gate")
            .expect("known locations");
        assert!(routes.is_empty());
    }

    #[test]
    fn test_compare_algorithms_order_and_agreement() {
        let e = engine();
        let report = e
            .compare_algorithms("Legon Hall", "Sports Complex")
            .expect("known locations");
        let tags: Vec<Algorithm> = report.iter().map(|(a, _)| *a).collect();
        assert_eq!(tags, COMPARISON_ORDER.to_vec());

        // The two exact all-pairs-comparable algorithms agree.
        let dijkstra = &report[0].1;
        let floyd = &report[1].1;
        assert!((dijkstra.total_distance() - floyd.total_distance()).abs() < 1e-10);
    }

    #[test]
    fn test_route_via_landmark() {
        let e = engine();
        let routes = e
            .route_via_landmark("Main Gate", "Sports Complex", "bank")
            .expect("known locations");
        assert!(!routes.is_empty());
        assert!(routes.iter().any(|r| r.path().contains(&3)));
    }

    #[test]
    fn test_activity_recommendations() {
        let e = engine();
        let routes = e
            .recommended_for_activity("Main Gate", "Sports Complex", Activity::Banking)
            .expect("known locations");
        assert!(!routes.is_empty());
        for route in &routes {
            assert!(!route.landmarks().is_empty());
        }
    }

    #[test]
    fn test_routes_for_hour_scales_time() {
        let e = engine();
        let baseline = e
            .route(Algorithm::Dijkstra, "Main Gate", "Legon Hall")
            .expect("known locations");
        let lunch = e
            .routes_for_hour("Main Gate", "Legon Hall", 12)
            .expect("known locations");
        let expected = baseline[0].total_time() * 1.4;
        assert!((lunch[0].total_time() - expected).abs() < 1e-10);
    }

    #[test]
    fn test_best_routes_ranked() {
        let e = engine();
        let criteria = OptimizationCriteria::default();
        let routes = e
            .best_routes("Main Gate", "University Hospital", &criteria)
            .expect("known locations");
        assert!(!routes.is_empty());
        for pair in routes.windows(2) {
            assert!(
                route_score(&pair[0], &criteria) <= route_score(&pair[1], &criteria) + 1e-10
            );
        }
    }

    #[test]
    fn test_landmark_tags_yield_empty_from_route() {
        let e = engine();
        let routes = e
            .route(Algorithm::DirectLandmark, "Main Gate", "Legon Hall")
            .expect("known locations");
        assert!(routes.is_empty());
    }
}
