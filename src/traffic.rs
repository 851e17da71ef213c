//! Static per-location congestion model.
//!
//! Congestion is a per-location factor in `[0, 1]`; an edge's adjusted
//! time is `base * (1 + avg(factor(from), factor(to)))`. Locations without
//! an explicit entry fall back to [`DEFAULT_FACTOR`]: a plain two-tier
//! lookup with no hidden state.

use std::collections::HashMap;

use crate::graph::CampusGraph;
use crate::models::Route;

/// Fallback congestion factor for locations without an explicit entry.
pub const DEFAULT_FACTOR: f64 = 0.3;

/// Per-location congestion factors keyed by location name.
///
/// Built once per session and shared read-only, like the graph itself.
///
/// # Examples
///
/// ```
/// use campus_nav::traffic::{TrafficProfile, DEFAULT_FACTOR};
///
/// let profile = TrafficProfile::campus_default();
/// assert_eq!(profile.factor("Night Market"), 0.9);
/// assert_eq!(profile.factor("Somewhere Quiet"), DEFAULT_FACTOR);
///
/// // avg(0.9, 0.3) = 0.6 -> multiplier 1.6
/// assert!((profile.adjusted_time("Night Market", "Somewhere Quiet", 10.0) - 16.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TrafficProfile {
    factors: HashMap<String, f64>,
}

impl TrafficProfile {
    /// Creates an empty profile; every location gets the default factor.
    pub fn new() -> Self {
        Self::default()
    }

    /// The observed congestion levels for the busiest campus spots.
    pub fn campus_default() -> Self {
        let mut profile = Self::new();
        profile.set_factor("Central Cafeteria", 0.8);
        profile.set_factor("John Evans Atta Mills Library", 0.7);
        profile.set_factor("Night Market", 0.9);
        profile.set_factor("Central Administration", 0.6);
        profile.set_factor("Main Gate", 0.8);
        profile.set_factor("University Hospital", 0.5);
        profile.set_factor("Sports Complex", 0.4);
        profile
    }

    /// Sets the congestion factor for a location.
    pub fn set_factor(&mut self, location: impl Into<String>, factor: f64) {
        self.factors.insert(location.into(), factor);
    }

    /// Congestion factor for a location, with the default fallback.
    pub fn factor(&self, location: &str) -> f64 {
        self.factors.get(location).copied().unwrap_or(DEFAULT_FACTOR)
    }

    /// Traffic-adjusted travel time for a single edge.
    pub fn adjusted_time(&self, from: &str, to: &str, base_time: f64) -> f64 {
        let avg = (self.factor(from) + self.factor(to)) / 2.0;
        base_time * (1.0 + avg)
    }

    /// Traffic-adjusted total time along a path of graph indices.
    pub fn adjusted_path_time(&self, graph: &CampusGraph, path: &[usize]) -> f64 {
        path.windows(2)
            .map(|w| {
                let from = graph.location(w[0]).name();
                let to = graph.location(w[1]).name();
                self.adjusted_time(from, to, graph.time(w[0], w[1]))
            })
            .sum()
    }

    /// Replaces a route's total time with its traffic-adjusted value.
    pub fn adjust_route(&self, graph: &CampusGraph, route: &mut Route) {
        let adjusted = self.adjusted_path_time(graph, route.path());
        route.set_total_time(adjusted);
    }
}

/// Time-of-day congestion multiplier for a wall-clock hour (0-23).
///
/// Rush windows slow the walk down; late night speeds it up.
pub fn time_of_day_factor(hour: u8) -> f64 {
    match hour {
        8..=9 => 1.3,
        12..=13 => 1.4,
        17..=18 => 1.2,
        h if h >= 22 || h <= 6 => 0.8,
        _ => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Location, LocationKind};

    #[test]
    fn test_default_fallback() {
        let profile = TrafficProfile::new();
        assert_eq!(profile.factor("Anywhere"), DEFAULT_FACTOR);
    }

    #[test]
    fn test_campus_default_entries() {
        let profile = TrafficProfile::campus_default();
        assert_eq!(profile.factor("Central Cafeteria"), 0.8);
        assert_eq!(profile.factor("Sports Complex"), 0.4);
        assert_eq!(profile.factor("Legon Hall"), DEFAULT_FACTOR);
    }

    #[test]
    fn test_adjusted_time_averages_endpoints() {
        let profile = TrafficProfile::campus_default();
        // avg(0.8, 0.9) = 0.85 -> multiplier 1.85
        let adjusted = profile.adjusted_time("Central Cafeteria", "Night Market", 10.0);
        assert!((adjusted - 18.5).abs() < 1e-10);
    }

    #[test]
    fn test_adjustment_is_at_least_thirty_percent() {
        // Both factors bottom out at the 0.3 default, so every adjusted
        // edge costs at least 1.3x its base time.
        let profile = TrafficProfile::campus_default();
        for (from, to) in [
            ("Central Cafeteria", "Night Market"),
            ("Nowhere A", "Nowhere B"),
            ("Main Gate", "Nowhere C"),
        ] {
            let adjusted = profile.adjusted_time(from, to, 10.0);
            assert!(adjusted >= 13.0 - 1e-10);
        }
    }

    #[test]
    fn test_adjusted_path_time() {
        let graph = CampusGraph::from_locations(vec![
            Location::new("A", 0.0, 0.0, LocationKind::Service),
            Location::new("B", 3.0, 4.0, LocationKind::Service),
            Location::new("C", 6.0, 8.0, LocationKind::Service),
        ])
        .expect("valid");
        let mut profile = TrafficProfile::new();
        profile.set_factor("B", 0.5);

        let expected = graph.time(0, 1) * (1.0 + (0.3 + 0.5) / 2.0)
            + graph.time(1, 2) * (1.0 + (0.5 + 0.3) / 2.0);
        let actual = profile.adjusted_path_time(&graph, &[0, 1, 2]);
        assert!((actual - expected).abs() < 1e-10);
    }

    #[test]
    fn test_time_of_day_factor() {
        assert_eq!(time_of_day_factor(8), 1.3);
        assert_eq!(time_of_day_factor(12), 1.4);
        assert_eq!(time_of_day_factor(17), 1.2);
        assert_eq!(time_of_day_factor(23), 0.8);
        assert_eq!(time_of_day_factor(3), 0.8);
        assert_eq!(time_of_day_factor(10), 1.0);
    }
}
