//! Shared test fixtures.

use crate::graph::{CampusGraph, CostMatrix};
use crate::models::{Location, LocationKind};

/// A, B, C with distances A-B = 100, B-C = 100, A-C = 250: the two-hop
/// detour through B beats the direct edge.
pub(crate) fn detour_graph() -> CampusGraph {
    let locations = vec![
        Location::new("A", 0.0, 0.0, LocationKind::Service),
        Location::new("B", 1.0, 0.0, LocationKind::Service),
        Location::new("C", 2.0, 0.0, LocationKind::Service),
    ];
    let distances = CostMatrix::from_data(
        3,
        vec![0.0, 100.0, 250.0, 100.0, 0.0, 100.0, 250.0, 100.0, 0.0],
    )
    .expect("valid");
    let times = CostMatrix::from_data(3, vec![0.0, 2.0, 5.0, 2.0, 0.0, 2.0, 5.0, 2.0, 0.0])
        .expect("valid");
    CampusGraph::new(locations, distances, times).expect("valid")
}

/// A miniature campus with one location of each notable category,
/// coordinates lifted from the real map.
pub(crate) fn mini_campus() -> CampusGraph {
    CampusGraph::from_locations(vec![
        Location::new("Main Gate", 100.0, 200.0, LocationKind::Entrance),
        Location::new("Balme Library", 380.0, 280.0, LocationKind::Academic),
        Location::new("Central Cafeteria", 400.0, 320.0, LocationKind::Dining),
        Location::new("UG Branch GCB Bank", 430.0, 180.0, LocationKind::Banking),
        Location::new("Legon Hall", 200.0, 100.0, LocationKind::Residential),
        Location::new("University Hospital", 750.0, 350.0, LocationKind::Medical),
        Location::new("Sports Complex", 600.0, 400.0, LocationKind::Recreation),
        Location::new("Night Market", 320.0, 380.0, LocationKind::Dining),
    ])
    .expect("valid campus")
}
