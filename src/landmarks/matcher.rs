//! Free-text landmark type matching.
//!
//! A landmark query like "bank" or "cafeteria" matches a location either
//! by case-insensitive substring against its name or through a fixed
//! keyword table mapping query terms to location categories (with a few
//! extra name fragments the campus vocabulary uses, like "market" for
//! dining spots).

use crate::graph::CampusGraph;
use crate::models::{Location, LocationKind};

/// Returns `true` if the location matches the landmark query.
///
/// # Examples
///
/// ```
/// use campus_nav::landmarks::matches;
/// use campus_nav::models::{Location, LocationKind};
///
/// let lib = Location::new("Balme Library", 380.0, 280.0, LocationKind::Academic);
/// assert!(matches(&lib, "library"));
///
/// let bank = Location::new("GCB Branch", 430.0, 180.0, LocationKind::Banking);
/// assert!(matches(&bank, "bank"));
/// assert!(!matches(&bank, "dining"));
/// ```
pub fn matches(location: &Location, landmark_type: &str) -> bool {
    let query = landmark_type.to_lowercase();
    let name = location.name().to_lowercase();

    if name.contains(&query) {
        return true;
    }

    let kind = location.kind();
    match query.as_str() {
        "bank" | "banking" => kind == LocationKind::Banking || name.contains("bank"),
        "library" => name.contains("library"),
        "cafeteria" | "food" | "dining" => {
            kind == LocationKind::Dining || name.contains("cafeteria") || name.contains("market")
        }
        "hospital" | "medical" => kind == LocationKind::Medical || name.contains("hospital"),
        "hall" | "residence" => kind == LocationKind::Residential || name.contains("hall"),
        "school" | "academic" => kind == LocationKind::Academic || name.contains("school"),
        "sports" | "recreation" => {
            kind == LocationKind::Recreation || name.contains("sports") || name.contains("field")
        }
        _ => false,
    }
}

/// Indices of every location matching the query, in index order.
pub fn matching_landmarks(graph: &CampusGraph, landmark_type: &str) -> Vec<usize> {
    (0..graph.len())
        .filter(|&i| matches(graph.location(i), landmark_type))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::mini_campus;

    #[test]
    fn test_name_substring_match() {
        let loc = Location::new("Balme Library", 0.0, 0.0, LocationKind::Academic);
        assert!(matches(&loc, "library"));
        assert!(matches(&loc, "Balme"));
    }

    #[test]
    fn test_kind_match_without_name() {
        let loc = Location::new("GCB Branch", 0.0, 0.0, LocationKind::Banking);
        assert!(matches(&loc, "bank"));
        assert!(matches(&loc, "banking"));
    }

    #[test]
    fn test_dining_keywords() {
        let market = Location::new("Night Market", 0.0, 0.0, LocationKind::Dining);
        assert!(matches(&market, "food"));
        assert!(matches(&market, "cafeteria"));
        let stall = Location::new("Bush Canteen", 0.0, 0.0, LocationKind::Dining);
        assert!(matches(&stall, "dining"));
    }

    #[test]
    fn test_residential_keywords() {
        let hall = Location::new("Legon Hall", 0.0, 0.0, LocationKind::Residential);
        assert!(matches(&hall, "hall"));
        assert!(matches(&hall, "residence"));
    }

    #[test]
    fn test_unknown_query_no_match() {
        let loc = Location::new("Senate House", 0.0, 0.0, LocationKind::Administrative);
        assert!(!matches(&loc, "observatory"));
    }

    #[test]
    fn test_case_insensitive() {
        let loc = Location::new("Sports Complex", 0.0, 0.0, LocationKind::Recreation);
        assert!(matches(&loc, "SPORTS"));
        assert!(matches(&loc, "Recreation"));
    }

    #[test]
    fn test_matching_landmarks_in_index_order() {
        let g = mini_campus();
        let hits = matching_landmarks(&g, "dining");
        // Central Cafeteria (2) and Night Market (7).
        assert_eq!(hits, vec![2, 7]);
    }

    #[test]
    fn test_matching_landmarks_empty() {
        let g = mini_campus();
        assert!(matching_landmarks(&g, "observatory").is_empty());
    }
}
