//! Campus location types.

use serde::{Deserialize, Serialize};

/// The closed set of campus location categories.
///
/// Categories drive landmark matching and the congestion model; they are
/// fixed for the lifetime of a graph snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocationKind {
    Academic,
    Residential,
    Administrative,
    Dining,
    Recreation,
    Medical,
    Banking,
    Service,
    Entrance,
    Research,
    Event,
}

/// A named point on the campus map.
///
/// Locations are immutable once loaded into a graph. The name doubles as
/// the public identifier; coordinates are raw map units (the graph applies
/// the campus scale factor when deriving metric distances).
///
/// # Examples
///
/// ```
/// use campus_nav::models::{Location, LocationKind};
///
/// let lib = Location::new("Balme Library", 380.0, 280.0, LocationKind::Academic);
/// assert_eq!(lib.name(), "Balme Library");
/// assert_eq!(lib.kind(), LocationKind::Academic);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    name: String,
    x: f64,
    y: f64,
    kind: LocationKind,
}

impl Location {
    /// Creates a new location.
    pub fn new(name: impl Into<String>, x: f64, y: f64, kind: LocationKind) -> Self {
        Self {
            name: name.into(),
            x,
            y,
            kind,
        }
    }

    /// Location name (the public identifier).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// X-coordinate in raw map units.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate in raw map units.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Location category.
    pub fn kind(&self) -> LocationKind {
        self.kind
    }

    /// Raw Euclidean distance to another location, in map units.
    ///
    /// No campus scale factor is applied; see `CampusGraph` for metric
    /// distances.
    pub fn euclidean_to(&self, other: &Location) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}
