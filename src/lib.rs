// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

//! Shortest paths between named geographic points.
//!
//! A [Map] holds [Points](Point) connected by undirected, weighted [Routes](Route).
//! Maps are loaded from two `;`-separated text sources (see [loader]),
//! and queried with A*, using the great-circle distance as the heuristic.
//!
//! # Example
//!
//! ```no_run
//! let mut map = geoplan::Map::new();
//! map.load("path/to/points.csv", "path/to/routes.csv")
//!     .expect("failed to load the map");
//!
//! let found = map
//!     .find_path(&"#A".into(), &"#B".into())
//!     .expect("failed to find a path");
//!
//! println!("{} km:\n{}", found.length, found);
//! ```

use std::fmt;

mod astar;
mod distance;
mod id;
pub mod loader;
mod map;
pub mod report;

pub use astar::{find_path, AStarError, PathFound, Step};
pub use distance::{earth_distance, point_distance, EARTH_RADIUS};
pub use id::{PointId, RouteId};
pub use loader::LoadError;
pub use map::Map;

/// A named position on the [Map].
///
/// The identity of a Point is its [id](Point::id) alone.
/// Coordinates are in degrees; they are not range-checked.
#[derive(Debug, Clone)]
pub struct Point {
    pub id: PointId,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

impl Point {
    pub fn is_valid(&self) -> bool {
        self.id.is_valid()
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Point {}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{} ({},{})", self.id, self.name, self.lat, self.lon)
    }
}

/// An undirected connection between two [Points](Point), `length` kilometers long.
///
/// The identity of a Route is its [id](Route::id) alone.
/// Both endpoints are guaranteed to exist in the [Map] only for maps built by the [loader].
#[derive(Debug, Clone)]
pub struct Route {
    pub id: RouteId,
    pub name: String,
    pub endpoints: [PointId; 2],
    pub length: f64,
}

impl Route {
    pub fn is_valid(&self) -> bool {
        self.id.is_valid()
    }

    /// Checks if `point` is one of the endpoints of this route.
    pub fn connects(&self, point: &PointId) -> bool {
        self.endpoints[0] == *point || self.endpoints[1] == *point
    }

    /// Returns the endpoint reached by following this route from `point`,
    /// or [None] if `point` isn't an endpoint of this route.
    pub fn other_endpoint(&self, point: &PointId) -> Option<&PointId> {
        if self.endpoints[0] == *point {
            Some(&self.endpoints[1])
        } else if self.endpoints[1] == *point {
            Some(&self.endpoints[0])
        } else {
            None
        }
    }
}

impl PartialEq for Route {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Route {}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}km [{},{}]",
            self.id, self.name, self.length, self.endpoints[0], self.endpoints[1]
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route() -> Route {
        Route {
            id: RouteId::new("&R1"),
            name: "Some Road".to_string(),
            endpoints: [PointId::new("#A"), PointId::new("#B")],
            length: 12.5,
        }
    }

    #[test]
    fn other_endpoint() {
        let r = route();
        assert_eq!(r.other_endpoint(&"#A".into()), Some(&PointId::new("#B")));
        assert_eq!(r.other_endpoint(&"#B".into()), Some(&PointId::new("#A")));
        assert_eq!(r.other_endpoint(&"#C".into()), None);
        assert!(r.connects(&"#B".into()));
        assert!(!r.connects(&"#C".into()));
    }

    #[test]
    fn identity_is_the_id() {
        let a = Point {
            id: PointId::new("#A"),
            name: "First".to_string(),
            lat: 1.0,
            lon: 2.0,
        };
        let b = Point {
            name: "Second".to_string(),
            lat: -1.0,
            ..a.clone()
        };
        assert_eq!(a, b);

        let mut other = route();
        other.length = 99.0;
        assert_eq!(route(), other);
    }

    #[test]
    fn display() {
        let p = Point {
            id: PointId::new("#A"),
            name: "Some Place".to_string(),
            lat: -23.55,
            lon: -46.63,
        };
        assert_eq!(p.to_string(), "#A\tSome Place (-23.55,-46.63)");
        assert_eq!(route().to_string(), "&R1\tSome Road\t12.5km [#A,#B]");
    }
}
