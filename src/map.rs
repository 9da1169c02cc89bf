// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use std::collections::HashMap;
use std::path::Path;

use indexmap::IndexMap;

use crate::loader::{self, LoadError, Options};
use crate::{find_path, AStarError, PathFound, Point, PointId, Route, RouteId};

/// Represents a network of [Points](Point) and undirected [Routes](Route) between them.
///
/// A Map is either empty or fully loaded. Points and routes keep the order
/// in which they were loaded.
#[derive(Debug, Default, Clone)]
pub struct Map {
    points: IndexMap<PointId, Point>,
    routes: IndexMap<RouteId, Route>,

    /// Positions (in `routes`) of all routes touching a point, in load order.
    adjacency: HashMap<PointId, Vec<usize>>,
}

impl Map {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a map from already validated collections.
    pub(crate) fn from_parts(
        points: IndexMap<PointId, Point>,
        routes: IndexMap<RouteId, Route>,
    ) -> Self {
        let mut adjacency: HashMap<PointId, Vec<usize>> = HashMap::default();
        for (idx, route) in routes.values().enumerate() {
            adjacency
                .entry(route.endpoints[0].clone())
                .or_default()
                .push(idx);

            if route.endpoints[1] != route.endpoints[0] {
                adjacency
                    .entry(route.endpoints[1].clone())
                    .or_default()
                    .push(idx);
            }
        }

        Self {
            points,
            routes,
            adjacency,
        }
    }

    /// Removes all points and routes.
    pub fn clear(&mut self) {
        self.points.clear();
        self.routes.clear();
        self.adjacency.clear();
    }

    /// Returns true if no points are loaded.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    /// Retrieves a [Point] with the provided id.
    pub fn get_point(&self, id: &PointId) -> Option<&Point> {
        self.points.get(id)
    }

    /// Retrieves a [Route] with the provided id.
    pub fn get_route(&self, id: &RouteId) -> Option<&Route> {
        self.routes.get(id)
    }

    /// Returns an iterator over all [Points](Point), in load order.
    pub fn points(&self) -> impl Iterator<Item = &Point> {
        self.points.values()
    }

    /// Returns an iterator over all [Routes](Route), in load order.
    pub fn routes(&self) -> impl Iterator<Item = &Route> {
        self.routes.values()
    }

    /// Returns an iterator over all [Routes](Route) with `point` as one of their endpoints,
    /// in load order.
    pub fn routes_at(&self, point: &PointId) -> impl Iterator<Item = &Route> {
        self.adjacency
            .get(point)
            .map(|v| v.as_slice())
            .unwrap_or_default()
            .iter()
            .filter_map(|&idx| self.routes.get_index(idx).map(|(_, route)| route))
    }

    /// Replaces the content of this map with points and routes read from the provided files.
    ///
    /// On error, the map is left unchanged.
    pub fn load<P: AsRef<Path>, R: AsRef<Path>>(
        &mut self,
        points_path: P,
        routes_path: R,
    ) -> Result<(), LoadError> {
        self.load_with_options(&Options::default(), points_path, routes_path)
    }

    /// Same as [Map::load], but with explicit loader [Options].
    pub fn load_with_options<P: AsRef<Path>, R: AsRef<Path>>(
        &mut self,
        options: &Options,
        points_path: P,
        routes_path: R,
    ) -> Result<(), LoadError> {
        *self = loader::read_from_files(options, points_path, routes_path)?;
        Ok(())
    }

    /// Finds the shortest path between two points, see [find_path].
    pub fn find_path(
        &self,
        origin: &PointId,
        destination: &PointId,
    ) -> Result<PathFound, AStarError> {
        find_path(self, origin, destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn simple_map() -> Map {
        let mut points = IndexMap::default();
        for (id, lat, lon) in [("#A", 0.0, 0.0), ("#B", 0.0, 0.01), ("#C", 0.01, 0.0)] {
            points.insert(
                PointId::new(id),
                Point {
                    id: PointId::new(id),
                    name: id.to_string(),
                    lat,
                    lon,
                },
            );
        }

        let mut routes = IndexMap::default();
        for (id, a, b) in [("&AB", "#A", "#B"), ("&BC", "#B", "#C"), ("&CA", "#C", "#A")] {
            routes.insert(
                RouteId::new(id),
                Route {
                    id: RouteId::new(id),
                    name: id.to_string(),
                    endpoints: [PointId::new(a), PointId::new(b)],
                    length: 2.0,
                },
            );
        }

        Map::from_parts(points, routes)
    }

    #[test]
    fn lookup() {
        let m = simple_map();
        assert_eq!(m.point_count(), 3);
        assert_eq!(m.route_count(), 3);
        assert_eq!(m.get_point(&"#B".into()).unwrap().name, "#B");
        assert!(m.get_point(&"#Z".into()).is_none());
        assert!(m.get_point(&PointId::default()).is_none());
        assert_eq!(m.get_route(&"&BC".into()).unwrap().endpoints[1].as_str(), "#C");
        assert!(m.get_route(&"&ZZ".into()).is_none());
    }

    #[test]
    fn iteration_keeps_load_order() {
        let m = simple_map();
        let ids: Vec<&str> = m.points().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["#A", "#B", "#C"]);
        let ids: Vec<&str> = m.routes().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["&AB", "&BC", "&CA"]);
    }

    #[test]
    fn routes_at() {
        let m = simple_map();
        let ids: Vec<&str> = m.routes_at(&"#A".into()).map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["&AB", "&CA"]);
        assert_eq!(m.routes_at(&"#Z".into()).count(), 0);
    }

    #[test]
    fn clear() {
        let mut m = simple_map();
        assert!(!m.is_empty());
        m.clear();
        assert!(m.is_empty());
        assert_eq!(m.route_count(), 0);
        assert_eq!(m.routes_at(&"#A".into()).count(), 0);
        assert!(Map::new().is_empty());
    }
}
