// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use std::io;

use indexmap::map::Entry;
use indexmap::IndexMap;

use super::error::{Input, LoadError, LoadErrorKind};
use super::records::Records;
use crate::{Map, Point, PointId, Route, RouteId};

const POINT_FIELDS: usize = 4;
const ROUTE_FIELDS: usize = 5;
const MIN_NAME_LEN: usize = 2;

/// Helper object collecting validated [Points](Point) and [Routes](Route)
/// before they are turned into a [Map].
///
/// Points must be added before routes, as routes may only refer to known points.
#[derive(Debug, Default)]
pub(super) struct MapBuilder {
    points: IndexMap<PointId, Point>,
    routes: IndexMap<RouteId, Route>,
}

impl MapBuilder {
    /// Reads and validates all point records from the provided source.
    pub(super) fn add_points<R: io::Read>(&mut self, reader: R) -> Result<(), LoadError> {
        let mut records = Records::new(reader, Input::Points)?;
        while let Some((line, fields)) = records.next(POINT_FIELDS)? {
            self.add_point(fields)
                .map_err(|kind| LoadError::new(Input::Points, line, kind))?;
        }
        Ok(())
    }

    /// Reads and validates all route records from the provided source.
    pub(super) fn add_routes<R: io::Read>(&mut self, reader: R) -> Result<(), LoadError> {
        let mut records = Records::new(reader, Input::Routes)?;
        while let Some((line, fields)) = records.next(ROUTE_FIELDS)? {
            self.add_route(fields)
                .map_err(|kind| LoadError::new(Input::Routes, line, kind))?;
        }
        Ok(())
    }

    pub(super) fn finish(self) -> Map {
        Map::from_parts(self.points, self.routes)
    }

    fn add_point(&mut self, fields: Vec<String>) -> Result<(), LoadErrorKind> {
        let [id, name, lat, lon]: [String; POINT_FIELDS] = fields
            .try_into()
            .map_err(|f: Vec<String>| LoadErrorKind::FieldCount {
                got: f.len(),
                expected: POINT_FIELDS,
            })?;

        let point = Point {
            id: parse_point_id(id)?,
            name: parse_name(name)?,
            lat: parse_number("Latitude", &lat)?,
            lon: parse_number("Longitude", &lon)?,
        };

        match self.points.entry(point.id.clone()) {
            Entry::Occupied(e) => Err(LoadErrorKind::DuplicatePoint(e.key().clone())),
            Entry::Vacant(e) => {
                e.insert(point);
                Ok(())
            }
        }
    }

    fn add_route(&mut self, fields: Vec<String>) -> Result<(), LoadErrorKind> {
        let [id, name, end1, end2, length]: [String; ROUTE_FIELDS] = fields
            .try_into()
            .map_err(|f: Vec<String>| LoadErrorKind::FieldCount {
                got: f.len(),
                expected: ROUTE_FIELDS,
            })?;

        let route_id = RouteId::new(id.as_str());
        if !route_id.is_valid() {
            return Err(LoadErrorKind::InvalidRouteId(id));
        }

        let name = parse_name(name)?;
        let end1 = self.parse_endpoint(end1)?;
        let end2 = self.parse_endpoint(end2)?;

        let length = parse_number("Comprimento", &length)?;
        if length < 0.0 {
            return Err(LoadErrorKind::NegativeLength(length));
        }

        match self.routes.entry(route_id) {
            Entry::Occupied(e) => Err(LoadErrorKind::DuplicateRoute(e.key().clone())),
            Entry::Vacant(e) => {
                let id = e.key().clone();
                e.insert(Route {
                    id,
                    name,
                    endpoints: [end1, end2],
                    length,
                });
                Ok(())
            }
        }
    }

    fn parse_endpoint(&self, raw: String) -> Result<PointId, LoadErrorKind> {
        let id = parse_point_id(raw)?;
        if self.points.contains_key(&id) {
            Ok(id)
        } else {
            Err(LoadErrorKind::UnknownEndpoint(id))
        }
    }
}

fn parse_point_id(raw: String) -> Result<PointId, LoadErrorKind> {
    let id = PointId::new(raw.as_str());
    if id.is_valid() {
        Ok(id)
    } else {
        Err(LoadErrorKind::InvalidPointId(raw))
    }
}

fn parse_name(raw: String) -> Result<String, LoadErrorKind> {
    if raw.chars().count() < MIN_NAME_LEN {
        Err(LoadErrorKind::NameTooShort(raw))
    } else {
        Ok(raw)
    }
}

/// Parses a finite decimal number, ignoring surrounding whitespace.
fn parse_number(field: &'static str, raw: &str) -> Result<f64, LoadErrorKind> {
    match raw.trim().parse::<f64>() {
        Ok(x) if x.is_finite() => Ok(x),
        _ => Err(LoadErrorKind::InvalidNumber {
            field,
            got: raw.to_string(),
        }),
    }
}
