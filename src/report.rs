// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

//! Plain-text listings of a [Map] and of found paths.

use std::io;

use crate::{Map, PathFound};

/// Writes one line per [Point](crate::Point) on the map, in load order.
pub fn write_points<W: io::Write>(map: &Map, mut w: W) -> io::Result<()> {
    for point in map.points() {
        writeln!(w, "{}", point)?;
    }
    Ok(())
}

/// Writes one line per [Route](crate::Route) on the map, in load order.
pub fn write_routes<W: io::Write>(map: &Map, mut w: W) -> io::Result<()> {
    for route in map.routes() {
        writeln!(w, "{}", route)?;
    }
    Ok(())
}

/// Writes a found path, one step per line, resolving route and point names from the map.
pub fn write_path<W: io::Write>(map: &Map, found: &PathFound, mut w: W) -> io::Result<()> {
    for step in &found.steps {
        let point_name = map
            .get_point(&step.point)
            .map(|p| p.name.as_str())
            .unwrap_or_default();

        match map.get_route(&step.route) {
            Some(route) => writeln!(
                w,
                "{} ({})\t{} ({})\t{}km",
                route.id, route.name, step.point, point_name, route.length
            )?,
            None => writeln!(w, "\t{} ({})", step.point, point_name)?,
        }
    }

    writeln!(
        w,
        "Length: {}km, open: {}, closed: {}",
        found.length, found.open_count, found.closed_count
    )
}
