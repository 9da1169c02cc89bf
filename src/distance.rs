// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use crate::Point;

/// Mean radius of Earth, in kilometers.
pub const EARTH_RADIUS: f64 = 6371.0;

/// Calculates the great-circle distance between two lat-lon positions
/// (in degrees) on Earth using the
/// [spherical law of cosines](https://en.wikipedia.org/wiki/Great-circle_distance).
/// Returns the result in kilometers.
pub fn earth_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1 = lat1.to_radians();
    let lon1 = lon1.to_radians();
    let lat2 = lat2.to_radians();
    let lon2 = lon2.to_radians();

    let cos = lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * (lon1 - lon2).cos();

    // Rounding may push the cosine slightly outside of acos's domain
    EARTH_RADIUS * cos.clamp(-1.0, 1.0).acos()
}

/// Calculates the great-circle distance between two [Points](Point), in kilometers.
///
/// Points with the same id are always exactly 0 km apart.
/// This is the heuristic used by [find_path](crate::find_path); a straight line over
/// the globe never exceeds the length of any chain of routes, so it never overestimates.
pub fn point_distance(a: &Point, b: &Point) -> f64 {
    if a.id == b.id {
        0.0
    } else {
        earth_distance(a.lat, a.lon, b.lat, b.lon)
    }
}
