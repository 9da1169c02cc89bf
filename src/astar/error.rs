// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use crate::PointId;

/// Error conditions which may occur during [find_path](crate::find_path).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AStarError {
    /// The map has no points.
    EmptyMap,

    /// The origin doesn't exist in the map.
    UnknownOrigin(PointId),

    /// The destination doesn't exist in the map.
    UnknownDestination(PointId),

    /// All points reachable from the origin were explored,
    /// and none of them is the destination.
    NoPath { from: PointId, to: PointId },

    /// A point on the found path can't be traced back to the origin.
    /// Only possible if the map is changed in an unsupported way.
    BrokenPath(PointId),
}

impl std::fmt::Display for AStarError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyMap => write!(f, "empty map"),
            Self::UnknownOrigin(id) => write!(f, "unknown origin: {:?}", id.as_str()),
            Self::UnknownDestination(id) => write!(f, "unknown destination: {:?}", id.as_str()),
            Self::NoPath { from, to } => write!(f, "no path from {} to {}", from, to),
            Self::BrokenPath(id) => write!(f, "can't trace the path back from {}", id),
        }
    }
}

impl std::error::Error for AStarError {}
