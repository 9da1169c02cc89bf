// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use std::cmp::Ordering;
use std::collections::{hash_map, BinaryHeap, HashMap};
use std::fmt;

use crate::{point_distance, AStarError, Map, PointId, RouteId};

/// One element of a found path: `point` is reached by following `route`
/// from the previous step.
///
/// The first step of every path holds the origin and the empty (invalid) [RouteId].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub route: RouteId,
    pub point: PointId,
}

/// Result of a successful [find_path] call.
#[derive(Debug, Clone, PartialEq)]
pub struct PathFound {
    /// Sum of lengths of all routes on the path, in kilometers.
    pub length: f64,

    /// Points and routes from the origin to the destination.
    pub steps: Vec<Step>,

    /// Number of points still waiting in the open set when the search finished.
    pub open_count: usize,

    /// Number of points whose cost was finalized (including the destination).
    pub closed_count: usize,
}

impl fmt::Display for PathFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, step) in self.steps.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            if step.route.is_valid() {
                write!(f, "{}\t{}", step.route, step.point)?;
            } else {
                write!(f, "\t{}", step.point)?;
            }
        }
        Ok(())
    }
}

/// A point waiting in the open set.
#[derive(Debug, Clone)]
struct OpenEntry {
    seq: u64,
    via: RouteId,
    cost: f64,
    score: f64,
}

/// A point with a finalized cost.
#[derive(Debug, Clone)]
struct ClosedEntry {
    via: RouteId,
}

#[derive(Debug, Clone)]
struct QueueItem {
    at: PointId,
    score: f64,
    seq: u64,
}

impl PartialEq for QueueItem {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueItem {}

impl PartialOrd for QueueItem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueItem {
    fn cmp(&self, other: &Self) -> Ordering {
        // NOTE: We revert the order of comparison,
        // as lower scores are considered better ("higher"),
        // and Rust's BinaryHeap is a max-heap.
        // Among equal scores, the item pushed first wins.
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Uses the [A* algorithm](https://en.wikipedia.org/wiki/A*_search_algorithm)
/// to find the shortest path between two points on the provided map.
///
/// The heuristic is [point_distance]; route lengths must not be shorter than
/// the great-circle distance between their endpoints for the result to be optimal.
///
/// Points are finalized at most once. If multiple open points share the lowest score,
/// the one which was (re-)discovered first is expanded first,
/// which makes the chosen path deterministic for ties.
///
/// `origin == destination` produces a single-step path of length 0.
pub fn find_path(
    map: &Map,
    origin: &PointId,
    destination: &PointId,
) -> Result<PathFound, AStarError> {
    let result = search(map, origin, destination);
    match &result {
        Ok(found) => log::debug!(
            "path from {} to {}: {} km, {} steps, {} open, {} closed",
            origin,
            destination,
            found.length,
            found.steps.len(),
            found.open_count,
            found.closed_count
        ),
        Err(e) => log::warn!("path search failed: {}", e),
    }
    result
}

fn search(map: &Map, origin: &PointId, destination: &PointId) -> Result<PathFound, AStarError> {
    if map.is_empty() {
        return Err(AStarError::EmptyMap);
    }

    let from_point = map
        .get_point(origin)
        .ok_or_else(|| AStarError::UnknownOrigin(origin.clone()))?;

    let to_point = map
        .get_point(destination)
        .ok_or_else(|| AStarError::UnknownDestination(destination.clone()))?;

    let mut queue: BinaryHeap<QueueItem> = BinaryHeap::default();
    let mut open: HashMap<PointId, OpenEntry> = HashMap::default();
    let mut closed: HashMap<PointId, ClosedEntry> = HashMap::default();
    let mut seq: u64 = 0;

    {
        let score = point_distance(from_point, to_point);
        open.insert(
            origin.clone(),
            OpenEntry {
                seq,
                via: RouteId::default(),
                cost: 0.0,
                score,
            },
        );
        queue.push(QueueItem {
            at: origin.clone(),
            score,
            seq,
        });
    }

    while let Some(item) = queue.pop() {
        // Replaced candidates leave stale items in the queue
        let entry = match open.entry(item.at.clone()) {
            hash_map::Entry::Occupied(e) if e.get().seq == item.seq => e.remove(),
            _ => continue,
        };

        closed.insert(
            item.at.clone(),
            ClosedEntry {
                via: entry.via.clone(),
            },
        );

        if item.at == *destination {
            let steps = reconstruct_path(map, &closed, item.at)?;
            return Ok(PathFound {
                length: entry.cost,
                steps,
                open_count: open.len(),
                closed_count: closed.len(),
            });
        }

        for route in map.routes_at(&item.at) {
            let Some(neighbor_id) = route.other_endpoint(&item.at) else {
                continue;
            };

            // Check if the referred point exists
            let Some(neighbor) = map.get_point(neighbor_id) else {
                continue;
            };

            if closed.contains_key(neighbor_id) {
                continue;
            }

            let cost = entry.cost + route.length;
            let score = cost + point_distance(neighbor, to_point);

            // Keep the existing candidate if it's at least as good
            if open.get(neighbor_id).is_some_and(|e| e.score <= score) {
                continue;
            }

            seq += 1;
            open.insert(
                neighbor_id.clone(),
                OpenEntry {
                    seq,
                    via: route.id.clone(),
                    cost,
                    score,
                },
            );
            queue.push(QueueItem {
                at: neighbor_id.clone(),
                score,
                seq,
            });
        }
    }

    Err(AStarError::NoPath {
        from: origin.clone(),
        to: destination.clone(),
    })
}

/// Walks back from `last` over the routes used to reach every closed point.
fn reconstruct_path(
    map: &Map,
    closed: &HashMap<PointId, ClosedEntry>,
    mut last: PointId,
) -> Result<Vec<Step>, AStarError> {
    let mut steps = Vec::default();

    loop {
        let entry = closed
            .get(&last)
            .ok_or_else(|| AStarError::BrokenPath(last.clone()))?;

        if !entry.via.is_valid() {
            break;
        }

        let before = map
            .get_route(&entry.via)
            .and_then(|route| route.other_endpoint(&last))
            .ok_or_else(|| AStarError::BrokenPath(last.clone()))?
            .clone();

        steps.push(Step {
            route: entry.via.clone(),
            point: last,
        });
        last = before;
    }

    steps.push(Step {
        route: RouteId::default(),
        point: last,
    });
    steps.reverse();
    Ok(steps)
}
