//! Capacitated nearest-neighbor trip builder.
//!
//! Builds trips greedily: starting from the depot, always move to the
//! nearest pickup that still has demand and collect as much as the
//! remaining capacity allows. When capacity is exhausted, start a new trip
//! from the depot. A pickup whose demand exceeds what is left on the truck
//! is served partially and picked up again on a later trip.
//!
//! # Complexity
//!
//! O(n²) per trip where n = number of pickups.

use tracing::debug;

use crate::distance::TimeMatrix;
use crate::models::Trip;

/// Builds trips with the capacitated nearest-neighbor heuristic.
///
/// # Arguments
///
/// * `times` — Travel time matrix (index 0 = depot, `i + 1` = pickup `i`)
/// * `demands` — Non-negative demand per pickup, in input order
/// * `capacity` — Quantity one trip may carry
///
/// Ties on travel time go to the lower pickup index. With `capacity <= 0`
/// no stop can be served and no trips are returned.
///
/// # Examples
///
/// ```
/// use pickup_router::models::{Pickup, Point};
/// use pickup_router::distance::TimeMatrix;
/// use pickup_router::constructive::nearest_neighbor_trips;
///
/// let pickups = vec![
///     Pickup::new("far", Point::new(0.0, 0.02), 3),
///     Pickup::new("near", Point::new(0.0, 0.01), 3),
/// ];
/// let tm = TimeMatrix::from_points(&Point::new(0.0, 0.0), &pickups);
///
/// let trips = nearest_neighbor_trips(&tm, &[3, 3], 6);
/// assert_eq!(trips.len(), 1);
/// assert_eq!(trips[0].pickup_indices(), vec![1, 0]);
/// ```
pub fn nearest_neighbor_trips(times: &TimeMatrix, demands: &[i32], capacity: i32) -> Vec<Trip> {
    let mut remaining = demands.to_vec();
    let mut trips = Vec::new();

    while has_remaining(&remaining) {
        let mut capacity_left = capacity;
        let mut current = 0; // depot
        let mut trip = Trip::new();

        while capacity_left > 0 && has_remaining(&remaining) {
            let Some(next) = nearest_with_demand(times, current, &remaining) else {
                break;
            };

            let take = remaining[next].min(capacity_left);
            remaining[next] -= take;
            capacity_left -= take;
            trip.serve(next, take);
            current = next + 1;
        }

        if trip.is_empty() {
            break;
        }
        debug!(
            trip = trips.len(),
            stops = trip.len(),
            load = trip.load(),
            "built nearest-neighbor trip"
        );
        trips.push(trip);
    }

    trips
}

fn has_remaining(remaining: &[i32]) -> bool {
    remaining.iter().any(|&r| r > 0)
}

/// Finds the pickup with outstanding demand closest to `from`.
///
/// Only a strictly smaller time replaces the current best, so equal times
/// resolve to the lowest index. Non-finite times are never selected.
fn nearest_with_demand(times: &TimeMatrix, from: usize, remaining: &[i32]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &r) in remaining.iter().enumerate() {
        if r <= 0 {
            continue;
        }
        let t = times.get(from, i + 1);
        let best_time = best.map_or(f64::INFINITY, |(_, bt)| bt);
        if t < best_time {
            best = Some((i, t));
        }
    }
    best.map(|(i, _)| i)
}
