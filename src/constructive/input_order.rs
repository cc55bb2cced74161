//! Input-order trip builder.
//!
//! Walks pickups in the order given and packs their demand into trips,
//! closing a trip only when its capacity is used up. No distances are
//! consulted, so the partition depends only on demand order and capacity.

use tracing::debug;

use crate::models::Trip;

/// Packs demands into trips in input order.
///
/// A pickup larger than the space left is split: what fits goes on the
/// current trip, the rest opens the next one. Pickups with no demand are
/// skipped. With `capacity <= 0` no trips are returned.
///
/// # Examples
///
/// ```
/// use pickup_router::constructive::input_order_trips;
///
/// let trips = input_order_trips(&[2, 3, 4], 5);
/// assert_eq!(trips.len(), 2);
/// assert_eq!(trips[0].pickup_indices(), vec![0, 1]);
/// assert_eq!(trips[1].pickup_indices(), vec![2]);
/// ```
pub fn input_order_trips(demands: &[i32], capacity: i32) -> Vec<Trip> {
    if capacity <= 0 {
        return Vec::new();
    }

    let mut trips = Vec::new();
    let mut trip = Trip::new();
    let mut capacity_left = capacity;

    for (i, &demand) in demands.iter().enumerate() {
        let mut remaining = demand;
        while remaining > 0 {
            if capacity_left == 0 {
                close_trip(&mut trips, std::mem::take(&mut trip));
                capacity_left = capacity;
            }
            let take = remaining.min(capacity_left);
            remaining -= take;
            capacity_left -= take;
            trip.serve(i, take);
        }
    }
    close_trip(&mut trips, trip);

    trips
}

fn close_trip(trips: &mut Vec<Trip>, trip: Trip) {
    if trip.is_empty() {
        return;
    }
    debug!(
        trip = trips.len(),
        stops = trip.len(),
        load = trip.load(),
        "built input-order trip"
    );
    trips.push(trip);
}
