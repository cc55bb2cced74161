//! Per-trip leg metrics.

use crate::distance::{haversine_meters, travel_seconds};
use crate::models::{Pickup, Point, Trip, TripLeg, TripReport};

/// Computes legs and totals for trips over a fixed depot and pickup list.
///
/// Every leg is evaluated fresh from the geometric model rather than read
/// from a [`TimeMatrix`](crate::distance::TimeMatrix), so the figures
/// reported never depend on the cost model used to build the trips.
///
/// # Examples
///
/// ```
/// use pickup_router::models::{Pickup, Point, Trip};
/// use pickup_router::evaluation::TripMetrics;
///
/// let depot = Point::new(0.0, 0.0);
/// let pickups = vec![Pickup::new("A", Point::new(0.0, 0.01), 3)];
/// let mut trip = Trip::new();
/// trip.serve(0, 3);
///
/// let report = TripMetrics::new(&depot, &pickups).report(&trip);
/// assert_eq!(report.legs.len(), 1);
/// assert_eq!(report.legs[0].name, "A");
/// assert!((report.total_meters - 2.0 * report.return_meters).abs() < 1e-9);
/// ```
pub struct TripMetrics<'a> {
    depot: &'a Point,
    pickups: &'a [Pickup],
}

impl<'a> TripMetrics<'a> {
    /// Creates a calculator for the given depot and pickups.
    pub fn new(depot: &'a Point, pickups: &'a [Pickup]) -> Self {
        Self { depot, pickups }
    }

    /// Walks `trip` from the depot, producing one leg per stop plus the
    /// closing leg back to the depot.
    ///
    /// # Panics
    ///
    /// Panics if the trip references a pickup index outside the list.
    pub fn report(&self, trip: &Trip) -> TripReport {
        let mut report = TripReport::default();
        let mut current = self.depot;

        for stop in trip.stops() {
            let pickup = &self.pickups[stop.pickup];
            let meters = haversine_meters(current, pickup.location());
            report.push_leg(TripLeg {
                name: pickup.name().to_string(),
                meters,
                seconds: travel_seconds(meters),
            });
            current = pickup.location();
        }

        let back = haversine_meters(current, self.depot);
        report.set_return(back, travel_seconds(back));
        report
    }

    /// Reports every trip in order.
    pub fn report_all(&self, trips: &[Trip]) -> Vec<TripReport> {
        trips.iter().map(|t| self.report(t)).collect()
    }
}
