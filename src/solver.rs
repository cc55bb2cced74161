//! End-to-end trip planning pipeline.
//!
//! Clamps demands, builds trips with the selected strategy, then evaluates
//! each trip's legs from the geometric model.

use tracing::{debug, info, warn};

use crate::constructive::{input_order_trips, nearest_neighbor_trips};
use crate::distance::TimeMatrix;
use crate::evaluation::TripMetrics;
use crate::models::{RoutingInput, Trip, TripReport};

/// How pickups are grouped into trips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripStrategy {
    /// Greedy nearest-neighbor over travel time.
    NearestNeighbor,
    /// Input order, split only on capacity.
    InputOrder,
}

impl From<bool> for TripStrategy {
    /// Maps the protocol's `optimize` flag.
    fn from(optimize: bool) -> Self {
        if optimize {
            Self::NearestNeighbor
        } else {
            Self::InputOrder
        }
    }
}

/// Trips and their unrounded reports, index-aligned.
#[derive(Debug, Clone, Default)]
pub struct RoutePlan {
    /// Trips in the order they were built.
    pub trips: Vec<Trip>,
    /// One report per trip.
    pub reports: Vec<TripReport>,
}

/// Builds trips for `input` with the strategy its `optimize` flag selects.
pub fn build_trips(input: &RoutingInput) -> Vec<Trip> {
    let demands = input.solver_demands();
    let capacity = input.capacity();

    if capacity <= 0 && demands.iter().any(|&d| d > 0) {
        warn!(capacity, "non-positive capacity, no trips can be built");
    }

    match TripStrategy::from(input.optimize()) {
        TripStrategy::NearestNeighbor => {
            let times = TimeMatrix::from_points(input.depot(), input.pickups());
            debug!(size = times.size(), "built travel time matrix");
            nearest_neighbor_trips(&times, &demands, capacity)
        }
        TripStrategy::InputOrder => input_order_trips(&demands, capacity),
    }
}

/// Plans trips for `input` and reports each one.
///
/// # Examples
///
/// ```
/// use pickup_router::models::{Pickup, Point, RoutingInput};
/// use pickup_router::solver::solve;
///
/// let input = RoutingInput::new(Point::new(0.0, 0.0), 3)
///     .with_pickup(Pickup::new("P1", Point::new(0.0, 0.01), 3))
///     .with_pickup(Pickup::new("P2", Point::new(0.0, 0.02), 3));
///
/// let plan = solve(&input);
/// assert_eq!(plan.trips.len(), 2);
/// assert_eq!(plan.reports[0].legs[0].name, "P1");
/// assert_eq!(plan.reports[1].legs[0].name, "P2");
/// ```
pub fn solve(input: &RoutingInput) -> RoutePlan {
    let strategy = TripStrategy::from(input.optimize());
    let trips = build_trips(input);
    let reports = TripMetrics::new(input.depot(), input.pickups()).report_all(&trips);

    info!(
        pickups = input.pickups().len(),
        capacity = input.capacity(),
        ?strategy,
        trips = trips.len(),
        "planned trips"
    );

    RoutePlan { trips, reports }
}
