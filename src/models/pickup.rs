//! Pickup type.

use super::Point;

/// A named location with an integer demand to collect.
///
/// The raw demand is kept exactly as supplied, negative values included.
/// Solvers read [`Pickup::solver_demand`], which clamps to zero at the point
/// of use.
///
/// # Examples
///
/// ```
/// use pickup_router::models::{Pickup, Point};
///
/// let p = Pickup::new("Warehouse 7", Point::new(51.5, -0.12), -4);
/// assert_eq!(p.demand(), -4);
/// assert_eq!(p.solver_demand(), 0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Pickup {
    name: String,
    location: Point,
    demand: i32,
}

impl Pickup {
    /// Creates a new pickup.
    pub fn new(name: impl Into<String>, location: Point, demand: i32) -> Self {
        Self {
            name: name.into(),
            location,
            demand,
        }
    }

    /// Display name, reported verbatim on every leg ending here.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Location of this pickup.
    pub fn location(&self) -> &Point {
        &self.location
    }

    /// Demand as supplied by the input, possibly negative.
    pub fn demand(&self) -> i32 {
        self.demand
    }

    /// Demand as seen by the trip builders: never below zero.
    pub fn solver_demand(&self) -> i32 {
        self.demand.max(0)
    }
}
