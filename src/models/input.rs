//! Parsed routing input.

use super::{Pickup, Point};

/// Everything one run needs: depot, per-trip capacity, strategy flag and
/// the pickups in input order.
///
/// Defaults mirror an empty protocol stream: depot at (0, 0), capacity 0,
/// `optimize` on, no pickups.
///
/// # Examples
///
/// ```
/// use pickup_router::models::{Pickup, Point, RoutingInput};
///
/// let input = RoutingInput::new(Point::new(0.0, 0.0), 10)
///     .with_optimize(false)
///     .with_pickup(Pickup::new("A", Point::new(0.0, 0.01), 4));
/// assert_eq!(input.capacity(), 10);
/// assert!(!input.optimize());
/// assert_eq!(input.pickups().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RoutingInput {
    depot: Point,
    capacity: i32,
    optimize: bool,
    pickups: Vec<Pickup>,
}

impl RoutingInput {
    /// Creates an input with the given depot and capacity, `optimize` on.
    pub fn new(depot: Point, capacity: i32) -> Self {
        Self {
            depot,
            capacity,
            optimize: true,
            pickups: Vec::new(),
        }
    }

    /// Sets the strategy flag.
    pub fn with_optimize(mut self, optimize: bool) -> Self {
        self.optimize = optimize;
        self
    }

    /// Appends a pickup.
    pub fn with_pickup(mut self, pickup: Pickup) -> Self {
        self.pickups.push(pickup);
        self
    }

    /// Sets the depot.
    pub fn set_depot(&mut self, depot: Point) {
        self.depot = depot;
    }

    /// Sets the per-trip capacity.
    pub fn set_capacity(&mut self, capacity: i32) {
        self.capacity = capacity;
    }

    /// Sets the strategy flag.
    pub fn set_optimize(&mut self, optimize: bool) {
        self.optimize = optimize;
    }

    /// Appends a pickup, preserving input order.
    pub fn push_pickup(&mut self, pickup: Pickup) {
        self.pickups.push(pickup);
    }

    /// Start and end of every trip.
    pub fn depot(&self) -> &Point {
        &self.depot
    }

    /// Maximum quantity a single trip may carry.
    pub fn capacity(&self) -> i32 {
        self.capacity
    }

    /// `true` selects the greedy nearest-neighbor builder.
    pub fn optimize(&self) -> bool {
        self.optimize
    }

    /// Pickups in input order.
    pub fn pickups(&self) -> &[Pickup] {
        &self.pickups
    }

    /// Demands fed to the trip builders, clamped to zero, in input order.
    pub fn solver_demands(&self) -> Vec<i32> {
        self.pickups.iter().map(Pickup::solver_demand).collect()
    }
}

impl Default for RoutingInput {
    fn default() -> Self {
        Self::new(Point::default(), 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_input() {
        let input = RoutingInput::default();
        assert_eq!(input.depot(), &Point::new(0.0, 0.0));
        assert_eq!(input.capacity(), 0);
        assert!(input.optimize());
        assert!(input.pickups().is_empty());
    }

    #[test]
    fn test_setters() {
        let mut input = RoutingInput::default();
        input.set_depot(Point::new(1.0, 2.0));
        input.set_capacity(5);
        input.set_optimize(false);
        input.push_pickup(Pickup::new("A", Point::default(), 1));
        assert_eq!(input.depot(), &Point::new(1.0, 2.0));
        assert_eq!(input.capacity(), 5);
        assert!(!input.optimize());
        assert_eq!(input.pickups().len(), 1);
    }

    #[test]
    fn test_solver_demands_clamped() {
        let input = RoutingInput::new(Point::default(), 10)
            .with_pickup(Pickup::new("A", Point::default(), 3))
            .with_pickup(Pickup::new("B", Point::default(), -2))
            .with_pickup(Pickup::new("C", Point::default(), 0));
        assert_eq!(input.solver_demands(), vec![3, 0, 0]);
        // raw values untouched
        assert_eq!(input.pickups()[1].demand(), -2);
    }
}
