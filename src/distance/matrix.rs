//! Dense travel time matrix.

use super::{haversine_meters, travel_seconds};
use crate::models::{Pickup, Point};

/// A dense (n+1)×(n+1) travel time matrix stored in row-major order.
///
/// Index 0 is the depot; index `i + 1` is pickup `i` in input order.
/// Entries are seconds.
///
/// # Examples
///
/// ```
/// use pickup_router::models::{Pickup, Point};
/// use pickup_router::distance::TimeMatrix;
///
/// let pickups = vec![
///     Pickup::new("A", Point::new(0.0, 0.01), 1),
///     Pickup::new("B", Point::new(0.0, 0.02), 1),
/// ];
/// let tm = TimeMatrix::from_points(&Point::new(0.0, 0.0), &pickups);
/// assert_eq!(tm.size(), 3);
/// assert_eq!(tm.get(1, 1), 0.0);
/// assert!(tm.get(0, 2) > tm.get(0, 1));
/// ```
#[derive(Debug, Clone)]
pub struct TimeMatrix {
    data: Vec<f64>,
    size: usize,
}

impl TimeMatrix {
    /// Creates a matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes travel times between the depot and every pickup.
    pub fn from_points(depot: &Point, pickups: &[Pickup]) -> Self {
        let points: Vec<&Point> = std::iter::once(depot)
            .chain(pickups.iter().map(Pickup::location))
            .collect();
        let n = points.len();
        let mut tm = Self::new(n);
        for i in 0..n {
            for j in 0..n {
                if i != j {
                    tm.set(i, j, travel_seconds(haversine_meters(points[i], points[j])));
                }
            }
        }
        tm
    }

    /// Returns the travel time from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the travel time from location `from` to location `to`.
    pub fn set(&mut self, from: usize, to: usize, seconds: f64) {
        self.data[from * self.size + to] = seconds;
    }

    /// Number of locations, depot included.
    pub fn size(&self) -> usize {
        self.size
    }
}
