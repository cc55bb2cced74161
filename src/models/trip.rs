//! Trip and stop types.

/// One pickup served within a trip, with the quantity collected there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stop {
    /// Index of the pickup in input order (0-based, depot excluded).
    pub pickup: usize,
    /// Units collected at this pickup on this trip.
    pub quantity: i32,
}

/// An ordered set of stops served by one vehicle round trip.
///
/// Each pickup index appears at most once; serving an index already present
/// adds to its quantity instead of appending a second stop. The depot is not
/// stored.
///
/// # Examples
///
/// ```
/// use pickup_router::models::Trip;
///
/// let mut trip = Trip::new();
/// trip.serve(2, 3);
/// trip.serve(0, 1);
/// trip.serve(2, 1);
/// assert_eq!(trip.pickup_indices(), vec![2, 0]);
/// assert_eq!(trip.load(), 5);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trip {
    stops: Vec<Stop>,
}

impl Trip {
    /// Creates an empty trip.
    pub fn new() -> Self {
        Self { stops: Vec::new() }
    }

    /// Records `quantity` units collected at `pickup`.
    pub fn serve(&mut self, pickup: usize, quantity: i32) {
        match self.stops.iter_mut().find(|s| s.pickup == pickup) {
            Some(stop) => stop.quantity += quantity,
            None => self.stops.push(Stop { pickup, quantity }),
        }
    }

    /// Stops in visiting order.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Pickup indices in visiting order.
    pub fn pickup_indices(&self) -> Vec<usize> {
        self.stops.iter().map(|s| s.pickup).collect()
    }

    /// Number of distinct stops.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Returns `true` if nothing was served.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Total quantity collected on this trip.
    pub fn load(&self) -> i32 {
        self.stops.iter().map(|s| s.quantity).sum()
    }
}
