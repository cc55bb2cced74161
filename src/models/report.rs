//! Per-trip leg report types.

/// A directed hop ending at a named stop.
#[derive(Debug, Clone, PartialEq)]
pub struct TripLeg {
    /// Name of the destination pickup.
    pub name: String,
    /// Great-circle distance in meters.
    pub meters: f64,
    /// Estimated travel time in seconds.
    pub seconds: f64,
}

/// Legs and totals for one trip.
///
/// `legs` runs depot → first stop → … → last stop. The closing leg back to
/// the depot is kept apart in `return_meters`/`return_seconds` but is
/// included in both totals. Values stay unrounded.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TripReport {
    /// Outbound and inter-stop legs in visiting order.
    pub legs: Vec<TripLeg>,
    /// Sum of all leg distances, closing leg included.
    pub total_meters: f64,
    /// Sum of all leg durations, closing leg included.
    pub total_seconds: f64,
    /// Distance of the closing leg to the depot.
    pub return_meters: f64,
    /// Duration of the closing leg to the depot.
    pub return_seconds: f64,
}

impl TripReport {
    /// Appends a leg and adds it to the totals.
    pub fn push_leg(&mut self, leg: TripLeg) {
        self.total_meters += leg.meters;
        self.total_seconds += leg.seconds;
        self.legs.push(leg);
    }

    /// Records the closing leg and adds it to the totals.
    pub fn set_return(&mut self, meters: f64, seconds: f64) {
        self.return_meters = meters;
        self.return_seconds = seconds;
        self.total_meters += meters;
        self.total_seconds += seconds;
    }
}
